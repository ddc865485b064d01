use std::collections::{HashMap, HashSet};
use std::fmt;

/// Directed graph of visited pages: every key is a URL that was fetched,
/// mapped to the distinct in-domain URLs it links to.
///
/// Fresh from a crawl, link lists may still reference pages that were
/// never visited (e.g. pages discovered on the final round of scrapes
/// that failed the domain re-check). [`LinkGraph::compress`] removes
/// those dangling edges; afterwards every destination is itself a node.
#[derive(Debug, Clone, Default)]
pub struct LinkGraph {
    nodes: HashMap<String, Vec<String>>,
}

impl LinkGraph {
    pub fn from_crawl(nodes: HashMap<String, Vec<String>>) -> Self {
        Self { nodes }
    }

    /// Drops every edge whose destination is not a visited node.
    pub fn compress(&mut self) {
        let visited: HashSet<String> = self.nodes.keys().cloned().collect();
        for links in self.nodes.values_mut() {
            links.retain(|link| visited.contains(link));
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.nodes.contains_key(url)
    }

    pub fn links(&self, url: &str) -> Option<&[String]> {
        self.nodes.get(url).map(Vec::as_slice)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Renders the graph in DOT format, one edge statement per surviving
    /// link, with sequential node labels. Edges to unknown destinations
    /// are skipped, so the output honors the compression invariant even
    /// on an uncompressed graph. Ordering is not stable across runs.
    pub fn to_dot(&self) -> String {
        let mut labels = HashMap::new();
        for (index, node) in self.nodes.keys().enumerate() {
            labels.insert(node.as_str(), format!("N{}", index));
        }

        let mut out = String::from("digraph Scraped {\n");
        for (node, links) in &self.nodes {
            let source = &labels[node.as_str()];
            for link in links {
                if let Some(dest) = labels.get(link.as_str()) {
                    out.push_str(&format!("\t{} -> {}; \n", source, dest));
                }
            }
        }
        out.push_str("}\n");
        out
    }
}

impl fmt::Display for LinkGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dot())
    }
}
