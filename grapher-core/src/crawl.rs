use crate::graph::LinkGraph;
use grapher_scanner::error::Result;
use grapher_scanner::Crawler;
use std::time::Duration;
use tracing::debug;

/// Options for configuring a crawl operation
pub struct CrawlOptions {
    pub host: String,
    pub workers: usize,
    pub timeout: Duration,
}

impl CrawlOptions {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            workers: 100,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Crawls the host described by `options` and returns its compressed
/// link graph, ready for export.
pub async fn execute_crawl(options: CrawlOptions) -> Result<LinkGraph> {
    let crawler =
        Crawler::with_timeout(&options.host, options.timeout)?.with_workers(options.workers);

    let raw = crawler.crawl().await?;
    let edges_before: usize = raw.values().map(Vec::len).sum();

    let mut graph = LinkGraph::from_crawl(raw);
    graph.compress();

    let edges_after: usize = graph.nodes().map(|n| graph.links(n).unwrap().len()).sum();
    debug!(
        "Compressed graph: {} nodes, {} of {} edges kept",
        graph.len(),
        edges_after,
        edges_before
    );

    Ok(graph)
}
