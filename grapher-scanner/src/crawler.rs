use crate::error::Result;
use crate::frontier::Frontier;
use crate::result::PageResult;
use crate::scraper::HostScraper;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

const DEFAULT_WORKERS: usize = 100;

/// Coordinates the crawl of a single host: a pool of fetch workers pulls
/// URLs from the shared [`Frontier`] while the calling task aggregates
/// their results and feeds newly discovered URLs back in. The site ->
/// links map is owned by the aggregator alone, so it needs no locking.
pub struct Crawler {
    scraper: Arc<HostScraper>,
    workers: usize,
}

impl Crawler {
    pub fn new(host: &str) -> Result<Self> {
        Ok(Self {
            scraper: Arc::new(HostScraper::new(host)?),
            workers: DEFAULT_WORKERS,
        })
    }

    pub fn with_timeout(host: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            scraper: Arc::new(HostScraper::with_timeout(host, timeout)?),
            workers: DEFAULT_WORKERS,
        })
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Crawls the host starting from its root and returns the raw link
    /// graph: every visited URL mapped to the distinct in-domain URLs it
    /// links to. Values may reference pages that failed to fetch; see the
    /// compression pass for the cleaned form.
    pub async fn crawl(&self) -> Result<HashMap<String, Vec<String>>> {
        let root = self.scraper.root_url();
        info!("Starting crawl of {} with {} workers", root, self.workers);

        let frontier = Arc::new(Frontier::new());
        let mut claimed = HashSet::new();
        claimed.insert(root.clone());
        frontier.submit(root);

        let (results_tx, mut results_rx) = mpsc::channel::<PageResult>(self.workers);

        let mut pool = Vec::with_capacity(self.workers);
        for worker_id in 0..self.workers {
            let frontier = frontier.clone();
            let scraper = self.scraper.clone();
            let results_tx = results_tx.clone();

            pool.push(tokio::spawn(async move {
                debug!("Worker {} started", worker_id);
                while let Some(url) = frontier.take().await {
                    let links = scraper.scrape(&url).await;
                    if results_tx.send(PageResult::new(url, links)).await.is_err() {
                        break;
                    }
                }
                debug!("Worker {} finished", worker_id);
            }));
        }
        // The aggregator holds no sender; the channel closes when the last
        // worker exits.
        drop(results_tx);

        let ticker = tokio::spawn({
            let frontier = frontier.clone();
            async move {
                loop {
                    tokio::time::sleep(Duration::from_secs(1)).await;
                    info!("Currently {} items in queue", frontier.len());
                }
            }
        });

        let mut graph = HashMap::new();
        while let Some(result) = results_rx.recv().await {
            for url in self.ingest(&mut graph, &mut claimed, result) {
                frontier.submit(url);
            }
            frontier.complete();
        }

        ticker.abort();
        for worker in pool {
            worker.await?;
        }

        info!("Crawl complete, {} pages visited", graph.len());
        Ok(graph)
    }

    /// Folds one page result into the graph: deduplicates the page's
    /// links, records them against the site, and returns the links that
    /// have never been claimed before (re-checked against the domain
    /// filter). The caller must submit every returned URL before marking
    /// the page complete.
    fn ingest(
        &self,
        graph: &mut HashMap<String, Vec<String>>,
        claimed: &mut HashSet<String>,
        result: PageResult,
    ) -> Vec<String> {
        let unique: HashSet<String> = result.links.into_iter().collect();

        let mut discovered = Vec::new();
        for link in &unique {
            if claimed.contains(link) {
                continue;
            }
            if let Some(resolved) = self.scraper.resolve(link) {
                claimed.insert(resolved.clone());
                discovered.push(resolved);
            }
        }

        graph.insert(result.site, unique.into_iter().collect());
        discovered
    }
}
