use serde::{Deserialize, Serialize};

/// Outcome of scraping a single page: the URL that was fetched and every
/// in-domain link found on it, in document order. The list may be empty
/// (fetch failed, or no links) and may contain duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult {
    pub site: String,
    pub links: Vec<String>,
}

impl PageResult {
    pub fn new(site: String, links: Vec<String>) -> Self {
        Self { site, links }
    }
}
