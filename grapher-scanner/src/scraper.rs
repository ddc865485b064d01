use crate::error::{CrawlError, Result};
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::warn;
use url::Url;

/// Fetches pages from a single host and extracts the in-domain links they
/// reference. All candidate URLs are resolved against a synthetic base
/// built from the configured host with a fixed http scheme, so relative
/// hrefs and absolute same-host hrefs land on the same serialized form.
pub struct HostScraper {
    client: Client,
    base: Url,
}

impl HostScraper {
    pub fn new(host: &str) -> Result<Self> {
        Self::with_timeout(host, Duration::from_secs(10))
    }

    pub fn with_timeout(host: &str, timeout: Duration) -> Result<Self> {
        let base = Url::parse(&format!("http://{}/", host))
            .map_err(|e| CrawlError::InvalidHost(format!("{}: {}", host, e)))?;

        let client = Client::builder()
            .user_agent(concat!("grapher/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Ok(Self { client, base })
    }

    /// The normalized root of the crawl host, e.g. `http://example.com/`.
    pub fn root_url(&self) -> String {
        self.base.to_string()
    }

    /// Resolves `candidate` (relative or absolute) against the crawl host
    /// and returns the absolute serialized form when it stays on that
    /// host. Host and port must match exactly; there is no subdomain
    /// matching and no canonicalization beyond the resolution itself.
    /// Unparseable candidates resolve to `None`.
    pub fn resolve(&self, candidate: &str) -> Option<String> {
        let resolved = self.base.join(candidate).ok()?;
        let in_domain = resolved.host_str() == self.base.host_str()
            && resolved.port() == self.base.port();
        in_domain.then(|| resolved.to_string())
    }

    /// Fetches `url` and returns every in-domain link found on the page,
    /// duplicates included. Fetch failures (transport errors, timeouts,
    /// unreadable bodies) are logged and yield an empty list; callers must
    /// never depend on extraction succeeding. Non-success statuses are not
    /// distinguished from success - whatever body comes back is scanned.
    pub async fn scrape(&self, url: &str) -> Vec<String> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Fetch of {} failed: {}", url, e);
                return Vec::new();
            }
        };

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Reading body of {} failed: {}", url, e);
                return Vec::new();
            }
        };

        self.extract_links(&body)
    }

    fn extract_links(&self, body: &str) -> Vec<String> {
        let document = Html::parse_document(body);
        let anchors = Selector::parse("a[href]").unwrap();

        let mut links = Vec::new();
        for element in document.select(&anchors) {
            if let Some(href) = element.value().attr("href")
                && let Some(resolved) = self.resolve(href)
            {
                links.push(resolved);
            }
        }
        links
    }
}
