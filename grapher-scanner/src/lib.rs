pub mod crawler;
pub mod error;
pub mod frontier;
pub mod result;
pub mod scraper;

pub use crawler::Crawler;
pub use error::CrawlError;
pub use frontier::Frontier;
pub use result::PageResult;
pub use scraper::HostScraper;
