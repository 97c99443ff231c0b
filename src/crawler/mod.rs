//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with timeout and error classification
//! - Page content extraction with sentinel fallbacks
//! - Link collection and URL resolution
//! - Single-hop crawl orchestration

mod engine;
mod extractor;
mod fetcher;
mod links;

pub use engine::CrawlEngine;
pub use extractor::{extract_page, ExtractedPage, NO_BODY_CONTENT, NO_TITLE};
pub use fetcher::{build_http_client, fetch_url, FetchResult};
pub use links::{collect_links, LinkCandidate};

use crate::config::CrawlerConfig;
use crate::session::CrawlSession;
use crate::HopError;

/// Runs a complete single-hop crawl
///
/// This is the main library entry point. It will:
/// 1. Build the HTTP client
/// 2. Fetch and extract the seed page
/// 3. Collect up to `max_links` candidate links from the seed body
/// 4. Fetch and extract each candidate, isolating per-link failures
///
/// # Arguments
///
/// * `seed_url` - The page the crawl starts from
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlSession)` - The aggregated records and failures
/// * `Err(HopError)` - The seed URL was unparseable or the HTTP client
///   could not be built
pub async fn crawl(seed_url: &str, config: &CrawlerConfig) -> Result<CrawlSession, HopError> {
    let engine = CrawlEngine::new(config)?;
    engine.crawl(seed_url).await
}
