//! Crawl engine - single-hop crawl orchestration
//!
//! This module contains the crawl state machine: fetch the seed page,
//! extract it, enumerate its links (capped), then visit each link. The
//! seed body is fetched once and reused for both extraction and link
//! enumeration.
//!
//! Per-link failure isolation is the core fault-tolerance contract here:
//! one bad link is logged and recorded, and the crawl moves on. The only
//! hard error `crawl()` can return is an unparseable seed URL — a failed
//! seed *fetch* still yields a (record-less) session.

use crate::config::CrawlerConfig;
use crate::crawler::extractor::extract_page;
use crate::crawler::fetcher::{build_http_client, fetch_url, FetchResult};
use crate::crawler::links::{collect_links, LinkCandidate};
use crate::session::{CrawlFailure, CrawlSession, PageRecord};
use crate::HopError;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use url::Url;

/// Single-hop crawl engine
///
/// Owns the HTTP client and the crawler configuration. One engine can run
/// any number of crawls; each `crawl()` call produces its own session.
pub struct CrawlEngine {
    client: Client,
    config: CrawlerConfig,
}

impl CrawlEngine {
    /// Creates a new engine, building the HTTP client from the configuration
    pub fn new(config: &CrawlerConfig) -> Result<Self, HopError> {
        let client = build_http_client(&config.user_agent, config.timeout_seconds)?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Crawls the seed page and its first-hop links
    ///
    /// # Arguments
    ///
    /// * `seed_url` - The page the crawl starts from
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlSession)` - The aggregated records and failures. A
    ///   failed seed fetch yields a session with zero records and the
    ///   failure recorded, not an error.
    /// * `Err(HopError)` - The seed URL could not be parsed
    pub async fn crawl(&self, seed_url: &str) -> Result<CrawlSession, HopError> {
        let seed = Url::parse(seed_url)?;
        let mut session = CrawlSession::new(seed.as_str(), self.config.max_links);

        tracing::info!("Fetching seed page: {}", seed);

        // Fetch the seed once; the body serves both extraction and link
        // enumeration.
        let body = match fetch_url(&self.client, seed.as_str()).await {
            FetchResult::Success {
                final_url,
                status_code,
                body,
            } => {
                tracing::debug!("Seed fetched: HTTP {} from {}", status_code, final_url);
                let page = extract_page(&body);
                session.push_record(PageRecord::new(page.title, seed.as_str(), page.content));
                body
            }
            failure => {
                let failure = fetch_failure(seed.as_str(), failure);
                tracing::warn!("Failed to retrieve {}: {}", failure.url, failure.message);
                session.push_failure(failure);
                // No seed body means no links to enumerate
                return Ok(session);
            }
        };

        let candidates = collect_links(&body, &seed, self.config.max_links);
        tracing::info!(
            "Discovered {} candidate links (cap {})",
            candidates.len(),
            self.config.max_links
        );

        if self.config.concurrency <= 1 {
            self.visit_sequentially(candidates, &mut session).await;
        } else {
            self.visit_concurrently(candidates, &mut session).await;
        }

        tracing::info!(
            "Crawl of {} complete: {} records, {} failures",
            session.seed_url,
            session.record_count(),
            session.failure_count()
        );

        Ok(session)
    }

    /// Visits candidates one at a time, in document order
    async fn visit_sequentially(&self, candidates: Vec<LinkCandidate>, session: &mut CrawlSession) {
        for candidate in candidates {
            let outcome = visit_candidate(&self.client, &candidate.url).await;
            append_outcome(session, outcome);
        }
    }

    /// Visits candidates through a bounded worker pool
    ///
    /// Up to `concurrency` fetches run in flight at once. Outcomes are
    /// buffered with their candidate index and appended in candidate
    /// order, never completion order.
    async fn visit_concurrently(&self, candidates: Vec<LinkCandidate>, session: &mut CrawlSession) {
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency));
        let mut tasks = JoinSet::new();

        for (index, candidate) in candidates.into_iter().enumerate() {
            let client = self.client.clone();
            let semaphore = Arc::clone(&semaphore);
            let url = candidate.url;

            tasks.spawn(async move {
                // The semaphore is never closed while tasks are running
                let _permit = semaphore.acquire_owned().await.ok();
                let outcome = visit_candidate(&client, &url).await;
                (index, outcome)
            });
        }

        let mut outcomes = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(entry) => outcomes.push(entry),
                Err(e) => tracing::error!("Fetch task failed to complete: {}", e),
            }
        }

        outcomes.sort_by_key(|(index, _)| *index);
        for (_, outcome) in outcomes {
            append_outcome(session, outcome);
        }
    }
}

/// Fetches and extracts a single candidate page
async fn visit_candidate(client: &Client, url: &Url) -> Result<PageRecord, CrawlFailure> {
    match fetch_url(client, url.as_str()).await {
        FetchResult::Success {
            final_url,
            status_code,
            body,
        } => {
            tracing::debug!("Fetched {}: HTTP {} from {}", url, status_code, final_url);
            let page = extract_page(&body);
            Ok(PageRecord::new(page.title, url.as_str(), page.content))
        }
        failure => Err(fetch_failure(url.as_str(), failure)),
    }
}

/// Converts a non-success fetch result into a recorded failure
fn fetch_failure(url: &str, result: FetchResult) -> CrawlFailure {
    match result {
        FetchResult::HttpError { status_code } => CrawlFailure::http(url, status_code),
        FetchResult::NetworkError { error } => CrawlFailure::network(url, error),
        FetchResult::Success { .. } => {
            // Callers only hand non-success results here
            CrawlFailure::network(url, "unexpected success treated as failure")
        }
    }
}

/// Appends a visit outcome to the session, logging failures
fn append_outcome(session: &mut CrawlSession, outcome: Result<PageRecord, CrawlFailure>) {
    match outcome {
        Ok(record) => session.push_record(record),
        Err(failure) => {
            tracing::warn!("Failed to retrieve {}: {}", failure.url, failure.message);
            session.push_failure(failure);
        }
    }
}
