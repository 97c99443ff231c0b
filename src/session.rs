//! Crawl session types
//!
//! A [`CrawlSession`] is created at the start of one `crawl()` invocation,
//! appended to while the crawl runs, and handed to a result sink when the
//! crawl is done. It is owned by that single invocation — there is no
//! process-wide accumulation across crawls.

/// The persisted unit of output: one row of the result table.
///
/// Immutable once created. `title` and `content` carry sentinel values
/// (`"No Title"`, `"No Body Content"`) when the page had none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    /// The page title
    pub title: String,

    /// The URL that was requested for this page
    pub url: String,

    /// The visible body text (possibly empty)
    pub content: String,
}

impl PageRecord {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            content: content.into(),
        }
    }
}

/// Classification of a per-page failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// DNS, connection, timeout, or body-read failure
    Network,

    /// The server answered with a non-success status code
    Http,

    /// HTML parsing is tolerant, so this kind is currently never produced
    Parse,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network"),
            FailureKind::Http => write!(f, "http"),
            FailureKind::Parse => write!(f, "parse"),
        }
    }
}

/// A recorded per-page failure: the offending URL plus the reason.
///
/// Failures are accumulated by the engine for observability; they never
/// abort the crawl.
#[derive(Debug, Clone)]
pub struct CrawlFailure {
    /// The URL that failed
    pub url: String,

    /// The failure classification
    pub kind: FailureKind,

    /// Human-readable reason
    pub message: String,
}

impl CrawlFailure {
    /// Creates a failure for a transport-level error
    pub fn network(url: &str, message: impl Into<String>) -> Self {
        Self {
            url: url.to_string(),
            kind: FailureKind::Network,
            message: message.into(),
        }
    }

    /// Creates a failure for a non-success HTTP status
    pub fn http(url: &str, status_code: u16) -> Self {
        Self {
            url: url.to_string(),
            kind: FailureKind::Http,
            message: format!("HTTP {}", status_code),
        }
    }
}

/// The aggregated result of one crawl invocation.
///
/// `records` preserves discovery order: the seed page first (if it was
/// fetched successfully), then link pages in the order their anchors
/// appeared on the seed page, capped at `max_links`. Both lists are
/// append-only.
#[derive(Debug)]
pub struct CrawlSession {
    /// The seed URL this session started from
    pub seed_url: String,

    /// The link cap that was in effect
    pub max_links: usize,

    records: Vec<PageRecord>,
    failures: Vec<CrawlFailure>,
}

impl CrawlSession {
    pub fn new(seed_url: impl Into<String>, max_links: usize) -> Self {
        Self {
            seed_url: seed_url.into(),
            max_links,
            records: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Appends a successfully extracted page
    pub fn push_record(&mut self, record: PageRecord) {
        self.records.push(record);
    }

    /// Appends a per-page failure
    pub fn push_failure(&mut self, failure: CrawlFailure) {
        self.failures.push(failure);
    }

    /// The collected records, in discovery order
    pub fn records(&self) -> &[PageRecord] {
        &self.records
    }

    /// The per-page failures, in the order they occurred
    pub fn failures(&self) -> &[CrawlFailure] {
        &self.failures
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = CrawlSession::new("https://example.com/", 11);
        assert!(session.is_empty());
        assert_eq!(session.record_count(), 0);
        assert_eq!(session.failure_count(), 0);
        assert_eq!(session.seed_url, "https://example.com/");
        assert_eq!(session.max_links, 11);
    }

    #[test]
    fn test_records_preserve_push_order() {
        let mut session = CrawlSession::new("https://example.com/", 11);
        session.push_record(PageRecord::new("A", "https://example.com/a", ""));
        session.push_record(PageRecord::new("B", "https://example.com/b", ""));

        let titles: Vec<&str> = session.records().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_failure_constructors() {
        let network = CrawlFailure::network("https://example.com/x", "connection refused");
        assert_eq!(network.kind, FailureKind::Network);
        assert_eq!(network.message, "connection refused");

        let http = CrawlFailure::http("https://example.com/y", 404);
        assert_eq!(http.kind, FailureKind::Http);
        assert_eq!(http.message, "HTTP 404");
    }

    #[test]
    fn test_failure_kind_display() {
        assert_eq!(FailureKind::Network.to_string(), "network");
        assert_eq!(FailureKind::Http.to_string(), "http");
    }
}
