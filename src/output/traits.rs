//! Result sink trait and error types
//!
//! A result sink consumes a finished crawl session and serializes its
//! records to durable storage. Sink failures are the only errors the
//! output layer propagates; everything upstream of it is best-effort.

use crate::session::CrawlSession;
use thiserror::Error;

/// Errors that can occur while writing output
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize record: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for result sinks
///
/// Implementations receive the whole session at once and must write
/// records in session order. A session with zero records still produces
/// an output artifact (e.g. a header-only table), never nothing.
pub trait ResultSink {
    /// Serializes the session's records to the sink's destination
    fn save(&self, session: &CrawlSession) -> OutputResult<()>;
}
