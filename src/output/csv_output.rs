//! CSV result sink
//!
//! Writes the session's records as a CSV table with one header row and
//! one data row per record, in session order. The destination file is
//! overwritten unconditionally.

use crate::output::traits::{OutputResult, ResultSink};
use crate::session::CrawlSession;
use std::fs::File;
use std::path::{Path, PathBuf};

/// The header row of the output table
pub const CSV_HEADER: [&str; 3] = ["Page Name", "Page URL", "Page Content"];

/// A sink that writes crawl records to a CSV file
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The destination path this sink writes to
    pub fn destination(&self) -> &Path {
        &self.path
    }
}

impl ResultSink for CsvSink {
    fn save(&self, session: &CrawlSession) -> OutputResult<()> {
        let file = File::create(&self.path)?;
        let mut writer = csv::Writer::from_writer(file);

        writer.write_record(CSV_HEADER)?;
        for record in session.records() {
            writer.write_record([
                record.title.as_str(),
                record.url.as_str(),
                record.content.as_str(),
            ])?;
        }
        writer.flush()?;

        tracing::debug!(
            "Wrote {} rows to {}",
            session.record_count(),
            self.path.display()
        );

        Ok(())
    }
}
