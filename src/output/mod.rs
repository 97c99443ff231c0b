//! Output module for persisting crawl results
//!
//! This module handles serializing a finished crawl session to durable
//! tabular storage.

mod csv_output;
mod traits;

pub use csv_output::{CsvSink, CSV_HEADER};
pub use traits::{OutputError, OutputResult, ResultSink};
