//! Pagehop: a bounded single-hop web crawler
//!
//! This crate fetches a seed page, discovers its outbound links (up to a
//! configurable cap), fetches each linked page once, extracts a
//! (title, visible-text) pair per page, and persists the ordered results
//! as a tabular file.

pub mod config;
pub mod crawler;
pub mod output;
pub mod session;

use thiserror::Error;

/// Main error type for pagehop operations
///
/// Per-page fetch failures are not errors at this level: the engine
/// records them in the [`session::CrawlSession`] and keeps going. Only
/// failures that prevent the crawl from being constructed, or the output
/// from being written, surface here.
#[derive(Debug, Error)]
pub enum HopError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid seed URL: {0}")]
    SeedUrl(#[from] url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for pagehop operations
pub type Result<T> = std::result::Result<T, HopError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::CrawlEngine;
pub use session::{CrawlFailure, CrawlSession, FailureKind, PageRecord};
