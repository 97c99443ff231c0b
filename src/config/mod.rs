//! Configuration module for pagehop
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every key has a default, so a config file is optional.
//!
//! # Example
//!
//! ```no_run
//! use pagehop::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("pagehop.toml")).unwrap();
//! println!("Link cap: {}", config.crawler.max_links);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, OutputConfig};

// Re-export parser and validation functions
pub use parser::load_config;
pub use validation::validate;
