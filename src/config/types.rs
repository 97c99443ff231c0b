use serde::Deserialize;

/// Default cap on first-hop links followed from the seed page
pub const DEFAULT_MAX_LINKS: usize = 11;

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 15;

/// Default number of link fetches in flight at once
pub const DEFAULT_CONCURRENCY: usize = 1;

/// Default User-Agent header, a common browser string
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Default destination path for the tabular output
pub const DEFAULT_DESTINATION: &str = "crawled_data.csv";

/// Main configuration structure for pagehop
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of links followed from the seed page
    #[serde(rename = "max-links")]
    pub max_links: usize,

    /// Per-request timeout in seconds
    #[serde(rename = "timeout-seconds")]
    pub timeout_seconds: u64,

    /// Number of link fetches allowed in flight at once
    pub concurrency: usize,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_links: DEFAULT_MAX_LINKS,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            concurrency: DEFAULT_CONCURRENCY,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path the tabular result file is written to
    #[serde(rename = "destination-path")]
    pub destination_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            destination_path: DEFAULT_DESTINATION.to_string(),
        }
    }
}
