//! Pagehop main entry point
//!
//! This is the command-line interface for the pagehop single-hop crawler.

use clap::Parser;
use pagehop::config::{load_config, validate, Config};
use pagehop::crawler::CrawlEngine;
use pagehop::output::{CsvSink, ResultSink};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Pagehop: a bounded single-hop web crawler
///
/// Pagehop fetches a seed page, follows up to a fixed number of links
/// discovered on it, extracts the title and visible text of every page,
/// and writes the results to a CSV table. Individual link failures are
/// logged and skipped; the crawl always runs to completion.
#[derive(Parser, Debug)]
#[command(name = "pagehop")]
#[command(version = "1.0.0")]
#[command(about = "A bounded single-hop web crawler", long_about = None)]
struct Cli {
    /// Seed URL to crawl
    #[arg(value_name = "URL")]
    url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Destination path for the tabular output
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Maximum number of links to follow from the seed page
    #[arg(long, value_name = "N")]
    max_links: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Number of link fetches allowed in flight at once
    #[arg(long, value_name = "N")]
    concurrency: Option<usize>,

    /// User-Agent header sent with every request
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show the effective configuration without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration (or start from defaults) and apply CLI overrides
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };
    apply_overrides(&mut config, &cli);
    validate(&config)?;

    if cli.dry_run {
        handle_dry_run(&cli.url, &config);
        return Ok(());
    }

    handle_crawl(&cli.url, &config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pagehop=info,warn"),
            1 => EnvFilter::new("pagehop=debug,info"),
            2 => EnvFilter::new("pagehop=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Applies command-line flag overrides on top of the loaded configuration
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(output) = &cli.output {
        config.output.destination_path = output.clone();
    }
    if let Some(max_links) = cli.max_links {
        config.crawler.max_links = max_links;
    }
    if let Some(timeout) = cli.timeout {
        config.crawler.timeout_seconds = timeout;
    }
    if let Some(concurrency) = cli.concurrency {
        config.crawler.concurrency = concurrency;
    }
    if let Some(user_agent) = &cli.user_agent {
        config.crawler.user_agent = user_agent.clone();
    }
}

/// Handles the --dry-run mode: shows what would be crawled
fn handle_dry_run(seed_url: &str, config: &Config) {
    println!("=== Pagehop Dry Run ===\n");

    println!("Seed URL: {}", seed_url);

    println!("\nCrawler Configuration:");
    println!("  Max links: {}", config.crawler.max_links);
    println!("  Timeout: {}s", config.crawler.timeout_seconds);
    println!("  Concurrency: {}", config.crawler.concurrency);
    println!("  User agent: {}", config.crawler.user_agent);

    println!("\nOutput:");
    println!("  Destination: {}", config.output.destination_path);

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would fetch the seed page plus up to {} links",
        config.crawler.max_links
    );
}

/// Handles the main crawl operation
async fn handle_crawl(seed_url: &str, config: &Config) -> anyhow::Result<()> {
    let engine = CrawlEngine::new(&config.crawler)?;
    let session = engine.crawl(seed_url).await?;

    if session.failure_count() > 0 {
        tracing::info!(
            "Completed with {} records and {} skipped pages",
            session.record_count(),
            session.failure_count()
        );
    }

    let sink = CsvSink::new(&config.output.destination_path);
    sink.save(&session)?;
    tracing::info!("Data saved to {}", config.output.destination_path);

    Ok(())
}
