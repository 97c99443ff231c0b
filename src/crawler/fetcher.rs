//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building an HTTP client with the configured identity and timeouts
//! - GET requests to fetch page content
//! - Error classification (transport vs. HTTP status)
//!
//! Each fetch is a single attempt: no retries, no backoff. Redirects are
//! followed by the client itself, so a `Success` carries the final URL
//! the response actually came from.

use reqwest::Client;
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Decoded page body
        body: String,
    },

    /// The server answered with status >= 400
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (DNS, connection refused, timeout, body read)
    NetworkError {
        /// Error description
        error: String,
    },
}

/// Builds an HTTP client with the configured User-Agent and timeouts
///
/// # Arguments
///
/// * `user_agent` - The User-Agent header value sent with every request
/// * `timeout_seconds` - Total per-request timeout
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(user_agent: &str, timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.to_string())
        .timeout(Duration::from_secs(timeout_seconds))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL with a single GET request and classifies the outcome
///
/// | Condition | Result |
/// |-----------|--------|
/// | Status < 400 | `Success` with the decoded body |
/// | Status >= 400 | `HttpError` |
/// | Timeout | `NetworkError` |
/// | DNS / connection failure | `NetworkError` |
/// | Body read failure | `NetworkError` |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            let final_url = response.url().to_string();

            if status.is_client_error() || status.is_server_error() {
                return FetchResult::HttpError {
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchResult::Success {
                    final_url,
                    status_code: status.as_u16(),
                    body,
                },
                Err(e) => FetchResult::NetworkError {
                    error: format!("failed to read body: {}", e),
                },
            }
        }
        Err(e) => {
            // Classify error
            if e.is_timeout() {
                FetchResult::NetworkError {
                    error: "request timed out".to_string(),
                }
            } else if e.is_connect() {
                FetchResult::NetworkError {
                    error: format!("connection failed: {}", e),
                }
            } else {
                FetchResult::NetworkError {
                    error: e.to_string(),
                }
            }
        }
    }
}
