//! Link collection
//!
//! This module scans a page for anchor elements and resolves their hrefs
//! against the page's base URL into absolute candidate URLs. Candidates
//! keep document order, duplicates are kept, and no scheme or domain
//! filtering is applied — a fragment-only href resolves back to the base
//! page and is included like any other.

use scraper::{Html, Selector};
use url::Url;

/// A discovered but not-yet-fetched link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCandidate {
    /// The resolved absolute URL
    pub url: Url,
}

/// Collects up to `limit` link candidates from an HTML page
///
/// Anchors are scanned in document order. An anchor counts toward the
/// limit if its `href` is non-empty after trimming; within that window,
/// an href that fails URL resolution is dropped without promoting a
/// later anchor.
///
/// # Arguments
///
/// * `html` - The HTML content to scan
/// * `base_url` - The base URL for resolving relative hrefs
/// * `limit` - Maximum number of anchors to consider
///
/// # Example
///
/// ```
/// use pagehop::crawler::collect_links;
/// use url::Url;
///
/// let html = r#"<html><body><a href="/a">A</a><a href="https://other.test/b">B</a></body></html>"#;
/// let base = Url::parse("https://example.com/").unwrap();
/// let links = collect_links(html, &base, 11);
/// assert_eq!(links[0].url.as_str(), "https://example.com/a");
/// assert_eq!(links[1].url.as_str(), "https://other.test/b");
/// ```
pub fn collect_links(html: &str, base_url: &Url, limit: usize) -> Vec<LinkCandidate> {
    let document = Html::parse_document(html);
    let mut candidates = Vec::new();

    let Ok(anchor_selector) = Selector::parse("a[href]") else {
        return candidates;
    };

    let mut considered = 0;
    for element in document.select(&anchor_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        let href = href.trim();
        if href.is_empty() {
            continue;
        }

        if considered == limit {
            break;
        }
        considered += 1;

        match base_url.join(href) {
            Ok(url) => candidates.push(LinkCandidate { url }),
            Err(e) => {
                tracing::debug!("Skipping unresolvable href {:?}: {}", href, e);
            }
        }
    }

    candidates
}
