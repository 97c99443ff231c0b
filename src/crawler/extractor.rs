//! Page content extraction
//!
//! This module derives a (title, visible-text) pair from raw HTML.
//! Extraction is total: malformed markup still parses to something, and
//! missing elements degrade to sentinel values instead of errors.

use ego_tree::NodeRef;
use scraper::{Html, Node, Selector};

/// Sentinel title for pages with no usable `<title>` element
pub const NO_TITLE: &str = "No Title";

/// Sentinel content for pages with no `<body>` element
pub const NO_BODY_CONTENT: &str = "No Body Content";

/// Elements whose subtrees never contribute to page content.
///
/// `meta`, `header`, `nav`, and `aside` are the non-content chrome that
/// is stripped before the body text is read; `script` and `style` carry
/// no visible text.
const SKIPPED_ELEMENTS: &[&str] = &["meta", "header", "nav", "aside", "script", "style"];

/// Extracted information from an HTML page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    /// The page title, or the `"No Title"` sentinel
    pub title: String,

    /// The visible body text, or the `"No Body Content"` sentinel when the
    /// document has no `<body>` element. A present-but-empty body yields
    /// an empty string, not the sentinel.
    pub content: String,
}

/// Extracts the title and visible body text from an HTML document
///
/// A pure function of its input: repeated extraction of identical bytes
/// yields identical results.
///
/// # Example
///
/// ```
/// use pagehop::crawler::extract_page;
///
/// let html = "<html><head><title>Home</title></head>\
///             <body><nav>menu</nav><p>Hello</p></body></html>";
/// let page = extract_page(html);
/// assert_eq!(page.title, "Home");
/// assert_eq!(page.content, "Hello");
/// ```
pub fn extract_page(html: &str) -> ExtractedPage {
    let document = Html::parse_document(html);

    let title = extract_title(&document).unwrap_or_else(|| NO_TITLE.to_string());
    let content = extract_body_text(&document).unwrap_or_else(|| NO_BODY_CONTENT.to_string());

    ExtractedPage { title, content }
}

/// Extracts the page title from the HTML document
///
/// Returns None if there is no `<title>` element or its text is empty.
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extracts the visible text of the `<body>` element
///
/// Returns None when the document has no body. Text nodes are trimmed
/// individually, empty fragments dropped, and the survivors joined with a
/// single space. Whitespace runs inside a single text node are preserved.
fn extract_body_text(document: &Html) -> Option<String> {
    let body_selector = Selector::parse("body").ok()?;
    let body = document.select(&body_selector).next()?;

    let mut fragments = Vec::new();
    collect_visible_text(*body, &mut fragments);

    Some(fragments.join(" "))
}

/// Walks a subtree collecting trimmed text fragments, skipping the
/// subtrees of non-content elements entirely.
fn collect_visible_text(node: NodeRef<'_, Node>, fragments: &mut Vec<String>) {
    for child in node.children() {
        match child.value() {
            Node::Element(element) => {
                if SKIPPED_ELEMENTS.contains(&element.name()) {
                    continue;
                }
                collect_visible_text(child, fragments);
            }
            Node::Text(text) => {
                let trimmed = text.text.trim();
                if !trimmed.is_empty() {
                    fragments.push(trimmed.to_string());
                }
            }
            _ => {}
        }
    }
}
