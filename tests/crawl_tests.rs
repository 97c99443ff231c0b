//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and exercise the
//! full crawl cycle end-to-end, including the CSV sink.

use pagehop::config::CrawlerConfig;
use pagehop::crawler::CrawlEngine;
use pagehop::output::{CsvSink, ResultSink};
use pagehop::session::FailureKind;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with a short timeout
fn test_config(max_links: usize, concurrency: usize) -> CrawlerConfig {
    CrawlerConfig {
        max_links,
        timeout_seconds: 5,
        concurrency,
        user_agent: "PagehopTest/1.0".to_string(),
    }
}

/// Mounts an HTML page at the given path
async fn mount_page(server: &MockServer, route: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_end_to_end_seed_and_links() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Seed: title "Home", nav stripped from content, two links
    mount_page(
        &mock_server,
        "/",
        format!(
            r#"<html><head><title>Home</title></head><body><nav>X</nav><p>Hello</p>
            <a href="/a">A</a>
            <a href="{}/b">B</a>
            </body></html>"#,
            base_url
        ),
    )
    .await;

    mount_page(
        &mock_server,
        "/a",
        r#"<html><head><title>Page A</title></head><body>Content A</body></html>"#.to_string(),
    )
    .await;

    mount_page(
        &mock_server,
        "/b",
        r#"<html><head><title>Page B</title></head><body>Content B</body></html>"#.to_string(),
    )
    .await;

    let engine = CrawlEngine::new(&test_config(11, 1)).expect("Failed to create engine");
    let session = engine
        .crawl(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    assert_eq!(session.record_count(), 3);
    assert_eq!(session.failure_count(), 0);

    let records = session.records();
    assert_eq!(records[0].title, "Home");
    assert_eq!(records[0].url, format!("{}/", base_url));
    // Anchor text is part of the visible body
    assert_eq!(records[0].content, "Hello A B");

    assert_eq!(records[1].title, "Page A");
    assert_eq!(records[1].url, format!("{}/a", base_url));
    assert_eq!(records[1].content, "Content A");

    assert_eq!(records[2].title, "Page B");
    assert_eq!(records[2].url, format!("{}/b", base_url));
    assert_eq!(records[2].content, "Content B");
}

#[tokio::test]
async fn test_link_truncation_never_fetches_past_the_cap() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><title>Home</title></head><body>
        <a href="/1">1</a>
        <a href="/2">2</a>
        <a href="/3">3</a>
        </body></html>"#
            .to_string(),
    )
    .await;

    mount_page(
        &mock_server,
        "/1",
        r#"<html><head><title>One</title></head><body>1</body></html>"#.to_string(),
    )
    .await;
    mount_page(
        &mock_server,
        "/2",
        r#"<html><head><title>Two</title></head><body>2</body></html>"#.to_string(),
    )
    .await;

    // The third anchor is past the cap and must never be fetched
    Mock::given(method("GET"))
        .and(path("/3"))
        .respond_with(ResponseTemplate::new(200).set_body_string("never"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let engine = CrawlEngine::new(&test_config(2, 1)).expect("Failed to create engine");
    let session = engine
        .crawl(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    assert_eq!(session.record_count(), 3); // seed + 2 links
    let titles: Vec<&str> = session
        .records()
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Home", "One", "Two"]);

    // Wiremock verifies the expect(0) when the server drops
}

#[tokio::test]
async fn test_per_link_failure_isolation() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><title>Home</title></head><body>
        <a href="/ok1">1</a>
        <a href="/broken">2</a>
        <a href="/ok2">3</a>
        </body></html>"#
            .to_string(),
    )
    .await;

    mount_page(
        &mock_server,
        "/ok1",
        r#"<html><head><title>Ok 1</title></head><body>fine</body></html>"#.to_string(),
    )
    .await;
    mount_page(
        &mock_server,
        "/ok2",
        r#"<html><head><title>Ok 2</title></head><body>fine</body></html>"#.to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let engine = CrawlEngine::new(&test_config(11, 1)).expect("Failed to create engine");
    let session = engine
        .crawl(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    // One bad link never aborts the crawl
    assert_eq!(session.record_count(), 3); // seed + ok1 + ok2
    assert_eq!(session.failure_count(), 1);

    let failure = &session.failures()[0];
    assert_eq!(failure.url, format!("{}/broken", base_url));
    assert_eq!(failure.kind, FailureKind::Http);
    assert_eq!(failure.message, "HTTP 500");

    // Ordering skips the failed link without reordering the rest
    let titles: Vec<&str> = session
        .records()
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Home", "Ok 1", "Ok 2"]);
}

#[tokio::test]
async fn test_seed_http_error_yields_empty_session() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let engine = CrawlEngine::new(&test_config(11, 1)).expect("Failed to create engine");
    let session = engine
        .crawl(&format!("{}/", base_url))
        .await
        .expect("Seed failure must not be a hard error");

    assert_eq!(session.record_count(), 0);
    assert_eq!(session.failure_count(), 1);
    assert_eq!(session.failures()[0].kind, FailureKind::Http);
}

#[tokio::test]
async fn test_seed_network_error_yields_empty_session() {
    // Nothing listens on port 1
    let engine = CrawlEngine::new(&test_config(11, 1)).expect("Failed to create engine");
    let session = engine
        .crawl("http://127.0.0.1:1/")
        .await
        .expect("Seed failure must not be a hard error");

    assert_eq!(session.record_count(), 0);
    assert_eq!(session.failure_count(), 1);
    assert_eq!(session.failures()[0].kind, FailureKind::Network);
}

#[tokio::test]
async fn test_concurrent_visits_preserve_document_order() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><title>Home</title></head><body>
        <a href="/slow">s</a>
        <a href="/mid">m</a>
        <a href="/fast">f</a>
        </body></html>"#
            .to_string(),
    )
    .await;

    // Completion order is fast, mid, slow; record order must not be
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(
                    r#"<html><head><title>Slow</title></head><body>s</body></html>"#,
                )
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/mid"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"<html><head><title>Mid</title></head><body>m</body></html>"#)
                .set_delay(Duration::from_millis(100)),
        )
        .mount(&mock_server)
        .await;

    mount_page(
        &mock_server,
        "/fast",
        r#"<html><head><title>Fast</title></head><body>f</body></html>"#.to_string(),
    )
    .await;

    let engine = CrawlEngine::new(&test_config(11, 3)).expect("Failed to create engine");
    let session = engine
        .crawl(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    let titles: Vec<&str> = session
        .records()
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Home", "Slow", "Mid", "Fast"]);
}

#[tokio::test]
async fn test_concurrent_visits_isolate_failures() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><title>Home</title></head><body>
        <a href="/a">a</a>
        <a href="/broken">b</a>
        <a href="/c">c</a>
        </body></html>"#
            .to_string(),
    )
    .await;

    mount_page(
        &mock_server,
        "/a",
        r#"<html><head><title>A</title></head><body>a</body></html>"#.to_string(),
    )
    .await;
    mount_page(
        &mock_server,
        "/c",
        r#"<html><head><title>C</title></head><body>c</body></html>"#.to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let engine = CrawlEngine::new(&test_config(11, 4)).expect("Failed to create engine");
    let session = engine
        .crawl(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    assert_eq!(session.record_count(), 3);
    assert_eq!(session.failure_count(), 1);

    let titles: Vec<&str> = session
        .records()
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Home", "A", "C"]);
}

#[tokio::test]
async fn test_max_links_zero_visits_seed_only() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><title>Home</title></head><body><a href="/x">x</a></body></html>"#
            .to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/x"))
        .respond_with(ResponseTemplate::new(200).set_body_string("never"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let engine = CrawlEngine::new(&test_config(0, 1)).expect("Failed to create engine");
    let session = engine
        .crawl(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    assert_eq!(session.record_count(), 1);
    assert_eq!(session.records()[0].title, "Home");
}

#[tokio::test]
async fn test_sentinels_flow_into_records() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // No <title>; the parser still synthesizes a <body> around bare text
    mount_page(
        &mock_server,
        "/",
        r#"<html><head></head><body>just text</body></html>"#.to_string(),
    )
    .await;

    let engine = CrawlEngine::new(&test_config(11, 1)).expect("Failed to create engine");
    let session = engine
        .crawl(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    assert_eq!(session.record_count(), 1);
    assert_eq!(session.records()[0].title, "No Title");
    assert_eq!(session.records()[0].content, "just text");
}

#[tokio::test]
async fn test_crawl_then_save_csv() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        format!(
            r#"<html><head><title>Home</title></head><body><p>Hello</p><a href="{}/a">A</a></body></html>"#,
            base_url
        ),
    )
    .await;
    mount_page(
        &mock_server,
        "/a",
        r#"<html><head><title>Page A</title></head><body>Content A</body></html>"#.to_string(),
    )
    .await;

    let engine = CrawlEngine::new(&test_config(11, 1)).expect("Failed to create engine");
    let session = engine
        .crawl(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("crawled_data.csv");
    CsvSink::new(&dest).save(&session).expect("Save failed");

    let mut reader = csv::Reader::from_path(&dest).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(&headers[0], "Page Name");
    assert_eq!(&headers[1], "Page URL");
    assert_eq!(&headers[2], "Page Content");

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "Home");
    assert_eq!(&rows[1][0], "Page A");
    assert_eq!(&rows[1][2], "Content A");
}

#[tokio::test]
async fn test_failed_crawl_still_saves_header_only_file() {
    let engine = CrawlEngine::new(&test_config(11, 1)).expect("Failed to create engine");
    let session = engine
        .crawl("http://127.0.0.1:1/")
        .await
        .expect("Seed failure must not be a hard error");

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("empty.csv");
    CsvSink::new(&dest).save(&session).expect("Save failed");

    let content = std::fs::read_to_string(&dest).unwrap();
    assert_eq!(content.trim_end(), "Page Name,Page URL,Page Content");
}
