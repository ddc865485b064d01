// End-to-end tests for execute_crawl against a mock host

use grapher_core::{execute_crawl, CrawlOptions};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_bytes(body.as_bytes().to_vec()),
        )
        .mount(server)
        .await;
}

fn host_of(server: &MockServer) -> String {
    let uri = url::Url::parse(&server.uri()).unwrap();
    format!("{}:{}", uri.host_str().unwrap(), uri.port().unwrap())
}

#[tokio::test]
async fn test_two_page_cycle_with_external_link() {
    let server = MockServer::start().await;
    let host = host_of(&server);

    // Root links to an internal page and an external host; the internal
    // page links back to the root.
    mount_page(
        &server,
        "/",
        r#"<a href="/1">in</a><a href="http://b.example/x">out</a>"#,
    )
    .await;
    mount_page(&server, "/1", r#"<a href="/">home</a>"#).await;

    let graph = execute_crawl(CrawlOptions::new(&host)).await.unwrap();

    let root = format!("http://{}/", host);
    let page = format!("http://{}/1", host);

    assert_eq!(graph.len(), 2);
    assert_eq!(graph.links(&root).unwrap(), [page.clone()]);
    assert_eq!(graph.links(&page).unwrap(), [root]);
    assert!(!graph.contains("http://b.example/x"));
}

#[tokio::test]
async fn test_crawl_output_is_exportable() {
    let server = MockServer::start().await;
    let host = host_of(&server);

    mount_page(&server, "/", r#"<a href="/leaf">leaf</a>"#).await;
    mount_page(&server, "/leaf", "<p>done</p>").await;

    let graph = execute_crawl(CrawlOptions::new(&host)).await.unwrap();
    let dot = graph.to_dot();

    assert!(dot.starts_with("digraph Scraped {\n"));
    assert!(dot.ends_with("}\n"));
    assert_eq!(dot.lines().filter(|l| l.starts_with('\t')).count(), 1);
}

#[tokio::test]
async fn test_unreachable_host_yields_single_failed_node() {
    // Nothing listens on this port; the root fetch fails but the crawl
    // still terminates with the root recorded as visited.
    let mut options = CrawlOptions::new("127.0.0.1:9");
    options.workers = 2;
    options.timeout = Duration::from_millis(250);

    let graph = execute_crawl(options).await.unwrap();

    assert_eq!(graph.len(), 1);
    assert!(graph.links("http://127.0.0.1:9/").unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_host_is_rejected() {
    assert!(execute_crawl(CrawlOptions::new("no such host")).await.is_err());
}
