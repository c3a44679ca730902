mod common;

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use serde_json::Value;

use hooklink::api::handlers::stats_handler;
use hooklink::domain::entities::NewVisit;
use hooklink::domain::repositories::StatsRepository;
use hooklink::web;

fn make_server() -> (
    TestServer,
    std::sync::Arc<common::InMemoryLinkRepository>,
    std::sync::Arc<common::InMemoryStatsRepository>,
) {
    let (state, links, stats) = common::create_test_state(true);
    let app = Router::new()
        .route("/api/{hook}/stats", get(stats_handler))
        .route("/app", get(web::handlers::home_handler))
        .route("/app/{hook}/stats", get(web::handlers::stats_handler))
        .with_state(state);
    (TestServer::new(app).unwrap(), links, stats)
}

async fn record_visit(stats: &common::InMemoryStatsRepository, link_id: i64, addr: &str) {
    stats
        .insert_visit(NewVisit {
            link_id,
            from_addr: addr.to_string(),
            browser_info: "Chrome".to_string(),
            referrer: String::new(),
            os_info: "Linux x64".to_string(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_stats_unknown_hook_is_404() {
    let (server, _links, _stats) = make_server();

    let response = server.get("/api/missing1/stats").await;

    assert_eq!(response.status_code(), 404);
    let body: Value = response.json();
    assert_eq!(body["error"]["type"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "Invalid URL");
}

#[tokio::test]
async fn test_stats_empty_link() {
    let (server, links, _stats) = make_server();
    common::seed_link(&links, "fresh001", "https://example.com/page");

    let response = server.get("/api/fresh001/stats").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["visits"], 0);
    assert!(body["creation_date"].is_string());
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_stats_reports_visits() {
    let (server, links, stats) = make_server();
    let link = common::seed_link(&links, "visited1", "https://example.com/page");
    record_visit(&stats, link.id, "203.0.113.9").await;
    record_visit(&stats, link.id, "198.51.100.7").await;

    // The counter lives on the link row; bump it to match the log.
    use hooklink::domain::repositories::LinkRepository;
    links.increment_visits(link.id).await.unwrap();
    links.increment_visits(link.id).await.unwrap();

    let response = server.get("/api/visited1/stats").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["visits"], 2);

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["from_addr"], "203.0.113.9");
    assert_eq!(data[0]["browser_info"], "Chrome");
    assert_eq!(data[0]["os_info"], "Linux x64");
    assert_eq!(data[1]["from_addr"], "198.51.100.7");
}

#[tokio::test]
async fn test_stats_html_page_renders() {
    let (server, links, stats) = make_server();
    let link = common::seed_link(&links, "pageview", "https://example.com/page");
    record_visit(&stats, link.id, "203.0.113.9").await;

    let response = server.get("/app/pageview/stats").await;

    assert_eq!(response.status_code(), 200);
    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let body = response.text();
    assert!(body.contains("pageview"));
    assert!(body.contains("203.0.113.9"));
}

#[tokio::test]
async fn test_home_page_renders_shorten_form() {
    let (server, _links, _stats) = make_server();

    let response = server.get("/app").await;

    assert_eq!(response.status_code(), 200);
    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let body = response.text();
    assert!(body.contains("Shorten"));
    assert!(body.contains("custom_hook"));
}

#[tokio::test]
async fn test_stats_html_unknown_hook_renders_zeroed_page() {
    let (server, _links, _stats) = make_server();

    let response = server.get("/app/missing1/stats").await;

    assert_eq!(response.status_code(), 200);
    let body = response.text();
    assert!(body.contains("missing1"));
}
