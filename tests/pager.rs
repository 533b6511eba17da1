//! Pagination against a mocked list endpoint
//!
//! Three pages chained by continuation tokens; the pager must stop after
//! the third page without another request.

use codeengine::{ClientConfig, CodeEngineClient, Error, NoAuthAuthenticator};
use futures::StreamExt;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn binding(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "component": {"name": "my-app", "resource_type": "app_v2"},
        "prefix": "DB",
        "secret_name": "db-access",
        "status": "active"
    })
}

/// Mount three pages of bindings: page 2 is linked through `next.href`,
/// page 3 through `next.start`.
async fn mount_pages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v2/projects/p1/bindings"))
        .and(query_param("start", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 2,
            "bindings": [binding("b3"), binding("b4")],
            "next": {"start": "page-3"}
        })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/projects/p1/bindings"))
        .and(query_param("start", "page-3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 2,
            "bindings": [binding("b5")]
        })))
        .expect(1)
        .mount(server)
        .await;

    // First page: lowest priority, only used when no `start` mock applies
    Mock::given(method("GET"))
        .and(path("/v2/projects/p1/bindings"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 2,
            "first": {"href": "/v2/projects/p1/bindings?limit=2"},
            "bindings": [binding("b1"), binding("b2")],
            "next": {"href": "https://api.example.com/v2/projects/p1/bindings?limit=2&start=page-2"}
        })))
        .with_priority(10)
        .expect(1)
        .mount(server)
        .await;
}

fn client_for(server: &MockServer) -> CodeEngineClient {
    let config = ClientConfig::new().with_service_url(format!("{}/v2", server.uri()));
    CodeEngineClient::new(config, NoAuthAuthenticator).expect("client should build")
}

#[tokio::test]
async fn test_get_all_walks_three_pages() {
    let server = MockServer::start().await;
    mount_pages(&server).await;
    let client = client_for(&server);

    let mut pager = client.bindings_pager("p1", Some(2));
    let bindings = pager.get_all().await.expect("all pages should load");

    let ids: Vec<_> = bindings.iter().filter_map(|b| b.id.as_deref()).collect();
    assert_eq!(ids, vec!["b1", "b2", "b3", "b4", "b5"]);
    assert_eq!(server.received_requests().await.unwrap().len(), 3);

    assert!(!pager.has_next());
    assert!(matches!(pager.get_next().await, Err(Error::NoMoreResults)));
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_get_next_page_by_page() {
    let server = MockServer::start().await;
    mount_pages(&server).await;
    let client = client_for(&server);

    let mut pager = client.bindings_pager("p1", Some(2));
    let mut sizes = Vec::new();
    while pager.has_next() {
        sizes.push(pager.get_next().await.unwrap().len());
    }

    assert_eq!(sizes, vec![2, 2, 1]);
}

#[tokio::test]
async fn test_stream_of_pages() {
    let server = MockServer::start().await;
    mount_pages(&server).await;
    let client = client_for(&server);

    let pages: Vec<_> = client
        .bindings_pager("p1", Some(2))
        .into_stream()
        .collect()
        .await;

    assert_eq!(pages.len(), 3);
    assert!(pages.iter().all(Result::is_ok));
}

#[tokio::test]
async fn test_error_stops_stream() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/projects/p1/secrets"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "errors": [{"message": "internal error"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let pages: Vec<_> = client.secrets_pager("p1", None).into_stream().collect().await;

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].as_ref().unwrap_err().status(), Some(500));
}
