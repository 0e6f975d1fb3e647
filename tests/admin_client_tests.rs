//! Integration tests for the Admin API client.
//!
//! These tests verify the verb helpers, the paged `list` primitive and the
//! request headers against a wiremock server.

use kong_admin::{AdminClient, AdminError, AdminUrl, HttpError, KongConfig, ListOpt};
use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer) -> AdminClient {
    let config = KongConfig::builder()
        .admin_url(AdminUrl::new(server.uri()).unwrap())
        .user_agent_prefix("deployer/2.1")
        .build()
        .unwrap();
    AdminClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_get_sends_default_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/status"))
        .and(header("Accept", "application/json"))
        .and(header_exists("User-Agent"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Kong-Admin-Request-ID", "req-1")
                .set_body_json(json!({"database": {"reachable": true}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let response = client.get("/status", None).await.unwrap();

    assert!(response.is_ok());
    assert_eq!(response.body["database"]["reachable"], json!(true));
    assert_eq!(response.request_id(), Some("req-1"));
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/consumers"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"username": "alice"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "c1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let response = client
        .post("consumers", json!({"username": "alice"}))
        .await
        .unwrap();

    assert!(response.is_created());
}

#[tokio::test]
async fn test_empty_path_is_rejected_locally() {
    let server = MockServer::start().await;
    let client = create_client(&server);

    let result = client.delete("/").await;

    assert!(matches!(result, Err(AdminError::InvalidPath { .. })));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_non_success_status_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/plugins/p1"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": 5,
            "name": "unique constraint violation",
            "message": "UNIQUE violation detected on '{name=\"cors\"}'"
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client.put("plugins/p1", json!({"name": "cors"})).await.unwrap_err();

    assert_eq!(error.status(), Some(409));
    match error {
        AdminError::Http(HttpError::Response(e)) => {
            assert_eq!(e.code, 409);
            assert!(e.message.contains("unique constraint violation"));
        }
        other => panic!("Expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_without_cursor_sends_no_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/plugins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "p1"}],
            "next": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let (items, next) = client.list("plugins", None).await.unwrap();

    assert_eq!(items, vec![json!({"id": "p1"})]);
    assert!(next.is_none());

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_list_cursor_from_next_link_only() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/routes"))
        .and(query_param("size", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "r1"}],
            "next": "/routes?offset=WyJyMSJd&size=10"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let (_, next) = client
        .list("routes", Some(&ListOpt::with_size(10)))
        .await
        .unwrap();

    let next = next.unwrap();
    assert_eq!(next.offset.as_deref(), Some("WyJyMSJd"));
    assert_eq!(next.size, Some(10));
}

#[tokio::test]
async fn test_list_accepts_legacy_empty_object() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/plugins"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {}, "next": null})),
        )
        .mount(&server)
        .await;

    let client = create_client(&server);
    let (items, next) = client.list("plugins", None).await.unwrap();

    assert!(items.is_empty());
    assert!(next.is_none());
}

#[tokio::test]
async fn test_list_rejects_malformed_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/plugins"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": "nope", "next": null})),
        )
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = client.list("plugins", None).await;

    assert!(matches!(
        result,
        Err(AdminError::InvalidListResponse { path, .. }) if path == "plugins"
    ));
}
