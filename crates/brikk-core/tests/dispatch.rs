//! End-to-end dispatch tests against a mock coordination API
//!
//! These exercise the full path a façade call takes: URL building, auth
//! headers, timeout enforcement, retry policy, and error classification.

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use brikk_core::{
    Brikk, ClientConfig, Error, HttpClient, RequestDescriptor, RetryPolicy,
};

fn test_config(base_url: &str) -> ClientConfig {
    ClientConfig {
        base_url: base_url.to_string(),
        api_key: Some("test-key".to_string()),
        signing_secret: Some("test-secret".to_string()),
        org_id: None,
        timeout_ms: 2_000,
        max_retries: 0,
    }
}

/// Dispatcher with millisecond-scale backoff so retry tests stay fast
fn fast_client(base_url: &str, max_retries: u32) -> HttpClient {
    let mut config = test_config(base_url);
    config.max_retries = max_retries;
    let retry = RetryPolicy::new(max_retries)
        .with_base_delay_ms(5)
        .with_max_delay_ms(20);
    HttpClient::with_retry_policy(config, retry).unwrap()
}

#[tokio::test]
async fn success_returns_parsed_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = fast_client(&server.uri(), 0);
    let value = client
        .request(RequestDescriptor::get("/api/v1/health"))
        .await
        .unwrap();
    assert_eq!(value["status"], "ok");
}

#[tokio::test]
async fn status_table_maps_to_error_kinds() {
    let cases: Vec<(u16, fn(&Error) -> bool)> = vec![
        (400, |e| matches!(e, Error::Validation { .. })),
        (401, |e| matches!(e, Error::Auth { .. })),
        (403, |e| matches!(e, Error::Auth { .. })),
        (404, |e| matches!(e, Error::NotFound { .. })),
        (418, |e| matches!(e, Error::Http { .. })),
        (429, |e| matches!(e, Error::RateLimit { .. })),
        (500, |e| matches!(e, Error::Server { .. })),
        (503, |e| matches!(e, Error::Server { .. })),
    ];

    for (status, is_expected_kind) in cases {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/agents/missing"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let client = fast_client(&server.uri(), 0);
        let err = client
            .request(RequestDescriptor::get("/api/v1/agents/missing"))
            .await
            .unwrap_err();
        assert!(is_expected_kind(&err), "status {} mapped to {:?}", status, err);
        assert_eq!(err.status_code(), Some(status));
    }
}

#[tokio::test]
async fn error_message_comes_from_error_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/agents/a1"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "agent a1 not found"})),
        )
        .mount(&server)
        .await;

    let client = fast_client(&server.uri(), 0);
    let err = client
        .request(RequestDescriptor::get("/api/v1/agents/a1"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Not found: agent a1 not found");

    // A payload without an `error` field falls back to the status line
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/agents/a2"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "nope"})))
        .mount(&server)
        .await;

    let client = fast_client(&server.uri(), 0);
    let err = client
        .request(RequestDescriptor::get("/api/v1/agents/a2"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Not found: HTTP 404");
}

#[tokio::test]
async fn not_found_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/agents/gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    // Retries are available but must not be used for a 404
    let client = fast_client(&server.uri(), 3);
    let err = client
        .request(RequestDescriptor::get("/api/v1/agents/gone"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
    server.verify().await;
}

#[tokio::test]
async fn server_errors_retry_until_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/health"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = fast_client(&server.uri(), 3);
    let value = client
        .request(RequestDescriptor::get("/api/v1/health"))
        .await
        .unwrap();
    // Earlier failures are invisible to the caller
    assert_eq!(value["status"], "ok");
    server.verify().await;
}

#[tokio::test]
async fn exhausted_retries_surface_last_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/health"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let client = fast_client(&server.uri(), 2);
    let err = client
        .request(RequestDescriptor::get("/api/v1/health"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Server { status_code: 503, .. }));
    server.verify().await;
}

#[tokio::test]
async fn timeout_every_attempt_raises_timeout_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/health"))
        .respond_with(
            ResponseTemplate::new(200).set_delay(Duration::from_millis(500)),
        )
        .expect(3)
        .mount(&server)
        .await;

    let mut config = test_config(&server.uri());
    config.timeout_ms = 50;
    config.max_retries = 2;
    let retry = RetryPolicy::new(2).with_base_delay_ms(5).with_max_delay_ms(10);
    let client = HttpClient::with_retry_policy(config, retry).unwrap();

    let err = client
        .request(RequestDescriptor::get("/api/v1/health"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
    // Exactly max_retries + 1 attempts reached the server
    server.verify().await;
}

#[tokio::test]
async fn bearer_request_carries_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/agents"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"agents": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = fast_client(&server.uri(), 0);
    client
        .request(RequestDescriptor::get("/api/v1/agents"))
        .await
        .unwrap();
    server.verify().await;
}

#[tokio::test]
async fn signed_request_carries_signature_headers() {
    let server = MockServer::start().await;
    let body = json!({"payload": {"x": 1}});
    Mock::given(method("POST"))
        .and(path("/api/v1/coordination"))
        .and(header("X-Brikk-Key", "test-key"))
        .and(header_exists("X-Brikk-Timestamp"))
        .and(header_exists("X-Brikk-Signature"))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accepted": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = fast_client(&server.uri(), 0);
    client
        .request(
            RequestDescriptor::post("/api/v1/coordination")
                .with_body(body.clone())
                .signed(),
        )
        .await
        .unwrap();
    server.verify().await;
}

#[tokio::test]
async fn signed_and_bearer_bodies_serialize_identically() {
    let server = MockServer::start().await;
    let body = json!({"payload": {"x": 1}, "list": [1, 2, 3]});
    Mock::given(method("POST"))
        .and(path("/api/v1/echo"))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(2)
        .mount(&server)
        .await;

    let client = fast_client(&server.uri(), 0);
    client
        .request(RequestDescriptor::post("/api/v1/echo").with_body(body.clone()))
        .await
        .unwrap();
    client
        .request(
            RequestDescriptor::post("/api/v1/echo")
                .with_body(body.clone())
                .signed(),
        )
        .await
        .unwrap();
    server.verify().await;

    // Same bytes on the wire for both auth modes, different header sets
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].body, requests[1].body);
    assert!(requests[0].headers.contains_key("authorization"));
    assert!(!requests[0].headers.contains_key("x-brikk-signature"));
    assert!(requests[1].headers.contains_key("x-brikk-signature"));
    assert!(!requests[1].headers.contains_key("authorization"));
}

#[tokio::test]
async fn signing_without_secret_never_reaches_the_wire() {
    let server = MockServer::start().await;
    // No mounted mocks: any request hitting the server would 404 and the
    // expectation below would fail
    let mut config = test_config(&server.uri());
    config.signing_secret = None;
    let client = HttpClient::new(config).unwrap();

    let err = client
        .request(
            RequestDescriptor::post("/api/v1/coordination")
                .with_body(json!({}))
                .signed(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Auth { status_code: None, .. }));
    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
async fn coordination_send_builds_fresh_envelopes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/coordination"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accepted": true})))
        .expect(2)
        .mount(&server)
        .await;

    let brikk = Brikk::builder()
        .base_url(server.uri())
        .api_key("test-key")
        .signing_secret("test-secret")
        .timeout_ms(2_000)
        .max_retries(0)
        .build()
        .unwrap();

    let payload = json!({"task": "ping"});
    brikk
        .coordination()
        .send("agent-a", "agent-b", "event", payload.clone(), None)
        .await
        .unwrap();
    brikk
        .coordination()
        .send("agent-a", "agent-b", "event", payload, None)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let first: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let second: Value = serde_json::from_slice(&requests[1].body).unwrap();

    // Identical send arguments still produce distinct message ids
    assert_ne!(first["message_id"], second["message_id"]);
    assert_eq!(first["version"], "1.0");
    assert_eq!(first["type"], "event");
    assert_eq!(first["sender"]["agent_id"], "agent-a");
    assert_eq!(first["recipient"]["agent_id"], "agent-b");
    assert_eq!(first["ttl_ms"], 60_000);
}

#[tokio::test]
async fn facade_errors_propagate_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/reputation/a1"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"error": "forbidden for org"})),
        )
        .mount(&server)
        .await;

    let brikk = Brikk::builder()
        .base_url(server.uri())
        .api_key("test-key")
        .timeout_ms(2_000)
        .max_retries(0)
        .build()
        .unwrap();

    let err = brikk.reputation().score("a1").await.unwrap_err();
    assert!(matches!(err, Error::Auth { status_code: Some(403), .. }));
    assert_eq!(err.to_string(), "Authentication failed: forbidden for org");
}
