//! Tests for the shared TapTools transport: status translation, retry
//! policy and header handling, against a mocked upstream.

use std::time::Duration;

use mockito::Matcher;
use serde_json::Value;

use taptools_mcp_server::config::Config;
use taptools_mcp_server::error::TapToolsError;
use taptools_mcp_server::taptools::TapToolsClient;

fn test_client() -> TapToolsClient {
    let config = Config {
        api_key: "test-api-key".into(),
        base_url: mockito::server_url(),
        port: 0,
        request_timeout: Duration::from_secs(5),
    };
    TapToolsClient::new(&config).expect("client should build")
}

#[tokio::test]
async fn get_sends_bearer_auth_and_query() {
    let mock = mockito::mock("GET", "/ok/query")
        .match_header("authorization", "Bearer test-api-key")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("unit".into(), "token1".into()),
            Matcher::UrlEncoded("perPage".into(), "20".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"holders": 1234}"#)
        .expect(1)
        .create();

    let client = test_client();
    let query = vec![("unit", "token1".to_string()), ("perPage", "20".to_string())];
    let body: Value = client.get("/ok/query", &query).await.unwrap();

    assert_eq!(body["holders"], 1234);
    mock.assert();
}

#[tokio::test]
async fn http_401_maps_to_authentication_error() {
    let _m = mockito::mock("GET", "/err/unauthorized")
        .with_status(401)
        .with_body(r#"{"error": "Unauthorized", "message": "invalid api key"}"#)
        .create();

    let client = test_client();
    let err = client
        .get::<Value>("/err/unauthorized", &Vec::new())
        .await
        .unwrap_err();

    assert!(matches!(err, TapToolsError::Authentication { .. }));
    assert_eq!(err.status(), Some(401));
    assert!(err.to_string().contains("invalid api key"));
}

#[tokio::test]
async fn http_429_maps_to_rate_limit_error_without_retry() {
    let mock = mockito::mock("GET", "/err/ratelimited")
        .with_status(429)
        .with_body(r#"{"error": "Too Many Requests"}"#)
        .expect(1)
        .create();

    let client = test_client();
    let err = client
        .get::<Value>("/err/ratelimited", &Vec::new())
        .await
        .unwrap_err();

    assert!(matches!(err, TapToolsError::RateLimit { .. }));
    mock.assert();
}

#[tokio::test]
async fn http_400_maps_to_invalid_parameters_without_retry() {
    let mock = mockito::mock("GET", "/err/badrequest")
        .with_status(400)
        .with_body(r#"{"error": "Bad Request", "message": "invalid token unit"}"#)
        .expect(1)
        .create();

    let client = test_client();
    let err = client
        .get::<Value>("/err/badrequest", &Vec::new())
        .await
        .unwrap_err();

    assert!(matches!(err, TapToolsError::InvalidParameters { .. }));
    mock.assert();
}

#[tokio::test]
async fn http_404_maps_to_not_found() {
    let _m = mockito::mock("GET", "/err/missing")
        .with_status(404)
        .with_body(r#"{"error": "Not Found"}"#)
        .create();

    let client = test_client();
    let err = client
        .get::<Value>("/err/missing", &Vec::new())
        .await
        .unwrap_err();

    assert!(matches!(err, TapToolsError::NotFound { .. }));
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn transient_5xx_gets_exactly_one_retry() {
    let mock = mockito::mock("GET", "/err/transient")
        .with_status(503)
        .with_body("service unavailable")
        .expect(2)
        .create();

    let client = test_client();
    let err = client
        .get::<Value>("/err/transient", &Vec::new())
        .await
        .unwrap_err();

    assert!(matches!(err, TapToolsError::Upstream { retryable: true, .. }));
    mock.assert();
}

#[tokio::test]
async fn post_is_never_retried() {
    let mock = mockito::mock("POST", "/err/post-transient")
        .with_status(503)
        .with_body("service unavailable")
        .expect(1)
        .create();

    let client = test_client();
    let units = vec!["token1".to_string()];
    let err = client
        .post::<_, Value>("/err/post-transient", &units)
        .await
        .unwrap_err();

    assert!(matches!(err, TapToolsError::Upstream { .. }));
    mock.assert();
}

#[tokio::test]
async fn malformed_success_body_maps_to_upstream_error() {
    let _m = mockito::mock("GET", "/err/garbage")
        .with_status(200)
        .with_body("<html>definitely not json</html>")
        .create();

    let client = test_client();
    let err = client
        .get::<Value>("/err/garbage", &Vec::new())
        .await
        .unwrap_err();

    match err {
        TapToolsError::Upstream { retryable, status, .. } => {
            assert!(!retryable, "malformed bodies must not be retried");
            assert_eq!(status, Some(200));
        }
        other => panic!("expected Upstream, got {other:?}"),
    }
}

#[tokio::test]
async fn typed_response_with_missing_field_fails_validation() {
    // `holders` is required on the typed response; an empty object must
    // fail rather than produce a partial value.
    let _m = mockito::mock("GET", "/err/partial")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"unexpected": true}"#)
        .create();

    let client = test_client();
    let err = client
        .get::<taptools_mcp_server::taptools::models::tokens::TokenHolders>(
            "/err/partial",
            &Vec::new(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, TapToolsError::Upstream { retryable: false, .. }));
}
