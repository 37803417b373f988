//! End-to-end dispatch tests: JSON-RPC request in, validated tool call
//! against a mocked upstream, envelope out.

use std::time::Duration;

use mockito::Matcher;
use serde_json::{json, Value};

use taptools_mcp_server::config::Config;
use taptools_mcp_server::mcp::handler::handle_mcp_request;
use taptools_mcp_server::mcp::protocol::{error_codes, Request, Response};
use taptools_mcp_server::mcp::registry;
use taptools_mcp_server::taptools::TapToolsClient;
use taptools_mcp_server::AppState;

fn test_state() -> AppState {
    let config = Config {
        api_key: "test-api-key".into(),
        base_url: mockito::server_url(),
        port: 0,
        request_timeout: Duration::from_secs(5),
    };
    let api = TapToolsClient::new(&config).expect("client should build");
    AppState { config, api }
}

fn tool_call(id: i64, name: &str, arguments: Value) -> Request {
    Request {
        jsonrpc: "2.0".into(),
        id: json!(id),
        method: "tools/call".into(),
        params: Some(json!({ "name": name, "arguments": arguments })),
    }
}

async fn call(state: AppState, req: Request) -> Response {
    handle_mcp_request(req, state)
        .await
        .expect("requests with ids always get a response")
}

#[tokio::test]
async fn market_cap_scenario_returns_the_upstream_object_unchanged() {
    let upstream = json!({
        "ticker": "ADA",
        "circSupply": 0.0,
        "totalSupply": 45000000000.0,
        "price": 1.0,
        "mcap": 45000000000.0,
        "fdv": 45000000000.0
    });
    let mock = mockito::mock("GET", "/token/mcap")
        .match_query(Matcher::UrlEncoded("unit".into(), "lovelace".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(upstream.to_string())
        .expect(1)
        .create();

    let response = call(
        test_state(),
        tool_call(1, "get_token_mcap", json!({ "unit": "lovelace" })),
    )
    .await;

    let result = response.result.expect("success result");
    assert!(response.error.is_none());
    assert_eq!(result["ticker"], "ADA");
    assert_eq!(result["circSupply"], 0.0);
    assert_eq!(result["totalSupply"], 45000000000.0);
    assert_eq!(result["price"], 1.0);
    assert_eq!(result["mcap"], 45000000000.0);
    assert_eq!(result["fdv"], 45000000000.0);
    assert_eq!(result["content"][0]["type"], "text");
    mock.assert();
}

#[tokio::test]
async fn missing_required_field_fails_without_any_network_call() {
    // Query matcher that the (never issued) request could not satisfy
    // anyway; the assertion below is that the hit count stays at zero.
    let mock = mockito::mock("GET", "/token/mcap")
        .match_query(Matcher::UrlEncoded("unit".into(), "unreachable".into()))
        .expect(0)
        .create();

    let response = call(test_state(), tool_call(2, "get_token_mcap", json!({}))).await;

    let error = response.error.expect("error object");
    assert_eq!(error.code, error_codes::INVALID_PARAMS);
    assert_eq!(error.data.as_ref().unwrap()["kind"], "invalid_parameters");
    mock.assert();
}

#[tokio::test]
async fn out_of_set_enum_value_fails_validation_without_network() {
    let mock = mockito::mock("GET", "/token/trades")
        .match_query(Matcher::UrlEncoded("order".into(), "unreachable".into()))
        .expect(0)
        .create();

    let response = call(
        test_state(),
        tool_call(3, "get_token_trades", json!({ "order": "sideways" })),
    )
    .await;

    let error = response.error.expect("error object");
    assert_eq!(error.code, error_codes::INVALID_PARAMS);
    mock.assert();
}

#[tokio::test]
async fn upstream_401_surfaces_as_authentication_error() {
    let _m = mockito::mock("GET", "/token/links")
        .match_query(Matcher::UrlEncoded("unit".into(), "auth-check".into()))
        .with_status(401)
        .with_body(r#"{"error": "Unauthorized"}"#)
        .create();

    let response = call(
        test_state(),
        tool_call(4, "get_token_links", json!({ "unit": "auth-check" })),
    )
    .await;

    let error = response.error.expect("error object");
    assert_eq!(error.code, error_codes::AUTHENTICATION_ERROR);
    let data = error.data.expect("data");
    assert_eq!(data["kind"], "authentication_error");
    assert_eq!(data["status"], 401);
}

#[tokio::test]
async fn upstream_429_surfaces_as_rate_limit_error() {
    let _m = mockito::mock("GET", "/token/holders")
        .match_query(Matcher::UrlEncoded("unit".into(), "limited".into()))
        .with_status(429)
        .with_body(r#"{"error": "Too Many Requests"}"#)
        .create();

    let response = call(
        test_state(),
        tool_call(5, "get_token_holders", json!({ "unit": "limited" })),
    )
    .await;

    let error = response.error.expect("error object");
    assert_eq!(error.code, error_codes::RATE_LIMIT_ERROR);
    assert_eq!(error.data.unwrap()["kind"], "rate_limit_error");
}

#[tokio::test]
async fn partial_upstream_response_never_reaches_the_caller() {
    // Response validation: /nft/collection/stats is missing `volume`.
    let _m = mockito::mock("GET", "/nft/collection/stats")
        .match_query(Matcher::UrlEncoded("policy".into(), "partial-policy".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"listings": 673, "owners": 1124, "price": 450.0, "sales": 4782, "supply": 10000, "topOffer": 400.0}"#,
        )
        .create();

    let response = call(
        test_state(),
        tool_call(
            6,
            "get_nft_collection_stats",
            json!({ "policy": "partial-policy" }),
        ),
    )
    .await;

    let error = response.error.expect("error object");
    assert_eq!(error.code, error_codes::UPSTREAM_ERROR);
    assert_eq!(error.data.unwrap()["kind"], "upstream_error");
}

#[tokio::test]
async fn batch_price_post_sends_the_unit_array_body() {
    let mock = mockito::mock("POST", "/token/prices")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!(["token1", "token2"])))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token1": 1.5, "token2": 2.3}"#)
        .expect(1)
        .create();

    let response = call(
        test_state(),
        tool_call(
            7,
            "get_token_prices",
            json!({ "units": ["token1", "token2"] }),
        ),
    )
    .await;

    let result = response.result.expect("success result");
    assert_eq!(result["token1"], 1.5);
    assert_eq!(result["token2"], 2.3);
    mock.assert();
}

#[tokio::test]
async fn repeating_the_same_get_yields_identical_results() {
    let mock = mockito::mock("GET", "/token/mcap")
        .match_query(Matcher::UrlEncoded("unit".into(), "idempotent".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"ticker": "TEST", "circSupply": 1000000.0, "totalSupply": 2000000.0, "price": 1.5, "mcap": 1500000.0, "fdv": 2000000.0}"#,
        )
        .expect(2)
        .create();

    let state = test_state();
    let first = call(
        state.clone(),
        tool_call(20, "get_token_mcap", json!({ "unit": "idempotent" })),
    )
    .await;
    let second = call(
        state,
        tool_call(21, "get_token_mcap", json!({ "unit": "idempotent" })),
    )
    .await;

    assert_eq!(first.result, second.result);
    mock.assert();
}

#[tokio::test]
async fn unknown_tool_is_method_not_found() {
    let response = call(
        test_state(),
        tool_call(8, "get_balance", json!({ "address": "addr1" })),
    )
    .await;

    let error = response.error.expect("error object");
    assert_eq!(error.code, error_codes::METHOD_NOT_FOUND);
}

#[tokio::test]
async fn default_pagination_is_visible_in_the_outgoing_query() {
    let mock = mockito::mock("GET", "/token/holders/top")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("unit".into(), "paged-token".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("perPage".into(), "20".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"address": "stake1abc", "amount": 1000000.0}]"#)
        .expect(1)
        .create();

    let response = call(
        test_state(),
        tool_call(9, "get_token_holders_top", json!({ "unit": "paged-token" })),
    )
    .await;

    let result = response.result.expect("success result");
    assert_eq!(result["data"][0]["address"], "stake1abc");
    mock.assert();
}

#[tokio::test]
async fn tools_list_matches_the_registry() {
    let response = call(
        test_state(),
        Request {
            jsonrpc: "2.0".into(),
            id: json!(10),
            method: "tools/list".into(),
            params: None,
        },
    )
    .await;

    let result = response.result.expect("success result");
    let tools = result["tools"].as_array().expect("tools array");
    assert_eq!(tools.len(), registry::tool_specs().len());
    assert!(tools
        .iter()
        .all(|t| t.get("name").is_some() && t.get("inputSchema").is_some()));
}

#[tokio::test]
async fn initialize_reports_server_info() {
    let response = call(
        test_state(),
        Request {
            jsonrpc: "2.0".into(),
            id: json!(11),
            method: "initialize".into(),
            params: None,
        },
    )
    .await;

    let result = response.result.expect("success result");
    assert_eq!(result["serverInfo"]["name"], "taptools-mcp-server");
    assert!(result.get("protocolVersion").is_some());
}

#[tokio::test]
async fn notifications_get_no_response() {
    let req = Request {
        jsonrpc: "2.0".into(),
        id: Value::Null,
        method: "notifications/initialized".into(),
        params: None,
    };
    assert!(handle_mcp_request(req, test_state()).await.is_none());
}
