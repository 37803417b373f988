//! # MCP Handler Module
//!
//! Implements the Model Context Protocol surface of the server: `initialize`,
//! `tools/list` and `tools/call`. Tool lookup and invocation are delegated
//! to the registry; this module owns the JSON-RPC envelope and the
//! success/error shaping.
//!
//! Per call the sequence is: receive -> validate arguments -> invoke the
//! endpoint client -> validate/serialize the response -> return. Any stage
//! can short-circuit to a single taxonomy error; nothing is ever surfaced
//! half-finished.

use serde_json::{json, Value};
use tracing::{debug, info};

use crate::mcp::protocol::{error_codes, Request, Response};
use crate::mcp::registry;
use crate::AppState;

/// Wraps a tool result so text-only MCP clients see a `content` array while
/// JSON-aware callers read the upstream payload unchanged.
fn make_text_result(payload: Value) -> Value {
    let text = serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string());
    let content = json!([{ "type": "text", "text": text }]);
    match payload {
        Value::Object(mut map) => {
            if !map.contains_key("content") {
                map.insert("content".into(), content);
            }
            Value::Object(map)
        }
        other => json!({
            "data": other,
            "content": content
        }),
    }
}

/// This is the main dispatcher for all incoming MCP requests.
pub async fn handle_mcp_request(req: Request, state: AppState) -> Option<Response> {
    debug!("handling MCP request for method: {}", req.method);

    if req.is_notification() {
        return None;
    }

    let response = match req.method.as_str() {
        "initialize" => handle_initialize(&req),
        "tools/list" => handle_tools_list(&req),
        "tools/call" => handle_tool_call(req, state).await,
        _ => Response::error(
            req.id,
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", req.method),
        ),
    };

    Some(response)
}

/// Handles a 'tools/call' request by dispatching it through the registry.
async fn handle_tool_call(req: Request, state: AppState) -> Response {
    let params = match req.params.as_ref() {
        Some(p) => p,
        None => {
            return Response::error(
                req.id,
                error_codes::INVALID_PARAMS,
                "Missing 'params' object".into(),
            )
        }
    };

    let tool_name = match params.get("name").and_then(|n| n.as_str()) {
        Some(name) => name.to_string(),
        None => {
            return Response::error(
                req.id,
                error_codes::INVALID_PARAMS,
                "Missing 'name' field in params".into(),
            )
        }
    };

    if !registry::contains(&tool_name) {
        return Response::error(
            req.id,
            error_codes::METHOD_NOT_FOUND,
            format!("Tool not found: {tool_name}"),
        );
    }

    let args = params
        .get("arguments")
        .cloned()
        .unwrap_or_else(|| json!({}));

    match registry::dispatch(&state, &tool_name, args).await {
        Ok(payload) => {
            info!(tool = %tool_name, "tool call succeeded");
            Response::success(req.id, make_text_result(payload))
        }
        Err(err) => {
            info!(tool = %tool_name, error = %err, "tool call failed");
            Response::from_taptools_error(req.id, &err)
        }
    }
}

/// Handles the 'initialize' request.
fn handle_initialize(req: &Request) -> Response {
    let server_info = json!({
        "name": "taptools-mcp-server",
        "version": env!("CARGO_PKG_VERSION")
    });
    let capabilities = json!({ "tools": { "listChanged": false } });
    let instructions =
        "TapTools MCP server exposing Cardano token, NFT, market, integration, onchain and wallet data.";

    Response::success(
        req.id.clone(),
        json!({
            "serverInfo": server_info,
            "protocolVersion": "2025-06-18",
            "capabilities": capabilities,
            "instructions": instructions
        }),
    )
}

/// Handles the 'tools/list' request from the registry's tool table.
fn handle_tools_list(req: &Request) -> Response {
    let tools: Vec<Value> = registry::tool_specs()
        .into_iter()
        .map(|spec| {
            json!({
                "name": spec.name,
                "description": spec.description,
                "inputSchema": spec.input_schema
            })
        })
        .collect();
    Response::success(req.id.clone(), json!({ "tools": tools }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_payloads_keep_their_fields_and_gain_content() {
        let wrapped = make_text_result(json!({ "ticker": "ADA", "price": 1.0 }));
        assert_eq!(wrapped["ticker"], "ADA");
        assert_eq!(wrapped["price"], 1.0);
        assert_eq!(wrapped["content"][0]["type"], "text");
    }

    #[test]
    fn array_payloads_are_carried_under_data() {
        let wrapped = make_text_result(json!([1, 2, 3]));
        assert_eq!(wrapped["data"], json!([1, 2, 3]));
        assert_eq!(wrapped["content"][0]["type"], "text");
    }
}
