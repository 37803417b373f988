// src/mcp/protocol.rs

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::TapToolsError;

#[derive(Debug, Serialize, Deserialize)]
pub struct Request {
    #[serde(default = "default_jsonrpc")]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Value,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorObject>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorObject {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

fn default_jsonrpc() -> String {
    "2.0".to_string()
}

impl Request {
    pub fn is_notification(&self) -> bool {
        self.id.is_null()
    }
}

impl Response {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Value, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(ErrorObject {
                code,
                message,
                data: None,
            }),
        }
    }

    /// Converts a taxonomy error into the single outward error envelope.
    /// The kind and upstream status ride along in `data` so machine callers
    /// can branch without parsing the message.
    pub fn from_taptools_error(id: Value, err: &TapToolsError) -> Self {
        let mut data = json!({ "kind": err.kind() });
        if let Some(status) = err.status() {
            data["status"] = json!(status);
        }
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(ErrorObject {
                code: err.jsonrpc_code(),
                message: err.to_string(),
                data: Some(data),
            }),
        }
    }
}

// Standard JSON-RPC error codes, plus server-range codes for the taxonomy.
pub mod error_codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;

    pub const UPSTREAM_ERROR: i32 = -32000;
    pub const AUTHENTICATION_ERROR: i32 = -32001;
    pub const RATE_LIMIT_ERROR: i32 = -32002;
    pub const NOT_FOUND: i32 = -32003;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_errors_carry_kind_and_status() {
        let err = TapToolsError::from_status(reqwest::StatusCode::TOO_MANY_REQUESTS, "");
        let resp = Response::from_taptools_error(json!(7), &err);
        let error = resp.error.expect("error object");
        assert_eq!(error.code, error_codes::RATE_LIMIT_ERROR);
        let data = error.data.expect("data");
        assert_eq!(data["kind"], "rate_limit_error");
        assert_eq!(data["status"], 429);
    }

    #[test]
    fn notification_has_null_id() {
        let req: Request =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
                .unwrap();
        assert!(req.is_notification());
    }
}
