//! Typed failures for TapTools operations.
//!
//! Every non-success path in the server resolves to exactly one of these
//! kinds; the dispatch layer converts them into the outward JSON-RPC error
//! envelope, so callers only ever see kind + message + optional status.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::mcp::protocol::error_codes;

#[derive(Debug, Error)]
pub enum TapToolsError {
    /// Request arguments failed validation, or the upstream rejected them
    /// (HTTP 400/406). Never retried; raised before any network call when
    /// detected locally.
    #[error("invalid parameters: {message}")]
    InvalidParameters { message: String, status: Option<u16> },

    /// Missing or rejected API key (HTTP 401).
    #[error("authentication failed: {message}")]
    Authentication { message: String, status: Option<u16> },

    /// Upstream rate limit hit (HTTP 429).
    #[error("rate limited: {message}")]
    RateLimit { message: String, status: Option<u16> },

    /// The addressed resource does not exist upstream (HTTP 404).
    #[error("not found: {message}")]
    NotFound { message: String, status: Option<u16> },

    /// Upstream or transport failure: 5xx, malformed body, timeout,
    /// connection reset. `retryable` marks transient conditions that an
    /// idempotent GET may attempt once more.
    #[error("upstream error: {message}")]
    Upstream {
        message: String,
        status: Option<u16>,
        retryable: bool,
    },
}

impl TapToolsError {
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            message: message.into(),
            status: None,
        }
    }

    pub fn authentication(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Authentication {
            message: message.into(),
            status,
        }
    }

    pub fn upstream(message: impl Into<String>, status: Option<u16>, retryable: bool) -> Self {
        Self::Upstream {
            message: message.into(),
            status,
            retryable,
        }
    }

    /// Translates a non-success HTTP status (plus whatever body came with
    /// it) onto the taxonomy. Error bodies of the form
    /// `{"error": ..., "message": ...}` contribute to the message.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let code = status.as_u16();
        let message = describe_error_body(code, body);
        match code {
            401 => Self::Authentication {
                message,
                status: Some(code),
            },
            429 => Self::RateLimit {
                message,
                status: Some(code),
            },
            400 | 406 => Self::InvalidParameters {
                message,
                status: Some(code),
            },
            404 => Self::NotFound {
                message,
                status: Some(code),
            },
            // 408 and the 5xx family are transient; everything else 4xx is a
            // hard upstream rejection.
            408 => Self::Upstream {
                message,
                status: Some(code),
                retryable: true,
            },
            _ => Self::Upstream {
                message,
                status: Some(code),
                retryable: status.is_server_error(),
            },
        }
    }

    /// Transport-level failures (timeout, connection refused/reset) never
    /// carry a status and are always retry candidates for GETs.
    pub fn from_transport(err: reqwest::Error) -> Self {
        let detail = if err.is_timeout() {
            format!("request timed out: {err}")
        } else {
            format!("network error: {err}")
        };
        Self::Upstream {
            message: detail,
            status: None,
            retryable: true,
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Upstream { retryable: true, .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidParameters { status, .. }
            | Self::Authentication { status, .. }
            | Self::RateLimit { status, .. }
            | Self::NotFound { status, .. }
            | Self::Upstream { status, .. } => *status,
        }
    }

    /// Machine-readable kind string surfaced in the error envelope's data.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidParameters { .. } => "invalid_parameters",
            Self::Authentication { .. } => "authentication_error",
            Self::RateLimit { .. } => "rate_limit_error",
            Self::NotFound { .. } => "not_found",
            Self::Upstream { .. } => "upstream_error",
        }
    }

    /// JSON-RPC error code for the outward envelope.
    pub fn jsonrpc_code(&self) -> i32 {
        match self {
            Self::InvalidParameters { .. } => error_codes::INVALID_PARAMS,
            Self::Authentication { .. } => error_codes::AUTHENTICATION_ERROR,
            Self::RateLimit { .. } => error_codes::RATE_LIMIT_ERROR,
            Self::NotFound { .. } => error_codes::NOT_FOUND,
            Self::Upstream { .. } => error_codes::UPSTREAM_ERROR,
        }
    }
}

fn describe_error_body(code: u16, body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(parsed) => {
            let error = parsed.get("error").and_then(Value::as_str);
            let message = parsed.get("message").and_then(Value::as_str);
            match (error, message) {
                (Some(e), Some(m)) => format!("{e}: {m}"),
                (Some(e), None) => e.to_string(),
                (None, Some(m)) => m.to_string(),
                (None, None) => format!("HTTP {code}"),
            }
        }
        Err(_) if !body.trim().is_empty() => format!("HTTP {code}: {body}"),
        Err(_) => format!("HTTP {code}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_expected_kinds() {
        let cases = [
            (401, "authentication_error"),
            (429, "rate_limit_error"),
            (400, "invalid_parameters"),
            (406, "invalid_parameters"),
            (404, "not_found"),
            (500, "upstream_error"),
            (502, "upstream_error"),
        ];
        for (code, kind) in cases {
            let err = TapToolsError::from_status(StatusCode::from_u16(code).unwrap(), "");
            assert_eq!(err.kind(), kind, "status {code}");
            assert_eq!(err.status(), Some(code));
        }
    }

    #[test]
    fn server_errors_are_retryable_client_errors_are_not() {
        assert!(TapToolsError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "").is_retryable());
        assert!(TapToolsError::from_status(StatusCode::SERVICE_UNAVAILABLE, "").is_retryable());
        assert!(TapToolsError::from_status(StatusCode::REQUEST_TIMEOUT, "").is_retryable());
        assert!(!TapToolsError::from_status(StatusCode::BAD_REQUEST, "").is_retryable());
        assert!(!TapToolsError::from_status(StatusCode::TOO_MANY_REQUESTS, "").is_retryable());
        assert!(!TapToolsError::from_status(StatusCode::NOT_FOUND, "").is_retryable());
    }

    #[test]
    fn error_body_fields_feed_the_message() {
        let err = TapToolsError::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"error": "Bad Request", "message": "invalid token unit"}"#,
        );
        assert_eq!(err.to_string(), "invalid parameters: Bad Request: invalid token unit");
    }

    #[test]
    fn unparseable_body_falls_back_to_http_status() {
        let err = TapToolsError::from_status(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert!(err.to_string().contains("HTTP 502"));
    }
}
