//! Shared TapTools transport.
//!
//! One long-lived reqwest client carries the base URL, the Bearer API key
//! and a bounded per-request timeout. All endpoint functions funnel through
//! `get`/`post` here, so status translation and the retry policy live in
//! exactly one place.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::TapToolsError;

/// Query pairs, already serialized: optional parameters are simply absent,
/// flags are "0"/"1", list parameters are comma-delimited strings.
pub type Query = Vec<(&'static str, String)>;

#[derive(Clone)]
pub struct TapToolsClient {
    http: reqwest::Client,
    base_url: String,
}

impl TapToolsClient {
    pub fn new(config: &Config) -> Result<Self, TapToolsError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| {
                TapToolsError::authentication("API key contains invalid header characters", None)
            })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                TapToolsError::upstream(format!("failed to build HTTP client: {e}"), None, false)
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// One GET round trip, retried exactly once on a retryable failure
    /// (transient 5xx, timeout, connection reset). 4xx is never retried.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
    ) -> Result<T, TapToolsError> {
        let url = self.endpoint(path);
        debug!(%url, "GET");
        match self.send(self.http.get(&url).query(query)).await {
            Err(err) if err.is_retryable() => {
                warn!(%url, error = %err, "retrying transient GET failure");
                self.send(self.http.get(&url).query(query)).await
            }
            other => other,
        }
    }

    /// One POST round trip. POSTs are not idempotent under the retry
    /// policy, so a failure is surfaced immediately.
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, TapToolsError> {
        let url = self.endpoint(path);
        debug!(%url, "POST");
        self.send(self.http.post(&url).json(body)).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, TapToolsError> {
        let response = request.send().await.map_err(TapToolsError::from_transport)?;
        let status = response.status();
        let body = response.text().await.map_err(TapToolsError::from_transport)?;
        if !status.is_success() {
            return Err(TapToolsError::from_status(status, &body));
        }
        serde_json::from_str(&body).map_err(|e| {
            TapToolsError::upstream(
                format!("malformed response body: {e}"),
                Some(status.as_u16()),
                false,
            )
        })
    }
}
