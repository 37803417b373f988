// src/config.rs

use std::env;
use std::time::Duration;

use url::Url;

use crate::error::TapToolsError;

pub const DEFAULT_BASE_URL: &str = "https://openapi.taptools.io/api/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// A struct to hold all configuration, loaded once at startup from the .env file.
#[derive(Clone, Debug)]
pub struct Config {
    /// TapTools API key, sent as a Bearer token on every upstream call
    pub api_key: String,
    /// TapTools API base URL
    pub base_url: String,
    /// Port for the HTTP transport mode
    pub port: u16,
    /// Per-request timeout applied at the transport layer
    pub request_timeout: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// The API key is mandatory: without it the transport is never
    /// constructed and startup fails with an authentication error.
    pub fn from_env() -> Result<Self, TapToolsError> {
        // Load variables from the .env file into the environment
        dotenvy::dotenv().ok();

        let api_key = env::var("TAPTOOLS_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                TapToolsError::authentication(
                    "TAPTOOLS_API_KEY not found. Please set it in .env or the environment.",
                    None,
                )
            })?;

        let base_url = env::var("TAPTOOLS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Url::parse(&base_url).map_err(|e| {
            TapToolsError::invalid_parameters(format!("TAPTOOLS_BASE_URL is not a valid URL: {e}"))
        })?;

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| TapToolsError::invalid_parameters("PORT must be a valid number"))?;

        let timeout_secs = match env::var("TAPTOOLS_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| {
                TapToolsError::invalid_parameters("TAPTOOLS_TIMEOUT_SECS must be a valid number")
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            port,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            api_key: "test-api-key".into(),
            base_url: DEFAULT_BASE_URL.trim_end_matches('/').into(),
            port: 8080,
            request_timeout: Duration::from_secs(30),
        }
    }

    #[test]
    fn base_url_has_no_trailing_slash() {
        let config = test_config();
        assert!(!config.base_url.ends_with('/'));
    }
}
