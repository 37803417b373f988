// src/lib.rs

pub mod api;
pub mod config;
pub mod error;
pub mod mcp;
pub mod taptools;

/// Application state shared across all request handlers.
///
/// Built once at startup and cloned per task; everything inside is
/// read-only after construction, so concurrent tool calls need no locking.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: config::Config,
    /// Shared TapTools HTTP client
    pub api: taptools::client::TapToolsClient,
}
