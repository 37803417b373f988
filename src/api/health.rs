use axum::{response::IntoResponse, Json};

pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "taptools-mcp-server",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
