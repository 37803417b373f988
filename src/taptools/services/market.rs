//! Aggregated market endpoints.

use crate::error::TapToolsError;
use crate::taptools::client::TapToolsClient;
use crate::taptools::models::market::*;

pub async fn market_stats(
    api: &TapToolsClient,
    req: MarketStatsRequest,
) -> Result<MarketStats, TapToolsError> {
    api.get("/market/stats", &req.query()).await
}

/// Daily request counts for the calling API key over the past 30 days.
pub async fn market_metrics(
    api: &TapToolsClient,
    _req: MarketMetricsRequest,
) -> Result<Vec<MetricsCall>, TapToolsError> {
    api.get("/metrics", &Vec::new()).await
}
