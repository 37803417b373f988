//! Integration (DEX aggregator) endpoints.

use crate::error::TapToolsError;
use crate::taptools::client::TapToolsClient;
use crate::taptools::models::integration::*;

pub async fn asset(
    api: &TapToolsClient,
    req: IntegrationAssetRequest,
) -> Result<IntegrationAssetResponse, TapToolsError> {
    api.get("/integration/asset", &req.query()).await
}

pub async fn block(
    api: &TapToolsClient,
    req: IntegrationBlockRequest,
) -> Result<IntegrationBlockResponse, TapToolsError> {
    api.get("/integration/block", &req.query()).await
}

pub async fn events(
    api: &TapToolsClient,
    req: IntegrationEventsRequest,
) -> Result<IntegrationEventsResponse, TapToolsError> {
    api.get("/integration/events", &req.query()).await
}

pub async fn exchange(
    api: &TapToolsClient,
    req: IntegrationExchangeRequest,
) -> Result<IntegrationExchangeResponse, TapToolsError> {
    api.get("/integration/exchange", &req.query()).await
}

pub async fn latest_block(
    api: &TapToolsClient,
    _req: IntegrationLatestBlockRequest,
) -> Result<IntegrationLatestBlockResponse, TapToolsError> {
    api.get("/integration/latest-block", &Vec::new()).await
}

pub async fn pair(
    api: &TapToolsClient,
    req: IntegrationPairRequest,
) -> Result<IntegrationPairResponse, TapToolsError> {
    api.get("/integration/pair", &req.query()).await
}

pub async fn policy_assets(
    api: &TapToolsClient,
    req: IntegrationPolicyAssetsRequest,
) -> Result<PolicyAssets, TapToolsError> {
    api.get("/integration/policy/assets", &req.query()).await
}
