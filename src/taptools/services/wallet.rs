//! Wallet endpoints.

use crate::error::TapToolsError;
use crate::taptools::client::TapToolsClient;
use crate::taptools::models::wallet::*;

pub async fn portfolio_positions(
    api: &TapToolsClient,
    req: WalletPortfolioRequest,
) -> Result<WalletPortfolioPositions, TapToolsError> {
    api.get("/wallet/portfolio/positions", &req.query()).await
}

pub async fn trades_tokens(
    api: &TapToolsClient,
    req: WalletTokenTradesRequest,
) -> Result<Vec<WalletTokenTrade>, TapToolsError> {
    api.get("/wallet/trades/tokens", &req.query()).await
}

/// Historical wallet value in 4-hour intervals.
pub async fn value_trended(
    api: &TapToolsClient,
    req: WalletValueTrendedRequest,
) -> Result<Vec<WalletValueTrend>, TapToolsError> {
    api.get("/wallet/value/trended", &req.query()).await
}
