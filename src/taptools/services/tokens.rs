//! Token endpoints.

use crate::error::TapToolsError;
use crate::taptools::client::TapToolsClient;
use crate::taptools::models::tokens::*;

pub async fn token_mcap(
    api: &TapToolsClient,
    req: TokenMcapRequest,
) -> Result<TokenMcap, TapToolsError> {
    api.get("/token/mcap", &req.query()).await
}

pub async fn token_holders(
    api: &TapToolsClient,
    req: TokenHoldersRequest,
) -> Result<TokenHolders, TapToolsError> {
    api.get("/token/holders", &req.query()).await
}

pub async fn token_holders_top(
    api: &TapToolsClient,
    req: TokenTopHoldersRequest,
) -> Result<Vec<TokenHolder>, TapToolsError> {
    api.get("/token/holders/top", &req.query()).await
}

pub async fn token_indicators(
    api: &TapToolsClient,
    req: TokenIndicatorsRequest,
) -> Result<Vec<f64>, TapToolsError> {
    api.get("/token/indicators", &req.query()).await
}

pub async fn token_links(
    api: &TapToolsClient,
    req: TokenLinksRequest,
) -> Result<TokenLinks, TapToolsError> {
    api.get("/token/links", &req.query()).await
}

pub async fn token_ohlcv(
    api: &TapToolsClient,
    req: TokenOhlcvRequest,
) -> Result<Vec<TokenOhlcv>, TapToolsError> {
    api.get("/token/ohlcv", &req.query()).await
}

pub async fn token_pools(
    api: &TapToolsClient,
    req: TokenPoolsRequest,
) -> Result<Vec<TokenPool>, TapToolsError> {
    api.get("/token/pools", &req.query()).await
}

/// The one POST endpoint: aggregated prices for a batch of units.
pub async fn token_prices(
    api: &TapToolsClient,
    req: TokenPricesRequest,
) -> Result<TokenPrices, TapToolsError> {
    api.post("/token/prices", &req.units).await
}

pub async fn token_price_changes(
    api: &TapToolsClient,
    req: TokenPriceChangesRequest,
) -> Result<TokenPriceChanges, TapToolsError> {
    api.get("/token/prices/chg", &req.query()).await
}

pub async fn token_quote(
    api: &TapToolsClient,
    req: TokenQuoteRequest,
) -> Result<TokenQuote, TapToolsError> {
    api.get("/token/quote", &req.query()).await
}

pub async fn token_quote_available(
    api: &TapToolsClient,
    _req: TokenQuoteAvailableRequest,
) -> Result<Vec<String>, TapToolsError> {
    api.get("/token/quote/available", &Vec::new()).await
}

pub async fn token_top_liquidity(
    api: &TapToolsClient,
    req: TokenTopLiquidityRequest,
) -> Result<Vec<TokenLiquidity>, TapToolsError> {
    api.get("/token/top/liquidity", &req.query()).await
}

pub async fn token_top_mcap(
    api: &TapToolsClient,
    req: TokenTopMcapRequest,
) -> Result<Vec<TokenTopMcap>, TapToolsError> {
    api.get("/token/top/mcap", &req.query()).await
}

pub async fn token_top_volume(
    api: &TapToolsClient,
    req: TokenTopVolumeRequest,
) -> Result<Vec<TokenTopVolume>, TapToolsError> {
    api.get("/token/top/volume", &req.query()).await
}

pub async fn token_trades(
    api: &TapToolsClient,
    req: TokenTradesRequest,
) -> Result<Vec<TokenTrade>, TapToolsError> {
    api.get("/token/trades", &req.query()).await
}

pub async fn token_trading_stats(
    api: &TapToolsClient,
    req: TokenTradingStatsRequest,
) -> Result<TokenTradingStats, TapToolsError> {
    api.get("/token/trading/stats", &req.query()).await
}

pub async fn token_debt_loans(
    api: &TapToolsClient,
    req: TokenDebtRequest,
) -> Result<Vec<TokenDebtLoan>, TapToolsError> {
    api.get("/token/debt/loans", &req.query()).await
}

pub async fn token_debt_offers(
    api: &TapToolsClient,
    req: TokenDebtRequest,
) -> Result<Vec<TokenDebtOffer>, TapToolsError> {
    api.get("/token/debt/offers", &req.query()).await
}

/// Authentication probe: a cheap authorized GET proving the key works.
pub async fn verify_connection(
    api: &TapToolsClient,
    req: TokenQuoteAvailableRequest,
) -> Result<ConnectionStatus, TapToolsError> {
    let currencies = token_quote_available(api, req).await?;
    Ok(ConnectionStatus {
        success: true,
        available_quotes: currencies,
    })
}
