//! Tool registry: the single declarative table behind both `tools/list`
//! and `tools/call`.
//!
//! Every entry names one tool, its request type, the service function it
//! invokes, a description, and the JSON input schema advertised to
//! clients. The `tool_registry!` macro expands the table into both the
//! tool listing and the dispatch match, so the two can never drift apart.
//! Registration is fixed at compile time and lookups are read-only, so
//! concurrent dispatch needs no locking.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use validator::Validate;

use crate::error::TapToolsError;
use crate::taptools::models::{integration, market, nfts, onchain, tokens, wallet};
use crate::taptools::services;
use crate::AppState;

pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

/// Validation happens here, before any network call: a request that fails
/// to parse or validate never reaches the client.
fn parse_request<T>(args: Value) -> Result<T, TapToolsError>
where
    T: DeserializeOwned + Validate,
{
    let request: T = serde_json::from_value(args)
        .map_err(|e| TapToolsError::invalid_parameters(format!("invalid arguments: {e}")))?;
    request
        .validate()
        .map_err(|e| TapToolsError::invalid_parameters(e.to_string()))?;
    Ok(request)
}

fn to_result<T: Serialize>(value: T) -> Result<Value, TapToolsError> {
    serde_json::to_value(value).map_err(|e| {
        TapToolsError::upstream(format!("failed to serialize result: {e}"), None, false)
    })
}

macro_rules! tool_registry {
    ($(
        $name:literal : $req:ty => $handler:path, $desc:literal, $schema:tt
    );+ $(;)?) => {
        pub fn tool_specs() -> Vec<ToolSpec> {
            vec![$(
                ToolSpec {
                    name: $name,
                    description: $desc,
                    input_schema: json!($schema),
                },
            )+]
        }

        pub fn contains(name: &str) -> bool {
            matches!(name, $($name)|+)
        }

        /// The generic call sequence every tool flows through:
        /// parse -> validate -> invoke -> serialize.
        pub async fn dispatch(
            state: &AppState,
            name: &str,
            args: Value,
        ) -> Result<Value, TapToolsError> {
            match name {
                $(
                    $name => {
                        let request = parse_request::<$req>(args)?;
                        to_result($handler(&state.api, request).await?)
                    }
                )+
                other => Err(TapToolsError::invalid_parameters(format!(
                    "unknown tool '{other}'"
                ))),
            }
        }
    };
}

tool_registry! {
    // ---- Token tools ----
    "get_token_mcap": tokens::TokenMcapRequest => services::tokens::token_mcap,
        "Get a token's market cap, supply and price breakdown.",
        {"type": "object", "properties": {"unit": {"type": "string", "description": "Token unit (policy + hex-encoded name)"}}, "required": ["unit"]};
    "get_token_holders": tokens::TokenHoldersRequest => services::tokens::token_holders,
        "Get the total number of holders for a token.",
        {"type": "object", "properties": {"unit": {"type": "string", "description": "Token unit (policy + hex-encoded name)"}}, "required": ["unit"]};
    "get_token_holders_top": tokens::TokenTopHoldersRequest => services::tokens::token_holders_top,
        "Get the top holders of a token.",
        {"type": "object", "properties": {"unit": {"type": "string"}, "page": {"type": "integer", "minimum": 1, "default": 1}, "perPage": {"type": "integer", "minimum": 1, "maximum": 100, "default": 20}}, "required": ["unit"]};
    "get_token_indicators": tokens::TokenIndicatorsRequest => services::tokens::token_indicators,
        "Get technical indicator values (ma, ema, rsi, macd, bb, bbw) for a token.",
        {"type": "object", "properties": {"unit": {"type": "string"}, "interval": {"type": "string", "enum": ["3m", "5m", "15m", "30m", "1h", "2h", "4h", "12h", "1d", "3d", "1w", "1M"]}, "items": {"type": "integer", "minimum": 1, "maximum": 1000}, "indicator": {"type": "string", "enum": ["ma", "ema", "rsi", "macd", "bb", "bbw"]}, "quote": {"type": "string", "enum": ["ADA", "USD", "EUR", "ETH", "BTC"]}}, "required": ["unit", "interval"]};
    "get_token_links": tokens::TokenLinksRequest => services::tokens::token_links,
        "Get a token's website and social links.",
        {"type": "object", "properties": {"unit": {"type": "string"}}, "required": ["unit"]};
    "get_token_ohlcv": tokens::TokenOhlcvRequest => services::tokens::token_ohlcv,
        "Get OHLCV candles for a token, by unit or onchain pool id.",
        {"type": "object", "properties": {"unit": {"type": "string"}, "onchainId": {"type": "string"}, "interval": {"type": "string", "enum": ["3m", "5m", "15m", "30m", "1h", "2h", "4h", "12h", "1d", "3d", "1w", "1M"]}, "numIntervals": {"type": "integer", "minimum": 1}}, "required": ["interval"]};
    "get_token_pools": tokens::TokenPoolsRequest => services::tokens::token_pools,
        "Get active liquidity pools for a token.",
        {"type": "object", "properties": {"unit": {"type": "string"}, "onchainId": {"type": "string"}, "adaOnly": {"type": "boolean", "default": false}}};
    "get_token_prices": tokens::TokenPricesRequest => services::tokens::token_prices,
        "Get aggregated prices for a batch of tokens (max 100 units).",
        {"type": "object", "properties": {"units": {"type": "array", "items": {"type": "string"}, "minItems": 1, "maxItems": 100}}, "required": ["units"]};
    "get_token_price_changes": tokens::TokenPriceChangesRequest => services::tokens::token_price_changes,
        "Get a token's price change percentages over several timeframes.",
        {"type": "object", "properties": {"unit": {"type": "string"}, "timeframes": {"type": "array", "items": {"type": "string", "enum": ["5m", "1h", "4h", "6h", "24h", "7d", "30d", "60d", "90d"]}}}, "required": ["unit"]};
    "get_token_quote": tokens::TokenQuoteRequest => services::tokens::token_quote,
        "Get the current quote price (e.g. ADA/USD).",
        {"type": "object", "properties": {"quote": {"type": "string", "enum": ["ADA", "USD", "EUR", "ETH", "BTC"]}}};
    "get_token_quote_available": tokens::TokenQuoteAvailableRequest => services::tokens::token_quote_available,
        "List the available quote currencies.",
        {"type": "object", "properties": {}};
    "get_token_top_liquidity": tokens::TokenTopLiquidityRequest => services::tokens::token_top_liquidity,
        "Get tokens ranked by DEX liquidity.",
        {"type": "object", "properties": {"page": {"type": "integer", "minimum": 1, "default": 1}, "perPage": {"type": "integer", "minimum": 1, "maximum": 100, "default": 10}}};
    "get_token_top_mcap": tokens::TokenTopMcapRequest => services::tokens::token_top_mcap,
        "Get tokens ranked by market cap or fully diluted valuation.",
        {"type": "object", "properties": {"type": {"type": "string", "enum": ["mcap", "fdv"], "default": "mcap"}, "page": {"type": "integer", "minimum": 1, "default": 1}, "perPage": {"type": "integer", "minimum": 1, "maximum": 100, "default": 20}}};
    "get_token_top_volume": tokens::TokenTopVolumeRequest => services::tokens::token_top_volume,
        "Get tokens ranked by trading volume.",
        {"type": "object", "properties": {"timeframe": {"type": "string", "enum": ["24h", "7d", "30d"], "default": "24h"}, "page": {"type": "integer", "minimum": 1, "default": 1}, "perPage": {"type": "integer", "minimum": 1, "maximum": 100, "default": 20}}};
    "get_token_trades": tokens::TokenTradesRequest => services::tokens::token_trades,
        "Get token trades across DEXes.",
        {"type": "object", "properties": {"timeframe": {"type": "string", "enum": ["24h", "7d", "30d", "90d", "180d", "1y", "all"], "default": "30d"}, "sortBy": {"type": "string", "enum": ["amount", "time"], "default": "amount"}, "order": {"type": "string", "enum": ["asc", "desc"], "default": "desc"}, "unit": {"type": "string"}, "minAmount": {"type": "integer"}, "fromTs": {"type": "integer", "description": "Only trades after this UNIX timestamp"}, "page": {"type": "integer", "minimum": 1, "default": 1}, "perPage": {"type": "integer", "minimum": 1, "maximum": 100, "default": 100}}};
    "get_token_trading_stats": tokens::TokenTradingStatsRequest => services::tokens::token_trading_stats,
        "Get buy/sell trading stats for a token.",
        {"type": "object", "properties": {"unit": {"type": "string"}, "timeframe": {"type": "string", "enum": ["24h", "7d", "30d"], "default": "24h"}}, "required": ["unit"]};
    "get_token_debt_loans": tokens::TokenDebtRequest => services::tokens::token_debt_loans,
        "Get active P2P loans for a token (Lenfi, Levvy).",
        {"type": "object", "properties": {"unit": {"type": "string"}, "include": {"type": "string", "default": "collateral,debt"}, "sortBy": {"type": "string", "enum": ["time", "expiration"], "default": "time"}, "order": {"type": "string", "enum": ["asc", "desc"], "default": "desc"}, "page": {"type": "integer", "minimum": 1, "default": 1}, "perPage": {"type": "integer", "minimum": 1, "maximum": 100, "default": 100}}, "required": ["unit"]};
    "get_token_debt_offers": tokens::TokenDebtRequest => services::tokens::token_debt_offers,
        "Get active P2P loan offers for a token.",
        {"type": "object", "properties": {"unit": {"type": "string"}, "include": {"type": "string", "default": "collateral,debt"}, "sortBy": {"type": "string", "enum": ["time", "expiration"], "default": "time"}, "order": {"type": "string", "enum": ["asc", "desc"], "default": "desc"}, "page": {"type": "integer", "minimum": 1, "default": 1}, "perPage": {"type": "integer", "minimum": 1, "maximum": 100, "default": 100}}, "required": ["unit"]};
    "verify_connection": tokens::TokenQuoteAvailableRequest => services::tokens::verify_connection,
        "Verify TapTools API authentication.",
        {"type": "object", "properties": {}};

    // ---- NFT tools ----
    "get_nft_asset_sales": nfts::NftAssetSalesRequest => services::nfts::asset_sales,
        "Get the sale history of a specific NFT.",
        {"type": "object", "properties": {"policy": {"type": "string", "description": "Policy ID of the collection"}, "name": {"type": "string", "description": "NFT name"}}, "required": ["policy"]};
    "get_nft_asset_stats": nfts::NftAssetStatsRequest => services::nfts::asset_stats,
        "Get listing/sale stats for a specific NFT.",
        {"type": "object", "properties": {"policy": {"type": "string"}, "name": {"type": "string"}}, "required": ["policy", "name"]};
    "get_nft_asset_traits": nfts::NftAssetTraitsRequest => services::nfts::asset_traits,
        "Get the traits and rarity rank of a specific NFT.",
        {"type": "object", "properties": {"policy": {"type": "string"}, "name": {"type": "string"}, "prices": {"type": "boolean", "default": true, "description": "Include trait floor prices"}}, "required": ["policy", "name"]};
    "get_nft_collection_assets": nfts::NftCollectionAssetsRequest => services::nfts::collection_assets,
        "List the assets of an NFT collection.",
        {"type": "object", "properties": {"policy": {"type": "string"}, "sortBy": {"type": "string", "enum": ["price", "rank"], "default": "price"}, "order": {"type": "string", "enum": ["asc", "desc"], "default": "asc"}, "search": {"type": "string"}, "onSale": {"type": "boolean", "default": false}, "page": {"type": "integer", "minimum": 1, "default": 1}, "perPage": {"type": "integer", "minimum": 1, "maximum": 100, "default": 100}}, "required": ["policy"]};
    "get_nft_collection_holders_distribution": nfts::NftHoldersDistributionRequest => services::nfts::collection_holders_distribution,
        "Get the holder distribution of a collection by quantity bucket.",
        {"type": "object", "properties": {"policy": {"type": "string"}}, "required": ["policy"]};
    "get_nft_collection_holders_top": nfts::NftTopHoldersRequest => services::nfts::collection_holders_top,
        "Get the top holders of an NFT collection.",
        {"type": "object", "properties": {"policy": {"type": "string"}, "page": {"type": "integer", "minimum": 1, "default": 1}, "perPage": {"type": "integer", "minimum": 1, "maximum": 100, "default": 10}, "excludeExchanges": {"type": "boolean", "default": false}}, "required": ["policy"]};
    "get_nft_collection_holders_trended": nfts::NftHoldersTrendedRequest => services::nfts::collection_holders_trended,
        "Get trended holder counts for an NFT collection.",
        {"type": "object", "properties": {"policy": {"type": "string"}, "timeframe": {"type": "string", "enum": ["24h", "7d", "30d", "90d", "180d", "1y", "all"], "default": "30d"}}, "required": ["policy"]};
    "get_nft_collection_info": nfts::NftCollectionInfoRequest => services::nfts::collection_info,
        "Get basic information about an NFT collection.",
        {"type": "object", "properties": {"policy": {"type": "string"}}, "required": ["policy"]};
    "get_nft_collection_listings": nfts::NftCollectionListingsRequest => services::nfts::collection_listings,
        "Get the number of active listings and supply of a collection.",
        {"type": "object", "properties": {"policy": {"type": "string"}}, "required": ["policy"]};
    "get_nft_collection_listings_depth": nfts::NftListingsDepthRequest => services::nfts::collection_listings_depth,
        "Get cumulative listing depth by price level for a collection.",
        {"type": "object", "properties": {"policy": {"type": "string"}, "items": {"type": "integer", "minimum": 1, "maximum": 1000, "default": 500}}, "required": ["policy"]};
    "get_nft_collection_listings_individual": nfts::NftIndividualListingsRequest => services::nfts::collection_listings_individual,
        "Get individual active listings of a collection.",
        {"type": "object", "properties": {"policy": {"type": "string"}, "sortBy": {"type": "string", "enum": ["price", "time"], "default": "price"}, "order": {"type": "string", "enum": ["asc", "desc"], "default": "asc"}, "page": {"type": "integer", "minimum": 1, "default": 1}, "perPage": {"type": "integer", "minimum": 1, "maximum": 100, "default": 100}}, "required": ["policy"]};
    "get_nft_collection_listings_trended": nfts::NftListingsTrendedRequest => services::nfts::collection_listings_trended,
        "Get trended listing counts and floor price for a collection.",
        {"type": "object", "properties": {"policy": {"type": "string"}, "interval": {"type": "string", "enum": ["3m", "5m", "15m", "30m", "1h", "2h", "4h", "12h", "1d", "3d", "1w", "1M"]}, "numIntervals": {"type": "integer", "minimum": 1}}, "required": ["policy", "interval"]};
    "get_nft_collection_ohlcv": nfts::NftCollectionOhlcvRequest => services::nfts::collection_ohlcv,
        "Get floor price OHLCV candles for a collection.",
        {"type": "object", "properties": {"policy": {"type": "string"}, "interval": {"type": "string", "enum": ["3m", "5m", "15m", "30m", "1h", "2h", "4h", "12h", "1d", "3d", "1w", "1M"]}, "numIntervals": {"type": "integer", "minimum": 1}}, "required": ["policy", "interval"]};
    "get_nft_collection_stats": nfts::NftCollectionStatsRequest => services::nfts::collection_stats,
        "Get summary stats for an NFT collection.",
        {"type": "object", "properties": {"policy": {"type": "string"}}, "required": ["policy"]};
    "get_nft_collection_stats_extended": nfts::NftCollectionStatsExtendedRequest => services::nfts::collection_stats_extended,
        "Get collection stats with percent changes over a timeframe.",
        {"type": "object", "properties": {"policy": {"type": "string"}, "timeframe": {"type": "string", "enum": ["24h", "7d", "30d"], "default": "24h"}}, "required": ["policy"]};
    "get_nft_collection_trades": nfts::NftCollectionTradesRequest => services::nfts::collection_trades,
        "Get NFT trades, across the market or for one collection.",
        {"type": "object", "properties": {"policy": {"type": "string"}, "timeframe": {"type": "string", "enum": ["24h", "7d", "30d", "90d", "180d", "1y", "all"], "default": "30d"}, "sortBy": {"type": "string", "enum": ["amount", "time"], "default": "time"}, "order": {"type": "string", "enum": ["asc", "desc"], "default": "desc"}, "minAmount": {"type": "integer"}, "fromTime": {"type": "integer", "description": "Only trades after this UNIX timestamp"}, "page": {"type": "integer", "minimum": 1, "default": 1}, "perPage": {"type": "integer", "minimum": 1, "maximum": 100, "default": 100}}};
    "get_nft_collection_trades_stats": nfts::NftTradeStatsRequest => services::nfts::collection_trades_stats,
        "Get trade stats (buyers, sellers, volume) for a collection.",
        {"type": "object", "properties": {"policy": {"type": "string"}, "timeframe": {"type": "string", "enum": ["24h", "7d", "30d"], "default": "24h"}}, "required": ["policy"]};
    "get_nft_collection_traits_price": nfts::NftTraitPricesRequest => services::nfts::collection_traits_price,
        "Get trait floor prices for a collection.",
        {"type": "object", "properties": {"policy": {"type": "string"}, "name": {"type": "string"}}, "required": ["policy"]};
    "get_nft_collection_traits_rarity": nfts::NftTraitRarityRequest => services::nfts::collection_traits_rarity,
        "Get trait rarity scores for a collection.",
        {"type": "object", "properties": {"policy": {"type": "string"}}, "required": ["policy"]};
    "get_nft_collection_traits_rarity_rank": nfts::NftTraitRarityRankRequest => services::nfts::collection_traits_rarity_rank,
        "Get the rarity rank of a specific NFT.",
        {"type": "object", "properties": {"policy": {"type": "string"}, "name": {"type": "string"}}, "required": ["policy", "name"]};
    "get_nft_collection_volume_trended": nfts::NftVolumeTrendedRequest => services::nfts::collection_volume_trended,
        "Get trended volume and sales for a collection.",
        {"type": "object", "properties": {"policy": {"type": "string"}, "interval": {"type": "string", "enum": ["3m", "5m", "15m", "30m", "1h", "2h", "4h", "12h", "1d", "3d", "1w", "1M"]}, "numIntervals": {"type": "integer", "minimum": 1}}, "required": ["policy", "interval"]};
    "get_nft_market_stats": nfts::NftMarketStatsRequest => services::nfts::market_stats,
        "Get NFT market-wide stats for a timeframe.",
        {"type": "object", "properties": {"timeframe": {"type": "string", "enum": ["24h", "7d", "30d"], "default": "24h"}}};
    "get_nft_market_stats_extended": nfts::NftMarketStatsExtendedRequest => services::nfts::market_stats_extended,
        "Get NFT market-wide stats with percent changes.",
        {"type": "object", "properties": {"timeframe": {"type": "string", "enum": ["24h", "7d", "30d"]}}, "required": ["timeframe"]};
    "get_nft_market_volume_trended": nfts::NftMarketVolumeTrendedRequest => services::nfts::market_volume_trended,
        "Get trended NFT market volume.",
        {"type": "object", "properties": {"timeframe": {"type": "string", "enum": ["24h", "7d", "30d", "90d", "180d", "1y", "all"], "default": "30d"}}};
    "get_nft_marketplace_stats": nfts::NftMarketplaceStatsRequest => services::nfts::marketplace_stats,
        "Get per-marketplace NFT stats.",
        {"type": "object", "properties": {"timeframe": {"type": "string", "enum": ["24h", "7d", "30d", "90d", "180d", "1y", "all"], "default": "7d"}, "marketplace": {"type": "string"}, "lastDay": {"type": "boolean", "default": false}}};
    "get_nft_top_timeframe": nfts::NftTopTimeframeRequest => services::nfts::top_timeframe,
        "Get top NFT collections by market cap, volume, gainers or losers.",
        {"type": "object", "properties": {"ranking": {"type": "string", "enum": ["marketCap", "volume", "gainers", "losers"]}, "items": {"type": "integer", "minimum": 1, "maximum": 100, "default": 25}}, "required": ["ranking"]};
    "get_nft_top_volume": nfts::NftTopVolumeRequest => services::nfts::top_volume,
        "Get top NFT collections by trading volume.",
        {"type": "object", "properties": {"timeframe": {"type": "string", "enum": ["24h", "7d", "30d"], "default": "24h"}, "page": {"type": "integer", "minimum": 1, "default": 1}, "perPage": {"type": "integer", "minimum": 1, "maximum": 100, "default": 10}}};
    "get_nft_top_volume_extended": nfts::NftTopVolumeExtendedRequest => services::nfts::top_volume_extended,
        "Get top NFT collections by volume with percent changes.",
        {"type": "object", "properties": {"timeframe": {"type": "string", "enum": ["24h", "7d", "30d"], "default": "24h"}, "page": {"type": "integer", "minimum": 1, "default": 1}, "perPage": {"type": "integer", "minimum": 1, "maximum": 100, "default": 10}}};

    // ---- Market tools ----
    "get_market_stats": market::MarketStatsRequest => services::market::market_stats,
        "Get market-wide stats: 24h DEX volume and active addresses.",
        {"type": "object", "properties": {"quote": {"type": "string", "enum": ["ADA", "USD", "EUR", "ETH", "BTC"], "default": "ADA"}}};
    "get_market_metrics": market::MarketMetricsRequest => services::market::market_metrics,
        "Get daily request counts for the past 30 days.",
        {"type": "object", "properties": {}};

    // ---- Integration tools ----
    "get_integration_asset": integration::IntegrationAssetRequest => services::integration::asset,
        "Get asset details by ID.",
        {"type": "object", "properties": {"id": {"type": "string", "description": "Asset ID"}}, "required": ["id"]};
    "get_integration_block": integration::IntegrationBlockRequest => services::integration::block,
        "Get a block by number or timestamp.",
        {"type": "object", "properties": {"number": {"type": "integer"}, "timestamp": {"type": "integer"}}};
    "get_integration_events": integration::IntegrationEventsRequest => services::integration::events,
        "List DEX events within a block range.",
        {"type": "object", "properties": {"fromBlock": {"type": "integer"}, "toBlock": {"type": "integer"}, "limit": {"type": "integer", "minimum": 1, "maximum": 1000, "default": 1000}}, "required": ["fromBlock", "toBlock"]};
    "get_integration_exchange": integration::IntegrationExchangeRequest => services::integration::exchange,
        "Get DEX details by factory address/ID.",
        {"type": "object", "properties": {"id": {"type": "string"}}, "required": ["id"]};
    "get_integration_latest_block": integration::IntegrationLatestBlockRequest => services::integration::latest_block,
        "Get the latest processed block.",
        {"type": "object", "properties": {}};
    "get_integration_pair": integration::IntegrationPairRequest => services::integration::pair,
        "Get pair/pool details by address.",
        {"type": "object", "properties": {"id": {"type": "string"}}, "required": ["id"]};
    "get_policy_assets": integration::IntegrationPolicyAssetsRequest => services::integration::policy_assets,
        "Get assets under a given policy ID.",
        {"type": "object", "properties": {"id": {"type": "string", "description": "Policy ID"}, "page": {"type": "integer", "minimum": 1, "default": 1}, "perPage": {"type": "integer", "minimum": 1, "maximum": 100, "default": 100}}, "required": ["id"]};

    // ---- Onchain tools ----
    "get_asset_supply": onchain::AssetSupplyRequest => services::onchain::asset_supply,
        "Get the current onchain supply of an asset.",
        {"type": "object", "properties": {"unit": {"type": "string"}}, "required": ["unit"]};
    "get_address_info": onchain::AddressInfoRequest => services::onchain::address_info,
        "Get address info: payment cred, stake address, lovelace and assets.",
        {"type": "object", "properties": {"address": {"type": "string"}, "paymentCred": {"type": "string"}}};
    "get_address_utxos": onchain::AddressUtxosRequest => services::onchain::address_utxos,
        "Get current UTxOs for an address or payment credential.",
        {"type": "object", "properties": {"address": {"type": "string"}, "paymentCred": {"type": "string"}, "page": {"type": "integer", "minimum": 1, "default": 1}, "perPage": {"type": "integer", "minimum": 1, "maximum": 100, "default": 100}}};
    "get_transaction_utxos": onchain::TransactionUtxosRequest => services::onchain::transaction_utxos,
        "Get the UTxOs of a specific transaction.",
        {"type": "object", "properties": {"hash": {"type": "string"}}, "required": ["hash"]};

    // ---- Wallet tools ----
    "get_wallet_portfolio_positions": wallet::WalletPortfolioRequest => services::wallet::portfolio_positions,
        "Get current wallet positions: tokens, NFTs and LP farms.",
        {"type": "object", "properties": {"address": {"type": "string"}}, "required": ["address"]};
    "get_wallet_trades_tokens": wallet::WalletTokenTradesRequest => services::wallet::trades_tokens,
        "Get token trade history for a wallet, optionally filtered by token.",
        {"type": "object", "properties": {"address": {"type": "string"}, "unit": {"type": "string"}, "page": {"type": "integer", "minimum": 1, "default": 1}, "perPage": {"type": "integer", "minimum": 1, "maximum": 100, "default": 100}}, "required": ["address"]};
    "get_wallet_value_trended": wallet::WalletValueTrendedRequest => services::wallet::value_trended,
        "Get historical wallet value in 4-hour intervals.",
        {"type": "object", "properties": {"address": {"type": "string"}, "timeframe": {"type": "string", "enum": ["24h", "7d", "30d", "90d", "180d", "1y", "all"], "default": "30d"}, "quote": {"type": "string", "enum": ["ADA", "USD", "EUR", "ETH", "BTC"], "default": "ADA"}}, "required": ["address"]};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tool_names_are_unique() {
        let specs = tool_specs();
        let names: HashSet<&str> = specs.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), specs.len());
    }

    #[test]
    fn every_tool_advertises_an_object_schema() {
        for spec in tool_specs() {
            assert_eq!(
                spec.input_schema["type"], "object",
                "{} schema is not an object",
                spec.name
            );
            assert!(
                spec.input_schema.get("properties").is_some(),
                "{} schema has no properties",
                spec.name
            );
            assert!(!spec.description.is_empty(), "{} has no description", spec.name);
        }
    }

    #[test]
    fn registry_covers_all_six_endpoint_families() {
        assert!(contains("get_token_mcap"));
        assert!(contains("get_nft_collection_stats"));
        assert!(contains("get_market_stats"));
        assert!(contains("get_integration_pair"));
        assert!(contains("get_address_utxos"));
        assert!(contains("get_wallet_value_trended"));
        assert!(!contains("get_balance"));
    }
}
