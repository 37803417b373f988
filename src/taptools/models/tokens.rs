//! Request/response shapes for the /token endpoint family.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::taptools::client::Query;
use crate::taptools::models::common::{
    default_page, default_per_page_10, default_per_page_20, default_per_page_100, flag, Indicator,
    Interval, QuoteCurrency, SortOrder, StatsTimeframe, Timeframe,
};

/// Sort field for /token/trades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSort {
    Amount,
    Time,
}

impl TradeSort {
    pub fn as_str(self) -> &'static str {
        match self {
            TradeSort::Amount => "amount",
            TradeSort::Time => "time",
        }
    }
}

/// Sort field for the P2P debt endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebtSort {
    Time,
    Expiration,
}

impl DebtSort {
    pub fn as_str(self) -> &'static str {
        match self {
            DebtSort::Time => "time",
            DebtSort::Expiration => "expiration",
        }
    }
}

/// Ranking type for /token/top/mcap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum McapRankType {
    Mcap,
    Fdv,
}

impl McapRankType {
    pub fn as_str(self) -> &'static str {
        match self {
            McapRankType::Mcap => "mcap",
            McapRankType::Fdv => "fdv",
        }
    }
}

/// Timeframes accepted by /token/prices/chg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeTimeframe {
    #[serde(rename = "5m")]
    Minutes5,
    #[serde(rename = "1h")]
    Hours1,
    #[serde(rename = "4h")]
    Hours4,
    #[serde(rename = "6h")]
    Hours6,
    #[serde(rename = "24h")]
    Hours24,
    #[serde(rename = "7d")]
    Days7,
    #[serde(rename = "30d")]
    Days30,
    #[serde(rename = "60d")]
    Days60,
    #[serde(rename = "90d")]
    Days90,
}

impl ChangeTimeframe {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeTimeframe::Minutes5 => "5m",
            ChangeTimeframe::Hours1 => "1h",
            ChangeTimeframe::Hours4 => "4h",
            ChangeTimeframe::Hours6 => "6h",
            ChangeTimeframe::Hours24 => "24h",
            ChangeTimeframe::Days7 => "7d",
            ChangeTimeframe::Days30 => "30d",
            ChangeTimeframe::Days60 => "60d",
            ChangeTimeframe::Days90 => "90d",
        }
    }
}

fn default_order_desc() -> SortOrder {
    SortOrder::Desc
}

fn default_stats_timeframe() -> StatsTimeframe {
    StatsTimeframe::Hours24
}

fn default_trade_timeframe() -> Timeframe {
    Timeframe::Days30
}

fn default_trade_sort() -> TradeSort {
    TradeSort::Amount
}

fn default_debt_sort() -> DebtSort {
    DebtSort::Time
}

fn default_debt_include() -> String {
    "collateral,debt".to_string()
}

fn default_mcap_rank() -> McapRankType {
    McapRankType::Mcap
}

// ---- /token/mcap ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TokenMcapRequest {
    pub unit: String,
}

impl TokenMcapRequest {
    pub fn query(&self) -> Query {
        vec![("unit", self.unit.clone())]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMcap {
    pub circ_supply: f64,
    pub fdv: f64,
    pub mcap: f64,
    pub price: f64,
    pub ticker: String,
    pub total_supply: f64,
}

// ---- /token/holders ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TokenHoldersRequest {
    pub unit: String,
}

impl TokenHoldersRequest {
    pub fn query(&self) -> Query {
        vec![("unit", self.unit.clone())]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenHolders {
    pub holders: u64,
}

// ---- /token/holders/top ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TokenTopHoldersRequest {
    pub unit: String,
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,
    #[serde(default = "default_per_page_20")]
    #[validate(range(min = 1, max = 100))]
    pub per_page: u32,
}

impl TokenTopHoldersRequest {
    pub fn query(&self) -> Query {
        vec![
            ("unit", self.unit.clone()),
            ("page", self.page.to_string()),
            ("perPage", self.per_page.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenHolder {
    pub address: String,
    pub amount: f64,
}

// ---- /token/indicators ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TokenIndicatorsRequest {
    pub unit: String,
    pub interval: Interval,
    #[validate(range(min = 1, max = 1000))]
    pub items: Option<u32>,
    pub indicator: Option<Indicator>,
    pub quote: Option<QuoteCurrency>,
}

impl TokenIndicatorsRequest {
    pub fn query(&self) -> Query {
        let mut q: Query = vec![
            ("unit", self.unit.clone()),
            ("interval", self.interval.as_str().to_string()),
        ];
        if let Some(items) = self.items {
            q.push(("items", items.to_string()));
        }
        if let Some(indicator) = self.indicator {
            q.push(("indicator", indicator.as_str().to_string()));
        }
        if let Some(quote) = self.quote {
            q.push(("quote", quote.as_str().to_string()));
        }
        q
    }
}

// ---- /token/links ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TokenLinksRequest {
    pub unit: String,
}

impl TokenLinksRequest {
    pub fn query(&self) -> Query {
        vec![("unit", self.unit.clone())]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenLinks {
    pub description: Option<String>,
    pub discord: Option<String>,
    pub email: Option<String>,
    pub facebook: Option<String>,
    pub github: Option<String>,
    pub instagram: Option<String>,
    pub medium: Option<String>,
    pub reddit: Option<String>,
    pub telegram: Option<String>,
    pub twitter: Option<String>,
    pub website: Option<String>,
    pub youtube: Option<String>,
}

// ---- /token/ohlcv ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_token_selector"))]
pub struct TokenOhlcvRequest {
    pub unit: Option<String>,
    pub onchain_id: Option<String>,
    pub interval: Interval,
    #[validate(range(min = 1))]
    pub num_intervals: Option<u32>,
}

impl TokenOhlcvRequest {
    pub fn query(&self) -> Query {
        let mut q: Query = Vec::new();
        if let Some(unit) = &self.unit {
            q.push(("unit", unit.clone()));
        }
        if let Some(id) = &self.onchain_id {
            q.push(("onchainId", id.clone()));
        }
        q.push(("interval", self.interval.as_str().to_string()));
        if let Some(n) = self.num_intervals {
            q.push(("numIntervals", n.to_string()));
        }
        q
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenOhlcv {
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub time: i64,
    pub volume: f64,
}

// ---- /token/pools ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_pools_selector"))]
pub struct TokenPoolsRequest {
    pub unit: Option<String>,
    pub onchain_id: Option<String>,
    #[serde(default)]
    pub ada_only: bool,
}

impl TokenPoolsRequest {
    pub fn query(&self) -> Query {
        let mut q: Query = Vec::new();
        if let Some(unit) = &self.unit {
            q.push(("unit", unit.clone()));
        }
        if let Some(id) = &self.onchain_id {
            q.push(("onchainId", id.clone()));
        }
        q.push(("adaOnly", flag(self.ada_only)));
        q
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPool {
    pub exchange: String,
    pub lp_token_unit: String,
    pub onchain_id: String,
    pub token_a: String,
    pub token_a_locked: f64,
    pub token_a_ticker: String,
    pub token_b: String,
    pub token_b_locked: f64,
    pub token_b_ticker: String,
}

// ---- POST /token/prices ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TokenPricesRequest {
    /// Token units to price; the upstream caps the batch at 100 entries.
    #[validate(length(min = 1, max = 100))]
    pub units: Vec<String>,
}

pub type TokenPrices = HashMap<String, f64>;

// ---- /token/prices/chg ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TokenPriceChangesRequest {
    pub unit: String,
    pub timeframes: Option<Vec<ChangeTimeframe>>,
}

impl TokenPriceChangesRequest {
    pub fn query(&self) -> Query {
        let mut q: Query = vec![("unit", self.unit.clone())];
        if let Some(timeframes) = &self.timeframes {
            let joined = timeframes
                .iter()
                .map(|tf| tf.as_str())
                .collect::<Vec<_>>()
                .join(",");
            q.push(("timeframes", joined));
        }
        q
    }
}

pub type TokenPriceChanges = HashMap<String, f64>;

// ---- /token/quote ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TokenQuoteRequest {
    pub quote: Option<QuoteCurrency>,
}

impl TokenQuoteRequest {
    pub fn query(&self) -> Query {
        match self.quote {
            Some(quote) => vec![("quote", quote.as_str().to_string())],
            None => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenQuote {
    pub price: f64,
}

// ---- /token/quote/available ----

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TokenQuoteAvailableRequest {}

/// Probe result for the connection-check tool; assembled locally from the
/// quote-currency listing, never fetched as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionStatus {
    pub success: bool,
    pub available_quotes: Vec<String>,
}

// ---- /token/top/liquidity ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TokenTopLiquidityRequest {
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,
    #[serde(default = "default_per_page_10")]
    #[validate(range(min = 1, max = 100))]
    pub per_page: u32,
}

impl TokenTopLiquidityRequest {
    pub fn query(&self) -> Query {
        vec![
            ("page", self.page.to_string()),
            ("perPage", self.per_page.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenLiquidity {
    pub liquidity: f64,
    pub price: f64,
    pub ticker: String,
    pub unit: String,
}

// ---- /token/top/mcap ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TokenTopMcapRequest {
    #[serde(rename = "type", default = "default_mcap_rank")]
    pub kind: McapRankType,
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,
    #[serde(default = "default_per_page_20")]
    #[validate(range(min = 1, max = 100))]
    pub per_page: u32,
}

impl TokenTopMcapRequest {
    pub fn query(&self) -> Query {
        vec![
            ("type", self.kind.as_str().to_string()),
            ("page", self.page.to_string()),
            ("perPage", self.per_page.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTopMcap {
    pub circ_supply: f64,
    pub fdv: f64,
    pub mcap: f64,
    pub price: f64,
    pub ticker: String,
    pub total_supply: f64,
    pub unit: String,
}

// ---- /token/top/volume ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TokenTopVolumeRequest {
    #[serde(default = "default_stats_timeframe")]
    pub timeframe: StatsTimeframe,
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,
    #[serde(default = "default_per_page_20")]
    #[validate(range(min = 1, max = 100))]
    pub per_page: u32,
}

impl TokenTopVolumeRequest {
    pub fn query(&self) -> Query {
        vec![
            ("timeframe", self.timeframe.as_str().to_string()),
            ("page", self.page.to_string()),
            ("perPage", self.per_page.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenTopVolume {
    pub price: f64,
    pub ticker: String,
    pub unit: String,
    pub volume: f64,
}

// ---- /token/trades ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TokenTradesRequest {
    #[serde(default = "default_trade_timeframe")]
    pub timeframe: Timeframe,
    #[serde(default = "default_trade_sort")]
    pub sort_by: TradeSort,
    #[serde(default = "default_order_desc")]
    pub order: SortOrder,
    pub unit: Option<String>,
    pub min_amount: Option<u64>,
    pub from_ts: Option<i64>,
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,
    #[serde(default = "default_per_page_100")]
    #[validate(range(min = 1, max = 100))]
    pub per_page: u32,
}

impl TokenTradesRequest {
    pub fn query(&self) -> Query {
        let mut q: Query = vec![
            ("timeframe", self.timeframe.as_str().to_string()),
            ("sortBy", self.sort_by.as_str().to_string()),
            ("order", self.order.as_str().to_string()),
        ];
        if let Some(unit) = &self.unit {
            q.push(("unit", unit.clone()));
        }
        if let Some(min) = self.min_amount {
            q.push(("minAmount", min.to_string()));
        }
        if let Some(from) = self.from_ts {
            q.push(("fromTs", from.to_string()));
        }
        q.push(("page", self.page.to_string()));
        q.push(("perPage", self.per_page.to_string()));
        q
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTrade {
    pub action: String,
    pub address: String,
    pub exchange: String,
    pub hash: String,
    pub lp_token_unit: String,
    pub price: f64,
    pub time: i64,
    pub token_a: String,
    pub token_a_amount: f64,
    pub token_a_name: String,
    pub token_b: String,
    pub token_b_amount: f64,
    pub token_b_name: String,
}

// ---- /token/trading/stats ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TokenTradingStatsRequest {
    pub unit: String,
    #[serde(default = "default_stats_timeframe")]
    pub timeframe: StatsTimeframe,
}

impl TokenTradingStatsRequest {
    pub fn query(&self) -> Query {
        vec![
            ("unit", self.unit.clone()),
            ("timeframe", self.timeframe.as_str().to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTradingStats {
    pub buy_volume: f64,
    pub buyers: u64,
    pub buys: u64,
    pub sell_volume: f64,
    pub sellers: u64,
    pub sells: u64,
}

// ---- /token/debt/loans and /token/debt/offers ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TokenDebtRequest {
    pub unit: String,
    #[serde(default = "default_debt_include")]
    pub include: String,
    #[serde(default = "default_debt_sort")]
    pub sort_by: DebtSort,
    #[serde(default = "default_order_desc")]
    pub order: SortOrder,
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,
    #[serde(default = "default_per_page_100")]
    #[validate(range(min = 1, max = 100))]
    pub per_page: u32,
}

impl TokenDebtRequest {
    pub fn query(&self) -> Query {
        vec![
            ("unit", self.unit.clone()),
            ("include", self.include.clone()),
            ("sortBy", self.sort_by.as_str().to_string()),
            ("order", self.order.as_str().to_string()),
            ("page", self.page.to_string()),
            ("perPage", self.per_page.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDebtLoan {
    pub collateral_amount: f64,
    pub collateral_token: String,
    pub collateral_value: f64,
    pub debt_amount: f64,
    pub debt_token: String,
    pub debt_value: f64,
    pub expiration: i64,
    pub hash: String,
    pub health: f64,
    pub interest_amount: f64,
    pub interest_token: String,
    pub interest_value: f64,
    pub protocol: String,
    pub time: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDebtOffer {
    pub collateral_amount: f64,
    pub collateral_token: String,
    pub collateral_value: f64,
    pub debt_amount: f64,
    pub debt_token: String,
    pub debt_value: f64,
    pub duration: i64,
    pub hash: String,
    pub health: f64,
    pub interest_amount: f64,
    pub interest_token: String,
    pub interest_value: f64,
    pub protocol: String,
    pub time: i64,
}

fn validate_token_selector(req: &TokenOhlcvRequest) -> Result<(), ValidationError> {
    if req.unit.is_none() && req.onchain_id.is_none() {
        let mut err = ValidationError::new("missing_selector");
        err.message = Some("one of 'unit' or 'onchainId' is required".into());
        return Err(err);
    }
    Ok(())
}

fn validate_pools_selector(req: &TokenPoolsRequest) -> Result<(), ValidationError> {
    if req.unit.is_none() && req.onchain_id.is_none() {
        let mut err = ValidationError::new("missing_selector");
        err.message = Some("one of 'unit' or 'onchainId' is required".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn holders_top_defaults_are_applied_at_construction() {
        let req: TokenTopHoldersRequest =
            serde_json::from_value(json!({ "unit": "token1" })).unwrap();
        assert_eq!(req.page, 1);
        assert_eq!(req.per_page, 20);
        let query = req.query();
        assert!(query.contains(&("page", "1".to_string())));
        assert!(query.contains(&("perPage", "20".to_string())));
    }

    #[test]
    fn per_page_above_limit_fails_validation() {
        let req: TokenTopHoldersRequest =
            serde_json::from_value(json!({ "unit": "token1", "perPage": 101 })).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn page_zero_fails_validation() {
        let req: TokenTradesRequest =
            serde_json::from_value(json!({ "page": 0 })).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn trades_rejects_unknown_order() {
        let result =
            serde_json::from_value::<TokenTradesRequest>(json!({ "order": "sideways" }));
        assert!(result.is_err());
    }

    #[test]
    fn trades_omits_unset_optional_parameters() {
        let req: TokenTradesRequest = serde_json::from_value(json!({})).unwrap();
        let query = req.query();
        let names: Vec<&str> = query.iter().map(|(name, _)| *name).collect();
        assert!(!names.contains(&"unit"));
        assert!(!names.contains(&"minAmount"));
        assert!(!names.contains(&"fromTs"));
        assert!(names.contains(&"timeframe"));
        assert_eq!(query[0], ("timeframe", "30d".to_string()));
        assert_eq!(query[1], ("sortBy", "amount".to_string()));
        assert_eq!(query[2], ("order", "desc".to_string()));
    }

    #[test]
    fn ohlcv_requires_unit_or_onchain_id() {
        let req: TokenOhlcvRequest =
            serde_json::from_value(json!({ "interval": "1d" })).unwrap();
        assert!(req.validate().is_err());

        let req: TokenOhlcvRequest =
            serde_json::from_value(json!({ "interval": "1d", "unit": "token1" })).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn pools_flag_serializes_as_literal_zero_or_one() {
        let req: TokenPoolsRequest =
            serde_json::from_value(json!({ "unit": "token1", "adaOnly": true })).unwrap();
        assert!(req.query().contains(&("adaOnly", "1".to_string())));

        let req: TokenPoolsRequest =
            serde_json::from_value(json!({ "unit": "token1" })).unwrap();
        assert!(req.query().contains(&("adaOnly", "0".to_string())));
    }

    #[test]
    fn prices_batch_is_bounded_at_100_units() {
        let req: TokenPricesRequest =
            serde_json::from_value(json!({ "units": ["a"] })).unwrap();
        assert!(req.validate().is_ok());

        let too_many: Vec<String> = (0..101).map(|i| format!("unit{i}")).collect();
        let req: TokenPricesRequest =
            serde_json::from_value(json!({ "units": too_many })).unwrap();
        assert!(req.validate().is_err());

        let req: TokenPricesRequest =
            serde_json::from_value(json!({ "units": [] })).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn price_change_timeframes_join_with_commas() {
        let req: TokenPriceChangesRequest = serde_json::from_value(
            json!({ "unit": "token1", "timeframes": ["5m", "1h", "24h"] }),
        )
        .unwrap();
        assert!(req
            .query()
            .contains(&("timeframes", "5m,1h,24h".to_string())));
    }

    #[test]
    fn top_mcap_uses_the_documented_type_parameter() {
        let req: TokenTopMcapRequest =
            serde_json::from_value(json!({ "type": "fdv" })).unwrap();
        assert_eq!(req.query()[0], ("type", "fdv".to_string()));

        let req: TokenTopMcapRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(req.query()[0], ("type", "mcap".to_string()));
    }

    #[test]
    fn mcap_response_requires_every_field() {
        let missing_price = json!({
            "ticker": "ADA",
            "circSupply": 0,
            "totalSupply": 45000000000u64,
            "mcap": 45000000000u64,
            "fdv": 45000000000u64
        });
        assert!(serde_json::from_value::<TokenMcap>(missing_price).is_err());
    }
}
