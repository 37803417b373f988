//! Request/response shapes for the /wallet endpoint family.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::taptools::client::Query;
use crate::taptools::models::common::{
    default_page, default_per_page_100, QuoteCurrency, Timeframe,
};

fn default_trend_timeframe() -> Timeframe {
    Timeframe::Days30
}

fn default_quote() -> QuoteCurrency {
    QuoteCurrency::Ada
}

// ---- /wallet/portfolio/positions ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WalletPortfolioRequest {
    pub address: String,
}

impl WalletPortfolioRequest {
    pub fn query(&self) -> Query {
        vec![("address", self.address.clone())]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FungibleTokenPosition {
    pub ticker: String,
    pub balance: f64,
    pub unit: String,
    pub fingerprint: String,
    pub price: f64,
    pub ada_value: f64,
    #[serde(rename = "24h")]
    pub change_24h: f64,
    #[serde(rename = "7d")]
    pub change_7d: f64,
    #[serde(rename = "30d")]
    pub change_30d: f64,
    pub liquid_balance: f64,
    pub liquid_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityPosition {
    pub ticker: String,
    pub unit: String,
    #[serde(rename = "amountLP")]
    pub amount_lp: f64,
    pub token_a: String,
    pub token_a_name: String,
    pub token_a_amount: f64,
    pub token_b: String,
    pub token_b_name: String,
    pub token_b_amount: f64,
    pub ada_value: f64,
    pub exchange: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftPosition {
    pub name: String,
    pub policy: String,
    pub balance: u64,
    pub ada_value: f64,
    pub floor_price: f64,
    #[serde(rename = "24h")]
    pub change_24h: f64,
    #[serde(rename = "7d")]
    pub change_7d: f64,
    #[serde(rename = "30d")]
    pub change_30d: f64,
    pub listings: u64,
    pub liquid_value: f64,
    pub holders: u64,
    pub holders_pct_chg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletPortfolioPositions {
    pub ada_balance: f64,
    pub ada_value: f64,
    pub liquid_value: f64,
    #[serde(rename = "numFTs")]
    pub num_fts: u64,
    #[serde(rename = "numNFTs")]
    pub num_nfts: u64,
    pub positions_ft: Vec<FungibleTokenPosition>,
    pub positions_lp: Vec<LiquidityPosition>,
    pub positions_nft: Vec<NftPosition>,
}

// ---- /wallet/trades/tokens ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WalletTokenTradesRequest {
    pub address: String,
    pub unit: Option<String>,
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,
    #[serde(default = "default_per_page_100")]
    #[validate(range(min = 1, max = 100))]
    pub per_page: u32,
}

impl WalletTokenTradesRequest {
    pub fn query(&self) -> Query {
        let mut q: Query = vec![("address", self.address.clone())];
        if let Some(unit) = &self.unit {
            q.push(("unit", unit.clone()));
        }
        q.push(("page", self.page.to_string()));
        q.push(("perPage", self.per_page.to_string()));
        q
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletTokenTrade {
    pub action: String,
    pub time: i64,
    pub token_a: String,
    pub token_a_name: String,
    pub token_a_amount: f64,
    pub token_b: String,
    pub token_b_name: String,
    pub token_b_amount: f64,
}

// ---- /wallet/value/trended ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WalletValueTrendedRequest {
    pub address: String,
    #[serde(default = "default_trend_timeframe")]
    pub timeframe: Timeframe,
    #[serde(default = "default_quote")]
    pub quote: QuoteCurrency,
}

impl WalletValueTrendedRequest {
    pub fn query(&self) -> Query {
        vec![
            ("address", self.address.clone()),
            ("timeframe", self.timeframe.as_str().to_string()),
            ("quote", self.quote.as_str().to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletValueTrend {
    pub time: i64,
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_address_is_a_deserialization_error() {
        assert!(serde_json::from_value::<WalletPortfolioRequest>(json!({})).is_err());
    }

    #[test]
    fn value_trended_defaults() {
        let req: WalletValueTrendedRequest =
            serde_json::from_value(json!({ "address": "addr1xyz" })).unwrap();
        assert_eq!(
            req.query(),
            vec![
                ("address", "addr1xyz".to_string()),
                ("timeframe", "30d".to_string()),
                ("quote", "ADA".to_string()),
            ]
        );
    }

    #[test]
    fn position_change_fields_use_upstream_keys() {
        let position: FungibleTokenPosition = serde_json::from_value(json!({
            "ticker": "TEST1",
            "balance": 200.0,
            "unit": "b46b12f0",
            "fingerprint": "fingerprint1",
            "price": 100.0,
            "adaValue": 10000.0,
            "24h": 0.11,
            "7d": 0.03,
            "30d": -0.32,
            "liquidBalance": 200.0,
            "liquidValue": 10000.0
        }))
        .unwrap();
        assert_eq!(position.change_7d, 0.03);
    }
}
