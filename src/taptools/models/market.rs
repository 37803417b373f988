//! Request/response shapes for the aggregated market endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::taptools::client::Query;
use crate::taptools::models::common::QuoteCurrency;

fn default_quote() -> QuoteCurrency {
    QuoteCurrency::Ada
}

// ---- /market/stats ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MarketStatsRequest {
    #[serde(default = "default_quote")]
    pub quote: QuoteCurrency,
}

impl MarketStatsRequest {
    pub fn query(&self) -> Query {
        vec![("quote", self.quote.as_str().to_string())]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketStats {
    pub active_addresses: u64,
    pub dex_volume: f64,
}

// ---- /metrics ----

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MarketMetricsRequest {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsCall {
    pub calls: u64,
    pub time: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quote_defaults_to_ada() {
        let req: MarketStatsRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(req.query(), vec![("quote", "ADA".to_string())]);
    }

    #[test]
    fn quote_outside_the_set_is_rejected() {
        assert!(serde_json::from_value::<MarketStatsRequest>(json!({ "quote": "JPY" })).is_err());
    }
}
