//! Request/response shapes for the /integration endpoint family.
//!
//! Single entities arrive wrapped (`{"asset": {...}}`, `{"block": {...}}`)
//! per the DEXScreener-style integration contract; the response types
//! mirror that wrapper.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::taptools::client::Query;
use crate::taptools::models::common::{default_page, default_per_page_100};

// ---- /integration/asset ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationAssetRequest {
    pub id: String,
}

impl IntegrationAssetRequest {
    pub fn query(&self) -> Query {
        vec![("id", self.id.clone())]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationAsset {
    pub circulating_supply: f64,
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub total_supply: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationAssetResponse {
    pub asset: IntegrationAsset,
}

// ---- /integration/block ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_block_selector"))]
pub struct IntegrationBlockRequest {
    pub number: Option<u64>,
    pub timestamp: Option<i64>,
}

impl IntegrationBlockRequest {
    pub fn query(&self) -> Query {
        let mut q: Query = Vec::new();
        if let Some(number) = self.number {
            q.push(("number", number.to_string()));
        }
        if let Some(timestamp) = self.timestamp {
            q.push(("timestamp", timestamp.to_string()));
        }
        q
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationBlock {
    pub block_number: u64,
    pub block_timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationBlockResponse {
    pub block: IntegrationBlock,
}

// ---- /integration/events ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationEventsRequest {
    pub from_block: u64,
    pub to_block: u64,
    #[serde(default = "default_events_limit")]
    #[validate(range(min = 1, max = 1000))]
    pub limit: u32,
}

fn default_events_limit() -> u32 {
    1000
}

impl IntegrationEventsRequest {
    pub fn query(&self) -> Query {
        vec![
            ("fromBlock", self.from_block.to_string()),
            ("toBlock", self.to_block.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationEvent {
    pub amount0: String,
    pub amount1: String,
    pub asset0_in: String,
    pub asset0_out: String,
    pub asset1_in: String,
    pub asset1_out: String,
    pub block: IntegrationBlock,
    pub event_index: u64,
    pub event_type: String,
    pub maker: String,
    pub pair_id: String,
    pub reserves: BTreeMap<String, String>,
    pub txn_id: String,
    pub txn_index: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationEventsResponse {
    pub events: Vec<IntegrationEvent>,
}

// ---- /integration/exchange ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationExchangeRequest {
    pub id: String,
}

impl IntegrationExchangeRequest {
    pub fn query(&self) -> Query {
        vec![("id", self.id.clone())]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationExchange {
    pub factory_address: String,
    pub logo_url: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationExchangeResponse {
    pub exchange: IntegrationExchange,
}

// ---- /integration/latest-block ----

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct IntegrationLatestBlockRequest {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationLatestBlockResponse {
    pub block: IntegrationBlock,
}

// ---- /integration/pair ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationPairRequest {
    pub id: String,
}

impl IntegrationPairRequest {
    pub fn query(&self) -> Query {
        vec![("id", self.id.clone())]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationPair {
    pub asset0_id: String,
    pub asset1_id: String,
    pub created_at_block_number: u64,
    pub created_at_block_timestamp: i64,
    pub created_at_txn_id: String,
    pub factory_address: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationPairResponse {
    pub pair: IntegrationPair,
}

// ---- /integration/policy/assets ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationPolicyAssetsRequest {
    pub id: String,
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,
    #[serde(default = "default_per_page_100")]
    #[validate(range(min = 1, max = 100))]
    pub per_page: u32,
}

impl IntegrationPolicyAssetsRequest {
    pub fn query(&self) -> Query {
        vec![
            ("id", self.id.clone()),
            ("page", self.page.to_string()),
            ("perPage", self.per_page.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyAsset {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyAssets {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub assets: Vec<PolicyAsset>,
    pub total_assets: u64,
}

fn validate_block_selector(req: &IntegrationBlockRequest) -> Result<(), ValidationError> {
    if req.number.is_none() && req.timestamp.is_none() {
        let mut err = ValidationError::new("missing_selector");
        err.message = Some("one of 'number' or 'timestamp' is required".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn block_requires_number_or_timestamp() {
        let req: IntegrationBlockRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.validate().is_err());

        let req: IntegrationBlockRequest =
            serde_json::from_value(json!({ "number": 10937538 })).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.query(), vec![("number", "10937538".to_string())]);
    }

    #[test]
    fn events_limit_defaults_and_bounds() {
        let req: IntegrationEventsRequest =
            serde_json::from_value(json!({ "fromBlock": 1, "toBlock": 5 })).unwrap();
        assert_eq!(req.limit, 1000);
        assert!(req.validate().is_ok());

        let req: IntegrationEventsRequest =
            serde_json::from_value(json!({ "fromBlock": 1, "toBlock": 5, "limit": 1001 }))
                .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn wrapped_asset_response_parses() {
        let resp: IntegrationAssetResponse = serde_json::from_value(json!({
            "asset": {
                "circulatingSupply": 1500000,
                "id": "b46b12f0",
                "name": "snek coin",
                "symbol": "SNEK",
                "totalSupply": 2000000
            }
        }))
        .unwrap();
        assert_eq!(resp.asset.symbol, "SNEK");
    }
}
