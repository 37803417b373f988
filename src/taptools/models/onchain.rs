//! Request/response shapes for the raw onchain endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::taptools::client::Query;
use crate::taptools::models::common::{default_page, default_per_page_100};

// ---- /asset/supply ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssetSupplyRequest {
    pub unit: String,
}

impl AssetSupplyRequest {
    pub fn query(&self) -> Query {
        vec![("unit", self.unit.clone())]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSupply {
    pub supply: u64,
}

// ---- /address/info ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_address_selector"))]
pub struct AddressInfoRequest {
    pub address: Option<String>,
    pub payment_cred: Option<String>,
}

impl AddressInfoRequest {
    pub fn query(&self) -> Query {
        let mut q: Query = Vec::new();
        if let Some(address) = &self.address {
            q.push(("address", address.clone()));
        }
        if let Some(cred) = &self.payment_cred {
            q.push(("paymentCred", cred.clone()));
        }
        q
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInfo {
    pub address: String,
    /// Multi-asset balances; the upstream does not pin this shape.
    pub assets: Vec<Value>,
    pub lovelace: String,
    pub payment_cred: String,
    pub stake_address: String,
}

// ---- /address/utxos ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_utxos_selector"))]
pub struct AddressUtxosRequest {
    pub address: Option<String>,
    pub payment_cred: Option<String>,
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,
    #[serde(default = "default_per_page_100")]
    #[validate(range(min = 1, max = 100))]
    pub per_page: u32,
}

impl AddressUtxosRequest {
    pub fn query(&self) -> Query {
        let mut q: Query = Vec::new();
        if let Some(address) = &self.address {
            q.push(("address", address.clone()));
        }
        if let Some(cred) = &self.payment_cred {
            q.push(("paymentCred", cred.clone()));
        }
        q.push(("page", self.page.to_string()));
        q.push(("perPage", self.per_page.to_string()));
        q
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utxo {
    pub assets: Vec<Value>,
    pub hash: String,
    pub index: u32,
    pub lovelace: String,
}

// ---- /transaction/utxos ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUtxosRequest {
    pub hash: String,
}

impl TransactionUtxosRequest {
    pub fn query(&self) -> Query {
        vec![("hash", self.hash.clone())]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionUtxos {
    pub hash: String,
    pub inputs: Vec<Value>,
    pub outputs: Vec<Value>,
}

fn validate_address_selector(req: &AddressInfoRequest) -> Result<(), ValidationError> {
    if req.address.is_none() && req.payment_cred.is_none() {
        let mut err = ValidationError::new("missing_selector");
        err.message = Some("one of 'address' or 'paymentCred' is required".into());
        return Err(err);
    }
    Ok(())
}

fn validate_utxos_selector(req: &AddressUtxosRequest) -> Result<(), ValidationError> {
    if req.address.is_none() && req.payment_cred.is_none() {
        let mut err = ValidationError::new("missing_selector");
        err.message = Some("one of 'address' or 'paymentCred' is required".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn address_info_requires_a_selector() {
        let req: AddressInfoRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.validate().is_err());

        let req: AddressInfoRequest =
            serde_json::from_value(json!({ "paymentCred": "cred1" })).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.query(), vec![("paymentCred", "cred1".to_string())]);
    }

    #[test]
    fn utxo_response_requires_all_fields() {
        let missing_index = json!({
            "assets": [],
            "hash": "505cb5a5",
            "lovelace": "1000000"
        });
        assert!(serde_json::from_value::<Utxo>(missing_index).is_err());
    }
}
