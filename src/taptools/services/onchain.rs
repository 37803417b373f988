//! Raw onchain endpoints.

use crate::error::TapToolsError;
use crate::taptools::client::TapToolsClient;
use crate::taptools::models::onchain::*;

pub async fn asset_supply(
    api: &TapToolsClient,
    req: AssetSupplyRequest,
) -> Result<AssetSupply, TapToolsError> {
    api.get("/asset/supply", &req.query()).await
}

pub async fn address_info(
    api: &TapToolsClient,
    req: AddressInfoRequest,
) -> Result<AddressInfo, TapToolsError> {
    api.get("/address/info", &req.query()).await
}

pub async fn address_utxos(
    api: &TapToolsClient,
    req: AddressUtxosRequest,
) -> Result<Vec<Utxo>, TapToolsError> {
    api.get("/address/utxos", &req.query()).await
}

pub async fn transaction_utxos(
    api: &TapToolsClient,
    req: TransactionUtxosRequest,
) -> Result<TransactionUtxos, TapToolsError> {
    api.get("/transaction/utxos", &req.query()).await
}
