//! NFT endpoints.

use crate::error::TapToolsError;
use crate::taptools::client::TapToolsClient;
use crate::taptools::models::nfts::*;

pub async fn asset_sales(
    api: &TapToolsClient,
    req: NftAssetSalesRequest,
) -> Result<Vec<NftSale>, TapToolsError> {
    api.get("/nft/asset/sales", &req.query()).await
}

pub async fn asset_stats(
    api: &TapToolsClient,
    req: NftAssetStatsRequest,
) -> Result<NftAssetStats, TapToolsError> {
    api.get("/nft/asset/stats", &req.query()).await
}

pub async fn asset_traits(
    api: &TapToolsClient,
    req: NftAssetTraitsRequest,
) -> Result<NftAssetTraits, TapToolsError> {
    api.get("/nft/asset/traits", &req.query()).await
}

pub async fn collection_assets(
    api: &TapToolsClient,
    req: NftCollectionAssetsRequest,
) -> Result<Vec<NftCollectionAsset>, TapToolsError> {
    api.get("/nft/collection/assets", &req.query()).await
}

pub async fn collection_holders_distribution(
    api: &TapToolsClient,
    req: NftHoldersDistributionRequest,
) -> Result<NftHoldersDistribution, TapToolsError> {
    api.get("/nft/collection/holders/distribution", &req.query())
        .await
}

pub async fn collection_holders_top(
    api: &TapToolsClient,
    req: NftTopHoldersRequest,
) -> Result<Vec<NftHolder>, TapToolsError> {
    api.get("/nft/collection/holders/top", &req.query()).await
}

pub async fn collection_holders_trended(
    api: &TapToolsClient,
    req: NftHoldersTrendedRequest,
) -> Result<Vec<NftHolderTrend>, TapToolsError> {
    api.get("/nft/collection/holders/trended", &req.query())
        .await
}

pub async fn collection_info(
    api: &TapToolsClient,
    req: NftCollectionInfoRequest,
) -> Result<NftCollectionInfo, TapToolsError> {
    api.get("/nft/collection/info", &req.query()).await
}

pub async fn collection_listings(
    api: &TapToolsClient,
    req: NftCollectionListingsRequest,
) -> Result<NftCollectionListings, TapToolsError> {
    api.get("/nft/collection/listings", &req.query()).await
}

pub async fn collection_listings_depth(
    api: &TapToolsClient,
    req: NftListingsDepthRequest,
) -> Result<Vec<ListingDepth>, TapToolsError> {
    api.get("/nft/collection/listings/depth", &req.query()).await
}

pub async fn collection_listings_individual(
    api: &TapToolsClient,
    req: NftIndividualListingsRequest,
) -> Result<Vec<NftListing>, TapToolsError> {
    api.get("/nft/collection/listings/individual", &req.query())
        .await
}

pub async fn collection_listings_trended(
    api: &TapToolsClient,
    req: NftListingsTrendedRequest,
) -> Result<Vec<ListingTrend>, TapToolsError> {
    api.get("/nft/collection/listings/trended", &req.query())
        .await
}

pub async fn collection_ohlcv(
    api: &TapToolsClient,
    req: NftCollectionOhlcvRequest,
) -> Result<Vec<NftOhlcv>, TapToolsError> {
    api.get("/nft/collection/ohlcv", &req.query()).await
}

pub async fn collection_stats(
    api: &TapToolsClient,
    req: NftCollectionStatsRequest,
) -> Result<NftCollectionStats, TapToolsError> {
    api.get("/nft/collection/stats", &req.query()).await
}

pub async fn collection_stats_extended(
    api: &TapToolsClient,
    req: NftCollectionStatsExtendedRequest,
) -> Result<NftCollectionStatsExtended, TapToolsError> {
    api.get("/nft/collection/stats/extended", &req.query()).await
}

pub async fn collection_trades(
    api: &TapToolsClient,
    req: NftCollectionTradesRequest,
) -> Result<Vec<NftTrade>, TapToolsError> {
    api.get("/nft/collection/trades", &req.query()).await
}

pub async fn collection_trades_stats(
    api: &TapToolsClient,
    req: NftTradeStatsRequest,
) -> Result<NftTradeStats, TapToolsError> {
    api.get("/nft/collection/trades/stats", &req.query()).await
}

pub async fn collection_traits_price(
    api: &TapToolsClient,
    req: NftTraitPricesRequest,
) -> Result<NftTraitPrices, TapToolsError> {
    api.get("/nft/collection/traits/price", &req.query()).await
}

pub async fn collection_traits_rarity(
    api: &TapToolsClient,
    req: NftTraitRarityRequest,
) -> Result<NftTraitRarity, TapToolsError> {
    api.get("/nft/collection/traits/rarity", &req.query()).await
}

pub async fn collection_traits_rarity_rank(
    api: &TapToolsClient,
    req: NftTraitRarityRankRequest,
) -> Result<NftRarityRank, TapToolsError> {
    api.get("/nft/collection/traits/rarity/rank", &req.query())
        .await
}

pub async fn collection_volume_trended(
    api: &TapToolsClient,
    req: NftVolumeTrendedRequest,
) -> Result<Vec<NftVolumeTrend>, TapToolsError> {
    api.get("/nft/collection/volume/trended", &req.query()).await
}

pub async fn market_stats(
    api: &TapToolsClient,
    req: NftMarketStatsRequest,
) -> Result<NftMarketStats, TapToolsError> {
    api.get("/nft/market/stats", &req.query()).await
}

pub async fn market_stats_extended(
    api: &TapToolsClient,
    req: NftMarketStatsExtendedRequest,
) -> Result<NftMarketStatsExtended, TapToolsError> {
    api.get("/nft/market/stats/extended", &req.query()).await
}

pub async fn market_volume_trended(
    api: &TapToolsClient,
    req: NftMarketVolumeTrendedRequest,
) -> Result<Vec<MarketVolumeTrend>, TapToolsError> {
    api.get("/nft/market/volume/trended", &req.query()).await
}

pub async fn marketplace_stats(
    api: &TapToolsClient,
    req: NftMarketplaceStatsRequest,
) -> Result<Vec<NftMarketplaceStats>, TapToolsError> {
    api.get("/nft/marketplace/stats", &req.query()).await
}

pub async fn top_timeframe(
    api: &TapToolsClient,
    req: NftTopTimeframeRequest,
) -> Result<Vec<NftTopRanking>, TapToolsError> {
    api.get("/nft/top/timeframe", &req.query()).await
}

pub async fn top_volume(
    api: &TapToolsClient,
    req: NftTopVolumeRequest,
) -> Result<Vec<NftTopVolume>, TapToolsError> {
    api.get("/nft/top/volume", &req.query()).await
}

pub async fn top_volume_extended(
    api: &TapToolsClient,
    req: NftTopVolumeExtendedRequest,
) -> Result<Vec<NftTopVolumeExtended>, TapToolsError> {
    api.get("/nft/top/volume/extended", &req.query()).await
}
