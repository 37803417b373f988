//! Request/response shapes for the /nft endpoint family.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::taptools::client::Query;
use crate::taptools::models::common::{
    default_page, default_per_page_10, default_per_page_100, default_true, flag, Interval,
    SortOrder, StatsTimeframe, Timeframe,
};
use crate::taptools::models::tokens::TradeSort;

/// Sort field for /nft/collection/assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetSort {
    Price,
    Rank,
}

impl AssetSort {
    pub fn as_str(self) -> &'static str {
        match self {
            AssetSort::Price => "price",
            AssetSort::Rank => "rank",
        }
    }
}

/// Sort field for /nft/collection/listings/individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingSort {
    Price,
    Time,
}

impl ListingSort {
    pub fn as_str(self) -> &'static str {
        match self {
            ListingSort::Price => "price",
            ListingSort::Time => "time",
        }
    }
}

/// Ranking selector for /nft/top/timeframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NftRanking {
    MarketCap,
    Volume,
    Gainers,
    Losers,
}

impl NftRanking {
    pub fn as_str(self) -> &'static str {
        match self {
            NftRanking::MarketCap => "marketCap",
            NftRanking::Volume => "volume",
            NftRanking::Gainers => "gainers",
            NftRanking::Losers => "losers",
        }
    }
}

fn default_order_asc() -> SortOrder {
    SortOrder::Asc
}

fn default_order_desc() -> SortOrder {
    SortOrder::Desc
}

fn default_asset_sort() -> AssetSort {
    AssetSort::Price
}

fn default_listing_sort() -> ListingSort {
    ListingSort::Price
}

fn default_nft_trade_sort() -> TradeSort {
    TradeSort::Time
}

fn default_stats_timeframe() -> StatsTimeframe {
    StatsTimeframe::Hours24
}

fn default_trend_timeframe() -> Timeframe {
    Timeframe::Days30
}

fn default_marketplace_timeframe() -> Timeframe {
    Timeframe::Days7
}

fn default_depth_items() -> u32 {
    500
}

fn default_ranking_items() -> u32 {
    25
}

// ---- /nft/asset/sales ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftAssetSalesRequest {
    pub policy: String,
    pub name: Option<String>,
}

impl NftAssetSalesRequest {
    pub fn query(&self) -> Query {
        let mut q: Query = vec![("policy", self.policy.clone())];
        if let Some(name) = &self.name {
            q.push(("name", name.clone()));
        }
        q
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftSale {
    pub buyer_stake_address: String,
    pub price: f64,
    pub seller_stake_address: String,
    pub time: i64,
}

// ---- /nft/asset/stats ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftAssetStatsRequest {
    pub policy: String,
    pub name: String,
}

impl NftAssetStatsRequest {
    pub fn query(&self) -> Query {
        vec![("policy", self.policy.clone()), ("name", self.name.clone())]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftAssetStats {
    pub is_listed: bool,
    pub last_listed_price: f64,
    pub last_listed_time: i64,
    pub last_sold_price: f64,
    pub last_sold_time: i64,
    pub owners: u64,
    pub sales: u64,
    pub times_listed: u64,
    pub volume: f64,
}

// ---- /nft/asset/traits ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftAssetTraitsRequest {
    pub policy: String,
    pub name: String,
    #[serde(default = "default_true")]
    pub prices: bool,
}

impl NftAssetTraitsRequest {
    pub fn query(&self) -> Query {
        vec![
            ("policy", self.policy.clone()),
            ("name", self.name.clone()),
            ("prices", flag(self.prices)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftTrait {
    pub category: String,
    pub name: String,
    pub rarity: f64,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftAssetTraits {
    pub rank: u64,
    pub traits: Vec<NftTrait>,
}

// ---- /nft/collection/assets ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftCollectionAssetsRequest {
    pub policy: String,
    #[serde(default = "default_asset_sort")]
    pub sort_by: AssetSort,
    #[serde(default = "default_order_asc")]
    pub order: SortOrder,
    pub search: Option<String>,
    #[serde(default)]
    pub on_sale: bool,
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,
    #[serde(default = "default_per_page_100")]
    #[validate(range(min = 1, max = 100))]
    pub per_page: u32,
}

impl NftCollectionAssetsRequest {
    pub fn query(&self) -> Query {
        let mut q: Query = vec![
            ("policy", self.policy.clone()),
            ("sortBy", self.sort_by.as_str().to_string()),
            ("order", self.order.as_str().to_string()),
        ];
        if let Some(search) = &self.search {
            q.push(("search", search.clone()));
        }
        q.push(("onSale", flag(self.on_sale)));
        q.push(("page", self.page.to_string()));
        q.push(("perPage", self.per_page.to_string()));
        q
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftCollectionAsset {
    pub image: String,
    pub name: String,
    pub price: f64,
    pub rank: u64,
}

// ---- /nft/collection/holders/distribution ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftHoldersDistributionRequest {
    pub policy: String,
}

impl NftHoldersDistributionRequest {
    pub fn query(&self) -> Query {
        vec![("policy", self.policy.clone())]
    }
}

/// Holder counts keyed by quantity bucket ("1", "2-4", "5-9", ...).
pub type NftHoldersDistribution = BTreeMap<String, u64>;

// ---- /nft/collection/holders/top ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftTopHoldersRequest {
    pub policy: String,
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,
    #[serde(default = "default_per_page_10")]
    #[validate(range(min = 1, max = 100))]
    pub per_page: u32,
    #[serde(default)]
    pub exclude_exchanges: bool,
}

impl NftTopHoldersRequest {
    pub fn query(&self) -> Query {
        vec![
            ("policy", self.policy.clone()),
            ("page", self.page.to_string()),
            ("perPage", self.per_page.to_string()),
            ("excludeExchanges", flag(self.exclude_exchanges)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftHolder {
    pub address: String,
    pub amount: u64,
}

// ---- /nft/collection/holders/trended ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftHoldersTrendedRequest {
    pub policy: String,
    #[serde(default = "default_trend_timeframe")]
    pub timeframe: Timeframe,
}

impl NftHoldersTrendedRequest {
    pub fn query(&self) -> Query {
        vec![
            ("policy", self.policy.clone()),
            ("timeframe", self.timeframe.as_str().to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftHolderTrend {
    pub holders: u64,
    pub time: i64,
}

// ---- /nft/collection/info ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftCollectionInfoRequest {
    pub policy: String,
}

impl NftCollectionInfoRequest {
    pub fn query(&self) -> Query {
        vec![("policy", self.policy.clone())]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftCollectionInfo {
    pub description: String,
    pub discord: String,
    pub logo: String,
    pub name: String,
    pub supply: u64,
    pub twitter: String,
    pub website: String,
}

// ---- /nft/collection/listings ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftCollectionListingsRequest {
    pub policy: String,
}

impl NftCollectionListingsRequest {
    pub fn query(&self) -> Query {
        vec![("policy", self.policy.clone())]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftCollectionListings {
    pub listings: u64,
    pub supply: u64,
}

// ---- /nft/collection/listings/depth ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftListingsDepthRequest {
    pub policy: String,
    #[serde(default = "default_depth_items")]
    #[validate(range(min = 1, max = 1000))]
    pub items: u32,
}

impl NftListingsDepthRequest {
    pub fn query(&self) -> Query {
        vec![
            ("policy", self.policy.clone()),
            ("items", self.items.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDepth {
    pub avg: f64,
    pub count: u64,
    pub price: f64,
    pub total: f64,
}

// ---- /nft/collection/listings/individual ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftIndividualListingsRequest {
    pub policy: String,
    #[serde(default = "default_listing_sort")]
    pub sort_by: ListingSort,
    #[serde(default = "default_order_asc")]
    pub order: SortOrder,
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,
    #[serde(default = "default_per_page_100")]
    #[validate(range(min = 1, max = 100))]
    pub per_page: u32,
}

impl NftIndividualListingsRequest {
    pub fn query(&self) -> Query {
        vec![
            ("policy", self.policy.clone()),
            ("sortBy", self.sort_by.as_str().to_string()),
            ("order", self.order.as_str().to_string()),
            ("page", self.page.to_string()),
            ("perPage", self.per_page.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftListing {
    pub image: String,
    pub market: String,
    pub name: String,
    pub price: f64,
    pub time: i64,
}

// ---- /nft/collection/listings/trended ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftListingsTrendedRequest {
    pub policy: String,
    pub interval: Interval,
    #[validate(range(min = 1))]
    pub num_intervals: Option<u32>,
}

impl NftListingsTrendedRequest {
    pub fn query(&self) -> Query {
        let mut q: Query = vec![
            ("policy", self.policy.clone()),
            ("interval", self.interval.as_str().to_string()),
        ];
        if let Some(n) = self.num_intervals {
            q.push(("numIntervals", n.to_string()));
        }
        q
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingTrend {
    pub listings: u64,
    pub price: f64,
    pub time: i64,
}

// ---- /nft/collection/ohlcv ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftCollectionOhlcvRequest {
    pub policy: String,
    pub interval: Interval,
    #[validate(range(min = 1))]
    pub num_intervals: Option<u32>,
}

impl NftCollectionOhlcvRequest {
    pub fn query(&self) -> Query {
        let mut q: Query = vec![
            ("policy", self.policy.clone()),
            ("interval", self.interval.as_str().to_string()),
        ];
        if let Some(n) = self.num_intervals {
            q.push(("numIntervals", n.to_string()));
        }
        q
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftOhlcv {
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub time: i64,
    pub volume: f64,
}

// ---- /nft/collection/stats ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftCollectionStatsRequest {
    pub policy: String,
}

impl NftCollectionStatsRequest {
    pub fn query(&self) -> Query {
        vec![("policy", self.policy.clone())]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftCollectionStats {
    pub listings: u64,
    pub owners: u64,
    pub price: f64,
    pub sales: u64,
    pub supply: u64,
    pub top_offer: f64,
    pub volume: f64,
}

// ---- /nft/collection/stats/extended ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftCollectionStatsExtendedRequest {
    pub policy: String,
    #[serde(default = "default_stats_timeframe")]
    pub timeframe: StatsTimeframe,
}

impl NftCollectionStatsExtendedRequest {
    pub fn query(&self) -> Query {
        vec![
            ("policy", self.policy.clone()),
            ("timeframe", self.timeframe.as_str().to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftCollectionStatsExtended {
    pub listings: u64,
    pub listings_pct_chg: f64,
    pub owners: u64,
    pub owners_pct_chg: f64,
    pub price: f64,
    pub price_pct_chg: f64,
    pub sales: u64,
    pub sales_pct_chg: f64,
    pub supply: u64,
    pub top_offer: f64,
    pub volume: f64,
    pub volume_pct_chg: f64,
}

// ---- /nft/collection/trades ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftCollectionTradesRequest {
    pub policy: Option<String>,
    #[serde(default = "default_trend_timeframe")]
    pub timeframe: Timeframe,
    #[serde(default = "default_nft_trade_sort")]
    pub sort_by: TradeSort,
    #[serde(default = "default_order_desc")]
    pub order: SortOrder,
    pub min_amount: Option<u64>,
    pub from_time: Option<i64>,
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,
    #[serde(default = "default_per_page_100")]
    #[validate(range(min = 1, max = 100))]
    pub per_page: u32,
}

impl NftCollectionTradesRequest {
    pub fn query(&self) -> Query {
        let mut q: Query = Vec::new();
        if let Some(policy) = &self.policy {
            q.push(("policy", policy.clone()));
        }
        q.push(("timeframe", self.timeframe.as_str().to_string()));
        q.push(("sortBy", self.sort_by.as_str().to_string()));
        q.push(("order", self.order.as_str().to_string()));
        if let Some(min) = self.min_amount {
            q.push(("minAmount", min.to_string()));
        }
        if let Some(from) = self.from_time {
            q.push(("fromTime", from.to_string()));
        }
        q.push(("page", self.page.to_string()));
        q.push(("perPage", self.per_page.to_string()));
        q
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftTrade {
    pub buyer_address: String,
    pub collection_name: String,
    pub hash: String,
    pub image: String,
    pub market: String,
    pub name: String,
    pub policy: String,
    pub price: f64,
    pub seller_address: String,
    pub time: i64,
}

// ---- /nft/collection/trades/stats ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftTradeStatsRequest {
    pub policy: String,
    #[serde(default = "default_stats_timeframe")]
    pub timeframe: StatsTimeframe,
}

impl NftTradeStatsRequest {
    pub fn query(&self) -> Query {
        vec![
            ("policy", self.policy.clone()),
            ("timeframe", self.timeframe.as_str().to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftTradeStats {
    pub buyers: u64,
    pub sales: u64,
    pub sellers: u64,
    pub volume: f64,
}

// ---- /nft/collection/traits/price ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftTraitPricesRequest {
    pub policy: String,
    pub name: Option<String>,
}

impl NftTraitPricesRequest {
    pub fn query(&self) -> Query {
        let mut q: Query = vec![("policy", self.policy.clone())];
        if let Some(name) = &self.name {
            q.push(("name", name.clone()));
        }
        q
    }
}

/// Floor prices keyed by trait category, then trait name.
pub type NftTraitPrices = BTreeMap<String, BTreeMap<String, f64>>;

// ---- /nft/collection/traits/rarity ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftTraitRarityRequest {
    pub policy: String,
}

impl NftTraitRarityRequest {
    pub fn query(&self) -> Query {
        vec![("policy", self.policy.clone())]
    }
}

/// Rarity scores keyed by trait category, then trait name.
pub type NftTraitRarity = BTreeMap<String, BTreeMap<String, f64>>;

// ---- /nft/collection/traits/rarity/rank ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftTraitRarityRankRequest {
    pub policy: String,
    pub name: String,
}

impl NftTraitRarityRankRequest {
    pub fn query(&self) -> Query {
        vec![("policy", self.policy.clone()), ("name", self.name.clone())]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftRarityRank {
    pub rank: u64,
}

// ---- /nft/collection/volume/trended ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftVolumeTrendedRequest {
    pub policy: String,
    pub interval: Interval,
    #[validate(range(min = 1))]
    pub num_intervals: Option<u32>,
}

impl NftVolumeTrendedRequest {
    pub fn query(&self) -> Query {
        let mut q: Query = vec![
            ("policy", self.policy.clone()),
            ("interval", self.interval.as_str().to_string()),
        ];
        if let Some(n) = self.num_intervals {
            q.push(("numIntervals", n.to_string()));
        }
        q
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftVolumeTrend {
    pub price: f64,
    pub sales: u64,
    pub time: i64,
    pub volume: f64,
}

// ---- /nft/market/stats ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftMarketStatsRequest {
    #[serde(default = "default_stats_timeframe")]
    pub timeframe: StatsTimeframe,
}

impl NftMarketStatsRequest {
    pub fn query(&self) -> Query {
        vec![("timeframe", self.timeframe.as_str().to_string())]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftMarketStats {
    pub addresses: u64,
    pub buyers: u64,
    pub sales: u64,
    pub sellers: u64,
    pub volume: f64,
}

// ---- /nft/market/stats/extended ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftMarketStatsExtendedRequest {
    pub timeframe: StatsTimeframe,
}

impl NftMarketStatsExtendedRequest {
    pub fn query(&self) -> Query {
        vec![("timeframe", self.timeframe.as_str().to_string())]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftMarketStatsExtended {
    pub addresses: u64,
    pub addresses_pct_chg: f64,
    pub buyers: u64,
    pub buyers_pct_chg: f64,
    pub sales: u64,
    pub sales_pct_chg: f64,
    pub sellers: u64,
    pub sellers_pct_chg: f64,
    pub volume: f64,
    pub volume_pct_chg: f64,
}

// ---- /nft/market/volume/trended ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftMarketVolumeTrendedRequest {
    #[serde(default = "default_trend_timeframe")]
    pub timeframe: Timeframe,
}

impl NftMarketVolumeTrendedRequest {
    pub fn query(&self) -> Query {
        vec![("timeframe", self.timeframe.as_str().to_string())]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketVolumeTrend {
    pub time: i64,
    pub value: f64,
}

// ---- /nft/marketplace/stats ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftMarketplaceStatsRequest {
    #[serde(default = "default_marketplace_timeframe")]
    pub timeframe: Timeframe,
    pub marketplace: Option<String>,
    #[serde(default)]
    pub last_day: bool,
}

impl NftMarketplaceStatsRequest {
    pub fn query(&self) -> Query {
        let mut q: Query = vec![("timeframe", self.timeframe.as_str().to_string())];
        if let Some(marketplace) = &self.marketplace {
            q.push(("marketplace", marketplace.clone()));
        }
        q.push(("lastDay", flag(self.last_day)));
        q
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftMarketplaceStats {
    pub avg_sale: f64,
    pub fees: f64,
    pub liquidity: f64,
    pub listings: u64,
    pub name: String,
    pub royalties: f64,
    pub sales: u64,
    pub users: u64,
    pub volume: f64,
}

// ---- /nft/top/timeframe ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftTopTimeframeRequest {
    pub ranking: NftRanking,
    #[serde(default = "default_ranking_items")]
    #[validate(range(min = 1, max = 100))]
    pub items: u32,
}

impl NftTopTimeframeRequest {
    pub fn query(&self) -> Query {
        vec![
            ("ranking", self.ranking.as_str().to_string()),
            ("items", self.items.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftTopRanking {
    pub listings: u64,
    pub logo: String,
    pub market_cap: f64,
    pub name: String,
    pub policy: String,
    pub price: f64,
    pub price_24h_chg: f64,
    pub price_30d_chg: f64,
    pub price_7d_chg: f64,
    pub rank: u64,
    pub supply: u64,
    pub volume_24h: f64,
    pub volume_24h_chg: f64,
    pub volume_30d: f64,
    pub volume_30d_chg: f64,
    pub volume_7d: f64,
    pub volume_7d_chg: f64,
}

// ---- /nft/top/volume ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftTopVolumeRequest {
    #[serde(default = "default_stats_timeframe")]
    pub timeframe: StatsTimeframe,
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,
    #[serde(default = "default_per_page_10")]
    #[validate(range(min = 1, max = 100))]
    pub per_page: u32,
}

impl NftTopVolumeRequest {
    pub fn query(&self) -> Query {
        vec![
            ("timeframe", self.timeframe.as_str().to_string()),
            ("page", self.page.to_string()),
            ("perPage", self.per_page.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftTopVolume {
    pub listings: u64,
    pub logo: String,
    pub name: String,
    pub policy: String,
    pub price: f64,
    pub sales: u64,
    pub supply: u64,
    pub volume: f64,
}

// ---- /nft/top/volume/extended ----

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NftTopVolumeExtendedRequest {
    #[serde(default = "default_stats_timeframe")]
    pub timeframe: StatsTimeframe,
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,
    #[serde(default = "default_per_page_10")]
    #[validate(range(min = 1, max = 100))]
    pub per_page: u32,
}

impl NftTopVolumeExtendedRequest {
    pub fn query(&self) -> Query {
        vec![
            ("timeframe", self.timeframe.as_str().to_string()),
            ("page", self.page.to_string()),
            ("perPage", self.per_page.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftTopVolumeExtended {
    pub listings: u64,
    pub listings_pct_chg: f64,
    pub logo: String,
    pub name: String,
    pub owners: u64,
    pub owners_pct_chg: f64,
    pub policy: String,
    pub price: f64,
    pub price_pct_chg: f64,
    pub sales: u64,
    pub sales_pct_chg: f64,
    pub supply: u64,
    pub volume: f64,
    pub volume_pct_chg: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn collection_assets_defaults_match_the_documented_table() {
        let req: NftCollectionAssetsRequest =
            serde_json::from_value(json!({ "policy": "policy1" })).unwrap();
        let query = req.query();
        assert!(query.contains(&("sortBy", "price".to_string())));
        assert!(query.contains(&("order", "asc".to_string())));
        assert!(query.contains(&("onSale", "0".to_string())));
        assert!(query.contains(&("page", "1".to_string())));
        assert!(query.contains(&("perPage", "100".to_string())));
        let names: Vec<&str> = query.iter().map(|(name, _)| *name).collect();
        assert!(!names.contains(&"search"));
    }

    #[test]
    fn asset_traits_prices_flag_defaults_on() {
        let req: NftAssetTraitsRequest =
            serde_json::from_value(json!({ "policy": "p", "name": "ClayNation3725" })).unwrap();
        assert!(req.query().contains(&("prices", "1".to_string())));
    }

    #[test]
    fn listings_depth_items_is_bounded() {
        let req: NftListingsDepthRequest =
            serde_json::from_value(json!({ "policy": "p" })).unwrap();
        assert_eq!(req.items, 500);

        let req: NftListingsDepthRequest =
            serde_json::from_value(json!({ "policy": "p", "items": 1001 })).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn ranking_accepts_only_the_documented_set() {
        for ranking in ["marketCap", "volume", "gainers", "losers"] {
            let value = json!({ "ranking": ranking });
            assert!(
                serde_json::from_value::<NftTopTimeframeRequest>(value).is_ok(),
                "{ranking}"
            );
        }
        assert!(
            serde_json::from_value::<NftTopTimeframeRequest>(json!({ "ranking": "floor" }))
                .is_err()
        );
    }

    #[test]
    fn market_stats_extended_requires_timeframe() {
        assert!(serde_json::from_value::<NftMarketStatsExtendedRequest>(json!({})).is_err());
    }

    #[test]
    fn collection_trades_policy_is_optional_and_omitted() {
        let req: NftCollectionTradesRequest = serde_json::from_value(json!({})).unwrap();
        let names: Vec<&str> = req.query().iter().map(|(name, _)| *name).collect();
        assert!(!names.contains(&"policy"));
        assert_eq!(req.query()[0], ("timeframe", "30d".to_string()));
        assert_eq!(req.query()[1], ("sortBy", "time".to_string()));
    }
}
