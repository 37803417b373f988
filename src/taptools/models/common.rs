//! Enumerations and query-building helpers shared across endpoint families.
//!
//! The upstream contract spells parameter values out as literal sets
//! (`order` is `asc`/`desc`, timeframes are `24h`/`7d`/... and so on);
//! modelling them as enums makes membership a deserialization-time check,
//! so an out-of-set value fails before any network call.

use serde::{Deserialize, Serialize};

/// Sort order accepted by every sortable endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Long-range timeframes used by trade/trend endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "24h")]
    Hours24,
    #[serde(rename = "7d")]
    Days7,
    #[serde(rename = "30d")]
    Days30,
    #[serde(rename = "90d")]
    Days90,
    #[serde(rename = "180d")]
    Days180,
    #[serde(rename = "1y")]
    Year1,
    #[serde(rename = "all")]
    All,
}

impl Timeframe {
    pub fn as_str(self) -> &'static str {
        match self {
            Timeframe::Hours24 => "24h",
            Timeframe::Days7 => "7d",
            Timeframe::Days30 => "30d",
            Timeframe::Days90 => "90d",
            Timeframe::Days180 => "180d",
            Timeframe::Year1 => "1y",
            Timeframe::All => "all",
        }
    }
}

/// The narrower timeframe set used by trading-stats style endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatsTimeframe {
    #[serde(rename = "24h")]
    Hours24,
    #[serde(rename = "7d")]
    Days7,
    #[serde(rename = "30d")]
    Days30,
}

impl StatsTimeframe {
    pub fn as_str(self) -> &'static str {
        match self {
            StatsTimeframe::Hours24 => "24h",
            StatsTimeframe::Days7 => "7d",
            StatsTimeframe::Days30 => "30d",
        }
    }
}

/// Candle/indicator interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "3m")]
    Minutes3,
    #[serde(rename = "5m")]
    Minutes5,
    #[serde(rename = "15m")]
    Minutes15,
    #[serde(rename = "30m")]
    Minutes30,
    #[serde(rename = "1h")]
    Hours1,
    #[serde(rename = "2h")]
    Hours2,
    #[serde(rename = "4h")]
    Hours4,
    #[serde(rename = "12h")]
    Hours12,
    #[serde(rename = "1d")]
    Days1,
    #[serde(rename = "3d")]
    Days3,
    #[serde(rename = "1w")]
    Weeks1,
    #[serde(rename = "1M")]
    Months1,
}

impl Interval {
    pub fn as_str(self) -> &'static str {
        match self {
            Interval::Minutes3 => "3m",
            Interval::Minutes5 => "5m",
            Interval::Minutes15 => "15m",
            Interval::Minutes30 => "30m",
            Interval::Hours1 => "1h",
            Interval::Hours2 => "2h",
            Interval::Hours4 => "4h",
            Interval::Hours12 => "12h",
            Interval::Days1 => "1d",
            Interval::Days3 => "3d",
            Interval::Weeks1 => "1w",
            Interval::Months1 => "1M",
        }
    }
}

/// Technical indicator selector for /token/indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    Ma,
    Ema,
    Rsi,
    Macd,
    Bb,
    Bbw,
}

impl Indicator {
    pub fn as_str(self) -> &'static str {
        match self {
            Indicator::Ma => "ma",
            Indicator::Ema => "ema",
            Indicator::Rsi => "rsi",
            Indicator::Macd => "macd",
            Indicator::Bb => "bb",
            Indicator::Bbw => "bbw",
        }
    }
}

/// Quote currency for priced endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuoteCurrency {
    Ada,
    Usd,
    Eur,
    Eth,
    Btc,
}

impl QuoteCurrency {
    pub fn as_str(self) -> &'static str {
        match self {
            QuoteCurrency::Ada => "ADA",
            QuoteCurrency::Usd => "USD",
            QuoteCurrency::Eur => "EUR",
            QuoteCurrency::Eth => "ETH",
            QuoteCurrency::Btc => "BTC",
        }
    }
}

/// Boolean query flags travel as the literal strings "0"/"1".
pub fn flag(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}

pub fn default_true() -> bool {
    true
}

pub fn default_page() -> u32 {
    1
}

pub fn default_per_page_10() -> u32 {
    10
}

pub fn default_per_page_20() -> u32 {
    20
}

pub fn default_per_page_100() -> u32 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_order_rejects_values_outside_the_set() {
        assert!(serde_json::from_str::<SortOrder>("\"asc\"").is_ok());
        assert!(serde_json::from_str::<SortOrder>("\"desc\"").is_ok());
        assert!(serde_json::from_str::<SortOrder>("\"sideways\"").is_err());
    }

    #[test]
    fn timeframe_round_trips_through_literals() {
        for tf in [
            Timeframe::Hours24,
            Timeframe::Days7,
            Timeframe::Days30,
            Timeframe::Days90,
            Timeframe::Days180,
            Timeframe::Year1,
            Timeframe::All,
        ] {
            let parsed: Timeframe =
                serde_json::from_str(&format!("\"{}\"", tf.as_str())).unwrap();
            assert_eq!(parsed, tf);
        }
        assert!(serde_json::from_str::<Timeframe>("\"2w\"").is_err());
    }

    #[test]
    fn monthly_interval_is_case_sensitive() {
        assert!(serde_json::from_str::<Interval>("\"1M\"").is_ok());
        assert!(serde_json::from_str::<Interval>("\"1mo\"").is_err());
    }

    #[test]
    fn flags_serialize_as_zero_and_one() {
        assert_eq!(flag(true), "1");
        assert_eq!(flag(false), "0");
    }
}
