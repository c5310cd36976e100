//! Asset records as served by the asset-listing endpoint.
//!
//! Every numeric field is kept as the string the server sent. The wire is
//! untrusted, so callers go through the fallible accessors below before
//! doing any arithmetic or comparison.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

/// One instrument at the moment the snapshot was taken.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetRecord {
    pub id: String,
    pub rank: String,
    pub name: String,
    #[serde(rename = "priceUsd", default)]
    pub price_usd: Option<String>,
    #[serde(rename = "changePercent24Hr", default)]
    pub change_percent_24hr: Option<String>,
}

impl AssetRecord {
    /// Market-cap rank, or `None` when the server sent something that is
    /// not a positive integer.
    pub fn rank_value(&self) -> Option<u32> {
        self.rank.trim().parse::<u32>().ok().filter(|rank| *rank > 0)
    }

    /// Price in USD.
    pub fn price(&self) -> Option<Decimal> {
        self.price_usd.as_deref().and_then(parse_decimal)
    }

    /// 24-hour change in percent.
    pub fn change_percent(&self) -> Option<Decimal> {
        self.change_percent_24hr.as_deref().and_then(parse_decimal)
    }
}

/// Parses a decimal string, accepting the exponent notation some feeds
/// use for very small values.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}
