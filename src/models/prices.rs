//! # models::prices
//!
//! Raw payloads from the two real-time price sources:
//!
//! * OSRS Wiki `/mapping` → `Vec<MappingEntry>`
//! * OSRS Wiki `/latest`  → [`LatestResponse`] (`{ "data": { "<id>": {...} } }`)
//! * Weird Gloop `/latest?id=..` → `HashMap<u32, GloopPrice>`

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub id:       u32,
    pub name:     String,
    /// GE buy limit per 4 hours.  Absent for some untradeable-ish items.
    #[serde(default)]
    pub limit:    Option<i64>,
    #[serde(default)]
    pub members:  Option<bool>,
    #[serde(default)]
    pub examine:  Option<String>,
    #[serde(default)]
    pub value:    Option<i64>,
    #[serde(default)]
    pub highalch: Option<i64>,
    #[serde(default)]
    pub lowalch:  Option<i64>,
    #[serde(default)]
    pub icon:     Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatestPrice {
    #[serde(default)]
    pub high: Option<i64>,
    #[serde(rename = "highTime", default)]
    pub high_time: Option<i64>,
    #[serde(default)]
    pub low: Option<i64>,
    #[serde(rename = "lowTime", default)]
    pub low_time: Option<i64>,
    #[serde(rename = "highPriceVolume", default)]
    pub high_price_volume: Option<i64>,
}

impl LatestPrice {
    /// Instant-buy price, treating `0` as "no trade seen".
    pub fn high_price(&self) -> Option<i64> {
        self.high.filter(|v| *v != 0)
    }

    /// Instant-sell price, treating `0` as "no trade seen".
    pub fn low_price(&self) -> Option<i64> {
        self.low.filter(|v| *v != 0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatestResponse {
    #[serde(default)]
    pub data: HashMap<u32, LatestPrice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GloopPrice {
    #[serde(default)]
    pub id:        Option<String>,
    pub price:     i64,
    #[serde(default)]
    pub volume:    Option<i64>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn latest_keys_parse_as_ids() {
        let latest: LatestResponse = serde_json::from_value(json!({
            "data": {
                "2":   { "high": 110, "highTime": 1, "low": 100, "lowTime": 2 },
                "227": { "high": 0, "low": 4, "highPriceVolume": 1500 }
            }
        }))
        .unwrap();

        assert_eq!(latest.data[&2].high_price(), Some(110));
        assert_eq!(latest.data[&227].high_price(), None);
        assert_eq!(latest.data[&227].high_price_volume, Some(1500));
    }

    #[test]
    fn mapping_tolerates_missing_limit() {
        let entries: Vec<MappingEntry> = serde_json::from_value(json!([
            { "id": 2, "name": "Cannonball", "limit": 11000, "members": true },
            { "id": 6, "name": "Cannon base" }
        ]))
        .unwrap();

        assert_eq!(entries[0].limit, Some(11000));
        assert_eq!(entries[1].limit, None);
    }
}
