//! # models::catalogue
//!
//! Shapes returned by the official OSRS catalogue API
//! (`/catalogue/category.json`, `/catalogue/items.json`,
//! `/catalogue/detail.json`, `/graph/{id}.json`).  The proxy passes them
//! through unchanged apart from the envelope.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One letter bucket of a category: how many items start with `letter`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alpha {
    pub letter: String,
    pub items:  u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResponse {
    /// Unused by OSRS (always empty) but kept for shape fidelity.
    #[serde(default)]
    pub types: Vec<serde_json::Value>,
    #[serde(default)]
    pub alpha: Vec<Alpha>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Neutral,
    Positive,
    Negative,
}

/// The catalogue reports prices either as integers (`1234`) or as
/// pre-formatted strings (`"1.2m"`, `"- 44"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(i64),
    Decimal(f64),
    Text(String),
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Price::Amount(v)  => write!(f, "{v}"),
            Price::Decimal(v) => write!(f, "{v}"),
            Price::Text(s)    => f.write_str(s.trim()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceInfo {
    pub trend: Trend,
    pub price: Price,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub icon:        String,
    #[serde(default)]
    pub icon_large:  String,
    pub id:          u32,
    #[serde(rename = "type", default)]
    pub kind:        String,
    #[serde(rename = "typeIcon", default)]
    pub type_icon:   String,
    pub name:        String,
    #[serde(default)]
    pub description: String,
    pub current:     PriceInfo,
    pub today:       PriceInfo,
    /// `"true"` / `"false"` as sent upstream
    #[serde(default)]
    pub members:     String,
}

impl Item {
    pub fn is_members(&self) -> bool {
        self.members.eq_ignore_ascii_case("true")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsResponse {
    pub total: u32,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// 30/90/180-day movement, e.g. `{ "trend": "positive", "change": "+5.0%" }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendChange {
    pub trend:  String,
    pub change: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetail {
    #[serde(flatten)]
    pub summary: Item,
    pub day30:   TrendChange,
    pub day90:   TrendChange,
    pub day180:  TrendChange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetailResponse {
    pub item: ItemDetail,
}

/// Price history keyed by millisecond timestamp (as a string, the way the
/// catalogue sends it).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    #[serde(default)]
    pub daily:   BTreeMap<String, i64>,
    #[serde(default)]
    pub average: BTreeMap<String, i64>,
}

impl GraphData {
    /// Daily series ordered by timestamp.  Keys that are not integers are
    /// skipped.
    pub fn daily_series(&self) -> Vec<(i64, i64)> {
        let mut series: Vec<(i64, i64)> = self
            .daily
            .iter()
            .filter_map(|(ts, price)| ts.parse::<i64>().ok().map(|ts| (ts, *price)))
            .collect();
        series.sort_by_key(|(ts, _)| *ts);
        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn item_detail_accepts_mixed_price_forms() {
        let raw = json!({
            "item": {
                "icon": "https://example/icon.gif",
                "icon_large": "https://example/icon_big.gif",
                "id": 4151,
                "type": "Default",
                "typeIcon": "https://example/type.png",
                "name": "Abyssal whip",
                "description": "A weapon from the abyss.",
                "current": { "trend": "neutral", "price": "1.5m" },
                "today":   { "trend": "negative", "price": "- 1,204" },
                "members": "true",
                "day30":  { "trend": "positive", "change": "+2.0%" },
                "day90":  { "trend": "negative", "change": "-1.0%" },
                "day180": { "trend": "neutral",  "change": "0.0%" }
            }
        });

        let detail: ItemDetailResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(detail.item.summary.id, 4151);
        assert_eq!(detail.item.summary.kind, "Default");
        assert!(detail.item.summary.is_members());
        assert_eq!(detail.item.summary.current.price, Price::Text("1.5m".into()));
        assert_eq!(detail.item.summary.today.trend, Trend::Negative);
        assert_eq!(detail.item.day30.change, "+2.0%");
    }

    #[test]
    fn numeric_price_stays_numeric() {
        let info: PriceInfo =
            serde_json::from_value(json!({ "trend": "neutral", "price": 212 })).unwrap();
        assert_eq!(info.price, Price::Amount(212));
        assert_eq!(info.price.to_string(), "212");
    }

    #[test]
    fn daily_series_is_time_ordered() {
        let graph: GraphData = serde_json::from_value(json!({
            "daily":   { "1700086400000": 110, "1700000000000": 100, "bogus": 1 },
            "average": { "1700000000000": 100 }
        }))
        .unwrap();

        assert_eq!(
            graph.daily_series(),
            vec![(1_700_000_000_000, 100), (1_700_086_400_000, 110)]
        );
    }
}
