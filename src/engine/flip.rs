//! # engine::flip
//!
//! **Flip finder** — joins the wiki item mapping with the latest prices and
//! ranks items by how much a full buy limit would make.
//!
//! ## Per item
//! ```text
//! buy    = latest.low                      (instant-sell price: what we pay)
//! sell   = latest.high                     (instant-buy price: what we get)
//! profit = floor(sell * (1 - tax) - buy)
//! total  = profit * buy_limit
//! ```
//! Items without both prices, below the threshold, or with `profit <= 0` are
//! dropped.  The rest are sorted by `total` (descending) and cut to `top_n`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{FlipOpportunity, LatestPrice, MappingEntry};

/// Which number `min_threshold` is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdField {
    /// `highPriceVolume` from `/latest`
    #[default]
    Volume,
    /// GE buy limit from `/mapping`
    Limit,
}

impl ThresholdField {
    /// Query-string spelling (`filterBy=`).
    pub fn as_str(self) -> &'static str {
        match self {
            ThresholdField::Volume => "volume",
            ThresholdField::Limit  => "limit",
        }
    }
}

impl std::str::FromStr for ThresholdField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "volume" => Ok(ThresholdField::Volume),
            "limit"  => Ok(ThresholdField::Limit),
            other    => Err(format!(
                "Invalid value for filterBy: '{other}' (use 'volume' or 'limit')"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipParams {
    pub min_threshold: i64,
    pub tax_rate:      f64,
    pub top_n:         usize,
    pub filter_by:     ThresholdField,
}

impl Default for FlipParams {
    fn default() -> Self {
        Self {
            min_threshold: 100_000,
            tax_rate:      0.01,
            top_n:         100,
            filter_by:     ThresholdField::Volume,
        }
    }
}

/// Profit per item after the GE tax on the sale, rounded down.
#[inline]
pub fn profit_per_item(buy: i64, sell: i64, tax_rate: f64) -> i64 {
    (sell as f64 * (1.0 - tax_rate) - buy as f64).floor() as i64
}

pub fn find_opportunities(
    mapping: &[MappingEntry],
    latest: &HashMap<u32, LatestPrice>,
    params: &FlipParams,
) -> Vec<FlipOpportunity> {
    let mut opportunities: Vec<FlipOpportunity> = mapping
        .iter()
        .filter_map(|item| {
            let price = latest.get(&item.id)?;
            let sell = price.high_price()?;
            let buy = price.low_price()?;

            let volume = price.high_price_volume.unwrap_or(0);
            let limit = item.limit.unwrap_or(0);
            let threshold_value = match params.filter_by {
                ThresholdField::Volume => volume,
                ThresholdField::Limit  => limit,
            };
            if threshold_value < params.min_threshold {
                return None;
            }

            let profit = profit_per_item(buy, sell, params.tax_rate);
            if profit <= 0 {
                return None;
            }

            Some(FlipOpportunity {
                id:                        item.id,
                name:                      item.name.clone(),
                buy_price:                 buy,
                sell_price:                sell,
                profit_per_item_gp:        profit,
                buy_limit:                 limit,
                volume_24h:                volume,
                total_potential_profit_gp: profit * limit,
            })
        })
        .collect();

    opportunities.sort_by(|a, b| b.total_potential_profit_gp.cmp(&a.total_potential_profit_gp));
    opportunities.truncate(params.top_n);
    opportunities
}

// ─── Tests ────────────────────────────────────────────────────────────────────
