//! # engine::herblore
//!
//! Unfinished-potion margins: buy the grimy herb, have Zahur clean it and
//! mix it with a vial of water, sell the unf potion.
//!
//! ```text
//! cost   = grimy + vial + ZAHUR_FEE
//! profit = unf - cost
//! ```

use std::collections::{BTreeSet, HashMap};

use crate::{
    error::AppError,
    models::{GloopPrice, HerbProfit},
};

pub const VIAL_OF_WATER_ID: u32 = 227;

/// Zahur charges 200 gp per potion to clean and mix.
pub const ZAHUR_FEE: i64 = 200;

#[derive(Debug, Clone, Copy)]
pub struct Herb {
    pub name:     &'static str,
    pub grimy_id: u32,
    pub unf_id:   u32,
}

pub const HERBS: [Herb; 12] = [
    Herb { name: "Grimy guam leaf",   grimy_id: 199,  unf_id: 91 },
    Herb { name: "Grimy marrentill",  grimy_id: 201,  unf_id: 93 },
    Herb { name: "Grimy tarromin",    grimy_id: 203,  unf_id: 95 },
    Herb { name: "Grimy harralander", grimy_id: 205,  unf_id: 97 },
    Herb { name: "Grimy ranarr weed", grimy_id: 207,  unf_id: 99 },
    Herb { name: "Grimy toadflax",    grimy_id: 3049, unf_id: 2998 },
    Herb { name: "Grimy irit leaf",   grimy_id: 209,  unf_id: 101 },
    Herb { name: "Grimy avantoe",     grimy_id: 211,  unf_id: 103 },
    Herb { name: "Grimy kwuarm",      grimy_id: 213,  unf_id: 105 },
    Herb { name: "Grimy snapdragon",  grimy_id: 3051, unf_id: 3000 },
    Herb { name: "Grimy cadantine",   grimy_id: 215,  unf_id: 107 },
    Herb { name: "Grimy dwarf weed",  grimy_id: 217,  unf_id: 109 },
];

/// Every id the herblore table needs priced, deduplicated and ordered.
pub fn price_ids() -> Vec<u32> {
    let mut ids: BTreeSet<u32> = HERBS.iter().flat_map(|h| [h.grimy_id, h.unf_id]).collect();
    ids.insert(VIAL_OF_WATER_ID);
    ids.into_iter().collect()
}

/// Margins for every herb whose grimy and unf prices are known, best first.
///
/// A missing vial price fails the whole table: every row depends on it.
pub fn herb_profits(prices: &HashMap<u32, GloopPrice>) -> Result<Vec<HerbProfit>, AppError> {
    let vial = prices
        .get(&VIAL_OF_WATER_ID)
        .map(|p| p.price)
        .ok_or_else(|| {
            AppError::Upstream("Could not determine the price for a Vial of water.".into())
        })?;

    let mut profits: Vec<HerbProfit> = HERBS
        .iter()
        .filter_map(|herb| {
            let grimy = prices.get(&herb.grimy_id)?.price;
            let unf = prices.get(&herb.unf_id)?.price;
            let cost = grimy + vial + ZAHUR_FEE;

            Some(HerbProfit {
                name:              herb.name.trim_start_matches("Grimy ").to_string(),
                profit_per_potion: unf - cost,
                cost_per_potion:   cost,
                sell_price_unf:    unf,
                grimy_id:          herb.grimy_id,
                unf_id:            herb.unf_id,
            })
        })
        .collect();

    profits.sort_by(|a, b| b.profit_per_potion.cmp(&a.profit_per_potion));
    Ok(profits)
}
