//! # models::profit
//!
//! Rows produced by the aggregation routes.  Field names match what the
//! dashboard has always consumed: flip and herb rows are snake_case, skill
//! rows are camelCase.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlipOpportunity {
    pub id:                        u32,
    pub name:                      String,
    pub buy_price:                 i64,
    pub sell_price:                i64,
    pub profit_per_item_gp:        i64,
    pub buy_limit:                 i64,
    pub volume_24h:                i64,
    pub total_potential_profit_gp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HerbProfit {
    /// Herb name without the "Grimy " prefix
    pub name:              String,
    pub profit_per_potion: i64,
    pub cost_per_potion:   i64,
    pub sell_price_unf:    i64,
    pub grimy_id:          u32,
    pub unf_id:            u32,
}

/// One priced input of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialCost {
    pub id:        u32,
    pub name:      String,
    pub qty:       u32,
    pub unit_cost: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillProfit {
    pub name:        String,
    pub product_id:  u32,
    pub materials:   Vec<MaterialCost>,
    pub cost_per:    i64,
    pub revenue_per: i64,
    pub profit_per:  i64,
    pub gp_per_hr:   i64,
    pub limit:       i64,
    pub notes:       String,
}
