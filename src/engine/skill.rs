//! # engine::skill
//!
//! Generic "buy the inputs, make the thing, sell it" calculator shared by
//! every processing skill.  Each skill only contributes a recipe table (see
//! [`crate::engine::recipes`]).
//!
//! ## Per recipe
//! ```text
//! cost    = Σ low(material) * qty           (buy inputs at instant-sell)
//! revenue = high(product) * 0.99 * output   (sell at instant-buy, minus tax)
//! profit  = floor(revenue - cost)
//! gp/hr   = profit * actions_per_hr
//! ```
//! Recipes with any unpriced item, a non-positive cost or revenue, or a cost
//! above revenue are left out.

use std::collections::HashMap;

use crate::{
    engine::recipes,
    models::{LatestPrice, MappingEntry, MaterialCost, SkillProfit},
};

/// What is left of a sale after the 1% GE tax.
pub const AFTER_TAX: f64 = 0.99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Skill {
    Smithing,
    Fletching,
    Runecrafting,
    Cooking,
    Crafting,
}

impl Skill {
    pub const ALL: [Skill; 5] = [
        Skill::Smithing,
        Skill::Fletching,
        Skill::Runecrafting,
        Skill::Cooking,
        Skill::Crafting,
    ];

    /// Path segment under `/api/{slug}/profits`.
    pub fn slug(self) -> &'static str {
        match self {
            Skill::Smithing     => "smithing",
            Skill::Fletching    => "fletching",
            Skill::Runecrafting => "runecrafting",
            Skill::Cooking      => "cooking",
            Skill::Crafting     => "crafting",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Skill> {
        Skill::ALL
            .into_iter()
            .find(|s| s.slug().eq_ignore_ascii_case(slug))
    }

    pub fn recipes(self) -> &'static [Recipe] {
        match self {
            Skill::Smithing     => recipes::SMITHING,
            Skill::Fletching    => recipes::FLETCHING,
            Skill::Runecrafting => recipes::RUNECRAFTING,
            Skill::Cooking      => recipes::COOKING,
            Skill::Crafting     => recipes::CRAFTING,
        }
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Material {
    pub id:  u32,
    pub qty: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct Recipe {
    pub name:           &'static str,
    pub product_id:     u32,
    /// Units of product per action (4 cannonballs per steel bar, ...)
    pub output_qty:     u32,
    pub materials:      &'static [Material],
    pub actions_per_hr: i64,
    pub notes:          &'static str,
}

pub fn skill_profits(
    recipes: &[Recipe],
    mapping: &[MappingEntry],
    latest: &HashMap<u32, LatestPrice>,
) -> Vec<SkillProfit> {
    let by_id: HashMap<u32, &MappingEntry> = mapping.iter().map(|m| (m.id, m)).collect();

    let mut profits: Vec<SkillProfit> = recipes
        .iter()
        .filter_map(|recipe| price_recipe(recipe, &by_id, latest))
        .collect();

    profits.sort_by(|a, b| b.profit_per.cmp(&a.profit_per));
    profits
}

fn price_recipe(
    recipe: &Recipe,
    by_id: &HashMap<u32, &MappingEntry>,
    latest: &HashMap<u32, LatestPrice>,
) -> Option<SkillProfit> {
    let materials: Vec<MaterialCost> = recipe
        .materials
        .iter()
        .map(|m| {
            let unit_cost = latest.get(&m.id)?.low_price()?;
            Some(MaterialCost {
                id:   m.id,
                name: item_name(by_id, m.id),
                qty:  m.qty,
                unit_cost,
            })
        })
        .collect::<Option<_>>()?;

    let cost: i64 = materials.iter().map(|m| m.unit_cost * m.qty as i64).sum();
    let sell = latest.get(&recipe.product_id)?.high_price()?;
    let revenue = sell as f64 * AFTER_TAX * recipe.output_qty as f64;

    if cost <= 0 || revenue <= 0.0 || cost as f64 > revenue {
        return None;
    }

    let profit = (revenue - cost as f64).floor() as i64;

    Some(SkillProfit {
        name:        recipe.name.to_string(),
        product_id:  recipe.product_id,
        materials,
        cost_per:    cost,
        revenue_per: revenue.floor() as i64,
        profit_per:  profit,
        gp_per_hr:   profit * recipe.actions_per_hr,
        limit:       by_id
            .get(&recipe.product_id)
            .and_then(|m| m.limit)
            .unwrap_or(0),
        notes:       recipe.notes.to_string(),
    })
}

fn item_name(by_id: &HashMap<u32, &MappingEntry>, id: u32) -> String {
    by_id
        .get(&id)
        .map(|m| m.name.clone())
        .unwrap_or_else(|| format!("Item {id}"))
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const STEEL_BAR: Recipe = Recipe {
        name:           "Steel bar",
        product_id:     2353,
        output_qty:     1,
        materials:      &[Material { id: 440, qty: 1 }, Material { id: 453, qty: 2 }],
        actions_per_hr: 5_000,
        notes:          "",
    };

    const CANNONBALL: Recipe = Recipe {
        name:           "Cannonball",
        product_id:     2,
        output_qty:     4,
        materials:      &[Material { id: 2353, qty: 1 }],
        actions_per_hr: 1_250,
        notes:          "",
    };

    fn entry(id: u32, name: &str, limit: Option<i64>) -> MappingEntry {
        MappingEntry {
            id,
            name: name.to_string(),
            limit,
            members: None,
            examine: None,
            value: None,
            highalch: None,
            lowalch: None,
            icon: None,
        }
    }

    fn price(low: i64, high: i64) -> LatestPrice {
        LatestPrice { low: Some(low), high: Some(high), ..LatestPrice::default() }
    }

    fn mapping() -> Vec<MappingEntry> {
        vec![
            entry(440, "Iron ore", Some(25_000)),
            entry(453, "Coal", Some(13_000)),
            entry(2353, "Steel bar", Some(10_000)),
            entry(2, "Cannonball", Some(11_000)),
        ]
    }

    #[test]
    fn test_cost_revenue_profit_and_rate() {
        let latest = HashMap::from([
            (440, price(100, 105)),
            (453, price(150, 160)),
            (2353, price(480, 600)),
        ]);

        let rows = skill_profits(&[STEEL_BAR], &mapping(), &latest);

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.cost_per, 400);     // 100 + 2 * 150
        assert_eq!(row.revenue_per, 594);  // 600 * 0.99
        assert_eq!(row.profit_per, 194);
        assert_eq!(row.gp_per_hr, 970_000);
        assert_eq!(row.limit, 10_000);
        assert_eq!(row.materials[1].name, "Coal");
        assert_eq!(row.materials[1].qty, 2);
        assert_eq!(row.materials[1].unit_cost, 150);
    }

    #[test]
    fn test_costlier_than_revenue_is_excluded() {
        let latest = HashMap::from([
            (440, price(300, 305)),
            (453, price(200, 210)),
            (2353, price(600, 650)), // cost 700 > 643.5
        ]);

        assert!(skill_profits(&[STEEL_BAR], &mapping(), &latest).is_empty());
    }

    #[test]
    fn test_output_quantity_scales_revenue() {
        let latest = HashMap::from([(2353, price(500, 520)), (2, price(150, 160))]);

        let rows = skill_profits(&[CANNONBALL], &mapping(), &latest);

        assert_eq!(rows[0].cost_per, 500);
        assert_eq!(rows[0].revenue_per, 633); // 160 * 0.99 * 4 = 633.6
        assert_eq!(rows[0].profit_per, 133);
    }

    #[test]
    fn test_unpriced_material_skips_recipe() {
        let latest = HashMap::from([(440, price(100, 105)), (2353, price(480, 600))]);
        assert!(skill_profits(&[STEEL_BAR], &mapping(), &latest).is_empty());
    }

    #[test]
    fn test_zero_cost_is_discarded() {
        let free = Recipe { materials: &[], ..CANNONBALL };
        let latest = HashMap::from([(2, price(150, 160))]);
        assert!(skill_profits(&[free], &mapping(), &latest).is_empty());
    }

    #[test]
    fn test_sorted_by_profit_desc() {
        let latest = HashMap::from([
            (440, price(100, 105)),
            (453, price(150, 160)),
            (2353, price(480, 600)),
            (2, price(200, 250)),
        ]);

        let rows = skill_profits(&[STEEL_BAR, CANNONBALL], &mapping(), &latest);

        // cannonball: 250 * .99 * 4 = 990 - 480 = 510 ; steel bar: 194
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Cannonball", "Steel bar"]);
    }

    #[test]
    fn test_slug_round_trip() {
        for skill in Skill::ALL {
            assert_eq!(Skill::from_slug(skill.slug()), Some(skill));
            assert!(!skill.recipes().is_empty());
        }
        assert_eq!(Skill::from_slug("herblore"), None);
    }

    #[test]
    fn test_unknown_material_name_falls_back_to_id() {
        let latest = HashMap::from([
            (440, price(100, 105)),
            (453, price(150, 160)),
            (2353, price(480, 600)),
        ]);
        let rows = skill_profits(&[STEEL_BAR], &[], &latest);
        assert_eq!(rows[0].materials[0].name, "Item 440");
        assert_eq!(rows[0].limit, 0);
    }
}
