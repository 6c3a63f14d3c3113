//! # views — ค้นหา / เรียง / แบ่งหน้า / รวมยอด
//!
//! Derived views are recomputed on every invocation from the rows the
//! server returned; nothing here talks to the network.

use ge_nexus::models::{FlipOpportunity, HerbProfit, SkillProfit};

/// Catalogue page size (fixed by the upstream API).
pub const PAGE_SIZE: u32 = 12;

// ─── Sorting ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// A comparable cell.  Text compares lexicographically, numbers numerically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Text(&'a str),
    Number(i64),
}

/// A table row that can be searched by name and sorted by named keys.
pub trait Row {
    /// Keys accepted by [`Row::sort_value`].
    const SORT_KEYS: &'static [&'static str];

    fn name(&self) -> &str;
    fn sort_value(&self, key: &str) -> Option<SortValue<'_>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub key:       String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), direction: SortDirection::Desc }
    }

    /// Header click: the active key flips desc → asc, anything else
    /// selects `key` descending.
    pub fn select(&mut self, key: &str) {
        if self.key == key && self.direction == SortDirection::Desc {
            self.direction = SortDirection::Asc;
        } else {
            self.key = key.to_string();
            self.direction = SortDirection::Desc;
        }
    }
}

pub fn validate_sort_key<R: Row>(key: &str) -> Result<(), String> {
    if R::SORT_KEYS.contains(&key) {
        Ok(())
    } else {
        Err(format!(
            "Unknown sort key '{key}' (use one of: {})",
            R::SORT_KEYS.join(", ")
        ))
    }
}

pub fn sort_rows<R: Row>(rows: &mut [R], sort: &SortState) {
    rows.sort_by(|a, b| {
        let ord = match (a.sort_value(&sort.key), b.sort_value(&sort.key)) {
            (Some(SortValue::Number(x)), Some(SortValue::Number(y))) => x.cmp(&y),
            (Some(SortValue::Text(x)), Some(SortValue::Text(y))) => x.cmp(y),
            _ => std::cmp::Ordering::Equal,
        };
        match sort.direction {
            SortDirection::Asc  => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

/// Case-insensitive substring match on the row name.  Empty query keeps all.
pub fn search<R: Row + Clone>(rows: &[R], query: &str) -> Vec<R> {
    let needle = query.trim().to_lowercase();
    rows.iter()
        .filter(|r| needle.is_empty() || r.name().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

impl Row for FlipOpportunity {
    const SORT_KEYS: &'static [&'static str] =
        &["name", "buy", "sell", "profit", "limit", "volume", "total"];

    fn name(&self) -> &str {
        &self.name
    }

    fn sort_value(&self, key: &str) -> Option<SortValue<'_>> {
        Some(match key {
            "name"   => SortValue::Text(&self.name),
            "buy"    => SortValue::Number(self.buy_price),
            "sell"   => SortValue::Number(self.sell_price),
            "profit" => SortValue::Number(self.profit_per_item_gp),
            "limit"  => SortValue::Number(self.buy_limit),
            "volume" => SortValue::Number(self.volume_24h),
            "total"  => SortValue::Number(self.total_potential_profit_gp),
            _ => return None,
        })
    }
}

impl Row for HerbProfit {
    const SORT_KEYS: &'static [&'static str] = &["name", "profit", "cost", "sell"];

    fn name(&self) -> &str {
        &self.name
    }

    fn sort_value(&self, key: &str) -> Option<SortValue<'_>> {
        Some(match key {
            "name"   => SortValue::Text(&self.name),
            "profit" => SortValue::Number(self.profit_per_potion),
            "cost"   => SortValue::Number(self.cost_per_potion),
            "sell"   => SortValue::Number(self.sell_price_unf),
            _ => return None,
        })
    }
}

impl Row for SkillProfit {
    const SORT_KEYS: &'static [&'static str] =
        &["name", "cost", "revenue", "profit", "gphr", "limit"];

    fn name(&self) -> &str {
        &self.name
    }

    fn sort_value(&self, key: &str) -> Option<SortValue<'_>> {
        Some(match key {
            "name"    => SortValue::Text(&self.name),
            "cost"    => SortValue::Number(self.cost_per),
            "revenue" => SortValue::Number(self.revenue_per),
            "profit"  => SortValue::Number(self.profit_per),
            "gphr"    => SortValue::Number(self.gp_per_hr),
            "limit"   => SortValue::Number(self.limit),
            _ => return None,
        })
    }
}

// ─── Pagination ───────────────────────────────────────────────────────────────

pub fn total_pages(total_items: u32) -> u32 {
    total_items.div_ceil(PAGE_SIZE).max(1)
}

/// Keep `page` inside `[1, total_pages]`.
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

pub fn next_page(page: u32, total_pages: u32) -> u32 {
    clamp_page(page.saturating_add(1), total_pages)
}

pub fn prev_page(page: u32, total_pages: u32) -> u32 {
    clamp_page(page.saturating_sub(1), total_pages)
}

// ─── Batch totals ─────────────────────────────────────────────────────────────

/// Per-unit cost / revenue / profit of a profit-table row.
pub trait BatchRow {
    fn unit_cost(&self) -> i64;
    fn unit_revenue(&self) -> i64;
    fn unit_profit(&self) -> i64;
}

impl BatchRow for SkillProfit {
    fn unit_cost(&self) -> i64 { self.cost_per }
    fn unit_revenue(&self) -> i64 { self.revenue_per }
    fn unit_profit(&self) -> i64 { self.profit_per }
}

impl BatchRow for HerbProfit {
    fn unit_cost(&self) -> i64 { self.cost_per_potion }
    fn unit_revenue(&self) -> i64 { self.sell_price_unf }
    fn unit_profit(&self) -> i64 { self.profit_per_potion }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchTotals {
    pub cost:    i64,
    pub revenue: i64,
    pub profit:  i64,
}

/// Saturates at `i64::MIN`/`MAX`; a hand-edited settings file can carry any batch.
pub fn batch_totals<R: BatchRow>(rows: &[R], batch: i64) -> BatchTotals {
    rows.iter().fold(BatchTotals::default(), |acc, r| BatchTotals {
        cost:    acc.cost.saturating_add(r.unit_cost().saturating_mul(batch)),
        revenue: acc.revenue.saturating_add(r.unit_revenue().saturating_mul(batch)),
        profit:  acc.profit.saturating_add(r.unit_profit().saturating_mul(batch)),
    })
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn herb(name: &str, profit: i64, cost: i64, sell: i64) -> HerbProfit {
        HerbProfit {
            name:              name.to_string(),
            profit_per_potion: profit,
            cost_per_potion:   cost,
            sell_price_unf:    sell,
            grimy_id:          0,
            unf_id:            0,
        }
    }

    fn names<R: Row>(rows: &[R]) -> Vec<&str> {
        rows.iter().map(Row::name).collect()
    }

    #[test]
    fn select_toggles_direction_on_active_key_only() {
        let mut sort = SortState::new("profit");
        assert_eq!(sort.direction, SortDirection::Desc);

        sort.select("profit");
        assert_eq!(sort.direction, SortDirection::Asc);

        sort.select("profit");
        assert_eq!(sort.direction, SortDirection::Desc);

        sort.select("profit");
        sort.select("name");
        assert_eq!(sort, SortState { key: "name".into(), direction: SortDirection::Desc });
    }

    #[test]
    fn numeric_keys_sort_numerically() {
        let mut rows = vec![herb("a", 9, 0, 0), herb("b", 100, 0, 0), herb("c", -5, 0, 0)];
        sort_rows(&mut rows, &SortState::new("profit"));
        assert_eq!(names(&rows), vec!["b", "a", "c"]);
    }

    #[test]
    fn text_keys_sort_lexicographically() {
        let mut rows = vec![herb("toadflax", 0, 0, 0), herb("avantoe", 0, 0, 0)];
        let sort = SortState { key: "name".into(), direction: SortDirection::Asc };
        sort_rows(&mut rows, &sort);
        assert_eq!(names(&rows), vec!["avantoe", "toadflax"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let rows = vec![herb("Ranarr weed", 0, 0, 0), herb("guam leaf", 0, 0, 0)];
        assert_eq!(names(&search(&rows, "RANARR")), vec!["Ranarr weed"]);
        assert_eq!(search(&rows, "  ").len(), 2);
    }

    #[test]
    fn sort_key_validation_lists_options() {
        assert!(validate_sort_key::<HerbProfit>("cost").is_ok());
        let err = validate_sort_key::<HerbProfit>("gphr").unwrap_err();
        assert!(err.contains("name, profit, cost, sell"));
    }

    #[test]
    fn pages_round_up_with_a_floor_of_one() {
        assert_eq!(total_pages(0), 1);
        assert_eq!(total_pages(12), 1);
        assert_eq!(total_pages(13), 2);
        assert_eq!(total_pages(120), 10);
    }

    #[test]
    fn page_navigation_clamps() {
        assert_eq!(prev_page(1, 5), 1);
        assert_eq!(next_page(5, 5), 5);
        assert_eq!(next_page(2, 5), 3);
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(9, 5), 5);
        assert_eq!(clamp_page(3, 0), 1);
    }

    #[test]
    fn batch_totals_sum_filtered_rows() {
        let rows = vec![herb("a", 10, 90, 100), herb("b", -4, 50, 46)];
        let totals = batch_totals(&rows, 1_000);
        assert_eq!(totals, BatchTotals { cost: 140_000, revenue: 146_000, profit: 6_000 });
    }

    #[test]
    fn batch_totals_saturate_instead_of_overflowing() {
        let rows = vec![herb("a", -4, 90, 100), herb("b", 10, 50, 46)];
        let totals = batch_totals(&rows, i64::MAX);
        assert_eq!(totals.cost, i64::MAX);
        assert_eq!(totals.revenue, i64::MAX);
        // -4*MAX saturates low, then +10*MAX brings it back to MAX
        assert_eq!(totals.profit, i64::MAX);

        let totals = batch_totals(&[herb("c", -7, 0, 0)], i64::MAX);
        assert_eq!(totals.profit, i64::MIN);
    }
}
