//! # render — แปลงข้อมูลเป็นตาราง / CSV สำหรับ terminal
//!
//! Everything returns a `String`; `main` decides where it goes.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use ge_nexus::models::{
    FlipOpportunity, GraphData, HerbProfit, Item, ItemDetail, Price, SkillProfit,
};

use crate::views::BatchTotals;

// ─── Numbers ──────────────────────────────────────────────────────────────────

/// `1_234_567` → `"1,234,567"`
pub fn thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Compact GE price: `b` / `m` with two decimals, `k` with one, otherwise
/// the full number with separators.
pub fn format_price(value: f64) -> String {
    if value >= 1_000_000_000.0 {
        format!("{:.2}b", value / 1_000_000_000.0)
    } else if value >= 1_000_000.0 {
        format!("{:.2}m", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}k", value / 1_000.0)
    } else {
        thousands(value.round() as i64)
    }
}

pub fn format_gp(value: i64) -> String {
    format_price(value as f64)
}

/// Catalogue prices may already be abbreviated (`"1.2m"`, `"12,345"`).
/// Parse what we can and re-format; anything else is shown as sent.
pub fn format_catalogue_price(price: &Price) -> String {
    match price {
        Price::Amount(v)  => format_gp(*v),
        Price::Decimal(v) => format_price(*v),
        Price::Text(s)    => parse_abbreviated(s)
            .map(format_price)
            .unwrap_or_else(|| s.trim().to_string()),
    }
}

fn parse_abbreviated(raw: &str) -> Option<f64> {
    let value = raw.trim().to_lowercase().replace(',', "");
    let (number, multiplier) = match value.chars().last()? {
        'k' => (&value[..value.len() - 1], 1_000.0),
        'm' => (&value[..value.len() - 1], 1_000_000.0),
        'b' => (&value[..value.len() - 1], 1_000_000_000.0),
        _   => (value.as_str(), 1.0),
    };
    number.parse::<f64>().ok().map(|n| n * multiplier)
}

// ─── Tables ───────────────────────────────────────────────────────────────────

pub fn flips_table(rows: &[FlipOpportunity]) -> String {
    let mut out = format!(
        "{:<28} {:>10} {:>10} {:>8} {:>8} {:>10} {:>10}\n",
        "Item", "Buy", "Sell", "Profit", "Limit", "Volume", "Total"
    );
    for r in rows {
        let _ = writeln!(
            out,
            "{:<28} {:>10} {:>10} {:>8} {:>8} {:>10} {:>10}",
            truncate(&r.name, 28),
            format_gp(r.buy_price),
            format_gp(r.sell_price),
            format_gp(r.profit_per_item_gp),
            thousands(r.buy_limit),
            format_gp(r.volume_24h),
            format_gp(r.total_potential_profit_gp),
        );
    }
    out
}

pub fn herbs_table(rows: &[HerbProfit]) -> String {
    let mut out = format!("{:<20} {:>10} {:>10} {:>10}\n", "Herb", "Cost", "Unf sell", "Profit");
    for r in rows {
        let _ = writeln!(
            out,
            "{:<20} {:>10} {:>10} {:>10}",
            truncate(&r.name, 20),
            thousands(r.cost_per_potion),
            thousands(r.sell_price_unf),
            thousands(r.profit_per_potion),
        );
    }
    out
}

pub fn skills_table(rows: &[SkillProfit]) -> String {
    let mut out = format!(
        "{:<26} {:>9} {:>9} {:>8} {:>9} {:>7}  {}\n",
        "Product", "Cost", "Revenue", "Profit", "GP/hr", "Limit", "Notes"
    );
    for r in rows {
        let _ = writeln!(
            out,
            "{:<26} {:>9} {:>9} {:>8} {:>9} {:>7}  {}",
            truncate(&r.name, 26),
            thousands(r.cost_per),
            thousands(r.revenue_per),
            thousands(r.profit_per),
            format_gp(r.gp_per_hr),
            thousands(r.limit),
            r.notes,
        );
    }
    out
}

pub fn items_table(items: &[Item], favorites: &[u32]) -> String {
    let mut out = format!("  {:>6}  {:<32} {:>10} {:>10}  {}\n", "ID", "Item", "Price", "Today", "P2P");
    for item in items {
        let star = if favorites.contains(&item.id) { '★' } else { ' ' };
        let _ = writeln!(
            out,
            "{star} {:>6}  {:<32} {:>10} {:>10}  {}",
            item.id,
            truncate(&item.name, 32),
            format_catalogue_price(&item.current.price),
            item.today.price.to_string(),
            if item.is_members() { "yes" } else { "no" },
        );
    }
    out
}

pub fn batch_line(totals: &BatchTotals, batch: i64) -> String {
    format!(
        "Batch x{}: cost {}  revenue {}  profit {}",
        thousands(batch),
        format_gp(totals.cost),
        format_gp(totals.revenue),
        format_gp(totals.profit),
    )
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut cut: String = s.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

// ─── CSV ──────────────────────────────────────────────────────────────────────

fn quoted(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

pub fn flips_csv(rows: &[FlipOpportunity]) -> String {
    let mut out = String::from(
        "id,name,buy_price,sell_price,profit_per_item_gp,buy_limit,volume_24h,total_potential_profit_gp\n",
    );
    for r in rows {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{},{}",
            r.id,
            quoted(&r.name),
            r.buy_price,
            r.sell_price,
            r.profit_per_item_gp,
            r.buy_limit,
            r.volume_24h,
            r.total_potential_profit_gp,
        );
    }
    out
}

pub fn herbs_csv(rows: &[HerbProfit]) -> String {
    let mut out =
        String::from("name,grimy_id,unf_id,cost_per_potion,sell_price_unf,profit_per_potion\n");
    for r in rows {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{}",
            quoted(&r.name),
            r.grimy_id,
            r.unf_id,
            r.cost_per_potion,
            r.sell_price_unf,
            r.profit_per_potion,
        );
    }
    out
}

pub fn skills_csv(rows: &[SkillProfit]) -> String {
    let mut out =
        String::from("name,product_id,cost_per,revenue_per,profit_per,gp_per_hr,limit,notes\n");
    for r in rows {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{},{}",
            quoted(&r.name),
            r.product_id,
            r.cost_per,
            r.revenue_per,
            r.profit_per,
            r.gp_per_hr,
            r.limit,
            quoted(&r.notes),
        );
    }
    out
}

// ─── Item detail + price history ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct GraphSummary {
    pub latest:      Option<(DateTime<Utc>, i64)>,
    pub min:         Option<i64>,
    pub max:         Option<i64>,
    pub data_points: usize,
}

impl GraphSummary {
    pub fn from_graph(graph: &GraphData) -> Self {
        let series = graph.daily_series();
        Self {
            latest:      series
                .last()
                .and_then(|&(ts, price)| DateTime::from_timestamp_millis(ts).map(|d| (d, price))),
            min:         series.iter().map(|&(_, p)| p).min(),
            max:         series.iter().map(|&(_, p)| p).max(),
            data_points: series.len(),
        }
    }
}

pub fn item_detail(detail: &ItemDetail, graph: &GraphData, favorite: bool) -> String {
    let item = &detail.summary;
    let summary = GraphSummary::from_graph(graph);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}{} (#{}){}",
        if favorite { "★ " } else { "" },
        item.name,
        item.id,
        if item.is_members() { " [members]" } else { "" },
    );
    if !item.description.is_empty() {
        let _ = writeln!(out, "{}", item.description);
    }
    let _ = writeln!(
        out,
        "Current: {} ({:?})   Today: {}",
        format_catalogue_price(&item.current.price),
        item.current.trend,
        item.today.price,
    );
    let _ = writeln!(
        out,
        "30d: {}   90d: {}   180d: {}",
        detail.day30.change, detail.day90.change, detail.day180.change,
    );

    match summary.latest {
        Some((date, price)) => {
            let _ = writeln!(
                out,
                "Latest daily: {} on {}   180d range: {} – {} ({} points)",
                format_gp(price),
                date.format("%Y-%m-%d"),
                summary.min.map(format_gp).unwrap_or_default(),
                summary.max.map(format_gp).unwrap_or_default(),
                summary.data_points,
            );
        }
        None => {
            let _ = writeln!(out, "No price history available.");
        }
    }
    out
}

// ─── Tests ────────────────────────────────────────────────────────────────────
