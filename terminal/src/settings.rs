//! # settings — ค่าที่ผู้ใช้ปรับได้ (persisted เป็น JSON)
//!
//! Loaded from the settings file, then overridden per invocation by flags.
//! A missing or unreadable file falls back to the defaults.

use std::path::Path;

use anyhow::{bail, Context};
use ge_nexus::engine::flip::{FlipParams, ThresholdField};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Upper bound for `batch`; keeps totals well inside `i64`.
pub const MAX_BATCH_QUANTITY: i64 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Flip threshold (volume or limit, see `filter_by`)
    pub min_volume:     i64,
    pub tax_rate:       f64,
    pub top_n:          usize,
    /// Quantity used for the batch totals under profit tables
    pub batch_quantity: i64,
    pub filter_by:      ThresholdField,
}

impl Default for Settings {
    fn default() -> Self {
        let flip = FlipParams::default();
        Self {
            min_volume:     flip.min_threshold,
            tax_rate:       flip.tax_rate,
            top_n:          flip.top_n,
            batch_quantity: 1_000,
            filter_by:      flip.filter_by,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Settings unreadable — using defaults");
                return Self::default();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(error = %e, path = %path.display(), "Settings corrupt — using defaults");
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write settings to {}", path.display()))
    }

    /// Apply one `key value` pair (flag or `settings set`), validating it.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let value = value.trim();
        match key {
            "min-volume" | "min_volume" => {
                self.min_volume = value.parse().context("min-volume must be an integer")?;
            }
            "tax-rate" | "tax_rate" => {
                let rate: f64 = value.parse().context("tax-rate must be a number")?;
                if !(0.0..1.0).contains(&rate) {
                    bail!("tax-rate must be in [0, 1)");
                }
                self.tax_rate = rate;
            }
            "top" | "top-n" | "top_n" => {
                self.top_n = value.parse().context("top must be a non-negative integer")?;
            }
            "batch" | "batch-quantity" | "batch_quantity" => {
                let qty: i64 = value.parse().context("batch must be an integer")?;
                if !(1..=MAX_BATCH_QUANTITY).contains(&qty) {
                    bail!("batch must be between 1 and {MAX_BATCH_QUANTITY}");
                }
                self.batch_quantity = qty;
            }
            "filter-by" | "filter_by" => {
                self.filter_by = value.parse().map_err(anyhow::Error::msg)?;
            }
            other => bail!("Unknown setting: '{other}'"),
        }
        Ok(())
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
