//! # favorites — รายการ item ที่ติดดาวไว้
//!
//! Stored as a JSON array of item ids.  Every change rewrites the whole
//! array.  Unreadable or corrupt storage reads as an empty list.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
    ids:  Vec<u32>,
}

impl FavoritesStore {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let ids = read_ids(&path);
        debug!(count = ids.len(), path = %path.display(), "Favorites loaded");
        Self { path, ids }
    }

    pub fn list(&self) -> &[u32] {
        &self.ids
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Returns `false` when `id` was already a favorite.
    pub fn add(&mut self, id: u32) -> anyhow::Result<bool> {
        if self.contains(id) {
            return Ok(false);
        }
        self.ids.push(id);
        self.persist()?;
        Ok(true)
    }

    /// Returns `false` when `id` was not a favorite.
    pub fn remove(&mut self, id: u32) -> anyhow::Result<bool> {
        let before = self.ids.len();
        self.ids.retain(|&x| x != id);
        if self.ids.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Flip membership of `id`; returns whether it is a favorite afterwards.
    pub fn toggle(&mut self, id: u32) -> anyhow::Result<bool> {
        if self.contains(id) {
            self.remove(id)?;
            Ok(false)
        } else {
            self.add(id)?;
            Ok(true)
        }
    }

    fn persist(&self) -> anyhow::Result<()> {
        let json = serde_json::to_string(&self.ids)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write favorites to {}", self.path.display()))
    }
}

fn read_ids(path: &Path) -> Vec<u32> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!(error = %e, path = %path.display(), "Favorites unreadable — starting empty");
            return Vec::new();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        warn!(error = %e, path = %path.display(), "Favorites corrupt — starting empty");
        Vec::new()
    })
}

// ─── Tests ────────────────────────────────────────────────────────────────────
