//! # config — อ่าน Config จาก Environment Variables

use std::path::PathBuf;

use anyhow::bail;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_FAVORITES_PATH: &str = "ge-nexus-favorites.json";
pub const DEFAULT_SETTINGS_PATH: &str = "ge-nexus-settings.json";

/// Config ทั้งหมดที่ terminal ต้องการ
#[derive(Debug, Clone)]
pub struct Config {
    /// URL ของ ge-nexus server
    pub api_url:        String,
    /// JSON array ของ favorite item ids
    pub favorites_path: PathBuf,
    /// Persisted [`crate::settings::Settings`]
    pub settings_path:  PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_url = std::env::var("NEXUS_API_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            bail!("NEXUS_API_URL must start with http:// or https:// (got '{api_url}')");
        }

        Ok(Self {
            api_url,
            favorites_path: std::env::var("NEXUS_FAVORITES_PATH")
                .unwrap_or_else(|_| DEFAULT_FAVORITES_PATH.to_string())
                .into(),
            settings_path:  std::env::var("NEXUS_SETTINGS_PATH")
                .unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_string())
                .into(),
        })
    }
}
