//! # config — อ่าน Config จาก Environment Variables
//!
//! Upstream base URLs are overridable so tests (and mirrors) can point the
//! proxy at something other than the public APIs.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;

pub const DEFAULT_CATALOGUE_URL: &str = "https://secure.runescape.com/m=itemdb_oldschool/api";
pub const DEFAULT_WIKI_PRICES_URL: &str = "https://prices.runescape.wiki/api/v1/osrs";
pub const DEFAULT_GLOOP_LATEST_URL: &str = "https://api.weirdgloop.org/exchange/history/osrs/latest";

/// Upstream endpoints the proxy talks to.
#[derive(Debug, Clone)]
pub struct UpstreamUrls {
    /// Official OSRS catalogue API (items, details, graphs)
    pub catalogue:   String,
    /// OSRS Wiki real-time prices API (`/mapping`, `/latest`)
    pub wiki_prices: String,
    /// Weird Gloop `/latest` endpoint
    pub gloop_latest: String,
}

impl Default for UpstreamUrls {
    fn default() -> Self {
        Self {
            catalogue:    DEFAULT_CATALOGUE_URL.to_string(),
            wiki_prices:  DEFAULT_WIKI_PRICES_URL.to_string(),
            gloop_latest: DEFAULT_GLOOP_LATEST_URL.to_string(),
        }
    }
}

/// Config ทั้งหมดที่ server ต้องการ
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr:        SocketAddr,
    pub upstream:         UpstreamUrls,
    /// Timeout ต่อ 1 upstream request
    pub upstream_timeout: Duration,
    /// The wiki asks API consumers for a descriptive User-Agent.
    pub user_agent:       String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr:        SocketAddr::from(([0, 0, 0, 0], 3000)),
            upstream:         UpstreamUrls::default(),
            upstream_timeout: Duration::from_secs(10),
            user_agent:       default_user_agent(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr: SocketAddr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .context("BIND_ADDR must be a socket address, e.g. 0.0.0.0:3000")?;

        let timeout_secs: u64 = std::env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .context("UPSTREAM_TIMEOUT_SECS must be a number")?;

        Ok(Self {
            bind_addr,
            upstream: UpstreamUrls {
                catalogue:    env_url("OSRS_CATALOGUE_URL", DEFAULT_CATALOGUE_URL),
                wiki_prices:  env_url("OSRS_WIKI_PRICES_URL", DEFAULT_WIKI_PRICES_URL),
                gloop_latest: env_url("WEIRD_GLOOP_LATEST_URL", DEFAULT_GLOOP_LATEST_URL),
            },
            upstream_timeout: Duration::from_secs(timeout_secs),
            user_agent: std::env::var("UPSTREAM_USER_AGENT").unwrap_or_else(|_| default_user_agent()),
        })
    }
}

fn env_url(key: &str, default: &str) -> String {
    std::env::var(key)
        .map(|v| v.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| default.to_string())
}

fn default_user_agent() -> String {
    format!("ge-nexus/{}", env!("CARGO_PKG_VERSION"))
}
