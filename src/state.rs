//! # state
//!
//! The proxy is stateless between requests; `AppState` only carries what is
//! built once at startup and shared read-only by every handler.

use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Utc};

use crate::{config::Config, upstream::UpstreamClient};

// ─── AppState ─────────────────────────────────────────────────────────────────

/// Top-level shared state injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    /// reqwest Client ที่ share กันทั้งระบบ (connection pooling)
    /// สร้างครั้งเดียว ไม่ต้องสร้างใหม่ทุก Request
    pub upstream: UpstreamClient,

    /// Reported by `/api/health`.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to build HTTP client")?;

        let upstream = UpstreamClient::new(http, config.upstream.clone(), config.upstream_timeout);

        Ok(Self {
            config: Arc::new(config),
            upstream,
            started_at: Utc::now(),
        })
    }

    pub fn uptime_secs(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}

/// Convenience type alias
pub type SharedState = Arc<AppState>;

pub fn build_state(config: Config) -> anyhow::Result<SharedState> {
    Ok(Arc::new(AppState::new(config)?))
}
