//! # upstream
//!
//! **Upstream client** — the only place that talks to the public APIs.
//!
//! Every call follows the same contract:
//!
//! 1. `GET` with the configured timeout (ห้ามรอนานเกิน `UPSTREAM_TIMEOUT_SECS`)
//! 2. non-2xx → [`AppError::Upstream`] with a generic message
//! 3. body parse failure → [`AppError::Upstream`]
//!
//! The only retry in the system lives here as well: Weird Gloop sometimes
//! answers `403` to bursts, so that call is retried a bounded number of times
//! (see [`UpstreamClient::get_json_retrying_forbidden`]).

pub mod catalogue;
pub mod gloop;
pub mod wiki;

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::{config::UpstreamUrls, error::AppError};

/// Attempts (including the first) before a 403 is surfaced as an error.
pub const FORBIDDEN_MAX_ATTEMPTS: u32 = 3;
/// Pause between 403 retries.
pub const FORBIDDEN_RETRY_DELAY: Duration = Duration::from_millis(300);

/// Thin wrapper over a shared `reqwest::Client` (connection pooling) plus the
/// upstream base URLs.  Cheap to clone.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http:    reqwest::Client,
    urls:    UpstreamUrls,
    timeout: Duration,
}

impl UpstreamClient {
    pub fn new(http: reqwest::Client, urls: UpstreamUrls, timeout: Duration) -> Self {
        Self { http, urls, timeout }
    }

    pub fn urls(&self) -> &UpstreamUrls {
        &self.urls
    }

    /// GET `url` and decode a JSON body.  `what` names the resource in the
    /// error message ("category data", "latest prices", ...).
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
        what: &str,
    ) -> Result<T, AppError> {
        let response = self.send(url, query, what).await?;
        decode(response, url, what).await
    }

    /// Same as [`get_json`](Self::get_json) but a `403 Forbidden` is retried
    /// up to [`FORBIDDEN_MAX_ATTEMPTS`] times, [`FORBIDDEN_RETRY_DELAY`]
    /// apart.  Any other status is final on the first attempt.
    pub async fn get_json_retrying_forbidden<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
        what: &str,
    ) -> Result<T, AppError> {
        let mut attempt = 1;
        loop {
            let response = self.send(url, query, what).await?;

            if response.status() == StatusCode::FORBIDDEN && attempt < FORBIDDEN_MAX_ATTEMPTS {
                warn!(attempt, url, "Upstream answered 403 — retrying");
                tokio::time::sleep(FORBIDDEN_RETRY_DELAY).await;
                attempt += 1;
                continue;
            }

            return decode(response, url, what).await;
        }
    }

    async fn send(
        &self,
        url: &str,
        query: &[(&str, String)],
        what: &str,
    ) -> Result<reqwest::Response, AppError> {
        debug!(url, ?query, "→ upstream GET");

        self.http
            .get(url)
            .query(query)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, url, "Upstream unreachable");
                AppError::Upstream(format!("Failed to fetch {what}: {e}"))
            })
    }
}

async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
    url: &str,
    what: &str,
) -> Result<T, AppError> {
    let status = response.status();
    if !status.is_success() {
        error!(http_status = %status, url, "Upstream returned HTTP error");
        return Err(AppError::Upstream(format!("Failed to fetch {what}: {status}")));
    }

    response.json::<T>().await.map_err(|e| {
        error!(error = %e, url, "Upstream response parse failed");
        AppError::Upstream(format!("Failed to parse {what}: {e}"))
    })
}

// ─── Tests ────────────────────────────────────────────────────────────────────
