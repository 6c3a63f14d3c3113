//! # api — เรียก ge-nexus server แล้วแกะ envelope
//!
//! Every route answers `{ success, data | error }`.  A non-2xx status or
//! `success: false` is an [`ApiError`]; the server's `error` string is
//! preferred over the bare HTTP status text.

use std::time::Duration;

use futures_util::future::join_all;
use ge_nexus::{
    engine::skill::Skill,
    models::{
        ApiResponse, CategoryResponse, FlipOpportunity, GraphData, HerbProfit, Item,
        ItemDetailResponse, ItemsResponse, SkillProfit,
    },
    routes::health::Health,
};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::settings::Settings;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("GE Nexus server unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx answer.  `message` is the envelope's `error` when present.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// 2xx answer with `success: false` (or no `data`).
    #[error("{0}")]
    Unsuccessful(String),

    #[error("Unexpected response from {path}: {reason}")]
    Decode { path: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct NexusClient {
    http:     reqwest::Client,
    base_url: String,
}

impl NexusClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self { http, base_url: base_url.into() }
    }

    // ─── Catalogue ────────────────────────────────────────────────────────────

    pub async fn category(&self, id: u32) -> Result<CategoryResponse, ApiError> {
        self.fetch("/api/ge/category", &[("id", id.to_string())]).await
    }

    pub async fn items(&self, id: u32, alpha: &str, page: u32) -> Result<ItemsResponse, ApiError> {
        let query = [
            ("id", id.to_string()),
            ("alpha", alpha.to_string()),
            ("page", page.to_string()),
        ];
        self.fetch("/api/ge/items", &query).await
    }

    pub async fn item_detail(&self, id: u32) -> Result<ItemDetailResponse, ApiError> {
        self.fetch("/api/ge/detail", &[("id", id.to_string())]).await
    }

    pub async fn graph(&self, id: u32) -> Result<GraphData, ApiError> {
        self.fetch("/api/ge/graph", &[("id", id.to_string())]).await
    }

    /// Resolve favorite ids to catalogue items, all lookups in flight at once.
    /// Ids that fail are logged and left out; order follows `ids`.
    pub async fn favorite_items(&self, ids: &[u32]) -> Vec<Item> {
        let results = join_all(ids.iter().map(|&id| self.item_detail(id))).await;

        ids.iter()
            .zip(results)
            .filter_map(|(id, result)| match result {
                Ok(detail) => Some(detail.item.summary),
                Err(e) => {
                    warn!(id, error = %e, "⚠️ Favorite lookup failed — skipped");
                    None
                }
            })
            .collect()
    }

    // ─── Aggregations ─────────────────────────────────────────────────────────

    pub async fn flip_opportunities(
        &self,
        settings: &Settings,
    ) -> Result<Vec<FlipOpportunity>, ApiError> {
        let query = [
            ("minVolume", settings.min_volume.to_string()),
            ("taxRate", settings.tax_rate.to_string()),
            ("topN", settings.top_n.to_string()),
            ("filterBy", settings.filter_by.as_str().to_string()),
        ];
        self.fetch("/api/flip/opportunities", &query).await
    }

    pub async fn herblore_profits(&self) -> Result<Vec<HerbProfit>, ApiError> {
        self.fetch("/api/herblore/profits", &[]).await
    }

    pub async fn skill_profits(&self, skill: Skill) -> Result<Vec<SkillProfit>, ApiError> {
        self.fetch(&format!("/api/{}/profits", skill.slug()), &[]).await
    }

    pub async fn health(&self) -> Result<Health, ApiError> {
        self.fetch("/api/health", &[]).await
    }

    // ─── Transport ────────────────────────────────────────────────────────────

    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, ?query, "→ GET");

        let resp = self
            .http
            .get(&url)
            .query(query)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.bytes().await?;
        debug!(url = %url, %status, bytes = body.len(), "← response");

        if !status.is_success() {
            let message = serde_json::from_slice::<ApiResponse<serde_json::Value>>(&body)
                .ok()
                .and_then(|envelope| envelope.error)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .map(str::to_string)
                        .unwrap_or_else(|| status.to_string())
                });
            return Err(ApiError::Rejected { status, message });
        }

        let envelope: ApiResponse<T> =
            serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
                path:   path.to_string(),
                reason: e.to_string(),
            })?;

        envelope.into_result().map_err(ApiError::Unsuccessful)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{
        extract::Query,
        http::StatusCode as AxumStatus,
        routing::get,
        Json, Router,
    };
    use serde_json::json;
    use std::collections::HashMap;

    async fn spawn_mock(app: Router) -> NexusClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        NexusClient::new(reqwest::Client::new(), format!("http://{addr}"))
    }

    #[tokio::test]
    async fn unwraps_success_envelope() {
        let client = spawn_mock(Router::new().route(
            "/api/ge/category",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                assert_eq!(q["id"], "1");
                Json(json!({
                    "success": true,
                    "data": { "types": [], "alpha": [{ "letter": "#", "items": 3 }] }
                }))
            }),
        ))
        .await;

        let category = client.category(1).await.unwrap();
        assert_eq!(category.alpha[0].letter, "#");
        assert_eq!(category.alpha[0].items, 3);
    }

    #[tokio::test]
    async fn flip_query_carries_settings() {
        let client = spawn_mock(Router::new().route(
            "/api/flip/opportunities",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                let echoed = format!(
                    "{}|{}|{}|{}",
                    q["minVolume"], q["taxRate"], q["topN"], q["filterBy"]
                );
                Json(json!({ "success": true, "data": [{
                    "id": 2, "name": echoed, "buy_price": 100, "sell_price": 110,
                    "profit_per_item_gp": 8, "buy_limit": 9000, "volume_24h": 0,
                    "total_potential_profit_gp": 72000
                }]}))
            }),
        ))
        .await;

        let rows = client.flip_opportunities(&Settings::default()).await.unwrap();
        assert_eq!(rows[0].name, "100000|0.01|100|volume");
    }

    #[tokio::test]
    async fn error_envelope_message_is_preferred() {
        let client = spawn_mock(Router::new().route(
            "/api/ge/detail",
            get(|| async {
                (
                    AxumStatus::BAD_REQUEST,
                    Json(json!({ "success": false, "error": "Item ID is required" })),
                )
            }),
        ))
        .await;

        let err = client.item_detail(0).await.unwrap_err();
        assert_eq!(err.to_string(), "Item ID is required");
        assert!(matches!(err, ApiError::Rejected { status, .. } if status == StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn status_text_when_body_is_not_an_envelope() {
        let client = spawn_mock(Router::new().route(
            "/api/herblore/profits",
            get(|| async { (AxumStatus::BAD_GATEWAY, "upstream exploded") }),
        ))
        .await;

        let err = client.herblore_profits().await.unwrap_err();
        assert_eq!(err.to_string(), "Bad Gateway");
    }

    #[tokio::test]
    async fn unsuccessful_2xx_is_an_error() {
        let client = spawn_mock(Router::new().route(
            "/api/smithing/profits",
            get(|| async { Json(json!({ "success": false })) }),
        ))
        .await;

        let err = client.skill_profits(Skill::Smithing).await.unwrap_err();
        assert_eq!(err.to_string(), "API returned an unsuccessful response.");
    }

    #[tokio::test]
    async fn unreachable_server_is_transport_error() {
        let client = NexusClient::new(reqwest::Client::new(), "http://127.0.0.1:9");
        let err = client.health().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    fn detail_json(id: u32, name: &str) -> serde_json::Value {
        let price = json!({ "trend": "neutral", "price": 100 });
        let change = json!({ "trend": "neutral", "change": "0.0%" });
        json!({ "item": {
            "id": id, "name": name, "current": price, "today": price,
            "day30": change, "day90": change, "day180": change
        }})
    }

    #[tokio::test]
    async fn favorite_items_skips_failed_lookups() {
        let client = spawn_mock(Router::new().route(
            "/api/ge/detail",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                match q["id"].as_str() {
                    "4151" => (
                        AxumStatus::OK,
                        Json(json!({ "success": true, "data": detail_json(4151, "Abyssal whip") })),
                    ),
                    "2" => (
                        AxumStatus::OK,
                        Json(json!({ "success": true, "data": detail_json(2, "Cannonball") })),
                    ),
                    _ => (
                        AxumStatus::INTERNAL_SERVER_ERROR,
                        Json(json!({ "success": false, "error": "Failed to fetch item detail" })),
                    ),
                }
            }),
        ))
        .await;

        let items = client.favorite_items(&[4151, 999, 2]).await;
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Abyssal whip", "Cannonball"]);
        assert_eq!(items[1].id, 2);

        assert!(client.favorite_items(&[]).await.is_empty());
    }
}
