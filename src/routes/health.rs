// ─── GET /api/health ──────────────────────────────────────────────────────────

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{models::ApiResponse, state::SharedState};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    pub status:      String,
    pub version:     String,
    pub uptime_secs: i64,
    pub started_at:  DateTime<Utc>,
}

pub async fn health_check(State(state): State<SharedState>) -> Json<ApiResponse<Health>> {
    Json(ApiResponse::ok(Health {
        status:      "ok".to_string(),
        version:     env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.uptime_secs(),
        started_at:  state.started_at,
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::tests::{app_with_upstream, call_json};

    #[tokio::test]
    async fn reports_ok_without_touching_upstream() {
        let (status, body) = call_json(app_with_upstream(None), "/api/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "ok");
        assert_eq!(body["data"]["version"], env!("CARGO_PKG_VERSION"));
        assert!(body["data"]["uptime_secs"].as_i64().unwrap() >= 0);
        assert!(body["data"]["started_at"].is_string());
    }
}
