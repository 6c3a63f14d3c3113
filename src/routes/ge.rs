//! # routes::ge
//!
//! Catalogue pass-through routes.  Each validates its query, makes one
//! upstream call and wraps the payload in the envelope.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::AppError,
    models::{ApiResponse, CategoryResponse, GraphData, ItemDetailResponse, ItemsResponse},
    state::SharedState,
};

use super::{parse_or, require_id};

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ItemsQuery {
    pub id:    Option<String>,
    pub alpha: Option<String>,
    pub page:  Option<String>,
}

// ─── GET /api/ge/category ─────────────────────────────────────────────────────

pub async fn get_category(
    State(state): State<SharedState>,
    Query(q): Query<IdQuery>,
) -> Result<Json<ApiResponse<CategoryResponse>>, AppError> {
    let category = require_id(q.id.as_deref(), "Category ID")?;
    let data = state.upstream.category(category).await?;
    debug!(category, letters = data.alpha.len(), "Category fetched");
    Ok(Json(ApiResponse::ok(data)))
}

// ─── GET /api/ge/items ────────────────────────────────────────────────────────

pub async fn get_items(
    State(state): State<SharedState>,
    Query(q): Query<ItemsQuery>,
) -> Result<Json<ApiResponse<ItemsResponse>>, AppError> {
    let alpha = q.alpha.as_deref().map(str::trim).filter(|a| !a.is_empty());
    let (raw_id, alpha) = match (q.id.as_deref(), alpha) {
        (Some(id), Some(alpha)) if !id.trim().is_empty() => (id, alpha),
        _ => {
            return Err(AppError::BadRequest(
                "Category ID and alpha are required".into(),
            ))
        }
    };

    let category = require_id(Some(raw_id), "Category ID")?;
    let page: u32 = parse_or(q.page.as_deref(), 1, "page")?;
    if page == 0 {
        return Err(AppError::BadRequest("page starts at 1".into()));
    }

    let data = state.upstream.items(category, alpha, page).await?;
    debug!(category, alpha, page, total = data.total, "Items fetched");
    Ok(Json(ApiResponse::ok(data)))
}

// ─── GET /api/ge/detail ───────────────────────────────────────────────────────

pub async fn get_detail(
    State(state): State<SharedState>,
    Query(q): Query<IdQuery>,
) -> Result<Json<ApiResponse<ItemDetailResponse>>, AppError> {
    let item = require_id(q.id.as_deref(), "Item ID")?;
    let data = state.upstream.item_detail(item).await?;
    Ok(Json(ApiResponse::ok(data)))
}

// ─── GET /api/ge/graph ────────────────────────────────────────────────────────

pub async fn get_graph(
    State(state): State<SharedState>,
    Query(q): Query<IdQuery>,
) -> Result<Json<ApiResponse<GraphData>>, AppError> {
    let item = require_id(q.id.as_deref(), "Item ID")?;
    let data = state.upstream.graph(item).await?;
    Ok(Json(ApiResponse::ok(data)))
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, routing::get, Json, Router};
    use serde_json::json;

    use crate::routes::tests::{app_with_upstream, call_json};
    use crate::upstream::tests::spawn_mock;

    async fn catalogue_mock() -> String {
        let app = Router::new()
            .route(
                "/catalogue/category.json",
                get(|| async {
                    Json(json!({ "types": [], "alpha": [{ "letter": "a", "items": 120 }] }))
                }),
            )
            .route(
                "/catalogue/detail.json",
                get(|| async { axum::http::StatusCode::NOT_FOUND }),
            );
        spawn_mock(app).await
    }

    #[tokio::test]
    async fn category_requires_id() {
        let (status, body) = call_json(app_with_upstream(None), "/api/ge/category").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "success": false, "error": "Category ID is required" }));
    }

    #[tokio::test]
    async fn items_requires_id_and_alpha() {
        let (status, body) = call_json(app_with_upstream(None), "/api/ge/items?id=1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Category ID and alpha are required");
    }

    #[tokio::test]
    async fn items_rejects_page_zero() {
        let (status, _) =
            call_json(app_with_upstream(None), "/api/ge/items?id=1&alpha=a&page=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn category_is_wrapped_in_envelope() {
        let base = catalogue_mock().await;
        let (status, body) =
            call_json(app_with_upstream(Some(&base)), "/api/ge/category?id=1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["alpha"][0], json!({ "letter": "a", "items": 120 }));
    }

    #[tokio::test]
    async fn upstream_404_becomes_500_envelope() {
        let base = catalogue_mock().await;
        let (status, body) =
            call_json(app_with_upstream(Some(&base)), "/api/ge/detail?id=4151").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Failed to fetch item detail: 404 Not Found");
    }

    #[tokio::test]
    async fn unreachable_upstream_is_500() {
        let (status, body) = call_json(app_with_upstream(None), "/api/ge/graph?id=2").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().starts_with("Failed to fetch graph data"));
    }
}
