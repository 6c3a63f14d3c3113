//! # routes
//!
//! The local `/api/*` surface.
//!
//! | Method | Path                                   | Upstream                       |
//! |--------|----------------------------------------|--------------------------------|
//! | GET    | `/api/ge/category?id=`                 | catalogue `category.json`      |
//! | GET    | `/api/ge/items?id=&alpha=&page=`       | catalogue `items.json`         |
//! | GET    | `/api/ge/detail?id=`                   | catalogue `detail.json`        |
//! | GET    | `/api/ge/graph?id=`                    | catalogue `graph/{id}.json`    |
//! | GET    | `/api/flip/opportunities`              | wiki `/mapping` + `/latest`    |
//! | GET    | `/api/herblore/profits`                | Weird Gloop `/latest`          |
//! | GET    | `/api/{skill}/profits`                 | wiki `/mapping` + `/latest`    |
//! | GET    | `/api/health`                          | —                              |

pub mod flip;
pub mod ge;
pub mod health;
pub mod skills;

use axum::{http::Uri, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    engine::skill::Skill,
    error::AppError,
    request_id::assign_request_id,
    state::SharedState,
};

/// Build the full application router, middleware included.
pub fn build_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new()
        // ── Catalogue ─────────────────────────────────────────────────────────
        .route("/api/ge/category",        get(ge::get_category))
        .route("/api/ge/items",           get(ge::get_items))
        .route("/api/ge/detail",          get(ge::get_detail))
        .route("/api/ge/graph",           get(ge::get_graph))
        // ── Aggregations ──────────────────────────────────────────────────────
        .route("/api/flip/opportunities", get(flip::get_opportunities))
        .route("/api/herblore/profits",   get(skills::get_herblore_profits))
        // ── Health ────────────────────────────────────────────────────────────
        .route("/api/health",             get(health::health_check));

    for skill in Skill::ALL {
        app = app.route(&format!("/api/{}/profits", skill.slug()), skills::skill_route(skill));
    }

    app.fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(axum::middleware::from_fn(assign_request_id)),
        )
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

// ─── Query helpers ────────────────────────────────────────────────────────────

/// Parse a required numeric id, distinguishing "missing" from "malformed".
pub(crate) fn require_id(raw: Option<&str>, label: &str) -> Result<u32, AppError> {
    let raw = raw
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("{label} is required")))?;

    raw.parse::<u32>()
        .map_err(|_| AppError::BadRequest(format!("{label} must be a non-negative integer")))
}

/// Parse an optional query value, falling back to `default` when absent.
pub(crate) fn parse_or<T: std::str::FromStr>(
    raw: Option<&str>,
    default: T,
    name: &str,
) -> Result<T, AppError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(default),
        Some(v) => v
            .parse::<T>()
            .map_err(|_| AppError::BadRequest(format!("Invalid value for {name}: '{v}'"))),
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
