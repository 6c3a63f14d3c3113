//! # routes::skills
//!
//! Profit tables: herblore (priced from Weird Gloop) and the recipe-driven
//! processing skills (priced from the wiki mapping + latest).

use axum::{
    extract::State,
    routing::{get, MethodRouter},
    Json,
};
use tracing::info;

use crate::{
    engine::{
        herblore::{herb_profits, price_ids},
        skill::{skill_profits, Skill},
    },
    error::AppError,
    models::{ApiResponse, HerbProfit, SkillProfit},
    state::SharedState,
};

// ─── GET /api/herblore/profits ────────────────────────────────────────────────

pub async fn get_herblore_profits(
    State(state): State<SharedState>,
) -> Result<Json<ApiResponse<Vec<HerbProfit>>>, AppError> {
    let prices = state.upstream.gloop_latest(&price_ids()).await?;
    let profits = herb_profits(&prices)?;

    info!(priced = prices.len(), herbs = profits.len(), "🌿 Herblore profits computed");
    Ok(Json(ApiResponse::ok(profits)))
}

// ─── GET /api/{skill}/profits ─────────────────────────────────────────────────

/// One `GET` handler per skill; the skill is fixed when the route is built.
pub fn skill_route(skill: Skill) -> MethodRouter<SharedState> {
    get(move |State(state): State<SharedState>| get_skill_profits(state, skill))
}

async fn get_skill_profits(
    state: SharedState,
    skill: Skill,
) -> Result<Json<ApiResponse<Vec<SkillProfit>>>, AppError> {
    let (mapping, latest) = state.upstream.mapping_and_latest().await?;
    let profits = skill_profits(skill.recipes(), &mapping, &latest.data);

    info!(
        %skill,
        recipes    = skill.recipes().len(),
        profitable = profits.len(),
        "🔨 Skill profits computed"
    );
    Ok(Json(ApiResponse::ok(profits)))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
