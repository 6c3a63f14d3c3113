//! # routes::flip
//!
//! `GET /api/flip/opportunities?minVolume=&taxRate=&topN=&filterBy=`

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::{
    engine::flip::{find_opportunities, FlipParams, ThresholdField},
    error::AppError,
    models::{ApiResponse, FlipOpportunity},
    state::SharedState,
};

use super::parse_or;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlipQuery {
    pub min_volume: Option<String>,
    pub tax_rate:   Option<String>,
    pub top_n:      Option<String>,
    pub filter_by:  Option<String>,
}

impl FlipQuery {
    pub fn into_params(self) -> Result<FlipParams, AppError> {
        let defaults = FlipParams::default();

        let tax_rate: f64 = parse_or(self.tax_rate.as_deref(), defaults.tax_rate, "taxRate")?;
        if !(0.0..1.0).contains(&tax_rate) {
            return Err(AppError::BadRequest("taxRate must be in [0, 1)".into()));
        }

        let filter_by = match self.filter_by.as_deref().map(str::trim) {
            None | Some("") => ThresholdField::default(),
            Some(v) => v.parse::<ThresholdField>().map_err(AppError::BadRequest)?,
        };

        Ok(FlipParams {
            min_threshold: parse_or(self.min_volume.as_deref(), defaults.min_threshold, "minVolume")?,
            tax_rate,
            top_n: parse_or(self.top_n.as_deref(), defaults.top_n, "topN")?,
            filter_by,
        })
    }
}

pub async fn get_opportunities(
    State(state): State<SharedState>,
    Query(q): Query<FlipQuery>,
) -> Result<Json<ApiResponse<Vec<FlipOpportunity>>>, AppError> {
    let params = q.into_params()?;

    let (mapping, latest) = state.upstream.mapping_and_latest().await?;
    let opportunities = find_opportunities(&mapping, &latest.data, &params);

    info!(
        mapped    = mapping.len(),
        priced    = latest.data.len(),
        returned  = opportunities.len(),
        threshold = params.min_threshold,
        filter_by = ?params.filter_by,
        "💰 Flip opportunities computed"
    );

    Ok(Json(ApiResponse::ok(opportunities)))
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{http::StatusCode, routing::get, Router};
    use serde_json::{json, Value};

    use crate::routes::tests::{app_with_upstream, call_json};
    use crate::upstream::tests::spawn_mock;

    async fn wiki_mock() -> String {
        let app = Router::new()
            .route(
                "/mapping",
                get(|| async {
                    Json(json!([
                        { "id": 2,    "name": "Cannonball", "limit": 9000 },
                        { "id": 453,  "name": "Coal",       "limit": 13000 },
                        { "id": 4151, "name": "Abyssal whip", "limit": 70 },
                        { "id": 1,    "name": "Toolkit" }
                    ]))
                }),
            )
            .route(
                "/latest",
                get(|| async {
                    Json(json!({ "data": {
                        "2":    { "high": 110,     "low": 100,     "highPriceVolume": 500000 },
                        "453":  { "high": 160,     "low": 150,     "highPriceVolume": 900000 },
                        "4151": { "high": 1600000, "low": 1500000, "highPriceVolume": 2000 },
                        "1":    { "high": 50,      "low": 10 }
                    }}))
                }),
            );
        spawn_mock(app).await
    }

    fn ids(body: &Value) -> Vec<u64> {
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["id"].as_u64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn default_volume_filter() {
        let base = wiki_mock().await;
        let (status, body) =
            call_json(app_with_upstream(Some(&base)), "/api/flip/opportunities").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        // whip volume 2000 < 100000; toolkit has no volume
        assert_eq!(ids(&body), vec![453, 2]);
        assert_eq!(body["data"][1]["profit_per_item_gp"], 8);
        assert_eq!(body["data"][1]["total_potential_profit_gp"], 72000);
    }

    #[tokio::test]
    async fn limit_filter_and_top_n() {
        let base = wiki_mock().await;
        let (_, body) = call_json(
            app_with_upstream(Some(&base)),
            "/api/flip/opportunities?minVolume=50&filterBy=limit&topN=2&taxRate=0.02",
        )
        .await;

        // totals: coal 6*13000=78000, whip 68000*70=4760000, cannonball 7*9000=63000
        assert_eq!(ids(&body), vec![4151, 453]);
        assert!(body["data"]
            .as_array()
            .unwrap()
            .iter()
            .all(|o| o["buy_limit"].as_i64().unwrap() >= 50));
    }

    #[tokio::test]
    async fn rejects_bad_parameters() {
        let app = app_with_upstream(None);
        let (status, body) = call_json(app.clone(), "/api/flip/opportunities?taxRate=2").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);

        let (status, _) = call_json(app.clone(), "/api/flip/opportunities?topN=many").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) =
            call_json(app, "/api/flip/opportunities?filterBy=margin").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("filterBy"));
    }

    #[test]
    fn query_defaults() {
        let q = FlipQuery { min_volume: None, tax_rate: None, top_n: None, filter_by: None };
        assert_eq!(q.into_params().unwrap(), FlipParams::default());
    }
}
