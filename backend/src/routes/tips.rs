//! Fitness tip API routes

use crate::error::ApiError;
use crate::services::TipsService;
use crate::state::AppState;
use axum::{extract::Query, routing::get, Json, Router};
use bmi_companion_shared::tips::TipCategory;
use bmi_companion_shared::types::{RandomTipResponse, TipsQuery, TipsResponse};

/// Create tip routes
pub fn tips_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tips))
        .route("/random", get(random_tip))
}

/// Parse the category query parameter, defaulting to `both` when absent
fn parse_category(query: &TipsQuery) -> Result<TipCategory, ApiError> {
    match query.category.as_deref() {
        None => Ok(TipCategory::default()),
        Some(raw) => raw.parse().map_err(ApiError::Validation),
    }
}

/// GET /api/v1/tips - The daily tip list for a category
async fn list_tips(Query(query): Query<TipsQuery>) -> Result<Json<TipsResponse>, ApiError> {
    let category = parse_category(&query)?;
    let tips = TipsService::daily_tips(category)
        .into_iter()
        .map(String::from)
        .collect();

    Ok(Json(TipsResponse { category, tips }))
}

/// GET /api/v1/tips/random - One uniformly random tip from the daily list
async fn random_tip(Query(query): Query<TipsQuery>) -> Result<Json<RandomTipResponse>, ApiError> {
    let category = parse_category(&query)?;
    let tip = TipsService::random_tip(category)
        .ok_or_else(|| ApiError::NotFound(format!("No tips available for {}", category)))?;

    Ok(Json(RandomTipResponse {
        category,
        tip: tip.to_string(),
    }))
}
