//! BMI calculator API routes

use crate::error::ApiError;
use crate::services::BmiService;
use crate::state::AppState;
use axum::{routing::post, Json, Router};
use bmi_companion_shared::types::{BmiResponse, CalculateBmiRequest};

/// Create BMI routes
pub fn bmi_routes() -> Router<AppState> {
    Router::new().route("/", post(calculate_bmi))
}

/// POST /api/v1/bmi - Calculate BMI from raw form input
///
/// Height accepts a `cm` or `ft` suffix (meters when bare); weight accepts
/// `kg` or `lbs` (kilograms when bare). Missing or unparsable input is a
/// 400 with the user-visible message.
async fn calculate_bmi(
    Json(req): Json<CalculateBmiRequest>,
) -> Result<Json<BmiResponse>, ApiError> {
    let reading = BmiService::evaluate(&req.height, &req.weight)?;

    Ok(Json(BmiResponse {
        bmi: reading.value,
        category: reading.category,
        category_label: reading.category.label().to_string(),
        height_m: reading.height_m,
        weight_kg: reading.weight_kg,
    }))
}
