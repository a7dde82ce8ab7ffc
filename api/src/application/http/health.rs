use axum::{Json, Router, extract::State, routing::get};
use ayurveda_core::domain::food::ports::FoodService;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use super::server::{api_entities::api_error::ApiError, app_state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub catalog_size: usize,
}

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Liveness check",
    responses(
        (status = 200, body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let foods = state.service.get_foods().await.map_err(ApiError::from)?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        catalog_size: foods.len(),
    }))
}

#[derive(OpenApi)]
#[openapi(paths(health))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{root_path}/health"), get(health))
}
