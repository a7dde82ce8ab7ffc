use axum::{Json, extract::State};
use ayurveda_core::domain::compatibility::{RECOMMENDATION_LIMIT, RULESET_VERSION};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ConfigResponse {
    pub app_version: String,
    pub environment: String,
    pub ruleset_version: String,
    pub recommendation_limit: usize,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Get service configuration",
    responses(
        (status = 200, body = ConfigResponse)
    )
)]
pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.args.env.clone(),
        ruleset_version: RULESET_VERSION.to_string(),
        recommendation_limit: RECOMMENDATION_LIMIT,
    })
}
