use axum::extract::{Path, State};
use ayurveda_core::domain::{
    compatibility::{entities::ScoredRecommendation, ports::AnalysisService},
    dosha::Dosha,
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{dosha}/scored",
    tag = "recommendation",
    summary = "Get scored recommendations",
    description = "Same selection as the plain listing with the food and raw score alongside each report.",
    params(
        ("dosha" = String, Path, description = "Vata, Pitta or Kapha"),
    ),
    responses(
        (status = 200, body = Vec<ScoredRecommendation>)
    )
)]
pub async fn get_scored_recommendations(
    Path(dosha): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Vec<ScoredRecommendation>>, ApiError> {
    let recommendations = state
        .service
        .get_scored_recommendations(Dosha::parse_lenient(&dosha))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(recommendations))
}
