use axum::extract::{Path, State};
use ayurveda_core::domain::{
    compatibility::{entities::FoodReport, ports::AnalysisService},
    dosha::Dosha,
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{dosha}",
    tag = "recommendation",
    summary = "Get recommendations",
    description = "Up to ten foods that pacify the dosha, most pacifying first. An unknown dosha yields an empty list.",
    params(
        ("dosha" = String, Path, description = "Vata, Pitta or Kapha"),
    ),
    responses(
        (status = 200, body = Vec<FoodReport>)
    )
)]
pub async fn get_recommendations(
    Path(dosha): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Vec<FoodReport>>, ApiError> {
    let reports = state
        .service
        .get_recommendations(Dosha::parse_lenient(&dosha))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(reports))
}
