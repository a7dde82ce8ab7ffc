use axum::extract::{Path, State};
use ayurveda_core::domain::{
    compatibility::entities::DoshaScoredFood, dosha::Dosha, food::ports::FoodService,
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/dosha/{dosha}",
    tag = "food",
    summary = "List foods by dosha score",
    description = "Every food with its raw score for the dosha attached as `doshaScore`, highest (most aggravating) first. An unknown dosha scores every food 0.",
    params(
        ("dosha" = String, Path, description = "Vata, Pitta or Kapha"),
    ),
    responses(
        (status = 200, body = Vec<DoshaScoredFood>)
    )
)]
pub async fn get_foods_by_dosha(
    Path(dosha): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Vec<DoshaScoredFood>>, ApiError> {
    let foods = state
        .service
        .get_foods_by_dosha(Dosha::parse_lenient(&dosha))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(foods))
}
