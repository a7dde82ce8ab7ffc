use axum::extract::{Path, Query, State};
use ayurveda_core::domain::{
    common::entities::app_errors::CoreError,
    compatibility::{
        entities::FoodGuidance, ports::AnalysisService, value_objects::GetFoodGuidanceInput,
    },
    dosha::Dosha,
};

use crate::application::http::{
    food::validators::GetFoodGuidanceParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/{food_id}/guidance",
    tag = "food",
    summary = "Get food guidance",
    description = "Compatibility report, portion size, thermic note and meal timing for one food. Without a recognised dosha the report asks the user to pick a body type.",
    params(
        ("food_id" = i64, Path, description = "Food ID"),
        GetFoodGuidanceParams,
    ),
    responses(
        (status = 200, body = FoodGuidance),
        (status = 404, description = "Food not found")
    )
)]
pub async fn get_food_guidance(
    Path(food_id): Path<i64>,
    State(state): State<AppState>,
    Query(params): Query<GetFoodGuidanceParams>,
) -> Result<Response<FoodGuidance>, ApiError> {
    let dosha = params.dosha.as_deref().and_then(Dosha::parse_lenient);

    let guidance = state
        .service
        .get_food_guidance(GetFoodGuidanceInput { food_id, dosha })
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound("Food not found".to_string()),
            e => ApiError::from(e),
        })?;

    Ok(Response::OK(guidance))
}
