use axum::extract::State;
use ayurveda_core::domain::{
    common::entities::app_errors::CoreError,
    compatibility::{entities::FoodReport, ports::AnalysisService, value_objects::AnalyzeFoodInput},
    dosha::Dosha,
};

use crate::application::http::{
    analysis::validators::AnalyzeFoodRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "analysis",
    summary = "Analyze a food",
    description = "Classifies one catalog food against a dosha.",
    request_body = AnalyzeFoodRequest,
    responses(
        (status = 200, body = FoodReport),
        (status = 400, description = "Missing field or unknown dosha"),
        (status = 404, description = "Food not found")
    )
)]
pub async fn analyze_food(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeFoodRequest>,
) -> Result<Response<FoodReport>, ApiError> {
    let (Some(food_id), Some(dosha)) = (payload.food_id, payload.dosha) else {
        return Err(ApiError::BadRequest("Missing foodId or dosha".to_string()));
    };

    let dosha = dosha
        .parse::<Dosha>()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let report = state
        .service
        .analyze_food(AnalyzeFoodInput { food_id, dosha })
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound("Food not found".to_string()),
            e => ApiError::from(e),
        })?;

    Ok(Response::OK(report))
}
