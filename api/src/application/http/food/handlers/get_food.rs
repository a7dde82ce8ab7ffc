use axum::extract::{Path, State};
use ayurveda_core::domain::{
    common::entities::app_errors::CoreError,
    food::{entities::FoodItem, ports::FoodService},
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{food_id}",
    tag = "food",
    summary = "Get a food",
    params(
        ("food_id" = i64, Path, description = "Food ID"),
    ),
    responses(
        (status = 200, body = FoodItem),
        (status = 404, description = "Food not found")
    )
)]
pub async fn get_food(
    Path(food_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response<FoodItem>, ApiError> {
    let food = state.service.get_food(food_id).await.map_err(|e| match e {
        CoreError::NotFound => ApiError::NotFound("Food not found".to_string()),
        e => ApiError::from(e),
    })?;

    Ok(Response::OK(food))
}
