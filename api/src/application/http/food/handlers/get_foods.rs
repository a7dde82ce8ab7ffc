use axum::extract::State;
use ayurveda_core::domain::food::{entities::FoodItem, ports::FoodService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "",
    tag = "food",
    summary = "List foods",
    description = "Returns the whole catalog ordered by name.",
    responses(
        (status = 200, body = Vec<FoodItem>)
    )
)]
pub async fn get_foods(State(state): State<AppState>) -> Result<Response<Vec<FoodItem>>, ApiError> {
    let foods = state.service.get_foods().await.map_err(ApiError::from)?;

    Ok(Response::OK(foods))
}
