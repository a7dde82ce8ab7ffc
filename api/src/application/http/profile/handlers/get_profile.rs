use axum::extract::{Path, State};
use ayurveda_core::domain::{
    common::entities::app_errors::CoreError,
    profile::{entities::UserProfile, ports::ProfileService},
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{user_id}",
    tag = "profile",
    summary = "Get a user's profile",
    params(
        ("user_id" = String, Path, description = "Opaque user identifier"),
    ),
    responses(
        (status = 200, body = UserProfile),
        (status = 404, description = "Profile not found")
    )
)]
pub async fn get_profile(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<UserProfile>, ApiError> {
    let profile = state
        .service
        .get_profile(user_id)
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound("Profile not found".to_string()),
            e => ApiError::from(e),
        })?;

    Ok(Response::OK(profile))
}
