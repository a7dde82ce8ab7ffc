use axum::extract::State;
use ayurveda_core::domain::{
    common::entities::app_errors::CoreError,
    profile::{entities::UserProfile, ports::ProfileService, value_objects::UpsertProfileInput},
};

use crate::application::http::{
    profile::validators::UpsertProfileRequest,
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
    tag = "profile",
    summary = "Create or update a user's profile",
    request_body = UpsertProfileRequest,
    responses(
        (status = 200, body = UserProfile),
        (status = 400, description = "userId missing or blank")
    )
)]
pub async fn upsert_profile(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpsertProfileRequest>,
) -> Result<Response<UserProfile>, ApiError> {
    let profile = state
        .service
        .upsert_profile(UpsertProfileInput {
            user_id: payload.user_id,
            dosha: payload.dosha,
        })
        .await
        .map_err(|e| match e {
            CoreError::Invalid => ApiError::BadRequest("userId is required".to_string()),
            e => ApiError::from(e),
        })?;

    Ok(Response::OK(profile))
}
