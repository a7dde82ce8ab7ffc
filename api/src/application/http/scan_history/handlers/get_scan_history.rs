use axum::extract::{Query, State};
use ayurveda_core::domain::scan_history::{entities::ScanRecord, ports::ScanHistoryService};

use crate::application::http::{
    scan_history::validators::GetScanHistoryParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "scan-history",
    summary = "Get a user's scan history",
    description = "Every scan the user recorded, oldest first. A user without scans gets an empty list.",
    params(GetScanHistoryParams),
    responses(
        (status = 200, body = Vec<ScanRecord>),
        (status = 400, description = "userId missing or blank")
    )
)]
pub async fn get_scan_history(
    State(state): State<AppState>,
    Query(params): Query<GetScanHistoryParams>,
) -> Result<Response<Vec<ScanRecord>>, ApiError> {
    let user_id = params
        .user_id
        .filter(|user_id| !user_id.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("userId is required".to_string()))?;

    let history = state
        .service
        .get_scan_history(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(history))
}
