use axum::extract::State;
use ayurveda_core::domain::{
    common::entities::app_errors::CoreError,
    scan_history::{
        entities::{ScanMethod, ScanRecord},
        ports::ScanHistoryService,
        value_objects::RecordScanInput,
    },
};

use crate::application::http::{
    scan_history::validators::RecordScanRequest,
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
    tag = "scan-history",
    summary = "Record a scan",
    description = "Stores one scan in the user's history with the food's name, calories and thermic quality as they were at scan time.",
    request_body = RecordScanRequest,
    responses(
        (status = 200, body = ScanRecord),
        (status = 400, description = "Missing userId, foodId or method, or unknown method"),
        (status = 404, description = "Food not found")
    )
)]
pub async fn record_scan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecordScanRequest>,
) -> Result<Response<ScanRecord>, ApiError> {
    let (Some(food_id), Some(method)) = (payload.food_id, payload.method) else {
        return Err(ApiError::BadRequest("Missing foodId or method".to_string()));
    };

    let method = method
        .parse::<ScanMethod>()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let record = state
        .service
        .record_scan(RecordScanInput {
            user_id: payload.user_id,
            food_id,
            method,
            barcode: payload.barcode,
        })
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound("Food not found".to_string()),
            CoreError::Invalid => ApiError::BadRequest("userId is required".to_string()),
            e => ApiError::from(e),
        })?;

    Ok(Response::OK(record))
}
