use super::handlers::{
    get_scan_history::{__path_get_scan_history, get_scan_history},
    record_scan::{__path_record_scan, record_scan},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(record_scan, get_scan_history))]
pub struct ScanHistoryApiDoc;

pub fn scan_history_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/scan-history", state.args.server.root_path),
        post(record_scan).get(get_scan_history),
    )
}
