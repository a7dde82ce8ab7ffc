use super::handlers::analyze_food::{__path_analyze_food, analyze_food};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_food))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/analyze", state.args.server.root_path),
        post(analyze_food),
    )
}
