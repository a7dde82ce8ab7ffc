use super::handlers::{
    get_profile::{__path_get_profile, get_profile},
    upsert_profile::{__path_upsert_profile, upsert_profile},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_profile, upsert_profile))]
pub struct ProfileApiDoc;

pub fn profile_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/profile"), post(upsert_profile))
        .route(&format!("{root_path}/profile/{{user_id}}"), get(get_profile))
}
