use super::handlers::{
    get_food::{__path_get_food, get_food},
    get_food_guidance::{__path_get_food_guidance, get_food_guidance},
    get_foods::{__path_get_foods, get_foods},
    get_foods_by_dosha::{__path_get_foods_by_dosha, get_foods_by_dosha},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_foods, get_food, get_food_guidance, get_foods_by_dosha))]
pub struct FoodApiDoc;

pub fn food_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/foods"), get(get_foods))
        .route(&format!("{root_path}/foods/{{food_id}}"), get(get_food))
        .route(
            &format!("{root_path}/foods/{{food_id}}/guidance"),
            get(get_food_guidance),
        )
        .route(
            &format!("{root_path}/foods/dosha/{{dosha}}"),
            get(get_foods_by_dosha),
        )
}
