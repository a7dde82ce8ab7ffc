use crate::application::http::{
    analysis::router::AnalysisApiDoc, food::router::FoodApiDoc, health::HealthApiDoc,
    profile::router::ProfileApiDoc, recommendation::router::RecommendationApiDoc,
    scan_history::router::ScanHistoryApiDoc,
    server::config::__path_get_config,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ayurveda Scanner API"
    ),
    paths(get_config),
    nest(
        (path = "/foods", api = FoodApiDoc),
        (path = "/analyze", api = AnalysisApiDoc),
        (path = "/recommendations", api = RecommendationApiDoc),
        (path = "/profile", api = ProfileApiDoc),
        (path = "/scan-history", api = ScanHistoryApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
