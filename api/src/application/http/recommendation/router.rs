use super::handlers::{
    get_recommendations::{__path_get_recommendations, get_recommendations},
    get_scored_recommendations::{__path_get_scored_recommendations, get_scored_recommendations},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_recommendations, get_scored_recommendations))]
pub struct RecommendationApiDoc;

pub fn recommendation_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/recommendations/{{dosha}}"),
            get(get_recommendations),
        )
        .route(
            &format!("{root_path}/recommendations/{{dosha}}/scored"),
            get(get_scored_recommendations),
        )
}

#[cfg(test)]
mod tests {
    use ayurveda_core::domain::compatibility::{
        CompatibilityTier, FoodReport, ScoredRecommendation,
    };
    use test_context::test_context;

    use crate::application::http::test_context::TestApp;

    #[test_context(TestApp)]
    #[tokio::test]
    async fn test_pitta_recommendations_keep_catalog_order_on_ties(ctx: &mut TestApp) {
        let response = ctx.server.get("/api/recommendations/Pitta").await;

        response.assert_status_ok();
        let reports: Vec<FoodReport> = response.json();
        let names: Vec<&str> = reports.iter().map(|r| r.food.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Dal (Lentil Curry)", "Idli (Steamed Cake)", "Dosa (Crepe)"]
        );
        assert!(
            reports
                .iter()
                .all(|r| r.compatibility == CompatibilityTier::Good)
        );
    }

    #[test_context(TestApp)]
    #[tokio::test]
    async fn test_vata_recommendations_most_pacifying_first(ctx: &mut TestApp) {
        let response = ctx.server.get("/api/recommendations/vata").await;

        response.assert_status_ok();
        let reports: Vec<FoodReport> = response.json();
        let names: Vec<&str> = reports.iter().map(|r| r.food.name.as_str()).collect();
        assert_eq!(names, vec!["Dal (Lentil Curry)", "Roti (Wheat Bread)"]);
        assert!(reports[0].message.starts_with("✓ Excellent for your Vata type!"));
    }

    #[test_context(TestApp)]
    #[tokio::test]
    async fn test_unknown_dosha_has_no_recommendations(ctx: &mut TestApp) {
        let response = ctx.server.get("/api/recommendations/fire").await;

        response.assert_status_ok();
        let reports: Vec<FoodReport> = response.json();
        assert!(reports.is_empty());
    }

    #[test_context(TestApp)]
    #[tokio::test]
    async fn test_scored_recommendations_carry_raw_score(ctx: &mut TestApp) {
        let response = ctx.server.get("/api/recommendations/Pitta/scored").await;

        response.assert_status_ok();
        let recommendations: Vec<ScoredRecommendation> = response.json();
        let rows: Vec<(&str, i32)> = recommendations
            .iter()
            .map(|r| (r.food.name.as_str(), r.score))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Dal (Lentil Curry)", -1),
                ("Idli (Steamed Cake)", -1),
                ("Dosa (Crepe)", -1),
            ]
        );
        assert!(recommendations.iter().all(|r| r.food == r.report.food));
    }

    #[test_context(TestApp)]
    #[tokio::test]
    async fn test_kapha_has_no_pacifying_seed_foods(ctx: &mut TestApp) {
        let response = ctx.server.get("/api/recommendations/Kapha/scored").await;

        response.assert_status_ok();
        let recommendations: Vec<ScoredRecommendation> = response.json();
        assert!(recommendations.is_empty());
    }
}
