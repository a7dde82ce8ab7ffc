use tracing::{debug, info};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    compatibility::{
        advisors::guidance,
        classifier::classify,
        entities::{FoodGuidance, FoodReport, ScoredRecommendation},
        ports::AnalysisService,
        ranking::rank_scored,
        value_objects::{AnalyzeFoodInput, GetFoodGuidanceInput},
    },
    dosha::Dosha,
    food::ports::FoodRepository,
    profile::ports::ProfileRepository,
    scan_history::ports::ScanHistoryRepository,
};

impl<F, P, S> AnalysisService for Service<F, P, S>
where
    F: FoodRepository,
    P: ProfileRepository,
    S: ScanHistoryRepository,
{
    async fn analyze_food(&self, input: AnalyzeFoodInput) -> Result<FoodReport, CoreError> {
        let food = self
            .food_repository
            .get_by_id(input.food_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let report = classify(&food, Some(input.dosha));

        info!(
            food_id = food.id,
            dosha = %input.dosha,
            compatibility = ?report.compatibility,
            "food analyzed"
        );

        Ok(report)
    }

    async fn get_food_guidance(
        &self,
        input: GetFoodGuidanceInput,
    ) -> Result<FoodGuidance, CoreError> {
        let food = self
            .food_repository
            .get_by_id(input.food_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        Ok(guidance(&food, input.dosha))
    }

    async fn get_recommendations(&self, dosha: Option<Dosha>) -> Result<Vec<FoodReport>, CoreError> {
        let recommendations = self.get_scored_recommendations(dosha).await?;

        Ok(recommendations
            .into_iter()
            .map(|item| item.report)
            .collect())
    }

    async fn get_scored_recommendations(
        &self,
        dosha: Option<Dosha>,
    ) -> Result<Vec<ScoredRecommendation>, CoreError> {
        let Some(dosha) = dosha else {
            debug!("no dosha selected, returning no recommendations");
            return Ok(Vec::new());
        };

        let catalog = self.food_repository.list_foods().await?;
        let recommendations = rank_scored(&catalog, dosha);

        debug!(
            dosha = %dosha,
            catalog_size = catalog.len(),
            recommended = recommendations.len(),
            "recommendations ranked"
        );

        Ok(recommendations)
    }
}
