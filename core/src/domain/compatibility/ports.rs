use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    compatibility::{
        entities::{FoodGuidance, FoodReport, ScoredRecommendation},
        value_objects::{AnalyzeFoodInput, GetFoodGuidanceInput},
    },
    dosha::Dosha,
};

/// Service trait for dosha compatibility use cases
pub trait AnalysisService: Send + Sync {
    fn analyze_food(
        &self,
        input: AnalyzeFoodInput,
    ) -> impl Future<Output = Result<FoodReport, CoreError>> + Send;

    fn get_food_guidance(
        &self,
        input: GetFoodGuidanceInput,
    ) -> impl Future<Output = Result<FoodGuidance, CoreError>> + Send;

    /// Top recommendations as plain reports. No dosha means no recommendations.
    fn get_recommendations(
        &self,
        dosha: Option<Dosha>,
    ) -> impl Future<Output = Result<Vec<FoodReport>, CoreError>> + Send;

    /// Same selection and order as `get_recommendations`, with food and score alongside.
    fn get_scored_recommendations(
        &self,
        dosha: Option<Dosha>,
    ) -> impl Future<Output = Result<Vec<ScoredRecommendation>, CoreError>> + Send;
}
