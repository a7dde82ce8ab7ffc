use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food::entities::FoodItem;

/// Verdict for one food against one dosha. Ranking never orders by this
/// label, only by the raw score behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityTier {
    Good,
    Neutral,
    Avoid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodReport {
    pub food: FoodItem,
    pub compatibility: CompatibilityTier,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScoredRecommendation {
    pub food: FoodItem,
    pub score: i32,
    pub report: FoodReport,
}

/// A catalog food with the selected dosha's raw score attached for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DoshaScoredFood {
    #[serde(flatten)]
    pub food: FoodItem,
    pub dosha_score: i32,
}

/// Everything the report screen shows for one food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodGuidance {
    pub report: FoodReport,
    pub portion_size: String,
    pub thermic_description: String,
    pub recommended_time: String,
}
