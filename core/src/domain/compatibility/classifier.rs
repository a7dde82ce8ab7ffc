use crate::domain::{
    compatibility::entities::{CompatibilityTier, FoodReport},
    dosha::Dosha,
    food::entities::FoodItem,
};

/// Bumped whenever a threshold or message in the rule table changes.
pub const RULESET_VERSION: &str = "1.0.0";

pub const NO_DOSHA_MESSAGE: &str = "Set your body type to get personalized recommendations";

/// Classifies a food for a dosha.
///
/// Without a dosha the result is always `Neutral` with a prompt to pick one.
/// Otherwise the food's score for that dosha is bucketed into half-open ranges:
///
/// | score          | tier      |
/// |----------------|-----------|
/// | `< -1`         | `Good`    |
/// | `-1`           | `Good`    |
/// | `0`            | `Neutral` |
/// | `1`            | `Neutral` |
/// | `> 1`          | `Avoid`   |
///
/// The avoid message does not carry the food's own recommendations text.
pub fn classify(food: &FoodItem, dosha: Option<Dosha>) -> FoodReport {
    let Some(dosha) = dosha else {
        return FoodReport {
            food: food.clone(),
            compatibility: CompatibilityTier::Neutral,
            message: NO_DOSHA_MESSAGE.to_string(),
        };
    };

    let (compatibility, message) = verdict(dosha.score_of(food), dosha, &food.recommendations);

    FoodReport {
        food: food.clone(),
        compatibility,
        message,
    }
}

fn verdict(score: i32, dosha: Dosha, recommendations: &str) -> (CompatibilityTier, String) {
    if score < -1 {
        (
            CompatibilityTier::Good,
            format!("✓ Excellent for your {dosha} type! {recommendations}"),
        )
    } else if score < 0 {
        (
            CompatibilityTier::Good,
            format!("✓ Good for your {dosha} type. {recommendations}"),
        )
    } else if score == 0 {
        (
            CompatibilityTier::Neutral,
            format!("○ Neutral for your {dosha} type. {recommendations}"),
        )
    } else if score <= 1 {
        (
            CompatibilityTier::Neutral,
            format!("○ Slightly heavy for {dosha}. Enjoy in moderation. {recommendations}"),
        )
    } else {
        (
            CompatibilityTier::Avoid,
            format!(
                "✗ May aggravate {dosha}. Consider alternatives or balance with cooling foods."
            ),
        )
    }
}
