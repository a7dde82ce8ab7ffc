use crate::domain::{
    compatibility::{
        classifier::classify,
        entities::{CompatibilityTier, DoshaScoredFood, FoodReport, ScoredRecommendation},
    },
    dosha::Dosha,
    food::entities::FoodItem,
};

pub const RECOMMENDATION_LIMIT: usize = 10;

/// Top `good` foods for a dosha, most beneficial (lowest score) first.
///
/// Equal scores keep catalog order: the sort is stable and has no tie-breaker.
pub fn rank_scored(catalog: &[FoodItem], dosha: Dosha) -> Vec<ScoredRecommendation> {
    let mut recommendations: Vec<ScoredRecommendation> = catalog
        .iter()
        .map(|food| ScoredRecommendation {
            food: food.clone(),
            score: dosha.score_of(food),
            report: classify(food, Some(dosha)),
        })
        .filter(|item| item.report.compatibility == CompatibilityTier::Good)
        .collect();

    recommendations.sort_by_key(|item| item.score);
    recommendations.truncate(RECOMMENDATION_LIMIT);
    recommendations
}

pub fn rank(catalog: &[FoodItem], dosha: Dosha) -> Vec<FoodReport> {
    rank_scored(catalog, dosha)
        .into_iter()
        .map(|item| item.report)
        .collect()
}

/// Full catalog, unfiltered, most aggravating (highest score) first.
///
/// This is the opposite direction of [`rank`]. Without a dosha every score
/// reads as zero and catalog order is kept.
pub fn sort_by_dosha_affinity(catalog: &[FoodItem], dosha: Option<Dosha>) -> Vec<DoshaScoredFood> {
    let mut listing: Vec<DoshaScoredFood> = catalog
        .iter()
        .map(|food| DoshaScoredFood {
            food: food.clone(),
            dosha_score: dosha.map_or(0, |dosha| dosha.score_of(food)),
        })
        .collect();

    listing.sort_by(|a, b| b.dosha_score.cmp(&a.dosha_score));
    listing
}
