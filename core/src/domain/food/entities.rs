use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ThermicQuality {
    Heating,
    Cooling,
    Neutral,
    /// Any value the catalog carries that is none of the above.
    #[serde(other)]
    Unknown,
}

/// Immutable catalog entry. Scores are the food's effect on each dosha:
/// negative pacifies, positive aggravates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: i64,
    pub name: String,
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fats: f64,
    pub vata: i32,
    pub pitta: i32,
    pub kapha: i32,
    pub thermic_quality: ThermicQuality,
    pub best_time: String,
    pub description: String,
    pub recommendations: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_item_uses_camel_case_fields() {
        let json = serde_json::json!({
            "id": 7,
            "name": "Kitchari",
            "calories": 180,
            "carbs": 30,
            "protein": 8.5,
            "fats": 3,
            "vata": -1,
            "pitta": -1,
            "kapha": -1,
            "thermicQuality": "neutral",
            "bestTime": "dinner",
            "description": "Rice and mung bean stew",
            "recommendations": "Balancing for every type."
        });

        let food: FoodItem = serde_json::from_value(json).unwrap();
        assert_eq!(food.thermic_quality, ThermicQuality::Neutral);
        assert_eq!(food.best_time, "dinner");

        let back = serde_json::to_value(&food).unwrap();
        assert_eq!(back["thermicQuality"], "neutral");
        assert_eq!(back["bestTime"], "dinner");
    }

    #[test]
    fn test_unrecognised_thermic_quality_is_unknown() {
        let quality: ThermicQuality = serde_json::from_str("\"lukewarm\"").unwrap();
        assert_eq!(quality, ThermicQuality::Unknown);
    }
}
