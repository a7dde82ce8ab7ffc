use crate::domain::{
    compatibility::{classifier::classify, entities::FoodGuidance},
    dosha::Dosha,
    food::entities::{FoodItem, ThermicQuality},
};

pub const STANDARD_PORTION: &str = "Standard portion: 150-200g";

pub fn portion_size(dosha: Option<Dosha>) -> &'static str {
    match dosha {
        Some(Dosha::Vata) => "150-200g (small portions, frequent meals)",
        Some(Dosha::Pitta) => "150-200g (cool environment, cooling sides)",
        Some(Dosha::Kapha) => "100-150g (stimulating spices, light meals)",
        None => STANDARD_PORTION,
    }
}

pub fn thermic_description(quality: ThermicQuality) -> &'static str {
    match quality {
        ThermicQuality::Heating => {
            "Heating foods increase warmth and stimulate digestion. Good for Vata and Kapha."
        }
        ThermicQuality::Cooling => {
            "Cooling foods reduce excess heat and calm inflammation. Perfect for Pitta."
        }
        ThermicQuality::Neutral => "Neutral foods balance all doshas when prepared appropriately.",
        ThermicQuality::Unknown => "",
    }
}

/// First matching meal tag wins, checked breakfast, lunch, dinner, snack.
pub fn recommended_time(best_time: &str) -> &'static str {
    if best_time.contains("breakfast") {
        "Best for breakfast"
    } else if best_time.contains("lunch") {
        "Best for lunch"
    } else if best_time.contains("dinner") {
        "Best for dinner"
    } else if best_time.contains("snack") {
        "Good as a snack"
    } else {
        "Flexible timing"
    }
}

pub fn guidance(food: &FoodItem, dosha: Option<Dosha>) -> FoodGuidance {
    FoodGuidance {
        report: classify(food, dosha),
        portion_size: portion_size(dosha).to_string(),
        thermic_description: thermic_description(food.thermic_quality).to_string(),
        recommended_time: recommended_time(&food.best_time).to_string(),
    }
}
