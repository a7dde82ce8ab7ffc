use crate::domain::food::entities::{FoodItem, ThermicQuality};

#[allow(clippy::too_many_arguments)]
fn food(
    id: i64,
    name: &str,
    (calories, carbs, protein, fats): (f64, f64, f64, f64),
    (vata, pitta, kapha): (i32, i32, i32),
    thermic_quality: ThermicQuality,
    best_time: &str,
    description: &str,
    recommendations: &str,
) -> FoodItem {
    FoodItem {
        id,
        name: name.to_string(),
        calories,
        carbs,
        protein,
        fats,
        vata,
        pitta,
        kapha,
        thermic_quality,
        best_time: best_time.to_string(),
        description: description.to_string(),
        recommendations: recommendations.to_string(),
    }
}

/// The built-in catalog, in its canonical order.
pub fn seed_foods() -> Vec<FoodItem> {
    vec![
        food(
            1,
            "Dal (Lentil Curry)",
            (206.0, 36.0, 18.0, 1.0),
            (-2, -1, 2),
            ThermicQuality::Neutral,
            "lunch",
            "Traditional lentil curry, protein-rich and grounding",
            "Excellent for all body types. Pair with warm rice for better digestion.",
        ),
        food(
            2,
            "Roti (Wheat Bread)",
            (70.0, 14.0, 2.7, 0.5),
            (-1, 0, 1),
            ThermicQuality::Neutral,
            "lunch, dinner",
            "Whole wheat flatbread, staple of Indian cuisine",
            "Best with cooked vegetables and ghee for Vata balance.",
        ),
        food(
            3,
            "Samosa",
            (262.0, 32.0, 4.0, 13.0),
            (2, 2, 2),
            ThermicQuality::Heating,
            "snack",
            "Fried pastry with spiced filling",
            "Avoid for Pitta. Enjoy occasionally with cooling yogurt.",
        ),
        food(
            4,
            "Idli (Steamed Cake)",
            (40.0, 8.0, 1.5, 0.3),
            (0, -1, 0),
            ThermicQuality::Cooling,
            "breakfast",
            "Steamed rice and lentil cake, light and easy to digest",
            "Perfect for Pitta. Serve with cooling coconut chutney.",
        ),
        food(
            5,
            "Dosa (Crepe)",
            (168.0, 24.0, 4.5, 6.0),
            (0, -1, 1),
            ThermicQuality::Neutral,
            "breakfast, snack",
            "Crispy fermented rice and lentil crepe",
            "Good for all doshas. Add ghee for Vata support.",
        ),
    ]
}
