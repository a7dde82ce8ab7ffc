use std::path::Path;

use serde_json::Value;
use tracing::{error, info, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::entities::{FoodItem, ThermicQuality},
};

/// Reads a JSON array of foods in the same camelCase shape the API serves.
pub async fn load_catalog_file(path: impl AsRef<Path>) -> Result<Vec<FoodItem>, CoreError> {
    let path = path.as_ref();

    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        error!("Failed to read catalog file {}: {}", path.display(), e);
        CoreError::CatalogLoad(format!("{}: {}", path.display(), e))
    })?;

    let entries: Vec<Value> = serde_json::from_str(&raw).map_err(|e| {
        error!("Invalid catalog file {}: {}", path.display(), e);
        CoreError::CatalogLoad(format!("{}: {}", path.display(), e))
    })?;

    let mut foods = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let thermic_quality = entry
            .get("thermicQuality")
            .and_then(Value::as_str)
            .map(str::to_owned);

        let food: FoodItem = serde_json::from_value(entry).map_err(|e| {
            error!("Invalid food at index {} in {}: {}", index, path.display(), e);
            CoreError::CatalogLoad(format!("{} entry {}: {}", path.display(), index, e))
        })?;

        validate_food(&food)?;

        if let Some(raw_value) = unrecognised_thermic_quality(&food, thermic_quality.as_deref()) {
            warn!(
                id = food.id,
                name = %food.name,
                thermic_quality = raw_value,
                "unrecognised thermic quality, serving it as \"unknown\""
            );
        }

        foods.push(food);
    }

    info!(path = %path.display(), foods = foods.len(), "catalog file loaded");

    Ok(foods)
}

fn validate_food(food: &FoodItem) -> Result<(), CoreError> {
    if food.name.trim().is_empty() {
        return Err(CoreError::CatalogLoad(format!(
            "food {} has an empty name",
            food.id
        )));
    }

    let macros = [food.calories, food.carbs, food.protein, food.fats];
    if macros.iter().any(|value| !value.is_finite() || *value < 0.0) {
        return Err(CoreError::CatalogLoad(format!(
            "food '{}' has negative or non-finite macros",
            food.name
        )));
    }

    Ok(())
}

/// The raw catalog value when it did not match any known thermic quality.
fn unrecognised_thermic_quality<'a>(food: &FoodItem, raw: Option<&'a str>) -> Option<&'a str> {
    (food.thermic_quality == ThermicQuality::Unknown).then_some(raw.unwrap_or_default())
}
