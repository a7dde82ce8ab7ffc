use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::error;

#[cfg(test)]
use crate::infrastructure::memory::seed::seed_foods;
use crate::domain::{
    common::entities::app_errors::CoreError,
    food::{entities::FoodItem, ports::FoodRepository},
};

/// Catalog held in memory, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFoodRepository {
    foods: Arc<RwLock<Vec<FoodItem>>>,
}

impl InMemoryFoodRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository holding the built-in catalog.
    #[cfg(test)]
    pub fn seeded() -> Self {
        Self {
            foods: Arc::new(RwLock::new(seed_foods())),
        }
    }
}

impl FoodRepository for InMemoryFoodRepository {
    async fn list_foods(&self) -> Result<Vec<FoodItem>, CoreError> {
        Ok(self.foods.read().await.clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<FoodItem>, CoreError> {
        let foods = self.foods.read().await;
        Ok(foods.iter().find(|food| food.id == id).cloned())
    }

    async fn get_by_name(&self, name: String) -> Result<Option<FoodItem>, CoreError> {
        let foods = self.foods.read().await;
        Ok(foods.iter().find(|food| food.name == name).cloned())
    }

    async fn insert_food(&self, food: FoodItem) -> Result<FoodItem, CoreError> {
        let mut foods = self.foods.write().await;

        if foods
            .iter()
            .any(|existing| existing.id == food.id || existing.name == food.name)
        {
            error!(id = food.id, name = %food.name, "food id or name already taken");
            return Err(CoreError::AlreadyExists);
        }

        foods.push(food.clone());
        Ok(food)
    }
}
