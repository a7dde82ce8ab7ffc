use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, compatibility::entities::DoshaScoredFood,
    dosha::Dosha, food::entities::FoodItem,
};

/// Storage collaborator owning the food catalog.
#[cfg_attr(test, mockall::automock)]
pub trait FoodRepository: Send + Sync {
    /// All foods in insertion order.
    fn list_foods(&self) -> impl Future<Output = Result<Vec<FoodItem>, CoreError>> + Send;

    fn get_by_id(&self, id: i64) -> impl Future<Output = Result<Option<FoodItem>, CoreError>> + Send;

    fn get_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<FoodItem>, CoreError>> + Send;

    /// Fails with `AlreadyExists` when the id or the name is taken.
    fn insert_food(&self, food: FoodItem) -> impl Future<Output = Result<FoodItem, CoreError>> + Send;
}

pub trait FoodService: Send + Sync {
    /// The whole catalog ordered by name.
    fn get_foods(&self) -> impl Future<Output = Result<Vec<FoodItem>, CoreError>> + Send;

    fn get_food(&self, id: i64) -> impl Future<Output = Result<FoodItem, CoreError>> + Send;

    /// Adds `foods` to the catalog and returns how many were inserted.
    ///
    /// Foods whose name is already in the catalog, or earlier in the batch,
    /// are skipped. A food reusing a taken id fails the whole batch with
    /// `AlreadyExists` before anything is written.
    fn import_foods(
        &self,
        foods: Vec<FoodItem>,
    ) -> impl Future<Output = Result<usize, CoreError>> + Send;

    /// The whole catalog ordered by raw dosha score, most aggravating first.
    fn get_foods_by_dosha(
        &self,
        dosha: Option<Dosha>,
    ) -> impl Future<Output = Result<Vec<DoshaScoredFood>, CoreError>> + Send;
}
