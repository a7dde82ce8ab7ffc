use tracing::{debug, error};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    compatibility::{entities::DoshaScoredFood, ranking::sort_by_dosha_affinity},
    dosha::Dosha,
    food::{
        entities::FoodItem,
        ports::{FoodRepository, FoodService},
    },
    profile::ports::ProfileRepository,
    scan_history::ports::ScanHistoryRepository,
};

impl<F, P, S> FoodService for Service<F, P, S>
where
    F: FoodRepository,
    P: ProfileRepository,
    S: ScanHistoryRepository,
{
    async fn get_foods(&self) -> Result<Vec<FoodItem>, CoreError> {
        let mut foods = self.food_repository.list_foods().await?;

        foods.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });

        Ok(foods)
    }

    async fn get_food(&self, id: i64) -> Result<FoodItem, CoreError> {
        self.food_repository
            .get_by_id(id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn import_foods(&self, foods: Vec<FoodItem>) -> Result<usize, CoreError> {
        let mut accepted: Vec<FoodItem> = Vec::with_capacity(foods.len());

        for food in foods {
            if accepted.iter().any(|other| other.name == food.name)
                || self
                    .food_repository
                    .get_by_name(food.name.clone())
                    .await?
                    .is_some()
            {
                debug!(name = %food.name, "food already in catalog, skipping");
                continue;
            }

            if accepted.iter().any(|other| other.id == food.id)
                || self.food_repository.get_by_id(food.id).await?.is_some()
            {
                error!(id = food.id, name = %food.name, "food id already taken");
                return Err(CoreError::AlreadyExists);
            }

            accepted.push(food);
        }

        let inserted = accepted.len();
        for food in accepted {
            self.food_repository.insert_food(food).await?;
        }

        Ok(inserted)
    }

    async fn get_foods_by_dosha(
        &self,
        dosha: Option<Dosha>,
    ) -> Result<Vec<DoshaScoredFood>, CoreError> {
        let catalog = self.food_repository.list_foods().await?;

        if dosha.is_none() {
            debug!("unknown dosha, listing catalog with zero affinity");
        }

        Ok(sort_by_dosha_affinity(&catalog, dosha))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            food::ports::MockFoodRepository, profile::ports::MockProfileRepository,
            scan_history::ports::MockScanHistoryRepository,
        },
        infrastructure::memory::{food_repository::InMemoryFoodRepository, seed::seed_foods},
    };

    type MockService = Service<MockFoodRepository, MockProfileRepository, MockScanHistoryRepository>;

    fn service_with(foods: MockFoodRepository) -> MockService {
        Service::new(
            foods,
            MockProfileRepository::new(),
            MockScanHistoryRepository::new(),
        )
    }

    fn catalog_service(
        foods: InMemoryFoodRepository,
    ) -> Service<InMemoryFoodRepository, MockProfileRepository, MockScanHistoryRepository> {
        Service::new(
            foods,
            MockProfileRepository::new(),
            MockScanHistoryRepository::new(),
        )
    }

    fn renamed(id: i64, name: &str) -> FoodItem {
        let mut food = seed_foods().remove(0);
        food.id = id;
        food.name = name.to_string();
        food
    }

    fn service_over(catalog: Vec<FoodItem>) -> MockService {
        let mut foods = MockFoodRepository::new();
        foods.expect_list_foods().returning(move || {
            let catalog = catalog.clone();
            Box::pin(async move { Ok(catalog) })
        });
        service_with(foods)
    }

    #[tokio::test]
    async fn test_get_foods_sorted_by_name() {
        let mut catalog = seed_foods();
        catalog[0].name = "dal (lowercase)".to_string();
        let service = service_over(catalog);

        let names: Vec<String> = service
            .get_foods()
            .await
            .unwrap()
            .into_iter()
            .map(|food| food.name)
            .collect();

        assert_eq!(
            names,
            vec![
                "dal (lowercase)",
                "Dosa (Crepe)",
                "Idli (Steamed Cake)",
                "Roti (Wheat Bread)",
                "Samosa",
            ]
        );
    }

    #[tokio::test]
    async fn test_get_food_missing_is_not_found() {
        let mut foods = MockFoodRepository::new();
        foods
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        let service = service_with(foods);

        assert_eq!(service.get_food(42).await, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_get_foods_by_dosha_most_aggravating_first() {
        let service = service_over(seed_foods());

        let listing = service.get_foods_by_dosha(Some(Dosha::Pitta)).await.unwrap();

        assert_eq!(listing[0].food.name, "Samosa");
        assert_eq!(listing[0].dosha_score, 2);
        assert_eq!(listing.last().unwrap().dosha_score, -1);
    }

    #[tokio::test]
    async fn test_import_into_empty_catalog_keeps_order() {
        let service = catalog_service(InMemoryFoodRepository::new());

        assert_eq!(service.import_foods(seed_foods()).await, Ok(5));

        let ids: Vec<i64> = service
            .food_repository
            .list_foods()
            .await
            .unwrap()
            .iter()
            .map(|food| food.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_import_skips_known_names() {
        let service = catalog_service(InMemoryFoodRepository::seeded());

        let inserted = service
            .import_foods(vec![
                renamed(9, "Samosa"),
                renamed(6, "Upma"),
                renamed(7, "Upma"),
            ])
            .await;

        assert_eq!(inserted, Ok(1));
        assert_eq!(service.get_food(6).await.unwrap().name, "Upma");
        assert_eq!(service.get_food(7).await, Err(CoreError::NotFound));
        assert_eq!(service.get_foods().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_import_with_taken_id_leaves_catalog_unchanged() {
        let service = catalog_service(InMemoryFoodRepository::seeded());

        let result = service
            .import_foods(vec![renamed(6, "Upma"), renamed(2, "Poha")])
            .await;

        assert_eq!(result, Err(CoreError::AlreadyExists));
        assert_eq!(service.get_foods().await.unwrap().len(), 5);
        assert_eq!(service.get_food(6).await, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_import_with_id_clash_inside_batch_writes_nothing() {
        let mut foods = MockFoodRepository::new();
        foods
            .expect_get_by_name()
            .returning(|_| Box::pin(async { Ok(None) }));
        foods
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        foods.expect_insert_food().never();
        let service = service_with(foods);

        let result = service
            .import_foods(vec![renamed(6, "Upma"), renamed(6, "Poha")])
            .await;

        assert_eq!(result, Err(CoreError::AlreadyExists));
    }
}
