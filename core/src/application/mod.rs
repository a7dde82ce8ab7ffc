use tracing::info;

use crate::{
    domain::{
        common::{AyurvedaConfig, entities::app_errors::CoreError, services::Service},
        food::ports::FoodService,
    },
    infrastructure::{
        catalog_file::load_catalog_file,
        memory::{
            InMemoryFoodRepository, InMemoryProfileRepository, InMemoryScanHistoryRepository,
            seed::seed_foods,
        },
    },
};

pub type AyurvedaService =
    Service<InMemoryFoodRepository, InMemoryProfileRepository, InMemoryScanHistoryRepository>;

/// Builds the service with its catalog loaded according to `config`.
pub async fn create_service(config: AyurvedaConfig) -> Result<AyurvedaService, CoreError> {
    let service = Service::new(
        InMemoryFoodRepository::new(),
        InMemoryProfileRepository::new(),
        InMemoryScanHistoryRepository::new(),
    );

    if config.catalog.seed {
        let inserted = service.import_foods(seed_foods()).await?;
        info!(inserted, "built-in catalog seeded");
    }

    if let Some(path) = config.catalog.file.as_deref() {
        let foods = load_catalog_file(path).await?;
        let inserted = service.import_foods(foods).await?;
        info!(inserted, path, "catalog file merged");
    }

    Ok(service)
}
