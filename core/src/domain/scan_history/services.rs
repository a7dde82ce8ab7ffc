use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food::ports::FoodRepository,
    profile::ports::ProfileRepository,
    scan_history::{
        entities::ScanRecord,
        ports::{ScanHistoryRepository, ScanHistoryService},
        value_objects::RecordScanInput,
    },
};

impl<F, P, S> ScanHistoryService for Service<F, P, S>
where
    F: FoodRepository,
    P: ProfileRepository,
    S: ScanHistoryRepository,
{
    async fn record_scan(&self, input: RecordScanInput) -> Result<ScanRecord, CoreError> {
        if input.user_id.trim().is_empty() {
            return Err(CoreError::Invalid);
        }

        let food = self
            .food_repository
            .get_by_id(input.food_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let record = ScanRecord::new(input.user_id, &food, input.method, input.barcode);
        let saved = self.scan_history_repository.insert(record).await?;

        info!(
            user_id = %saved.user_id,
            food_id = saved.food_id,
            method = %saved.method,
            "scan recorded"
        );

        Ok(saved)
    }

    async fn get_scan_history(&self, user_id: String) -> Result<Vec<ScanRecord>, CoreError> {
        if user_id.trim().is_empty() {
            return Err(CoreError::Invalid);
        }

        self.scan_history_repository.list_by_user_id(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            food::ports::MockFoodRepository, profile::ports::MockProfileRepository,
            scan_history::{entities::ScanMethod, ports::MockScanHistoryRepository},
        },
        infrastructure::memory::{
            food_repository::InMemoryFoodRepository,
            scan_history_repository::InMemoryScanHistoryRepository,
        },
    };

    fn service() -> Service<InMemoryFoodRepository, MockProfileRepository, InMemoryScanHistoryRepository>
    {
        Service::new(
            InMemoryFoodRepository::seeded(),
            MockProfileRepository::new(),
            InMemoryScanHistoryRepository::new(),
        )
    }

    fn scan(user_id: &str, food_id: i64, method: ScanMethod) -> RecordScanInput {
        RecordScanInput {
            user_id: user_id.to_string(),
            food_id,
            method,
            barcode: None,
        }
    }

    #[tokio::test]
    async fn test_history_is_per_user_in_scan_order() {
        let service = service();

        service
            .record_scan(scan("user-1", 4, ScanMethod::Photo))
            .await
            .unwrap();
        service
            .record_scan(scan("user-2", 3, ScanMethod::Manual))
            .await
            .unwrap();
        service
            .record_scan(scan("user-1", 1, ScanMethod::Barcode))
            .await
            .unwrap();

        let history = service.get_scan_history("user-1".to_string()).await.unwrap();
        let foods: Vec<(&str, ScanMethod)> = history
            .iter()
            .map(|record| (record.food_name.as_str(), record.method))
            .collect();

        assert_eq!(
            foods,
            vec![
                ("Idli (Steamed Cake)", ScanMethod::Photo),
                ("Dal (Lentil Curry)", ScanMethod::Barcode),
            ]
        );
    }

    #[tokio::test]
    async fn test_user_without_scans_has_empty_history() {
        assert_eq!(
            service().get_scan_history("nobody".to_string()).await,
            Ok(Vec::new())
        );
    }

    #[tokio::test]
    async fn test_unknown_food_is_not_recorded() {
        let mut foods = MockFoodRepository::new();
        foods
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        let mut history = MockScanHistoryRepository::new();
        history.expect_insert().never();
        let service = Service::new(foods, MockProfileRepository::new(), history);

        let result = service
            .record_scan(scan("user-1", 99, ScanMethod::Manual))
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_blank_user_id_is_invalid() {
        let service = service();

        assert_eq!(
            service.record_scan(scan(" ", 1, ScanMethod::Manual)).await,
            Err(CoreError::Invalid)
        );
        assert_eq!(
            service.get_scan_history(String::new()).await,
            Err(CoreError::Invalid)
        );
    }
}
