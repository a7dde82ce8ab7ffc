use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError,
    scan_history::{entities::ScanRecord, ports::ScanHistoryRepository},
};

/// Scans grouped by user id, each list in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScanHistoryRepository {
    scans: Arc<RwLock<HashMap<String, Vec<ScanRecord>>>>,
}

impl InMemoryScanHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScanHistoryRepository for InMemoryScanHistoryRepository {
    async fn insert(&self, record: ScanRecord) -> Result<ScanRecord, CoreError> {
        self.scans
            .write()
            .await
            .entry(record.user_id.clone())
            .or_default()
            .push(record.clone());

        Ok(record)
    }

    async fn list_by_user_id(&self, user_id: String) -> Result<Vec<ScanRecord>, CoreError> {
        Ok(self
            .scans
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::scan_history::entities::ScanMethod, infrastructure::memory::seed::seed_foods,
    };

    #[tokio::test]
    async fn test_lists_only_the_users_scans() {
        let repository = InMemoryScanHistoryRepository::new();
        let foods = seed_foods();

        let first = ScanRecord::new("u1".to_string(), &foods[0], ScanMethod::Manual, None);
        let other = ScanRecord::new("u2".to_string(), &foods[1], ScanMethod::Photo, None);
        let second = ScanRecord::new("u1".to_string(), &foods[2], ScanMethod::Barcode, None);

        for record in [first.clone(), other, second.clone()] {
            repository.insert(record).await.unwrap();
        }

        assert_eq!(
            repository.list_by_user_id("u1".to_string()).await,
            Ok(vec![first, second])
        );
        assert_eq!(
            repository.list_by_user_id("u3".to_string()).await,
            Ok(Vec::new())
        );
    }
}
