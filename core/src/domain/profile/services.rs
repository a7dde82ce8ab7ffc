use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food::ports::FoodRepository,
    profile::{
        entities::UserProfile,
        ports::{ProfileRepository, ProfileService},
        value_objects::UpsertProfileInput,
    },
    scan_history::ports::ScanHistoryRepository,
};

impl<F, P, S> ProfileService for Service<F, P, S>
where
    F: FoodRepository,
    P: ProfileRepository,
    S: ScanHistoryRepository,
{
    async fn get_profile(&self, user_id: String) -> Result<UserProfile, CoreError> {
        self.profile_repository
            .get_by_user_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn upsert_profile(&self, input: UpsertProfileInput) -> Result<UserProfile, CoreError> {
        if input.user_id.trim().is_empty() {
            return Err(CoreError::Invalid);
        }

        let saved = self
            .profile_repository
            .upsert(input.user_id, input.dosha)
            .await?;

        info!(
            user_id = %saved.user_id,
            dosha = ?saved.dosha,
            "profile saved"
        );

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        domain::{
            dosha::Dosha, food::ports::MockFoodRepository, profile::ports::MockProfileRepository,
            scan_history::ports::MockScanHistoryRepository,
        },
        infrastructure::memory::profile_repository::InMemoryProfileRepository,
    };

    fn service() -> Service<MockFoodRepository, InMemoryProfileRepository, MockScanHistoryRepository> {
        Service::new(
            MockFoodRepository::new(),
            InMemoryProfileRepository::new(),
            MockScanHistoryRepository::new(),
        )
    }

    #[tokio::test]
    async fn test_first_upsert_creates_profile() {
        let service = service();

        let profile = service
            .upsert_profile(UpsertProfileInput {
                user_id: "user-1".to_string(),
                dosha: Some(Dosha::Kapha),
            })
            .await
            .unwrap();

        assert_eq!(profile.user_id, "user-1");
        assert_eq!(profile.dosha, Some(Dosha::Kapha));
        assert_eq!(profile.created_at, profile.updated_at);
        assert_eq!(service.get_profile("user-1".to_string()).await, Ok(profile));
    }

    #[tokio::test]
    async fn test_second_upsert_keeps_identity() {
        let service = service();
        let first = service
            .upsert_profile(UpsertProfileInput {
                user_id: "user-2".to_string(),
                dosha: Some(Dosha::Vata),
            })
            .await
            .unwrap();

        let second = service
            .upsert_profile(UpsertProfileInput {
                user_id: "user-2".to_string(),
                dosha: None,
            })
            .await
            .unwrap();

        assert_eq!(second.id, first.id);
        assert_eq!(second.created_at, first.created_at);
        assert_eq!(second.dosha, None);
        assert!(second.updated_at >= first.updated_at);
    }

    #[tokio::test]
    async fn test_concurrent_first_writes_share_one_profile() {
        let service = Arc::new(service());

        let upserts = (0..8).map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .upsert_profile(UpsertProfileInput {
                        user_id: "user-3".to_string(),
                        dosha: if i % 2 == 0 { Some(Dosha::Vata) } else { Some(Dosha::Pitta) },
                    })
                    .await
                    .unwrap()
            })
        });

        let mut ids = Vec::new();
        for handle in upserts.collect::<Vec<_>>() {
            ids.push(handle.await.unwrap().id);
        }

        let stored = service.get_profile("user-3".to_string()).await.unwrap();
        assert!(ids.iter().all(|id| *id == stored.id));
    }

    #[tokio::test]
    async fn test_missing_profile_is_not_found() {
        assert_eq!(
            service().get_profile("nobody".to_string()).await,
            Err(CoreError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_blank_user_id_is_invalid() {
        let mut profiles = MockProfileRepository::new();
        profiles.expect_upsert().never();
        let service = Service::new(
            MockFoodRepository::new(),
            profiles,
            MockScanHistoryRepository::new(),
        );

        let result = service
            .upsert_profile(UpsertProfileInput {
                user_id: "  ".to_string(),
                dosha: None,
            })
            .await;

        assert_eq!(result, Err(CoreError::Invalid));
    }
}
