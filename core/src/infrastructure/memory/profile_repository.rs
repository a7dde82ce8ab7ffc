use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError,
    dosha::Dosha,
    profile::{entities::UserProfile, ports::ProfileRepository},
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<String, UserProfile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileRepository for InMemoryProfileRepository {
    async fn get_by_user_id(&self, user_id: String) -> Result<Option<UserProfile>, CoreError> {
        Ok(self.profiles.read().await.get(&user_id).cloned())
    }

    async fn upsert(&self, user_id: String, dosha: Option<Dosha>) -> Result<UserProfile, CoreError> {
        let mut profiles = self.profiles.write().await;

        let profile = match profiles.get_mut(&user_id) {
            Some(existing) => {
                existing.update(dosha);
                existing.clone()
            }
            None => {
                let profile = UserProfile::new(user_id.clone(), dosha);
                profiles.insert(user_id, profile.clone());
                profile
            }
        };

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upsert_creates_then_updates_in_place() {
        let repository = InMemoryProfileRepository::new();

        let created = repository
            .upsert("u1".to_string(), Some(Dosha::Pitta))
            .await
            .unwrap();
        let updated = repository
            .upsert("u1".to_string(), Some(Dosha::Kapha))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.dosha, Some(Dosha::Kapha));

        let stored = repository.get_by_user_id("u1".to_string()).await.unwrap();
        assert_eq!(stored, Some(updated));
        assert_eq!(repository.get_by_user_id("u2".to_string()).await, Ok(None));
    }
}
