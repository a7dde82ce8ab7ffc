use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, dosha::Dosha};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub user_id: String,
    pub dosha: Option<Dosha>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(user_id: String, dosha: Option<Dosha>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            dosha,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the dosha, including clearing it.
    pub fn update(&mut self, dosha: Option<Dosha>) {
        let (now, _) = generate_timestamp();

        self.dosha = dosha;
        self.updated_at = now;
    }
}
