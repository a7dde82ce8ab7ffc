use ayurveda_core::domain::dosha::Dosha;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertProfileRequest {
    #[validate(length(min = 1, message = "userId is required"))]
    #[serde(default)]
    #[schema(example = "user-123")]
    pub user_id: String,

    /// `null` clears the stored body type.
    #[serde(default)]
    pub dosha: Option<Dosha>,
}
