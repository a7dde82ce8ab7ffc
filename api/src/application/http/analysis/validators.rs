use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Presence of both fields is checked in the handler.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeFoodRequest {
    #[schema(example = 3)]
    pub food_id: Option<i64>,

    #[schema(example = "Pitta")]
    pub dosha: Option<String>,
}
