use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordScanRequest {
    #[validate(length(min = 1, message = "userId is required"))]
    #[serde(default)]
    #[schema(example = "user-123")]
    pub user_id: String,

    #[schema(example = 3)]
    pub food_id: Option<i64>,

    /// barcode, photo or manual
    #[schema(example = "barcode")]
    pub method: Option<String>,

    #[schema(example = "8901234567890")]
    pub barcode: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GetScanHistoryParams {
    #[schema(example = "user-123")]
    pub user_id: Option<String>,
}
