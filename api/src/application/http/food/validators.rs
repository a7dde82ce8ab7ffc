use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GetFoodGuidanceParams {
    /// Vata, Pitta or Kapha, any case. Omitted or unknown means no body type.
    #[schema(example = "Pitta")]
    pub dosha: Option<String>,
}
