use crate::domain::dosha::Dosha;

#[derive(Debug, Clone)]
pub struct AnalyzeFoodInput {
    pub food_id: i64,
    pub dosha: Dosha,
}

#[derive(Debug, Clone)]
pub struct GetFoodGuidanceInput {
    pub food_id: i64,
    pub dosha: Option<Dosha>,
}
