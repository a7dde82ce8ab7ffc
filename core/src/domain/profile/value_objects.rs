use crate::domain::dosha::Dosha;

#[derive(Debug, Clone)]
pub struct UpsertProfileInput {
    pub user_id: String,
    pub dosha: Option<Dosha>,
}
