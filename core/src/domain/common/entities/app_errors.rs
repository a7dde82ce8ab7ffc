use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Already exists")]
    AlreadyExists,

    #[error("Invalid input")]
    Invalid,

    #[error("Failed to load catalog: {0}")]
    CatalogLoad(String),

    #[error("Internal server error")]
    InternalServerError,
}
