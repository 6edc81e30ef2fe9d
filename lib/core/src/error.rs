use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Undefined metric: profile '{0}' has zero magnitude")]
    UndefinedMetric(String),

    #[error("Trait set mismatch between '{left}' and '{right}'")]
    TraitSetMismatch { left: String, right: String },

    #[error("Neighbor ranking requires at least 2 entities, got {found}")]
    InsufficientEntities { found: usize },

    #[error("Unknown entity: {0}")]
    UnknownEntity(String),

    #[error("Duplicate entity id: {0}")]
    DuplicateId(String),

    #[error("Profile batch cannot be empty")]
    EmptyBatch,
}
