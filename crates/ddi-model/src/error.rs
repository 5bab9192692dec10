use thiserror::Error;

#[derive(Debug, Error)]
pub enum DdiError {
    #[error("minimum support must be in (0, 1], got {0}")]
    InvalidMinSupport(f64),
    #[error("drug name must not be empty")]
    EmptyDrugName,
    #[error("reaction name must not be empty")]
    EmptyReactionName,
}

pub type Result<T> = std::result::Result<T, DdiError>;
