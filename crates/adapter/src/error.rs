//! Persistence and submission errors.

use thiserror::Error;

use crate::core::EngineError;

/// Failure inside a score store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored game could not be encoded or decoded: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("invalid game record: {0}")]
    Invalid(String),
}

/// Failure while submitting or reading back games
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("please log in to save scores")]
    Unauthenticated,

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
