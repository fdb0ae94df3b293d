//! Error types for the pipeline engines

use thiserror::Error;

use learnpath_core::{StoreError, TextServiceError};

/// Main error type for pipeline operations
#[derive(Error, Debug)]
pub enum EngineError {
    /// The AI text service call itself failed
    #[error("Text service error: {0}")]
    TextService(#[from] TextServiceError),

    /// A collaborator store failed; propagated unchanged
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Referenced entity does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Operation not allowed in the entity's current state
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, EngineError>;
