//! Error types for collaborator stores and the text service

use thiserror::Error;

/// Errors surfaced by the taxonomy, content, and record stores
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Store backend unavailable: {0}")]
    Unavailable(String),

    #[error("Store operation failed: {0}")]
    OperationFailed(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors surfaced by the external text-generation service
///
/// The service owns its own retry/backoff; callers only see a result or one
/// of these terminal failures.
#[derive(Error, Debug)]
pub enum TextServiceError {
    /// Service is not reachable
    #[error("Text service unavailable: {0}")]
    Unavailable(String),

    /// Request was rejected or errored
    #[error("Text generation failed: {0}")]
    RequestFailed(String),

    /// Rate limited by the service
    #[error("Rate limited, retry after {retry_after_ms:?}ms")]
    RateLimited { retry_after_ms: Option<u64> },
}

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;
