//! Error types for the DocStack core.

/// Core error type for DocStack infrastructure.
#[derive(Debug, thiserror::Error)]
pub enum DocStackError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error with context.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Convenience result type for DocStack operations.
pub type DocStackResult<T> = Result<T, DocStackError>;
