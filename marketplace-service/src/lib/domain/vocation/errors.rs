use thiserror::Error;

/// Error for VocationName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VocationNameError {
    #[error("Name must not be empty")]
    Empty,

    #[error("Name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for VocationId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VocationIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for vocation listing operations
#[derive(Debug, Clone, Error)]
pub enum VocationError {
    #[error("Invalid vocation name: {0}")]
    InvalidName(#[from] VocationNameError),

    #[error("Invalid vocation ID: {0}")]
    InvalidId(#[from] VocationIdError),

    #[error("Vocation not found: {0}")]
    NotFound(String),

    /// Owner account no longer exists.
    #[error("Account not found: {0}")]
    OwnerNotFound(String),

    #[error("Value too long for field")]
    ValueTooLong,

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}
