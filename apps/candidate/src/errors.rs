use thiserror::Error;

/// Crate-level error type.
/// Boundary checks surface as `InvalidArgument`; promoter failures pass through unchanged.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Already set: {0}")]
    AlreadySet(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Promotion rejected (status {status}): {message}")]
    Promotion { status: u16, message: String },
}

impl AppError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        AppError::InvalidArgument(msg.into())
    }
}
