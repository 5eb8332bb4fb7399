//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input data could not be read or parsed.
    #[error("Ingestion error: {0}")]
    Ingestion(String),

    /// Input data was read but is not acceptable.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Requested item (period, file, account) does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Ingestion(_) | Self::Validation(_) => 65,
            Self::NotFound(_) => 66,
            Self::Config(_) => 78,
            Self::Internal(_) => 70,
        }
    }

    /// Returns the stable error code used in machine-readable output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Ingestion(_) => "INGESTION_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
