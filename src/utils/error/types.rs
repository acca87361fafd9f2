//! Error types for the clinic core

use thiserror::Error;

/// Result type alias for the clinic core
pub type Result<T> = std::result::Result<T, ClinicError>;

/// Main error type for the clinic core
#[derive(Error, Debug)]
pub enum ClinicError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Authentication errors
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Authorization errors
    #[error("Authorization error: {0}")]
    Authorization(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Conflict errors
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Crypto errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClinicError {
    /// Whether the error should be surfaced to the end user verbatim
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            ClinicError::Auth(_)
                | ClinicError::Authorization(_)
                | ClinicError::Validation(_)
                | ClinicError::NotFound(_)
                | ClinicError::Conflict(_)
        )
    }

    /// Stable error code for client-side handling
    pub fn code(&self) -> &'static str {
        match self {
            ClinicError::Config(_) => "config_error",
            ClinicError::Auth(_) => "authentication_failed",
            ClinicError::Authorization(_) => "access_denied",
            ClinicError::Validation(_) => "validation_error",
            ClinicError::NotFound(_) => "not_found",
            ClinicError::Conflict(_) => "conflict",
            ClinicError::Serialization(_) => "serialization_error",
            ClinicError::Yaml(_) => "yaml_error",
            ClinicError::Io(_) => "io_error",
            ClinicError::Crypto(_) => "crypto_error",
            ClinicError::Internal(_) => "internal_error",
        }
    }
}
