//! Common error types for the freelancer matching platform.
//!
//! This crate provides unified error handling across all services.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Token creation failed")]
    TokenCreationFailed,

    #[error("Unauthorized")]
    Unauthorized,
}

/// Startup configuration errors. Fatal; the process must not serve requests
/// in this state.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Signing secret is missing or empty")]
    MissingSecret,

    #[error("Invalid token lifetime: {0}")]
    InvalidLifetime(String),
}

/// Error response for API clients.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Add details to the error response.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        // Forged, expired and absent tokens must be indistinguishable to clients.
        let (code, message) = match &err {
            AuthError::InvalidCredentials => ("AUTH_INVALID_CREDENTIALS", "Invalid credentials"),
            AuthError::InvalidToken | AuthError::TokenExpired | AuthError::Unauthorized => {
                ("AUTH_UNAUTHORIZED", "Authentication required")
            }
            AuthError::TokenCreationFailed => {
                ("AUTH_TOKEN_CREATION_FAILED", "Failed to create token")
            }
        };
        Self::new(code, message)
    }
}

impl From<ConfigError> for ErrorResponse {
    fn from(err: ConfigError) -> Self {
        let (code, message) = match &err {
            ConfigError::MissingSecret => ("CONFIG_MISSING_SECRET", "Signing secret is not set"),
            ConfigError::InvalidLifetime(_) => ("CONFIG_INVALID_LIFETIME", "Invalid token lifetime"),
        };
        Self::new(code, message)
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
