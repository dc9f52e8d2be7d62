//! Error types and handling for the CLI
//!
//! Wraps SDK errors for display and maps every failure mode to a stable
//! process exit code so scripts can branch without parsing messages.

use std::io;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (terminal writes, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from the brikk-core SDK
    #[error("{0}")]
    Core(#[from] brikk_core::Error),

    /// Invalid inline JSON payload
    #[error("Invalid JSON payload: {0}")]
    InvalidPayload(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Core(core) => match core {
                brikk_core::Error::Config { .. } => 2,
                brikk_core::Error::Validation { .. } => 3,
                brikk_core::Error::Auth { .. } => 4,
                brikk_core::Error::NotFound { .. } => 5,
                brikk_core::Error::RateLimit { .. } => 6,
                brikk_core::Error::Server { .. } => 7,
                brikk_core::Error::Http { .. } => 8,
                brikk_core::Error::Timeout { .. } => 9,
                brikk_core::Error::Json { .. } => 10,
            },
            Self::InvalidPayload(_) => 11,
            Self::Json(_) => 12,
            Self::Other { .. } => 99,
        }
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}
