//! Error types for the Brikk client core
//!
//! Every failure the dispatcher can surface is one variant of [`Error`],
//! so callers branch on the variant rather than on message text. The
//! status-to-variant mapping lives here as well, keeping classification
//! out of the dispatch loop.

use serde_json::Value;
use thiserror::Error;

/// Main error type for Brikk client operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors surfaced at construction time
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// The request was rejected as malformed (HTTP 400)
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        status_code: u16,
        body: Option<Value>,
    },

    /// Authentication or authorization failure (HTTP 401/403), or a
    /// signing attempt without a configured secret (no status code)
    #[error("Authentication failed: {message}")]
    Auth {
        message: String,
        status_code: Option<u16>,
        body: Option<Value>,
    },

    /// The requested resource does not exist (HTTP 404)
    #[error("Not found: {message}")]
    NotFound {
        message: String,
        status_code: u16,
        body: Option<Value>,
    },

    /// The service asked us to back off (HTTP 429)
    #[error("Rate limited: {message}")]
    RateLimit {
        message: String,
        status_code: u16,
        body: Option<Value>,
    },

    /// The service failed internally (HTTP 5xx)
    #[error("Server error: {message}")]
    Server {
        message: String,
        status_code: u16,
        body: Option<Value>,
    },

    /// Any other non-2xx response, or a transport failure without a status
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        status_code: Option<u16>,
        body: Option<Value>,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// The call did not complete within the configured timeout
    #[error("Request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    /// Local JSON serialization failure
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Map a non-2xx HTTP status and its response payload to an error variant.
    ///
    /// Evaluated in the documented precedence: 400, 401/403, 404, 429,
    /// >=500, then the generic HTTP variant for anything else.
    pub fn from_status(status: u16, body: Option<Value>) -> Self {
        let message = extract_message(status, body.as_ref());
        match status {
            400 => Error::Validation {
                message,
                status_code: status,
                body,
            },
            401 | 403 => Error::Auth {
                message,
                status_code: Some(status),
                body,
            },
            404 => Error::NotFound {
                message,
                status_code: status,
                body,
            },
            429 => Error::RateLimit {
                message,
                status_code: status,
                body,
            },
            500.. => Error::Server {
                message,
                status_code: status,
                body,
            },
            _ => Error::Http {
                message,
                status_code: Some(status),
                body,
                source: None,
            },
        }
    }

    /// Create a configuration error from a message
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            source: None,
        }
    }

    /// The HTTP status code that produced this error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Validation { status_code, .. }
            | Error::NotFound { status_code, .. }
            | Error::RateLimit { status_code, .. }
            | Error::Server { status_code, .. } => Some(*status_code),
            Error::Auth { status_code, .. } | Error::Http { status_code, .. } => *status_code,
            Error::Config { .. } | Error::Timeout { .. } | Error::Json { .. } => None,
        }
    }

    /// The raw response payload carried for diagnostics, if any
    pub fn response_body(&self) -> Option<&Value> {
        match self {
            Error::Validation { body, .. }
            | Error::Auth { body, .. }
            | Error::NotFound { body, .. }
            | Error::RateLimit { body, .. }
            | Error::Server { body, .. }
            | Error::Http { body, .. } => body.as_ref(),
            Error::Config { .. } | Error::Timeout { .. } | Error::Json { .. } => None,
        }
    }

    /// Check if this failure may self-resolve and is worth retrying.
    ///
    /// Only timeouts, 429s, and 5xx responses qualify; any other failure
    /// is terminal on the first attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Timeout { .. } | Error::RateLimit { .. } | Error::Server { .. }
        )
    }
}

/// Pull the service-provided message out of an error payload.
///
/// The service reports failures as `{"error": "<message>", ...}`; a payload
/// without an `error` field falls back to `HTTP {status}`.
fn extract_message(status: u16, body: Option<&Value>) -> String {
    body.and_then(|b| b.get("error"))
        .and_then(|m| m.as_str())
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("HTTP {}", status))
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            Error::from_status(400, None),
            Error::Validation { status_code: 400, .. }
        ));
        assert!(matches!(
            Error::from_status(401, None),
            Error::Auth { status_code: Some(401), .. }
        ));
        assert!(matches!(
            Error::from_status(403, None),
            Error::Auth { status_code: Some(403), .. }
        ));
        assert!(matches!(
            Error::from_status(404, None),
            Error::NotFound { status_code: 404, .. }
        ));
        assert!(matches!(
            Error::from_status(429, None),
            Error::RateLimit { status_code: 429, .. }
        ));
        assert!(matches!(
            Error::from_status(500, None),
            Error::Server { status_code: 500, .. }
        ));
        assert!(matches!(
            Error::from_status(503, None),
            Error::Server { status_code: 503, .. }
        ));
        assert!(matches!(
            Error::from_status(418, None),
            Error::Http { status_code: Some(418), .. }
        ));
    }

    #[test]
    fn test_status_code_preserved() {
        for status in [400, 401, 403, 404, 418, 429, 500, 502, 503] {
            let err = Error::from_status(status, None);
            assert_eq!(err.status_code(), Some(status));
        }
    }

    #[test]
    fn test_retryability() {
        assert!(Error::from_status(429, None).is_retryable());
        assert!(Error::from_status(500, None).is_retryable());
        assert!(Error::from_status(503, None).is_retryable());
        assert!(Error::Timeout { timeout_ms: 1000 }.is_retryable());

        assert!(!Error::from_status(400, None).is_retryable());
        assert!(!Error::from_status(401, None).is_retryable());
        assert!(!Error::from_status(404, None).is_retryable());
        assert!(!Error::from_status(418, None).is_retryable());
        assert!(!Error::config("bad").is_retryable());
    }

    #[test]
    fn test_error_message_extraction() {
        let err = Error::from_status(400, Some(json!({"error": "missing field: agent_id"})));
        assert_eq!(err.to_string(), "Validation failed: missing field: agent_id");

        // Payload without an `error` field falls back to the status line
        let err = Error::from_status(404, Some(json!({"detail": "nope"})));
        assert_eq!(err.to_string(), "Not found: HTTP 404");

        let err = Error::from_status(500, None);
        assert_eq!(err.to_string(), "Server error: HTTP 500");
    }

    #[test]
    fn test_response_body_preserved() {
        let payload = json!({"error": "boom", "trace_id": "abc123"});
        let err = Error::from_status(500, Some(payload.clone()));
        assert_eq!(err.response_body(), Some(&payload));
    }

    #[test]
    fn test_timeout_display() {
        let err = Error::Timeout { timeout_ms: 2500 };
        assert_eq!(err.to_string(), "Request timed out after 2500 ms");
        assert_eq!(err.status_code(), None);
    }
}
