//! Authentication header resolution
//!
//! Two schemes are supported: bearer (API key only) and signed (HMAC over
//! a timestamp and the serialized body). Signed auth is resolved fresh on
//! every attempt so each resend carries a timestamp inside the service's
//! validity window.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::signer;

/// Header carrying the API key identifier in signed mode
pub const HEADER_KEY: &str = "X-Brikk-Key";
/// Header carrying the Unix-seconds timestamp in signed mode
pub const HEADER_TIMESTAMP: &str = "X-Brikk-Timestamp";
/// Header carrying the hex HMAC-SHA256 signature in signed mode
pub const HEADER_SIGNATURE: &str = "X-Brikk-Signature";

/// Resolved authentication scheme for one attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthContext {
    /// HMAC-signed request: key id, timestamp, and signature headers
    Signed {
        api_key: String,
        timestamp: i64,
        signature: String,
    },
    /// Bearer token from the configured API key
    Bearer { api_key: String },
    /// No credentials configured; the server decides whether to accept
    Anonymous,
}

impl AuthContext {
    /// Resolve the auth scheme for one attempt.
    ///
    /// `body` is the serialized request body (empty string when there is
    /// none) so the signature binds to exactly the bytes sent. Requesting
    /// signed auth without a configured secret fails here, before any
    /// network attempt.
    pub fn resolve(config: &ClientConfig, signed: bool, body: &str) -> Result<Self> {
        if signed {
            let secret = config.signing_secret.as_deref().ok_or_else(|| Error::Auth {
                message: "signed request requires a signing secret".to_string(),
                status_code: None,
                body: None,
            })?;
            let timestamp = signer::now_unix();
            let signature = signer::sign(secret, timestamp, body)?;
            return Ok(AuthContext::Signed {
                api_key: config.api_key.clone().unwrap_or_default(),
                timestamp,
                signature,
            });
        }

        match &config.api_key {
            Some(key) => Ok(AuthContext::Bearer {
                api_key: key.clone(),
            }),
            None => Ok(AuthContext::Anonymous),
        }
    }

    /// The header pairs this context contributes to the request
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        match self {
            AuthContext::Signed {
                api_key,
                timestamp,
                signature,
            } => vec![
                (HEADER_KEY, api_key.clone()),
                (HEADER_TIMESTAMP, timestamp.to_string()),
                (HEADER_SIGNATURE, signature.clone()),
            ],
            AuthContext::Bearer { api_key } => {
                vec![("Authorization", format!("Bearer {}", api_key))]
            }
            AuthContext::Anonymous => Vec::new(),
        }
    }
}
