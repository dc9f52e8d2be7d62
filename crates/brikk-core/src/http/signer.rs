//! HMAC request signing
//!
//! The service authenticates signed requests with
//! `HMAC_SHA256(secret, "{timestamp}.{body}")`, hex-encoded. The same
//! secret, timestamp, and body always produce the same signature.

use std::time::{SystemTime, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

/// Compute the signature for a request.
///
/// `body` is the serialized request body, or the empty string for
/// bodyless requests. A missing secret is an authentication error raised
/// locally, before anything is sent over the wire.
pub fn sign(secret: &str, timestamp: i64, body: &str) -> Result<String> {
    if secret.is_empty() {
        return Err(Error::Auth {
            message: "signing secret is not configured".to_string(),
            status_code: None,
            body: None,
        });
    }

    // HMAC accepts keys of any length, so this cannot fail
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("hmac key");
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(body.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Current Unix timestamp in whole seconds
pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_signature_is_hex_sha256() {
        let sig = sign("secret", 1700000000, r#"{"a":1}"#).unwrap();
        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_signature_deterministic() {
        let a = sign("secret", 1700000000, "body").unwrap();
        let b = sign("secret", 1700000000, "body").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_body_allowed() {
        let sig = sign("secret", 1700000000, "").unwrap();
        assert_eq!(sig.len(), 64);
    }

    #[test]
    fn test_empty_secret_rejected_locally() {
        let result = sign("", 1700000000, "body");
        assert!(matches!(
            result,
            Err(Error::Auth { status_code: None, .. })
        ));
    }

    #[test]
    fn test_each_input_changes_signature() {
        let base = sign("secret", 1700000000, "body").unwrap();
        assert_ne!(base, sign("secret2", 1700000000, "body").unwrap());
        assert_ne!(base, sign("secret", 1700000001, "body").unwrap());
        assert_ne!(base, sign("secret", 1700000000, "body2").unwrap());
    }

    #[test]
    fn test_now_unix_is_plausible() {
        // Well past 2023-01-01, well before the year 3000
        let now = now_unix();
        assert!(now > 1_672_531_200);
        assert!(now < 32_503_680_000);
    }

    proptest! {
        #[test]
        fn prop_sign_deterministic(
            secret in "[a-zA-Z0-9]{1,64}",
            timestamp in 0i64..=4_102_444_800,
            body in ".{0,256}",
        ) {
            let a = sign(&secret, timestamp, &body).unwrap();
            let b = sign(&secret, timestamp, &body).unwrap();
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(a.len(), 64);
        }

        #[test]
        fn prop_timestamp_binds_signature(
            secret in "[a-zA-Z0-9]{1,64}",
            timestamp in 0i64..=4_102_444_800,
            body in ".{0,256}",
        ) {
            let a = sign(&secret, timestamp, &body).unwrap();
            let b = sign(&secret, timestamp + 1, &body).unwrap();
            prop_assert_ne!(a, b);
        }
    }
}
