//! Retry logic with capped exponential backoff
//!
//! Transient failures (timeouts, 429s, 5xx) are retried with a doubling
//! delay capped at ten seconds; everything else fails on the first
//! attempt. Retries within one call are strictly sequential.

use std::future::Future;
use std::time::Duration;

use crate::error::Result;

/// Base delay before the first resend, in milliseconds
pub const BASE_DELAY_MS: u64 = 1_000;
/// Ceiling on the delay between attempts, in milliseconds
pub const MAX_DELAY_MS: u64 = 10_000;

/// Retry policy configuration
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of retries after the initial attempt
    pub max_retries: u32,
    /// Base delay for the exponential schedule (in milliseconds)
    pub base_delay_ms: u64,
    /// Ceiling on any single delay (in milliseconds)
    pub max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: BASE_DELAY_MS,
            max_delay_ms: MAX_DELAY_MS,
        }
    }
}

impl RetryPolicy {
    /// Create a policy with the standard delay schedule
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Default::default()
        }
    }

    /// Set the base delay
    pub fn with_base_delay_ms(mut self, ms: u64) -> Self {
        self.base_delay_ms = ms;
        self
    }

    /// Set the delay ceiling
    pub fn with_max_delay_ms(mut self, ms: u64) -> Self {
        self.max_delay_ms = ms;
        self
    }

    /// Delay before resending after failed attempt `attempt` (0-based):
    /// `min(base * 2^attempt, max)`.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exp = 2u64
            .checked_pow(attempt)
            .and_then(|factor| self.base_delay_ms.checked_mul(factor))
            .unwrap_or(self.max_delay_ms);
        Duration::from_millis(exp.min(self.max_delay_ms))
    }
}

/// Drive a request closure through the retry policy.
///
/// The closure is invoked once per attempt; `max_retries + 1` attempts in
/// total. Each retry begins only after the previous attempt's failure has
/// been observed and the backoff delay has elapsed. The last attempt's
/// error is surfaced unchanged.
pub async fn execute_with_retry<F, Fut, T>(mut request_fn: F, policy: &RetryPolicy) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt: u32 = 0;
    loop {
        match request_fn().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                if attempt >= policy.max_retries || !error.is_retryable() {
                    tracing::warn!(
                        attempts = attempt + 1,
                        error = %error,
                        "request failed, not retrying"
                    );
                    return Err(error);
                }

                let delay = policy.delay_for_attempt(attempt);
                tracing::warn!(
                    attempt = attempt + 1,
                    max_retries = policy.max_retries,
                    delay_ms = delay.as_millis() as u64,
                    error = %error,
                    "request failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
