//! Request dispatcher orchestrating auth, timeout, and retry
//!
//! One [`HttpClient`] is shared by every resource façade. It holds no
//! mutable state across calls, so concurrent callers need no
//! synchronization: each call is an independent future closed over the
//! immutable configuration.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::auth::AuthContext;
use crate::http::retry::{execute_with_retry, RetryPolicy};

/// One logical request, owned by the dispatcher for the duration of the
/// call including its retries
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    /// Authenticate with the HMAC scheme instead of bearer
    pub signed: bool,
}

impl RequestDescriptor {
    /// Create a descriptor for a bodyless, bearer-authenticated request
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: Vec::new(),
            headers: Vec::new(),
            signed: false,
        }
    }

    /// Shorthand for a GET descriptor
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Shorthand for a POST descriptor
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Shorthand for a DELETE descriptor
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Append a query parameter
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append an extra request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Route this request through signed auth
    pub fn signed(mut self) -> Self {
        self.signed = true;
        self
    }
}

/// HTTP dispatcher for the coordination API
pub struct HttpClient {
    http: reqwest::Client,
    config: ClientConfig,
    retry: RetryPolicy,
}

impl HttpClient {
    /// Create a dispatcher from a validated configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let retry = RetryPolicy::new(config.max_retries);
        Self::with_retry_policy(config, retry)
    }

    /// Create a dispatcher with an explicit retry policy.
    ///
    /// The policy's `max_retries` takes precedence over the configured
    /// value; used by tests to shrink backoff delays.
    pub fn with_retry_policy(config: ClientConfig, retry: RetryPolicy) -> Result<Self> {
        config.validate()?;
        let http = reqwest::Client::builder().build().map_err(|e| Error::Config {
            message: format!("failed to create HTTP client: {}", e),
            source: Some(anyhow::Error::new(e)),
        })?;
        Ok(Self { http, config, retry })
    }

    /// The configuration this dispatcher was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Dispatch a request and return the parsed response payload.
    ///
    /// Serializes the body once, then drives attempts through the retry
    /// policy; auth (including a fresh timestamp and signature in signed
    /// mode) is resolved per attempt.
    pub async fn request(&self, descriptor: RequestDescriptor) -> Result<Value> {
        let url = self.build_url(&descriptor)?;
        let body = match &descriptor.body {
            Some(value) => serde_json::to_string(value)?,
            None => String::new(),
        };

        execute_with_retry(|| self.attempt(&descriptor, &url, &body), &self.retry).await
    }

    /// Dispatch a request and deserialize the response into `T`
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<T> {
        let value = self.request(descriptor).await?;
        serde_json::from_value(value).map_err(Error::from)
    }

    /// Build the absolute URL for a descriptor
    fn build_url(&self, descriptor: &RequestDescriptor) -> Result<Url> {
        let base = Url::parse(&self.config.base_url).map_err(|e| Error::Config {
            message: format!("invalid base URL {:?}: {}", self.config.base_url, e),
            source: Some(anyhow::Error::new(e)),
        })?;
        let mut url = base.join(&descriptor.path).map_err(|e| Error::Config {
            message: format!("invalid request path {:?}: {}", descriptor.path, e),
            source: Some(anyhow::Error::new(e)),
        })?;
        if !descriptor.query.is_empty() {
            url.query_pairs_mut().extend_pairs(
                descriptor.query.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            );
        }
        Ok(url)
    }

    /// Execute a single attempt under the per-attempt timeout
    async fn attempt(
        &self,
        descriptor: &RequestDescriptor,
        url: &Url,
        body: &str,
    ) -> Result<Value> {
        let auth = AuthContext::resolve(&self.config, descriptor.signed, body)?;

        let mut request = self.http.request(descriptor.method.clone(), url.clone());
        for (name, value) in auth.headers() {
            request = request.header(name, value);
        }
        for (name, value) in &descriptor.headers {
            request = request.header(name, value);
        }
        if !body.is_empty() {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(body.to_string());
        }

        tracing::debug!(
            method = %descriptor.method,
            url = %url,
            signed = descriptor.signed,
            "dispatching request"
        );

        let timeout = Duration::from_millis(self.config.timeout_ms);
        let outcome = tokio::time::timeout(timeout, async {
            let response = request.send().await.map_err(|e| self.map_transport_error(e))?;
            self.handle_response(response).await
        })
        .await;

        match outcome {
            Ok(result) => result,
            Err(_elapsed) => Err(Error::Timeout {
                timeout_ms: self.config.timeout_ms,
            }),
        }
    }

    /// Classify a terminal response into data or a typed error
    async fn handle_response(&self, response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let text = response.text().await.map_err(|e| Error::Http {
            message: format!("failed to read response body: {}", e),
            status_code: Some(status.as_u16()),
            body: None,
            source: Some(anyhow::Error::new(e)),
        })?;

        // Structured data when the body parses, raw text otherwise
        let parsed = serde_json::from_str::<Value>(&text).ok();

        if status.is_success() {
            return Ok(parsed.unwrap_or_else(|| {
                if text.is_empty() {
                    Value::Null
                } else {
                    Value::String(text)
                }
            }));
        }

        let payload = parsed.or_else(|| {
            if text.is_empty() {
                None
            } else {
                Some(Value::String(text))
            }
        });
        Err(Error::from_status(status.as_u16(), payload))
    }

    /// Map a reqwest transport failure to the error taxonomy
    fn map_transport_error(&self, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            return Error::Timeout {
                timeout_ms: self.config.timeout_ms,
            };
        }
        Error::Http {
            message: format!("request failed: {}", error),
            status_code: None,
            body: None,
            source: Some(anyhow::Error::new(error)),
        }
    }
}
