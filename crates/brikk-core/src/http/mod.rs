//! HTTP client core for the coordination API
//!
//! This module provides the resilient dispatch path every resource façade
//! shares:
//! - HMAC request signing with per-attempt timestamps
//! - Bearer and signed authentication header resolution
//! - Per-attempt timeout enforcement
//! - Retry logic with capped exponential backoff
//! - Classification of failures into the error taxonomy

pub mod auth;
pub mod client;
pub mod retry;
pub mod signer;

pub use auth::{AuthContext, HEADER_KEY, HEADER_SIGNATURE, HEADER_TIMESTAMP};
pub use client::{HttpClient, RequestDescriptor};
pub use retry::RetryPolicy;

// Re-export commonly used types
pub use reqwest::{Method, StatusCode};
