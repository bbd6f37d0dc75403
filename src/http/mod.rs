//! HTTP client module
//!
//! Provides the JSON HTTP client used by the character API.
//!
//! # Features
//!
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Error Classification**: HTTP status, timeout and decode errors
//! - **Base URL Joining**: Relative paths resolve against a configured base

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
