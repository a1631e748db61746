//! HTTP networking module
//!
//! Provides the HTTP client used for upstream search requests.

mod client;

pub use client::HttpClient;
