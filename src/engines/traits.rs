//! Engine traits and types

use crate::error::RelayError;
use crate::results::SearchResult;
use std::collections::HashMap;

/// Parameters for building a search request
#[derive(Debug, Clone)]
pub struct RequestParams {
    /// Trimmed, validated query text
    pub query: String,
}

impl RequestParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// HTTP request to be made by the engine
#[derive(Debug, Clone)]
pub struct EngineRequest {
    /// URL to request
    pub url: String,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Query parameters, sent in order
    pub params: Vec<(String, String)>,
}

impl EngineRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
            params: Vec::new(),
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Look up a query parameter by name
    pub fn param_value(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// HTTP response from engine request
#[derive(Debug)]
pub struct EngineResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl EngineResponse {
    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, RelayError> {
        Ok(serde_json::from_str(&self.text)?)
    }

    /// Check if response is an error (4xx/5xx)
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }
}

/// A search backend: knows how to build its request and read its response
pub trait Engine: Send + Sync {
    /// Engine name
    fn name(&self) -> &str;

    /// Timeout for a single upstream call, in seconds
    fn timeout(&self) -> f64 {
        crate::REQUEST_TIMEOUT_SECS
    }

    /// Fail fast when the engine cannot issue requests at all
    fn validate(&self) -> Result<(), RelayError> {
        Ok(())
    }

    /// Build the HTTP request for a search
    fn request(&self, params: &RequestParams) -> Result<EngineRequest, RelayError>;

    /// Parse the HTTP response into results
    fn response(&self, response: EngineResponse) -> Result<Vec<SearchResult>, RelayError>;
}
