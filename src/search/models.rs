//! Inbound search request model

use serde::{Deserialize, Serialize};

/// Body of `POST /search-confluence`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Raw user query, validated by the relay
    pub query: String,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}
