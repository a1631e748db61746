//! Confluence relay: a thin HTTP service that forwards search queries to the
//! Confluence REST search API and returns a simplified result list.

pub mod config;
pub mod engines;
pub mod error;
pub mod network;
pub mod query;
pub mod results;
pub mod search;
pub mod web;

pub use config::Settings;
pub use engines::Engine;
pub use error::RelayError;
pub use results::{SearchResponse, SearchResult};
pub use search::{QueryRequest, Relay};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User agent sent upstream unless overridden in settings
pub const USER_AGENT: &str = concat!("confluence-relay/", env!("CARGO_PKG_VERSION"));

/// Timeout for the upstream search call in seconds
pub const REQUEST_TIMEOUT_SECS: f64 = 15.0;

/// Number of results requested from upstream
pub const SEARCH_LIMIT: u32 = 5;
