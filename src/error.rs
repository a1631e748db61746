//! Error taxonomy for the search relay

use thiserror::Error;

/// Everything that can go wrong while relaying a search
#[derive(Debug, Error)]
pub enum RelayError {
    /// No bearer credential configured
    #[error("CONFLUENCE_TOKEN not set")]
    MissingCredential,

    /// Trimmed query is shorter than the minimum length
    #[error("query must be at least {min} characters")]
    QueryTooShort { min: usize },

    /// Upstream answered with a status >= 400
    #[error("upstream returned HTTP {status}")]
    Upstream { status: u16 },

    /// Upstream did not answer within the request timeout
    #[error("upstream request timed out")]
    Timeout,

    /// Transport-level failure talking to the upstream
    #[error("network error: {0}")]
    Network(reqwest::Error),

    /// Successful upstream payload could not be mapped
    #[error("unexpected upstream payload: {0}")]
    Mapping(String),
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RelayError::Timeout
        } else {
            RelayError::Network(err)
        }
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        RelayError::Mapping(err.to_string())
    }
}

impl RelayError {
    /// Whether the failure originates on our side rather than the caller's or upstream's
    pub fn is_server_fault(&self) -> bool {
        matches!(self, RelayError::MissingCredential)
    }
}
