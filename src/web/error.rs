//! Mapping of relay errors onto HTTP responses

use crate::error::RelayError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// JSON error body: `{"detail": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl RelayError {
    /// HTTP status reported to the caller
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingCredential => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::QueryTooShort { .. } => StatusCode::BAD_REQUEST,
            RelayError::Upstream { status } => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            RelayError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            RelayError::Network(_) | RelayError::Mapping(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message reported to the caller. Upstream detail stays in the logs.
    pub fn detail(&self) -> &'static str {
        match self {
            RelayError::MissingCredential => "CONFLUENCE_TOKEN not set",
            RelayError::QueryTooShort { .. } => "Query too short",
            RelayError::Upstream { .. } => "Confluence search failed",
            RelayError::Timeout => "Confluence search timed out",
            RelayError::Network(_) => "Confluence is unreachable",
            RelayError::Mapping(_) => "Unexpected response from Confluence",
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        if self.is_server_fault() {
            tracing::error!("Search relay misconfigured: {}", self);
        } else if matches!(self, RelayError::QueryTooShort { .. }) {
            tracing::debug!("Rejected search: {}", self);
        } else {
            tracing::warn!("Search relay failed: {}", self);
        }

        let body = ErrorBody {
            detail: self.detail().to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RelayError::MissingCredential.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            RelayError::QueryTooShort { min: 3 }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RelayError::Upstream { status: 404 }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RelayError::Upstream { status: 503 }.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(RelayError::Timeout.status_code(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(
            RelayError::Mapping("x".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_non_error_upstream_status_becomes_bad_gateway() {
        assert_eq!(
            RelayError::Upstream { status: 200 }.status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            RelayError::Upstream { status: 1000 }.status_code(),
            StatusCode::BAD_GATEWAY
        );
    }
}
