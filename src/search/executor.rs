//! Search execution against the upstream engine

use crate::engines::{Engine, RequestParams};
use crate::error::RelayError;
use crate::network::HttpClient;
use crate::query;
use crate::results::SearchResponse;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Relays one query to one engine. Holds no per-request state.
pub struct Relay {
    /// HTTP client for making requests
    client: HttpClient,
    /// Upstream engine
    engine: Arc<dyn Engine>,
    /// Hard limit on the upstream call
    timeout: Duration,
}

impl Relay {
    /// Create a new relay
    pub fn new(client: HttpClient, engine: Arc<dyn Engine>) -> Self {
        let timeout = Duration::from_secs_f64(engine.timeout());
        Self {
            client,
            engine,
            timeout,
        }
    }

    /// Set the upstream timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Search Confluence for `raw_query` and return the simplified results.
    ///
    /// The credential is checked before the query, so a missing token is
    /// reported for every input. Neither failure issues an upstream call.
    pub async fn search_confluence(&self, raw_query: &str) -> Result<SearchResponse, RelayError> {
        self.engine.validate()?;
        let text = query::normalize(raw_query)?;

        let engine_name = self.engine.name();
        let request = self.engine.request(&RequestParams::new(text))?;
        let start = Instant::now();

        debug!(
            "Searching engine {} with timeout {:?}",
            engine_name, self.timeout
        );

        let response = match timeout(
            self.timeout,
            self.client.execute_with_timeout(request, self.timeout),
        )
        .await
        {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                warn!("Request failed for {}: {}", engine_name, e);
                return Err(e.into());
            }
            Err(_) => {
                warn!("Timeout for engine {}", engine_name);
                return Err(RelayError::Timeout);
            }
        };

        let response = SearchResponse::new(self.engine.response(response)?);

        info!(
            "Engine {} returned {} results for '{}' in {:?}",
            engine_name,
            response.len(),
            text,
            start.elapsed()
        );

        Ok(response)
    }
}
