//! Application state shared across handlers

use crate::config::Settings;
use crate::engines::Confluence;
use crate::network::HttpClient;
use crate::search::Relay;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Search relay
    pub relay: Arc<Relay>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, client: HttpClient) -> Self {
        let engine = Arc::new(Confluence::from_settings(&settings.confluence));
        let relay = Arc::new(Relay::new(client, engine));

        Self {
            settings: Arc::new(settings),
            relay,
        }
    }

    /// Whether a bearer token is configured
    pub fn has_credential(&self) -> bool {
        self.settings.confluence.token.is_some()
    }
}
