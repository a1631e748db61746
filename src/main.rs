//! Confluence relay
//!
//! This is the main entry point for the application.

use anyhow::Result;
use confluence_relay::{
    config,
    network::HttpClient,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|a| a == "-h" || a == "--help") {
        print_usage();
        return Ok(());
    }

    // Load configuration
    let settings_path = config::locate();
    let settings = config::load_from(settings_path.as_deref())?;

    // Initialize logging
    let default_level = if settings.general.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    info!("Starting confluence-relay v{}", confluence_relay::VERSION);
    match settings_path {
        Some(path) => info!("Loaded settings from: {}", path.display()),
        None => info!("No settings file found, using defaults"),
    }
    info!("Relaying searches to {}", settings.confluence.base_url);
    if settings.confluence.token.is_none() {
        warn!("CONFLUENCE_TOKEN not set; searches will fail until it is configured");
    }

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.outgoing)?;

    // Bind address
    let addr = SocketAddr::new(settings.server.bind_address.parse()?, settings.server.port);

    // Create application state and router
    let app = create_router(AppState::new(settings, client));

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Print usage information
fn print_usage() {
    println!(
        r#"
confluence-relay v{}
Relays search queries to the Confluence REST search API

USAGE:
    confluence-relay

ENVIRONMENT VARIABLES:
    CONFLUENCE_TOKEN       Bearer token for the Confluence API (required for searches)
    CONFLUENCE_BASE_URL    Wiki base URL, e.g. https://example.atlassian.net/wiki
    RELAY_SETTINGS_PATH    Path to settings.yml
    RELAY_DEBUG            Enable debug logging (true/false)
    RELAY_PORT             Server port
    RELAY_BIND_ADDRESS     Bind address
    RUST_LOG               Log filter, overrides RELAY_DEBUG
"#,
        confluence_relay::VERSION
    );
}
