//! Web server module
//!
//! Provides the HTTP API for the relay.

mod error;
mod handlers;
mod routes;
mod state;

pub use error::ErrorBody;
pub use routes::create_router;
pub use state::AppState;
