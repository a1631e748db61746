//! Search orchestration module
//!
//! Validates inbound queries, runs the single upstream call and maps the
//! response for the caller.

mod executor;
mod models;

pub use executor::Relay;
pub use models::*;
