//! Search engine module
//!
//! Defines the Engine trait and the Confluence backend the relay talks to.

mod traits;

pub mod confluence;

pub use confluence::Confluence;
pub use traits::*;
