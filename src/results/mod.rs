//! Result types returned to relay callers

mod types;

pub use types::*;
