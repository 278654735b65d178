//! Error types for cache pool operations

mod builders;
mod recovery;
mod types;

pub use types::{Error, PoolError, Result};
