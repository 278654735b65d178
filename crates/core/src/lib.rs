//! Core domain types and errors for `poolprof`.
//!
//! ## Key Components
//!
//! - **`errors`**: the `PoolError` enum and `Result` alias shared by every
//!   pool implementation.
//! - **`item`**: `CacheItem`, the keyed value exchanged with a pool, carrying
//!   the hit flag that profiling inspects.
//! - **`pool`**: the `CachePool` trait that stores implement and decorators
//!   wrap.
//! - **`keys`**: key validation rules.
//! - **`constants`**: environment variable names and shared limits.

pub mod constants;
pub mod errors;
pub mod item;
pub mod keys;
pub mod pool;

pub use self::{
    constants::*,
    errors::{Error, PoolError, Result},
    item::CacheItem,
    keys::CacheKey,
    pool::CachePool,
};
