//! Shared utilities for the poolprof workspace

pub mod tracing;
