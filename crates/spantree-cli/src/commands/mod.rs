//! CLI command implementations.

pub mod reduce;
