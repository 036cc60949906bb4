//! Graph algorithms.
//!
//! - [`prim`]: Minimum spanning tree via lazy-deletion Prim's algorithm

pub mod prim;

pub use prim::{ensure_spanning, prim_mst, MstStats};
