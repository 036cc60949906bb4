//! Graph data models.
//!
//! This module provides the core data structures for representing graphs:
//! - [`Vertex`]: Matrix row/column identifier
//! - [`Edge`]: Directed, costed connection between two vertices
//! - [`Graph`]: Adjacency-list graph over an ordered vertex set

pub mod edge;
pub mod graph;
pub mod vertex;

pub use edge::{Cost, Edge};
pub use graph::Graph;
pub use vertex::Vertex;
