//! Minimum spanning tree reduction for weighted adjacency-matrix networks.
//!
//! This crate provides:
//!
//! - **Graph**: Adjacency-list graph keyed by ordered vertex identifiers
//! - **Prim**: Lazy-deletion Prim's algorithm producing a symmetric MST graph
//! - **Matrix loader**: Comma-separated adjacency matrix parsing and validation
//! - **Cost report**: Halved incoming/reduced/difference totals
//!
//! # Example
//!
//! ```
//! use spantree_graph::{AdjacencyMatrix, CostReport, Graph};
//!
//! let matrix = AdjacencyMatrix::parse("-,1,3\n1,-,2\n3,2,-\n").unwrap();
//! let graph = matrix.to_graph();
//!
//! let mut mst = Graph::new();
//! graph.create_minimum_spanning_tree(&mut mst);
//!
//! let report = CostReport::from_graphs(&graph, &mst);
//! assert_eq!(report.incoming, 6);
//! assert_eq!(report.reduced, 3);
//! assert_eq!(report.difference, 3);
//! ```

pub mod algorithms;
pub mod loader;
pub mod models;
pub mod report;

pub use algorithms::prim::{ensure_spanning, prim_mst, MstStats};
pub use loader::{AdjacencyMatrix, LoaderConfig};
pub use models::edge::{Cost, Edge};
pub use models::graph::Graph;
pub use models::vertex::Vertex;
pub use report::CostReport;

/// Graph loading and validation error types.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Reading the matrix source failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A cell is neither `-` nor an integer.
    #[error("Invalid cell {token:?} at line {line}, column {column}")]
    Parse {
        line: usize,
        column: usize,
        token: String,
    },

    /// A cell holds an integer too large for a matrix cost.
    #[error("Cost {token} at line {line}, column {column} is out of range")]
    CostOutOfRange {
        line: usize,
        column: usize,
        token: String,
    },

    /// A row has more cells than vertex identifiers can address.
    #[error("Matrix dimension {dimension} at line {line} exceeds the maximum of {max}")]
    DimensionTooLarge {
        line: usize,
        dimension: usize,
        max: usize,
    },

    /// A row has a different number of cells than the first row.
    #[error("Matrix is not square: line {line} has {actual} cells, expected {expected}")]
    NotSquare {
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// The number of rows differs from the number of columns.
    #[error("Matrix is not square: {actual} rows, expected {expected}")]
    RowCount { expected: usize, actual: usize },

    /// `cell[row][column]` differs from `cell[column][row]`.
    #[error("Matrix is not symmetric at ({row}, {column}): {forward:?} vs {backward:?}")]
    Asymmetric {
        row: usize,
        column: usize,
        forward: Option<Cost>,
        backward: Option<Cost>,
    },

    /// The spanning tree does not reach every vertex.
    #[error("Graph is disconnected: spanning tree reaches {spanned} of {total} vertices")]
    Disconnected { spanned: usize, total: usize },
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
