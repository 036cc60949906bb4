//! Comma-separated adjacency matrix loader.
//!
//! Each line is one matrix row. A cell is either `-` (no edge) or an integer
//! cost. Row and column indices (zero-based) are the two vertices of the
//! edge, and every non-`-` cell becomes one directed edge `row -> column`.
//! A symmetric matrix therefore yields both directions of each connection.
//!
//! Blank lines are skipped and whitespace around cells is ignored.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::num::IntErrorKind;
use std::path::Path;

use tracing::debug;

use crate::models::{Cost, Edge, Graph, Vertex};
use crate::{GraphError, Result};

/// Token marking an absent edge.
pub const NO_EDGE: &str = "-";

/// Largest cost a cell may hold.
///
/// Cells are 32-bit; sums are accumulated as [`Cost`] (`i64`) so a graph of
/// any loadable size totals without overflow.
pub const MAX_CELL_COST: Cost = i32::MAX as Cost;

/// Smallest cost a cell may hold.
pub const MIN_CELL_COST: Cost = i32::MIN as Cost;

/// Largest number of rows and columns; every index must fit a [`Vertex`].
pub const MAX_DIMENSION: usize = u32::MAX as usize;

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Reject matrices where `cell[r][c] != cell[c][r]`.
    pub check_symmetry: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            check_symmetry: true,
        }
    }
}

impl LoaderConfig {
    /// Create new loader configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the symmetry check.
    pub fn with_symmetry_check(mut self, enabled: bool) -> Self {
        self.check_symmetry = enabled;
        self
    }
}

/// Square adjacency matrix with optional costs, stored row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    dimension: usize,
    cells: Vec<Option<Cost>>,
}

impl AdjacencyMatrix {
    /// Parse a matrix from text with the default configuration.
    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_with_config(input, &LoaderConfig::default())
    }

    /// Parse a matrix from text.
    pub fn parse_with_config(input: &str, config: &LoaderConfig) -> Result<Self> {
        Self::from_reader(input.as_bytes(), config)
    }

    /// Read a matrix from a file.
    pub fn from_path(path: impl AsRef<Path>, config: &LoaderConfig) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "Reading adjacency matrix");
        Self::from_reader(BufReader::new(file), config)
    }

    /// Read a matrix from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R, config: &LoaderConfig) -> Result<Self> {
        let mut width: Option<usize> = None;
        let mut rows = 0usize;
        let mut cells = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let start = cells.len();
            for (col, token) in line.split(',').enumerate() {
                cells.push(parse_cell(token.trim(), line_no, col + 1)?);
            }

            let actual = cells.len() - start;
            if actual > MAX_DIMENSION {
                return Err(GraphError::DimensionTooLarge {
                    line: line_no,
                    dimension: actual,
                    max: MAX_DIMENSION,
                });
            }
            let expected = *width.get_or_insert(actual);
            if actual != expected {
                return Err(GraphError::NotSquare {
                    line: line_no,
                    expected,
                    actual,
                });
            }
            rows += 1;
        }

        let dimension = width.unwrap_or(0);
        if rows != dimension {
            return Err(GraphError::RowCount {
                expected: dimension,
                actual: rows,
            });
        }

        let matrix = Self { dimension, cells };
        if config.check_symmetry {
            matrix.validate_symmetry()?;
        }

        debug!(
            dimension = matrix.dimension,
            entries = matrix.num_entries(),
            "Loaded adjacency matrix"
        );
        Ok(matrix)
    }

    /// Read a matrix from an unbuffered reader such as stdin.
    pub fn read_from<R: Read>(reader: R, config: &LoaderConfig) -> Result<Self> {
        Self::from_reader(BufReader::new(reader), config)
    }

    /// Number of rows (and columns).
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Cost of the `row -> column` cell, if present.
    pub fn get(&self, row: usize, column: usize) -> Option<Cost> {
        if row >= self.dimension || column >= self.dimension {
            return None;
        }
        self.cells[row * self.dimension + column]
    }

    /// Number of non-`-` cells.
    pub fn num_entries(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Directed edges for every present cell, in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.dimension;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|cost| Edge::new(matrix_vertex(i / n), matrix_vertex(i % n), cost))
        })
    }

    /// Insert every present cell into `graph` as a directed edge.
    pub fn load_into(&self, graph: &mut Graph) {
        graph.extend(self.edges());
    }

    /// Build a fresh graph from this matrix.
    pub fn to_graph(&self) -> Graph {
        self.edges().collect()
    }

    /// Check that `cell[r][c] == cell[c][r]` for every pair.
    pub fn validate_symmetry(&self) -> Result<()> {
        for row in 0..self.dimension {
            for column in (row + 1)..self.dimension {
                let forward = self.get(row, column);
                let backward = self.get(column, row);
                if forward != backward {
                    return Err(GraphError::Asymmetric {
                        row,
                        column,
                        forward,
                        backward,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Vertex for a row or column index.
///
/// Indices are below `dimension`, which loading caps at [`MAX_DIMENSION`].
fn matrix_vertex(index: usize) -> Vertex {
    debug_assert!(index < MAX_DIMENSION);
    Vertex::new(index as u32)
}

fn parse_cell(token: &str, line: usize, column: usize) -> Result<Option<Cost>> {
    if token == NO_EDGE {
        return Ok(None);
    }
    match token.parse::<i32>() {
        Ok(cost) => Ok(Some(Cost::from(cost))),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Err(GraphError::CostOutOfRange {
                line,
                column,
                token: token.to_string(),
            })
        }
        Err(_) => Err(GraphError::Parse {
            line,
            column,
            token: token.to_string(),
        }),
    }
}
