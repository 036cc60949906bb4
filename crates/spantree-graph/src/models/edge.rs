//! Directed, costed edges.

use super::vertex::Vertex;

/// Edge cost. Signed so that totals and differences never wrap.
pub type Cost = i64;

/// Directed edge from `source` to `destination`.
///
/// Undirected connections are stored as two edges, one per direction, with
/// equal cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    source: Vertex,
    destination: Vertex,
    cost: Cost,
}

impl Edge {
    /// Create a new edge.
    pub const fn new(source: Vertex, destination: Vertex, cost: Cost) -> Self {
        Self {
            source,
            destination,
            cost,
        }
    }

    /// Vertex this edge leaves from.
    pub const fn source(&self) -> Vertex {
        self.source
    }

    /// Vertex this edge points to.
    pub const fn destination(&self) -> Vertex {
        self.destination
    }

    pub const fn cost(&self) -> Cost {
        self.cost
    }

    /// Same connection in the opposite direction.
    pub const fn reversed(&self) -> Self {
        Self::new(self.destination, self.source, self.cost)
    }
}
