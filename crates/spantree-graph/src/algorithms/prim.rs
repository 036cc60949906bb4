//! Minimum spanning tree via Prim's algorithm.
//!
//! The tree grows from the lowest vertex one edge at a time. Candidate edges
//! sit in a min-heap ordered by cost and are discarded when popped if their
//! destination is already spanned (lazy deletion), rather than being removed
//! from the heap when they go stale.
//!
//! A vertex counts as spanned exactly when it is a member of the result
//! graph, so the result doubles as the visited set.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::{debug, warn};

use crate::models::{Cost, Edge, Graph};
use crate::{GraphError, Result};

/// Counters collected during one MST construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MstStats {
    /// Vertices in the result graph.
    pub spanned: usize,
    /// Vertices in the source graph.
    pub total: usize,
    /// Candidates taken off the queue.
    pub popped: usize,
    /// Popped candidates whose destination was already spanned.
    pub discarded: usize,
}

impl MstStats {
    /// Check if the tree reaches every source vertex.
    pub fn is_spanning(&self) -> bool {
        self.spanned == self.total
    }
}

/// Queue entry borrowing an edge from the source graph.
///
/// Orders by cost, then source id, then destination id, so equal-cost
/// candidates pop in a fixed order.
#[derive(Debug, Clone, Copy)]
struct Candidate<'a>(&'a Edge);

impl Candidate<'_> {
    fn key(&self) -> (Cost, u32, u32) {
        (
            self.0.cost(),
            self.0.source().get(),
            self.0.destination().get(),
        )
    }
}

impl PartialEq for Candidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Candidate<'_> {}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Build a minimum spanning tree of `graph` into `result`.
///
/// Both directions of every chosen connection are inserted, so the result is
/// symmetric like its source. Runs until every source vertex is spanned or
/// the queue is exhausted; in the latter case the graph was disconnected and
/// `result` holds the tree of the lowest vertex's component only.
///
/// # Example
///
/// ```
/// use spantree_graph::{prim_mst, Graph};
///
/// let graph = Graph::from_undirected(&[(0, 1, 1), (1, 2, 2), (0, 2, 3)]);
/// let mut mst = Graph::new();
/// let stats = prim_mst(&graph, &mut mst);
///
/// assert!(stats.is_spanning());
/// assert_eq!(mst.calculate_cost() / 2, 3);
/// ```
pub fn prim_mst(graph: &Graph, result: &mut Graph) -> MstStats {
    let mut stats = MstStats {
        total: graph.num_vertices(),
        ..MstStats::default()
    };

    let start = match graph.first_vertex() {
        Some(v) if !graph.is_empty() => v,
        _ => return stats,
    };

    let mut queue: BinaryHeap<Reverse<Candidate<'_>>> = graph
        .outgoing(start)
        .iter()
        .map(|e| Reverse(Candidate(e)))
        .collect();

    debug!(start = %start, seeded = queue.len(), "Seeded MST queue");

    while result.num_vertices() < graph.num_vertices() {
        let Some(Reverse(Candidate(edge))) = queue.pop() else {
            break;
        };
        stats.popped += 1;

        let next = edge.destination();
        if result.has_vertex(next) {
            stats.discarded += 1;
            continue;
        }

        result.insert_edge(*edge);
        result.insert_edge(edge.reversed());

        queue.extend(graph.outgoing(next).iter().map(|e| Reverse(Candidate(e))));
    }

    stats.spanned = result.num_vertices();

    debug!(
        spanned = stats.spanned,
        total = stats.total,
        popped = stats.popped,
        discarded = stats.discarded,
        "MST construction finished"
    );
    if !stats.is_spanning() {
        warn!(
            spanned = stats.spanned,
            total = stats.total,
            "Graph is disconnected; spanning tree covers one component only"
        );
    }

    stats
}

/// Check that `mst` reaches all `vertex_count` vertices.
///
/// Graphs with zero or one vertex are trivially spanned, even though their
/// MST holds no vertices at all.
pub fn ensure_spanning(mst: &Graph, vertex_count: usize) -> Result<()> {
    if vertex_count > 1 && mst.num_vertices() < vertex_count {
        return Err(GraphError::Disconnected {
            spanned: mst.num_vertices(),
            total: vertex_count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Vertex;

    fn mst_of(graph: &Graph) -> (Graph, MstStats) {
        let mut mst = Graph::new();
        let stats = prim_mst(graph, &mut mst);
        (mst, stats)
    }

    fn has_connection(graph: &Graph, a: u32, b: u32) -> bool {
        graph
            .outgoing(Vertex(a))
            .iter()
            .any(|e| e.destination() == Vertex(b))
            && graph
                .outgoing(Vertex(b))
                .iter()
                .any(|e| e.destination() == Vertex(a))
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::new();
        let (mst, stats) = mst_of(&graph);

        assert!(mst.is_empty());
        assert_eq!(stats, MstStats::default());
    }

    #[test]
    fn test_triangle() {
        // 0 --1-- 1 --2-- 2, 0 --3-- 2
        let graph = Graph::from_undirected(&[(0, 1, 1), (1, 2, 2), (0, 2, 3)]);
        let (mst, stats) = mst_of(&graph);

        assert!(stats.is_spanning());
        assert!(has_connection(&mst, 0, 1));
        assert!(has_connection(&mst, 1, 2));
        assert!(!has_connection(&mst, 0, 2));
        assert_eq!(mst.calculate_cost() / 2, 3);
        assert_eq!(mst.num_edges(), 4);
    }

    #[test]
    fn test_result_is_symmetric() {
        let graph = Graph::from_undirected(&[(0, 1, 4), (0, 2, 1), (1, 2, 2), (2, 3, 7)]);
        let (mst, _) = mst_of(&graph);

        for edge in mst.edges() {
            assert!(mst.outgoing(edge.destination()).contains(&edge.reversed()));
        }
    }

    #[test]
    fn test_stale_candidates_are_discarded() {
        // Spanning 1 then 2 leaves the 0->2 candidate stale in the queue
        let graph = Graph::from_undirected(&[(0, 1, 1), (1, 2, 1), (0, 2, 5), (2, 3, 9)]);
        let (mst, stats) = mst_of(&graph);

        assert!(stats.is_spanning());
        assert!(stats.discarded > 0);
        assert_eq!(stats.popped, stats.discarded + 3);
        assert_eq!(mst.calculate_cost() / 2, 11);
    }

    #[test]
    fn test_equal_costs_break_ties_by_vertex_id() {
        // Star of equal edges around 0 plus an equal-cost ring.
        let graph = Graph::from_undirected(&[
            (0, 1, 1),
            (0, 2, 1),
            (0, 3, 1),
            (1, 2, 1),
            (2, 3, 1),
        ]);
        let (mst, _) = mst_of(&graph);

        // Candidates from 0 pop before those from 1 and 2.
        assert!(has_connection(&mst, 0, 1));
        assert!(has_connection(&mst, 0, 2));
        assert!(has_connection(&mst, 0, 3));
        assert_eq!(mst.calculate_cost() / 2, 3);
    }

    #[test]
    fn test_start_is_lowest_vertex() {
        // Two components; the one holding vertex 2 is spanned.
        let graph = Graph::from_undirected(&[(5, 6, 1), (2, 3, 4), (3, 4, 1)]);
        let (mst, stats) = mst_of(&graph);

        assert!(!stats.is_spanning());
        assert_eq!(stats.spanned, 3);
        assert_eq!(stats.total, 5);
        assert!(mst.has_vertex(Vertex(2)));
        assert!(!mst.has_vertex(Vertex(5)));
    }

    #[test]
    fn test_ensure_spanning() {
        let graph = Graph::from_undirected(&[(0, 1, 1), (2, 3, 1)]);
        let (mst, _) = mst_of(&graph);

        assert!(matches!(
            ensure_spanning(&mst, graph.num_vertices()),
            Err(GraphError::Disconnected {
                spanned: 2,
                total: 4
            })
        ));
        assert!(ensure_spanning(&mst, 2).is_ok());

        // A lone vertex has no edges and an empty tree
        assert!(ensure_spanning(&Graph::new(), 1).is_ok());
        assert!(ensure_spanning(&Graph::new(), 0).is_ok());
        assert!(ensure_spanning(&Graph::new(), 2).is_err());
    }
}
