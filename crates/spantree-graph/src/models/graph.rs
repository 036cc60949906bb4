//! Adjacency-list graph.
//!
//! Vertices live in an ordered set so that the lowest identifier is always
//! the first one visited. Outgoing edges are kept per source vertex in
//! insertion order.

use std::collections::{BTreeMap, BTreeSet};

use super::edge::{Cost, Edge};
use super::vertex::Vertex;
use crate::algorithms::prim::{prim_mst, MstStats};

/// Directed graph stored as adjacency lists.
///
/// Every edge's endpoints are always members of the vertex set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    vertices: BTreeSet<Vertex>,
    edges: BTreeMap<Vertex, Vec<Edge>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph from directed edges.
    pub fn from_edges(edges: &[Edge]) -> Self {
        edges.iter().copied().collect()
    }

    /// Create a graph from undirected `(a, b, cost)` triples.
    ///
    /// Each triple is stored as two directed edges of equal cost.
    ///
    /// # Example
    ///
    /// ```
    /// use spantree_graph::Graph;
    ///
    /// let graph = Graph::from_undirected(&[(0, 1, 4), (1, 2, 5)]);
    /// assert_eq!(graph.num_edges(), 4);
    /// assert_eq!(graph.calculate_cost(), 18);
    /// ```
    pub fn from_undirected(edges: &[(u32, u32, Cost)]) -> Self {
        let mut graph = Self::new();
        for &(a, b, cost) in edges {
            let edge = Edge::new(Vertex(a), Vertex(b), cost);
            graph.insert_edge(edge);
            graph.insert_edge(edge.reversed());
        }
        graph
    }

    /// Insert an edge, adding both endpoints to the vertex set.
    pub fn insert_edge(&mut self, edge: Edge) {
        self.vertices.insert(edge.source());
        self.vertices.insert(edge.destination());

        self.edges.entry(edge.source()).or_default().push(edge);
    }

    /// Check if the vertex is a member of this graph.
    pub fn has_vertex(&self, vertex: Vertex) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Sum of the costs of every stored directed edge.
    ///
    /// Undirected connections are stored twice, so for a symmetric graph this
    /// is twice the logical total. Halving is left to the caller.
    pub fn calculate_cost(&self) -> Cost {
        self.edges.values().flatten().map(Edge::cost).sum()
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges.
    pub fn num_edges(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Check if the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Lowest vertex by identifier.
    pub fn first_vertex(&self) -> Option<Vertex> {
        self.vertices.first().copied()
    }

    /// Vertices in ascending identifier order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.vertices.iter().copied()
    }

    /// All directed edges, grouped by ascending source vertex.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values().flatten()
    }

    /// Outgoing edges of a vertex, in insertion order.
    pub fn outgoing(&self, vertex: Vertex) -> &[Edge] {
        self.edges.get(&vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Build a minimum spanning tree of this graph into `result`.
    ///
    /// `result` is expected to start empty. Disconnected input yields a tree
    /// spanning only the component of the lowest vertex. See
    /// [`prim_mst`](crate::prim_mst).
    pub fn create_minimum_spanning_tree(&self, result: &mut Graph) -> MstStats {
        prim_mst(self, result)
    }
}

impl FromIterator<Edge> for Graph {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl Extend<Edge> for Graph {
    fn extend<I: IntoIterator<Item = Edge>>(&mut self, iter: I) {
        for edge in iter {
            self.insert_edge(edge);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.num_vertices(), 0);
        assert_eq!(graph.num_edges(), 0);
        assert_eq!(graph.calculate_cost(), 0);
        assert_eq!(graph.first_vertex(), None);
    }

    #[test]
    fn test_insert_edge_adds_both_endpoints() {
        let mut graph = Graph::new();
        graph.insert_edge(Edge::new(Vertex(2), Vertex(5), 7));

        assert!(graph.has_vertex(Vertex(2)));
        assert!(graph.has_vertex(Vertex(5)));
        assert!(!graph.has_vertex(Vertex(3)));
        assert_eq!(graph.num_vertices(), 2);
        assert_eq!(graph.num_edges(), 1);

        // Destination has no outgoing list of its own
        assert!(graph.outgoing(Vertex(5)).is_empty());
        assert_eq!(graph.outgoing(Vertex(2)).len(), 1);
    }

    #[test]
    fn test_vertex_set_is_idempotent() {
        let mut graph = Graph::new();
        graph.insert_edge(Edge::new(Vertex(0), Vertex(1), 1));
        graph.insert_edge(Edge::new(Vertex(0), Vertex(1), 1));
        graph.insert_edge(Edge::new(Vertex(1), Vertex(0), 1));

        assert_eq!(graph.num_vertices(), 2);
        assert_eq!(graph.num_edges(), 3);
    }

    #[test]
    fn test_outgoing_keeps_insertion_order() {
        let mut graph = Graph::new();
        graph.insert_edge(Edge::new(Vertex(0), Vertex(3), 5));
        graph.insert_edge(Edge::new(Vertex(0), Vertex(1), 2));
        graph.insert_edge(Edge::new(Vertex(0), Vertex(2), 9));

        let destinations: Vec<_> = graph
            .outgoing(Vertex(0))
            .iter()
            .map(Edge::destination)
            .collect();
        assert_eq!(destinations, vec![Vertex(3), Vertex(1), Vertex(2)]);
    }

    #[test]
    fn test_calculate_cost_counts_both_directions() {
        let graph = Graph::from_undirected(&[(0, 1, 1), (1, 2, 2), (0, 2, 3)]);
        assert_eq!(graph.calculate_cost(), 12);
        assert_eq!(graph.calculate_cost() / 2, 6);
    }

    #[test]
    fn test_first_vertex_is_lowest_id() {
        let graph = Graph::from_undirected(&[(7, 3, 1), (9, 4, 1)]);
        assert_eq!(graph.first_vertex(), Some(Vertex(3)));

        let order: Vec<_> = graph.vertices().collect();
        assert_eq!(order, vec![Vertex(3), Vertex(4), Vertex(7), Vertex(9)]);
    }

    #[test]
    fn test_collect_from_edges() {
        let edges = [
            Edge::new(Vertex(0), Vertex(1), 4),
            Edge::new(Vertex(1), Vertex(0), 4),
        ];
        let graph = Graph::from_edges(&edges);
        let collected: Graph = edges.into_iter().collect();

        assert_eq!(graph, collected);
        assert_eq!(graph.edges().count(), 2);
    }
}
