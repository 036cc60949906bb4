//! Cost summary for a graph and its spanning tree.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Cost, Graph};

/// Logical costs of a graph, its reduced form, and the savings.
///
/// Both graphs store every connection in both directions, so each total is
/// the raw [`Graph::calculate_cost`] halved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostReport {
    /// Cost of the incoming graph.
    pub incoming: Cost,
    /// Cost of the reduced graph.
    pub reduced: Cost,
    /// Savings from the reduction.
    pub difference: Cost,
}

impl CostReport {
    /// Build a report from an incoming graph and its reduction.
    pub fn from_graphs(incoming: &Graph, reduced: &Graph) -> Self {
        Self::from_raw(incoming.calculate_cost(), reduced.calculate_cost())
    }

    /// Build a report from unhalved totals.
    ///
    /// The difference is taken before halving.
    pub fn from_raw(incoming: Cost, reduced: Cost) -> Self {
        Self {
            incoming: incoming / 2,
            reduced: reduced / 2,
            difference: (incoming - reduced) / 2,
        }
    }
}

impl fmt::Display for CostReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cost of Incoming Graph: {}", self.incoming)?;
        writeln!(f, "Cost of Reduced Graph: {}", self.reduced)?;
        write!(f, "Difference: {}", self.difference)
    }
}
