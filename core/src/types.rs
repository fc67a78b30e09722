use std::fmt;

use crate::util::format_general;

/// Identifier of a node as it appears in an edge list file.
///
/// Identifiers are neither assumed to be contiguous nor to start at zero.
pub type NodeID = i64;

/// Dense, zero-based node identifier assigned by a [`Relabeling`](crate::graph::Relabeling).
pub type Label = usize;

/// Number of significant digits used when writing edge weights.
pub const WEIGHT_PRECISION: usize = 3;

/// Directed edge between a source and target node which are identified by their ID.
#[derive(Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub struct Edge {
    pub source: NodeID,
    pub target: NodeID,
}

impl Edge {
    pub fn new(source: NodeID, target: NodeID) -> Edge {
        Edge { source, target }
    }
}

/// An edge annotated with a propagation probability.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct WeightedEdge {
    pub source: NodeID,
    pub target: NodeID,
    pub weight: f64,
}

impl WeightedEdge {
    pub fn new(edge: Edge, weight: f64) -> WeightedEdge {
        WeightedEdge {
            source: edge.source,
            target: edge.target,
            weight,
        }
    }
}

impl fmt::Display for WeightedEdge {
    /// Renders the edge as one line of an `.inf` file (without the line break).
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}",
            self.source,
            self.target,
            format_general(self.weight, WEIGHT_PRECISION)
        )
    }
}
