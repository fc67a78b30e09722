//! Simulation of influence propagation on annotated graphs.
//!
//! The `.inf` files written by the edge-weight tools are loaded into a
//! [`WeightedGraph`] and the expected number of nodes reached from a seed set
//! is estimated by repeated Monte-Carlo diffusion under the independent
//! cascade or the linear threshold model.

use rand::Rng;
use std::collections::VecDeque;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::edgelist::open_weighted_edge_list;
use crate::errors::{GraphPrepError, Result};
use crate::graph::Relabeling;
use crate::types::{Label, NodeID, WeightedEdge};


/// Stochastic diffusion model used to simulate the spread of influence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffusionModel {
    /// Each newly activated node gets a single chance to activate each of its
    /// inactive out-neighbors, succeeding with the edge weight.
    IndependentCascade,
    /// Each node picks at most one incoming "live" edge with probability equal
    /// to the edge weight, and a node is reached if there is a path of live
    /// edges from a seed.
    LinearThreshold,
}

impl FromStr for DiffusionModel {
    type Err = GraphPrepError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ic" => Ok(DiffusionModel::IndependentCascade),
            "lt" => Ok(DiffusionModel::LinearThreshold),
            _ => Err(GraphPrepError::UnknownDiffusionModel(s.to_string())),
        }
    }
}

impl fmt::Display for DiffusionModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DiffusionModel::IndependentCascade => write!(f, "IC"),
            DiffusionModel::LinearThreshold => write!(f, "LT"),
        }
    }
}

/// Directed graph with a propagation weight on every edge.
///
/// Nodes are stored with dense labels in the order they first appear.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    labels: Relabeling<NodeID>,
    nodes: Vec<NodeID>,
    outgoing: Vec<Vec<(Label, f64)>>,
    incoming: Vec<Vec<(Label, f64)>>,
    edge_count: usize,
}

impl WeightedGraph {
    pub fn from_edges<I>(edges: I) -> Result<WeightedGraph>
    where
        I: IntoIterator<Item = Result<WeightedEdge>>,
    {
        let mut graph = WeightedGraph::default();
        for edge in edges {
            graph.add_edge(edge?);
        }
        Ok(graph)
    }

    fn add_node(&mut self, id: NodeID) -> Label {
        let label = self.labels.get_or_insert(id);
        if label == self.nodes.len() {
            self.nodes.push(id);
            self.outgoing.push(Vec::new());
            self.incoming.push(Vec::new());
        }
        label
    }

    pub fn add_edge(&mut self, edge: WeightedEdge) {
        let source = self.add_node(edge.source);
        let target = self.add_node(edge.target);
        self.outgoing[source].push((target, edge.weight));
        self.incoming[target].push((source, edge.weight));
        self.edge_count += 1;
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn seed_labels(&self, seeds: &[NodeID]) -> Result<Vec<Label>> {
        seeds
            .iter()
            .map(|id| {
                self.labels
                    .get(id)
                    .ok_or(GraphPrepError::UnknownSeedNode(*id))
            })
            .collect()
    }

    /// Run a single diffusion from `seeds` and return the reached nodes in
    /// the order they were activated, seeds first.
    pub fn diffuse<R: Rng>(
        &self,
        model: DiffusionModel,
        seeds: &[NodeID],
        rng: &mut R,
    ) -> Result<Vec<NodeID>> {
        let seeds = self.seed_labels(seeds)?;
        let reached = match model {
            DiffusionModel::IndependentCascade => self.cascade(&seeds, rng),
            DiffusionModel::LinearThreshold => self.live_edge_reach(&seeds, rng),
        };
        Ok(reached.into_iter().map(|n| self.nodes[n]).collect())
    }

    /// Average number of nodes reached from `seeds` over `simulations` runs.
    pub fn estimate_spread<R: Rng>(
        &self,
        model: DiffusionModel,
        seeds: &[NodeID],
        simulations: usize,
        rng: &mut R,
    ) -> Result<f64> {
        if simulations == 0 {
            return Err(GraphPrepError::NoSimulations);
        }
        let seeds = self.seed_labels(seeds)?;
        let mut total = 0;
        for _ in 0..simulations {
            total += match model {
                DiffusionModel::IndependentCascade => self.cascade(&seeds, rng).len(),
                DiffusionModel::LinearThreshold => self.live_edge_reach(&seeds, rng).len(),
            };
        }
        Ok(total as f64 / simulations as f64)
    }

    fn cascade<R: Rng>(&self, seeds: &[Label], rng: &mut R) -> Vec<Label> {
        let mut active = vec![false; self.nodes.len()];
        let mut reached = Vec::new();
        let mut queue = VecDeque::new();
        for &seed in seeds {
            if !active[seed] {
                active[seed] = true;
                reached.push(seed);
                queue.push_back(seed);
            }
        }

        while let Some(node) = queue.pop_front() {
            for &(target, weight) in self.outgoing[node].iter() {
                if !active[target] && rng.gen::<f64>() < weight {
                    active[target] = true;
                    reached.push(target);
                    queue.push_back(target);
                }
            }
        }
        reached
    }

    /// Picks the incoming live edge of `node`, if any.
    ///
    /// Weights summing up to more than one are scaled down, a sum below one
    /// leaves the remaining probability for choosing no edge at all.
    fn sample_live_edge<R: Rng>(&self, node: Label, rng: &mut R) -> Option<Label> {
        let incoming = &self.incoming[node];
        if incoming.is_empty() {
            return None;
        }
        let total: f64 = incoming.iter().map(|(_, weight)| weight).sum();
        let mut r = rng.gen::<f64>() * total.max(1.0);
        for &(source, weight) in incoming.iter() {
            if r < weight {
                return Some(source);
            }
            r -= weight;
        }
        None
    }

    fn live_edge_reach<R: Rng>(&self, seeds: &[Label], rng: &mut R) -> Vec<Label> {
        let mut live_edges: Vec<Vec<Label>> = vec![Vec::new(); self.nodes.len()];
        for node in 0..self.nodes.len() {
            if let Some(source) = self.sample_live_edge(node, rng) {
                live_edges[source].push(node);
            }
        }

        let mut visited = vec![false; self.nodes.len()];
        let mut reached = Vec::new();
        let mut queue = VecDeque::new();
        for &seed in seeds {
            if !visited[seed] {
                visited[seed] = true;
                reached.push(seed);
                queue.push_back(seed);
            }
        }
        while let Some(node) = queue.pop_front() {
            for &target in live_edges[node].iter() {
                if !visited[target] {
                    visited[target] = true;
                    reached.push(target);
                    queue.push_back(target);
                }
            }
        }
        reached
    }
}

/// Load an annotated edge list written by the edge-weight tools.
pub fn load_weighted_graph(path: &Path) -> Result<WeightedGraph> {
    let graph = WeightedGraph::from_edges(open_weighted_edge_list(path)?)?;
    info!(
        "Loaded weighted graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}
