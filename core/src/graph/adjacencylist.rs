use rustc_hash::{FxHashMap, FxHashSet};
use std::hash::Hash;

use crate::types::Label;

/// Adjacency mapping from a node to the nodes it points to.
///
/// Source nodes are enumerated in the order they were first added as source
/// and the targets of each source in the order they were added. In the
/// default (set) mode a repeated edge is only stored once, while a
/// [multigraph](AdjacencyList::multigraph) keeps every insertion.
#[derive(Clone, Debug)]
pub struct AdjacencyList<N = Label> {
    index: FxHashMap<N, usize>,
    entries: Vec<(N, Vec<N>)>,
    edge_set: Option<FxHashSet<(N, N)>>,
    edge_count: usize,
}

impl<N> Default for AdjacencyList<N>
where
    N: Copy + Eq + Hash,
{
    fn default() -> Self {
        AdjacencyList::new()
    }
}

impl<N> AdjacencyList<N>
where
    N: Copy + Eq + Hash,
{
    /// Creates an adjacency list where duplicate edges collapse.
    pub fn new() -> AdjacencyList<N> {
        AdjacencyList {
            index: FxHashMap::default(),
            entries: Vec::new(),
            edge_set: Some(FxHashSet::default()),
            edge_count: 0,
        }
    }

    /// Creates an adjacency list that keeps duplicate edges.
    pub fn multigraph() -> AdjacencyList<N> {
        AdjacencyList {
            index: FxHashMap::default(),
            entries: Vec::new(),
            edge_set: None,
            edge_count: 0,
        }
    }

    /// Adds an edge and returns `false` if it was already present and the
    /// list does not allow duplicates.
    pub fn add_edge(&mut self, source: N, target: N) -> bool {
        if let Some(edge_set) = &mut self.edge_set {
            if !edge_set.insert((source, target)) {
                return false;
            }
        }
        let entries = &mut self.entries;
        let idx = *self.index.entry(source).or_insert_with(|| {
            entries.push((source, Vec::new()));
            entries.len() - 1
        });
        self.entries[idx].1.push(target);
        self.edge_count += 1;
        true
    }

    #[cfg(test)]
    pub(crate) fn contains_edge(&self, source: N, target: N) -> bool {
        if let Some(edge_set) = &self.edge_set {
            edge_set.contains(&(source, target))
        } else {
            self.targets(source).contains(&target)
        }
    }

    /// All nodes with at least one outgoing edge.
    pub fn sources(&self) -> impl Iterator<Item = N> + '_ {
        self.entries.iter().map(|(source, _)| *source)
    }

    /// The targets of all outgoing edges of `node`.
    pub fn targets(&self, node: N) -> &[N] {
        if let Some(idx) = self.index.get(&node) {
            self.entries[*idx].1.as_slice()
        } else {
            &[]
        }
    }

    /// Number of outgoing edges of `node`.
    pub fn degree(&self, node: N) -> usize {
        self.targets(node).len()
    }

    /// Iterate over all edges, grouped by their source node.
    pub fn edges(&self) -> impl Iterator<Item = (N, N)> + '_ {
        self.entries
            .iter()
            .flat_map(|(source, targets)| targets.iter().map(move |target| (*source, *target)))
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of distinct nodes that are either source or target of an edge.
    pub fn node_count(&self) -> usize {
        let mut nodes: FxHashSet<N> = self.index.keys().copied().collect();
        for (_, targets) in self.entries.iter() {
            nodes.extend(targets.iter().copied());
        }
        nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }
}
