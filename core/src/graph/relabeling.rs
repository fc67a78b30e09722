use rustc_hash::FxHashMap;
use std::hash::Hash;

use crate::types::Label;

/// Assigns dense labels `0, 1, 2, ...` to identifiers in the order in which
/// they are first seen.
#[derive(Clone, Debug)]
pub struct Relabeling<K> {
    labels: FxHashMap<K, Label>,
}

impl<K> Default for Relabeling<K>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Relabeling::new()
    }
}

impl<K> Relabeling<K>
where
    K: Eq + Hash,
{
    pub fn new() -> Relabeling<K> {
        Relabeling {
            labels: FxHashMap::default(),
        }
    }

    /// Returns the label of `id`, allocating the next free one if `id` is new.
    pub fn get_or_insert(&mut self, id: K) -> Label {
        let next = self.labels.len();
        *self.labels.entry(id).or_insert(next)
    }

    /// Label both ends of an edge, the source first.
    pub fn relabel_edge(&mut self, source: K, target: K) -> (Label, Label) {
        let source = self.get_or_insert(source);
        let target = self.get_or_insert(target);
        (source, target)
    }

    pub fn get(&self, id: &K) -> Option<Label> {
        self.labels.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
