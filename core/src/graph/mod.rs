//! In-memory graph structures used while transforming edge lists.
//!
//! Both structures enumerate their content in insertion order, so every
//! numbering derived from them is deterministic.

mod adjacencylist;
mod relabeling;

pub use adjacencylist::AdjacencyList;
pub use relabeling::Relabeling;

#[cfg(test)]
mod tests;
