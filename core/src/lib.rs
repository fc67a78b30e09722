#![warn(clippy::panic)]
#![warn(clippy::expect_used)]

#[macro_use]
extern crate log;

pub mod diffusion;
pub mod edgelist;
pub mod errors;
pub mod graph;
pub mod relabel;
pub mod types;
pub mod util;
pub mod weights;

pub use crate::errors::{GraphPrepError, Result};
pub use crate::types::{Edge, Label, NodeID, WeightedEdge};
