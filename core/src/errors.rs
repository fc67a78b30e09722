use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;

use thiserror::Error;

use crate::types::NodeID;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GraphPrepError {
    #[error("could not open input file {path}: {source}")]
    OpenInput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not create output file {path}: {source}")]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("line {line}: expected at least {expected} fields, but got {content:?}")]
    MalformedLine {
        line: usize,
        expected: usize,
        content: String,
    },
    #[error("line {line}: invalid node id {value:?}: {source}")]
    InvalidNodeId {
        line: usize,
        value: String,
        source: ParseIntError,
    },
    #[error("line {line}: invalid edge weight {value:?}: {source}")]
    InvalidWeight {
        line: usize,
        value: String,
        source: ParseFloatError,
    },
    #[error("model {0} needs at least one probability parameter")]
    MissingProbability(&'static str),
    #[error("unknown diffusion model {0:?}, expected \"ic\" or \"lt\"")]
    UnknownDiffusionModel(String),
    #[error("seed node {0} is not part of the graph")]
    UnknownSeedNode(NodeID),
    #[error("the number of simulations must be at least 1")]
    NoSimulations,
    #[error("can't derive an output file name from input path {0}")]
    NoFileName(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GraphPrepError>;
