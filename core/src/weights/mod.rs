//! Annotation of edges with propagation probabilities.
//!
//! Each [`PropagationModel`] assigns a weight to every edge of an edge list
//! and the result is written as `source<TAB>target<TAB>weight` lines, which is
//! the input format of the influence-maximization solvers.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::edgelist::open_edge_list;
use crate::errors::{GraphPrepError, Result};
use crate::graph::AdjacencyList;
use crate::types::{Edge, NodeID, WeightedEdge};
use crate::util::output_path;


/// Stochastic propagation models and their edge weighting rule.
#[derive(Debug, Clone, PartialEq)]
pub enum PropagationModel {
    /// Independent cascade where every edge has the same probability.
    ConstantIc { probability: f64 },
    /// Every edge `(u, v)` gets the weight `1 / indegree(v)`.
    WeightedCascade,
    /// Independent cascade where each edge probability is drawn uniformly
    /// from a small set of values.
    TriValencyIc { probabilities: Vec<f64> },
    /// Linear threshold with uniform weights, which are the same as the
    /// weighted cascade probabilities.
    UniformLt,
    /// Linear threshold where the weights of the incoming edges of a node
    /// are random, but sum up to one.
    RandomLt,
}

impl PropagationModel {
    /// Select a model by its numeric identifier.
    ///
    /// Returns `None` if there is no model with this identifier. Parameters
    /// not needed by the selected model are ignored.
    pub fn from_args(model_id: i64, params: &[f64]) -> Result<Option<PropagationModel>> {
        let model = match model_id {
            0 => {
                let probability = params
                    .first()
                    .copied()
                    .ok_or(GraphPrepError::MissingProbability("constant IC"))?;
                PropagationModel::ConstantIc { probability }
            }
            1 => PropagationModel::WeightedCascade,
            2 => {
                if params.is_empty() {
                    return Err(GraphPrepError::MissingProbability("tri-valency IC"));
                }
                PropagationModel::TriValencyIc {
                    probabilities: params.to_vec(),
                }
            }
            3 => PropagationModel::UniformLt,
            4 => PropagationModel::RandomLt,
            _ => return Ok(None),
        };
        Ok(Some(model))
    }

    pub fn name(&self) -> &'static str {
        match self {
            PropagationModel::ConstantIc { .. } => "constant IC",
            PropagationModel::WeightedCascade => "weighted cascade",
            PropagationModel::TriValencyIc { .. } => "tri-valency IC",
            PropagationModel::UniformLt => "uniform LT",
            PropagationModel::RandomLt => "random LT",
        }
    }

    /// Short name used in the output file name.
    pub fn suffix(&self) -> &'static str {
        match self {
            PropagationModel::ConstantIc { .. } => "IC",
            PropagationModel::WeightedCascade | PropagationModel::UniformLt => "WC",
            PropagationModel::TriValencyIc { .. } => "TV",
            PropagationModel::RandomLt => "R",
        }
    }

    /// Calls `emit` for each weighted edge and returns the number of edges.
    ///
    /// The constant and tri-valency models keep the order of the input. The
    /// other models group the edges by their target, in the order the targets
    /// first appear, and keep the input order of the sources of each target.
    pub fn for_each_weighted_edge<I, R, F>(&self, edges: I, rng: &mut R, mut emit: F) -> Result<usize>
    where
        I: IntoIterator<Item = Result<Edge>>,
        R: Rng,
        F: FnMut(WeightedEdge) -> Result<()>,
    {
        let mut count = 0;
        match self {
            PropagationModel::ConstantIc { probability } => {
                for edge in edges {
                    emit(WeightedEdge::new(edge?, *probability))?;
                    count += 1;
                }
            }
            PropagationModel::TriValencyIc { probabilities } => {
                for edge in edges {
                    let edge = edge?;
                    let weight = probabilities
                        .choose(rng)
                        .copied()
                        .ok_or(GraphPrepError::MissingProbability("tri-valency IC"))?;
                    emit(WeightedEdge::new(edge, weight))?;
                    count += 1;
                }
            }
            PropagationModel::WeightedCascade | PropagationModel::UniformLt => {
                let reversed = load_reversed_graph(edges)?;
                for target in reversed.sources() {
                    let weight = 1.0 / reversed.degree(target) as f64;
                    for source in reversed.targets(target) {
                        emit(WeightedEdge::new(Edge::new(*source, target), weight))?;
                        count += 1;
                    }
                }
            }
            PropagationModel::RandomLt => {
                let reversed = load_reversed_graph(edges)?;
                for target in reversed.sources() {
                    let sources = reversed.targets(target);
                    let weights: Vec<f64> = sources.iter().map(|_| rng.gen::<f64>()).collect();
                    let total: f64 = weights.iter().sum();
                    for (source, weight) in sources.iter().zip(weights) {
                        emit(WeightedEdge::new(Edge::new(*source, target), weight / total))?;
                        count += 1;
                    }
                }
            }
        }
        Ok(count)
    }
}

/// Map each node to the sources of its incoming edges.
///
/// Repeated edges are kept, so they count multiple times for the in-degree.
pub fn load_reversed_graph<I>(edges: I) -> Result<AdjacencyList<NodeID>>
where
    I: IntoIterator<Item = Result<Edge>>,
{
    let mut reversed = AdjacencyList::multigraph();
    for edge in edges {
        let edge = edge?;
        reversed.add_edge(edge.target, edge.source);
    }
    debug!(
        "Loaded reversed graph with {} edges between {} nodes",
        reversed.edge_count(),
        reversed.node_count()
    );
    Ok(reversed)
}

/// Annotate the edge list at `input` and write it to
/// `<output_dir>/<stem>_<suffix>.inf`.
pub fn annotate_file<R: Rng>(
    input: &Path,
    output_dir: &Path,
    model: &PropagationModel,
    rng: &mut R,
) -> Result<(PathBuf, usize)> {
    let output = output_path(input, output_dir, &format!("{}.inf", model.suffix()))?;
    let edges = open_edge_list(input)?;

    info!(
        "Writing {} edge weights to {}",
        model.name(),
        output.display()
    );
    // The output file is only created once the first weighted edge is known
    let mut out: Option<BufWriter<File>> = None;
    let count = model.for_each_weighted_edge(edges, rng, |e| {
        if out.is_none() {
            out = Some(create_output(&output)?);
        }
        if let Some(out) = out.as_mut() {
            writeln!(out, "{}", e)?;
        }
        Ok(())
    })?;
    let mut out = match out {
        Some(out) => out,
        None => create_output(&output)?,
    };
    out.flush()?;
    info!("Wrote {} weighted edges", count);
    Ok((output, count))
}

fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let f = File::create(path).map_err(|source| GraphPrepError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(f))
}
