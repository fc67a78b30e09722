//! Normalization of raw edge lists.
//!
//! Nodes are renumbered from `0` to `n - 1` and repeated edges are removed.
//! The numbering happens twice: once while the edge list is read and once
//! more, in adjacency order, while the cleaned graph is written. Selecting
//! the largest connected component is not performed; the whole graph is
//! always written.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::edgelist::open_edge_list;
use crate::errors::{GraphPrepError, Result};
use crate::graph::{AdjacencyList, Relabeling};
use crate::types::{Edge, Label};
use crate::util::output_path;

/// Suffix (including extension) of the cleaned graph file.
pub const OUTPUT_SUFFIX: &str = "directed.txt";

/// Node and edge count of a written graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CleanSummary {
    pub nodes: usize,
    pub edges: usize,
}

impl std::fmt::Display for CleanSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} nodes, {} edges", self.nodes, self.edges)
    }
}

/// Build the adjacency list of relabeled nodes from an edge list.
///
/// For undirected graphs each edge is also added in reverse direction.
pub fn load_graph<I>(edges: I, directed: bool) -> Result<AdjacencyList<Label>>
where
    I: IntoIterator<Item = Result<Edge>>,
{
    let mut relabeling = Relabeling::new();
    let mut graph = AdjacencyList::new();
    for edge in edges {
        let edge = edge?;
        let (source, target) = relabeling.relabel_edge(edge.source, edge.target);
        graph.add_edge(source, target);
        if !directed {
            graph.add_edge(target, source);
        }
    }
    debug!(
        "Loaded {} distinct edges between {} nodes",
        graph.edge_count(),
        relabeling.len()
    );
    Ok(graph)
}

/// Relabel the nodes of `graph` in adjacency order and write one
/// tab-separated edge per line to `out`.
///
/// Each written line is repeated on `echo`.
pub fn write_cleaned_graph<W, E>(
    graph: &AdjacencyList<Label>,
    mut out: W,
    mut echo: E,
) -> Result<CleanSummary>
where
    W: Write,
    E: Write,
{
    let mut relabeling = Relabeling::new();
    let mut summary = CleanSummary::default();
    for (source, target) in graph.edges() {
        let (source, target) = relabeling.relabel_edge(source, target);
        summary.edges += 1;
        writeln!(echo, "{}\t{}", source, target)?;
        writeln!(out, "{}\t{}", source, target)?;
    }
    summary.nodes = relabeling.len();
    out.flush()?;
    echo.flush()?;
    Ok(summary)
}

/// Clean the edge list at `input` and write the result to
/// `<output_dir>/<stem>_directed.txt`.
pub fn clean_graph_file<E: Write>(
    input: &Path,
    output_dir: &Path,
    directed: bool,
    echo: E,
) -> Result<(PathBuf, CleanSummary)> {
    let output = output_path(input, output_dir, OUTPUT_SUFFIX)?;
    let graph = load_graph(open_edge_list(input)?, directed)?;

    info!("Writing cleaned graph to {}", output.display());
    let f = File::create(&output).map_err(|source| GraphPrepError::CreateOutput {
        path: output.clone(),
        source,
    })?;
    let summary = write_cleaned_graph(&graph, BufWriter::new(f), echo)?;
    info!("Wrote {}", summary);
    Ok((output, summary))
}
