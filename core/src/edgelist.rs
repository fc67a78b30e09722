//! Reading of plain-text edge lists.
//!
//! An edge list contains one edge per line, given by at least two
//! whitespace-separated integer node identifiers. Further columns are ignored
//! by [`EdgeListReader`]; annotated files produced by the edge-weight tools
//! carry the propagation probability in the third column and can be read back
//! with [`WeightedEdgeReader`].

use std::fs::File;
use std::io::{BufRead, BufReader, Split};
use std::path::Path;

use crate::errors::{GraphPrepError, Result};
use crate::types::{Edge, NodeID, WeightedEdge};

/// Open a file and wrap it into a buffered [`EdgeListReader`].
pub fn open_edge_list(path: &Path) -> Result<EdgeListReader<BufReader<File>>> {
    let f = File::open(path).map_err(|source| GraphPrepError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Reading edge list from {}", path.display());
    Ok(EdgeListReader::new(BufReader::new(f)))
}

/// Open a file and wrap it into a buffered [`WeightedEdgeReader`].
pub fn open_weighted_edge_list(path: &Path) -> Result<WeightedEdgeReader<BufReader<File>>> {
    let f = File::open(path).map_err(|source| GraphPrepError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Reading weighted edge list from {}", path.display());
    Ok(WeightedEdgeReader::new(BufReader::new(f)))
}

/// Splits a line into its first `expected` fields.
///
/// Lines are handled as bytes, so columns after the parsed ones may contain
/// anything, including invalid UTF-8.
fn split_fields(line: &[u8], line_number: usize, expected: usize) -> Result<Vec<&[u8]>> {
    let fields: Vec<&[u8]> = line
        .split(|b| b.is_ascii_whitespace())
        .filter(|f| !f.is_empty())
        .take(expected)
        .collect();
    if fields.len() < expected {
        return Err(GraphPrepError::MalformedLine {
            line: line_number,
            expected,
            content: String::from_utf8_lossy(line).trim_end().to_string(),
        });
    }
    Ok(fields)
}

fn parse_node_id(value: &[u8], line_number: usize) -> Result<NodeID> {
    let value = String::from_utf8_lossy(value);
    value
        .parse::<NodeID>()
        .map_err(|source| GraphPrepError::InvalidNodeId {
            line: line_number,
            value: value.to_string(),
            source,
        })
}

fn parse_edge(line: &[u8], line_number: usize) -> Result<Edge> {
    let fields = split_fields(line, line_number, 2)?;
    let source = parse_node_id(fields[0], line_number)?;
    let target = parse_node_id(fields[1], line_number)?;
    Ok(Edge { source, target })
}

fn parse_weighted_edge(line: &[u8], line_number: usize) -> Result<WeightedEdge> {
    let fields = split_fields(line, line_number, 3)?;
    let source = parse_node_id(fields[0], line_number)?;
    let target = parse_node_id(fields[1], line_number)?;
    let value = String::from_utf8_lossy(fields[2]);
    let weight = value
        .parse::<f64>()
        .map_err(|source| GraphPrepError::InvalidWeight {
            line: line_number,
            value: value.to_string(),
            source,
        })?;
    Ok(WeightedEdge {
        source,
        target,
        weight,
    })
}

/// Iterator over the edges of an edge list.
///
/// Every line must contain an edge, so a blank line is reported as malformed.
/// Errors do not end the iteration by themselves, but callers are expected to
/// stop at the first one (e.g. by collecting into a `Result`).
pub struct EdgeListReader<R> {
    lines: Split<R>,
    line_number: usize,
}

impl<R: BufRead> EdgeListReader<R> {
    pub fn new(reader: R) -> EdgeListReader<R> {
        EdgeListReader {
            lines: reader.split(b'\n'),
            line_number: 0,
        }
    }
}

impl<R: BufRead> Iterator for EdgeListReader<R> {
    type Item = Result<Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.line_number += 1;
        let line_number = self.line_number;
        Some(
            line.map_err(GraphPrepError::from)
                .and_then(|line| parse_edge(&line, line_number)),
        )
    }
}

/// Iterator over the edges of an annotated (`source target weight`) edge list.
pub struct WeightedEdgeReader<R> {
    lines: Split<R>,
    line_number: usize,
}

impl<R: BufRead> WeightedEdgeReader<R> {
    pub fn new(reader: R) -> WeightedEdgeReader<R> {
        WeightedEdgeReader {
            lines: reader.split(b'\n'),
            line_number: 0,
        }
    }
}

impl<R: BufRead> Iterator for WeightedEdgeReader<R> {
    type Item = Result<WeightedEdge>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.line_number += 1;
        let line_number = self.line_number;
        Some(
            line.map_err(GraphPrepError::from)
                .and_then(|line| parse_weighted_edge(&line, line_number)),
        )
    }
}
