use crate::edgelist::EdgeListReader;
use crate::errors::Result;
use crate::types::Edge;

/// Edge list with the following structure, where the edge from 1 to 2 is
/// listed twice:
///
/// ```plain
/// +---+     +---+     +---+
/// | 1 | --> | 2 | --> | 3 |
/// +---+     +---+     +---+
/// ```
pub(crate) const DUPLICATE_EDGE_PATH: &str = "1 2\n2 3\n1 2\n";

/// Edge list of a small DAG with sparse, unordered identifiers and an extra
/// column that is ignored:
///
/// ```plain
/// +----+
/// | 10 | -+
/// +----+  |
///     |   |
///     v   |
/// +----+  |
/// | 42 |  |
/// +----+  |
///     |   |
///     v   |
/// +----+  |
/// |  7 | <+
/// +----+
///     |
///     v
/// +----+
/// | -3 |
/// +----+
/// ```
pub(crate) const MULTIPLE_PATHS_DAG: &str = "10 42 x\n42 7 x\n10 7 x\n7 -3 x\n";

/// Star where node 0 has four incoming edges and node 5 has one.
pub(crate) const IN_STAR: &str = "1 0\n2 0\n3 0\n4 0\n0 5\n";

pub(crate) fn reader(edge_list: &str) -> EdgeListReader<&[u8]> {
    EdgeListReader::new(edge_list.as_bytes())
}

pub(crate) fn parse(edge_list: &str) -> Result<Vec<Edge>> {
    reader(edge_list).collect()
}
