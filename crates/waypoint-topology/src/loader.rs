//! Plain-text topology loader.
//!
//! The format is a header line `n m` (vertex count, edge count) followed by
//! `m` edge lines `from to weight`, all whitespace-separated and 0-indexed.
//! Blank lines are skipped anywhere; content after the declared edge list is
//! ignored. Line numbers in errors are 1-based.

use std::path::Path;

use crate::error::{Error, Result};
use crate::graph::{Topology, VertexId};
use crate::MAX_EDGES;

/// Parse a topology from text in the `n m` header format.
pub fn parse(input: &str) -> Result<Topology> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines.next().ok_or(Error::MissingHeader)?;
    let (vertex_count, edge_count) = parse_header(header_line, header)?;
    if edge_count > MAX_EDGES {
        return Err(Error::TooManyEdges { m: edge_count });
    }

    let mut edges = Vec::with_capacity(edge_count);
    for (line_number, line) in lines {
        if edges.len() == edge_count {
            break;
        }
        edges.push(parse_edge_line(line_number, line)?);
    }

    if edges.len() < edge_count {
        return Err(Error::TruncatedEdgeList {
            expected: edge_count,
            found: edges.len(),
        });
    }

    Topology::load(vertex_count, edges)
}

/// Read and parse a topology file.
pub fn load_path(path: impl AsRef<Path>) -> Result<Topology> {
    let text = std::fs::read_to_string(path)?;
    parse(&text)
}

fn parse_header(line_number: usize, line: &str) -> Result<(usize, usize)> {
    let mut fields = line.split_whitespace();
    let header = (|| {
        let n: usize = fields.next()?.parse().ok()?;
        let m: usize = fields.next()?.parse().ok()?;
        if fields.next().is_some() {
            return None;
        }
        Some((n, m))
    })();
    header.ok_or(Error::MalformedLine { line: line_number })
}

fn parse_edge_line(line_number: usize, line: &str) -> Result<(VertexId, VertexId, i64)> {
    let mut fields = line.split_whitespace();
    let edge = (|| {
        let from: u32 = fields.next()?.parse().ok()?;
        let to: u32 = fields.next()?.parse().ok()?;
        let weight: i64 = fields.next()?.parse().ok()?;
        if fields.next().is_some() {
            return None;
        }
        Some((VertexId(from), VertexId(to), weight))
    })();
    edge.ok_or(Error::MalformedLine { line: line_number })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    const SAMPLE: &str = "6 7\n0 1 2\n1 4 5\n1 2 4\n0 3 1\n3 2 3\n2 4 1\n4 5 2\n";

    #[test]
    fn parses_sample_file() {
        let topology = parse(SAMPLE).unwrap();
        assert_eq!(topology.vertex_count(), 6);
        assert_eq!(topology.edge_count(), 7);
        assert_eq!(
            topology.edges()[3],
            Edge {
                from: VertexId(0),
                to: VertexId(3),
                weight: 1,
                ordinal: 3,
            }
        );
    }

    #[test]
    fn skips_blank_lines() {
        let spaced = "\n6 7\n\n0 1 2\n1 4 5\n1 2 4\n\n\n0 3 1\n3 2 3\n2 4 1\n4 5 2\n\n";
        let topology = parse(spaced).unwrap();
        assert_eq!(topology.edge_count(), 7);
        assert_eq!(topology.edges(), parse(SAMPLE).unwrap().edges());
    }

    #[test]
    fn content_after_edge_list_ignored() {
        let trailing = format!("{SAMPLE}this line is not read\n");
        let topology = parse(&trailing).unwrap();
        assert_eq!(topology.edge_count(), 7);
    }

    #[test]
    fn empty_input_is_missing_header() {
        assert!(matches!(parse("").unwrap_err(), Error::MissingHeader));
        assert!(matches!(parse("\n  \n").unwrap_err(), Error::MissingHeader));
    }

    #[test]
    fn short_header_is_malformed() {
        let err = parse("6\n0 1 2\n").unwrap_err();
        assert!(matches!(err, Error::MalformedLine { line: 1 }));
    }

    #[test]
    fn non_numeric_edge_field_is_malformed() {
        let err = parse("2 1\n0 one 3\n").unwrap_err();
        assert!(matches!(err, Error::MalformedLine { line: 2 }));
    }

    #[test]
    fn extra_edge_field_is_malformed() {
        let err = parse("2 1\n0 1 3 9\n").unwrap_err();
        assert!(matches!(err, Error::MalformedLine { line: 2 }));
    }

    #[test]
    fn truncated_edge_list() {
        let err = parse("6 7\n0 1 2\n").unwrap_err();
        assert!(matches!(err, Error::TruncatedEdgeList { expected: 7, found: 1 }));
    }

    #[test]
    fn header_bounds_checked_before_reading_edges() {
        let err = parse("2 100001\n").unwrap_err();
        assert!(matches!(err, Error::TooManyEdges { m: 100_001 }));
    }

    #[test]
    fn loader_enforces_weight_contract() {
        let err = parse("2 1\n0 1 0\n").unwrap_err();
        assert!(matches!(err, Error::WeightOutOfRange { edge: 0, weight: 0 }));
    }

    #[test]
    fn load_path_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.graph");
        std::fs::write(&path, SAMPLE).unwrap();

        let topology = load_path(&path).unwrap();
        assert_eq!(topology.vertex_count(), 6);
        assert_eq!(topology.edge_count(), 7);
    }

    #[test]
    fn load_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_path(dir.path().join("absent.graph")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
