//! Error types for waypoint-topology.

use thiserror::Error;

use crate::{MAX_EDGES, MAX_VERTICES, MAX_WEIGHT, MIN_VERTICES, MIN_WEIGHT};

/// Result type for waypoint-topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or loading a topology.
#[derive(Debug, Error)]
pub enum Error {
    /// The vertex count is outside the supported range.
    #[error("vertex count {n} is outside [{min}, {max}]", min = MIN_VERTICES, max = MAX_VERTICES)]
    InvalidVertexCount { n: usize },

    /// The edge list is longer than the supported maximum.
    #[error("edge count {m} exceeds {max}", max = MAX_EDGES)]
    TooManyEdges { m: usize },

    /// An edge references a vertex outside `[0, n)`.
    #[error("edge {edge} references vertex {vertex}, valid range is [0, {vertex_count})")]
    EndpointOutOfRange {
        edge: usize,
        vertex: u32,
        vertex_count: usize,
    },

    /// An edge weight violates the input contract.
    #[error("edge {edge} has weight {weight}, valid range is [{min}, {max}]", min = MIN_WEIGHT, max = MAX_WEIGHT)]
    WeightOutOfRange { edge: usize, weight: i64 },

    /// The input text is empty.
    #[error("missing header line, expected \"n m\"")]
    MissingHeader,

    /// A line could not be parsed as the expected whitespace-separated fields.
    #[error("line {line} is malformed")]
    MalformedLine { line: usize },

    /// The edge list ended before the announced edge count was reached.
    #[error("edge list truncated: header announced {expected} edges, found {found}")]
    TruncatedEdgeList { expected: usize, found: usize },

    /// Reading the topology file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
