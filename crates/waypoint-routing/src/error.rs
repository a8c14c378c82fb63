//! Routing error types.

use thiserror::Error;
use waypoint_topology::VertexId;

use crate::shortest_path::FLOYD_WARSHALL_VERTEX_LIMIT;

/// Result type for routing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the routing algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A source, target, or root vertex is not in the topology.
    #[error("vertex {vertex} is outside the topology (vertex count {vertex_count})")]
    VertexOutOfRange { vertex: VertexId, vertex_count: usize },

    /// Dijkstra reached an edge with a negative weight.
    #[error("edge {from}-{to} has negative weight {weight}")]
    NegativeWeight { from: VertexId, to: VertexId, weight: i64 },

    /// Bellman-Ford or Floyd-Warshall detected a negative cycle.
    #[error("negative cycle detected through vertex {vertex}")]
    NegativeCycle { vertex: VertexId },

    /// The topology is too large for the dense all-pairs matrix.
    #[error("{vertices} vertices exceed the dense all-pairs limit of {limit}", limit = FLOYD_WARSHALL_VERTEX_LIMIT)]
    DenseLimitExceeded { vertices: usize },

    /// An algorithm name did not match any known algorithm.
    #[error("unknown algorithm '{name}'")]
    UnknownAlgorithm { name: String },
}
