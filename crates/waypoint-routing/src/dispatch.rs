//! Algorithm selection and dispatch.
//!
//! The five algorithms form a closed set behind one entry point; callers pick
//! by [`AlgorithmKind`] and always get a [`ComputationResult`] back. No
//! algorithm mutates the topology, so a single shared reference serves any
//! number of dispatches.

use std::str::FromStr;

use waypoint_topology::{Topology, VertexId};

use crate::check_vertex;
use crate::error::{Error, Result};
use crate::mst::{kruskal, prim};
use crate::result::ComputationResult;
use crate::shortest_path::{bellman_ford, dijkstra, floyd_warshall};

/// The closed set of routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    Dijkstra,
    BellmanFord,
    FloydWarshall,
    Prim,
    Kruskal,
}

impl AlgorithmKind {
    /// Every algorithm, in the order the batch harness runs them.
    pub const ALL: [AlgorithmKind; 5] = [
        AlgorithmKind::Dijkstra,
        AlgorithmKind::BellmanFord,
        AlgorithmKind::FloydWarshall,
        AlgorithmKind::Prim,
        AlgorithmKind::Kruskal,
    ];

    /// Canonical name, as accepted by `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dijkstra => "dijkstra",
            Self::BellmanFord => "bellman-ford",
            Self::FloydWarshall => "floyd-warshall",
            Self::Prim => "prim",
            Self::Kruskal => "kruskal",
        }
    }

    /// Whether this algorithm yields a spanning tree rather than a path.
    pub const fn is_tree(self) -> bool {
        matches!(self, Self::Prim | Self::Kruskal)
    }
}

impl std::fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = Error;

    /// Case-insensitive; underscores are accepted in place of hyphens.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| Error::UnknownAlgorithm { name: s.to_string() })
    }
}

/// Run one algorithm against a topology.
///
/// `source` seeds the shortest-path algorithms and roots Prim; Kruskal reads
/// neither vertex. Both are range-checked up front regardless of kind, so a
/// bad request fails the same way no matter which algorithm it names.
pub fn dispatch(
    topology: &Topology,
    kind: AlgorithmKind,
    source: VertexId,
    target: Option<VertexId>,
) -> Result<ComputationResult> {
    check_vertex(topology, source)?;
    if let Some(t) = target {
        check_vertex(topology, t)?;
    }

    match kind {
        AlgorithmKind::Dijkstra => dijkstra(topology, source, target).map(ComputationResult::Path),
        AlgorithmKind::BellmanFord => {
            bellman_ford(topology, source, target).map(ComputationResult::Path)
        }
        AlgorithmKind::FloydWarshall => {
            floyd_warshall(topology, source, target).map(ComputationResult::Path)
        }
        AlgorithmKind::Prim => prim(topology, source).map(ComputationResult::Tree),
        AlgorithmKind::Kruskal => kruskal(topology).map(ComputationResult::Tree),
    }
}
