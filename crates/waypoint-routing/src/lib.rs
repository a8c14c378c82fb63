//! Waypoint Routing
//!
//! Deterministic graph algorithms over a validated topology: three
//! shortest-path strategies (Dijkstra, Bellman-Ford, Floyd-Warshall) and two
//! spanning-tree strategies (Prim, Kruskal), behind a single dispatch entry
//! point keyed by algorithm kind.
//!
//! # Determinism
//!
//! Every algorithm breaks weight ties by edge ordinal (input position), so
//! two runs over the same topology produce identical results: the same
//! distances, the same paths, the same acceptance order. The animation layer
//! depends on this to replay a computation frame by frame.

use waypoint_topology::{Topology, VertexId};

mod dispatch;
mod error;
mod mst;
mod result;
mod shortest_path;

pub use dispatch::{dispatch, AlgorithmKind};
pub use error::{Error, Result};
pub use mst::{kruskal, prim};
pub use result::{ComputationResult, PathResult, TreeResult};
pub use shortest_path::{bellman_ford, dijkstra, floyd_warshall, FLOYD_WARSHALL_VERTEX_LIMIT};

pub(crate) fn check_vertex(topology: &Topology, vertex: VertexId) -> Result<()> {
    if vertex.index() >= topology.vertex_count() {
        return Err(Error::VertexOutOfRange {
            vertex,
            vertex_count: topology.vertex_count(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_algorithm_runs_on_the_sample() {
        let edges = [
            (0, 1, 2),
            (1, 4, 5),
            (1, 2, 4),
            (0, 3, 1),
            (3, 2, 3),
            (2, 4, 1),
            (4, 5, 2),
        ]
        .into_iter()
        .map(|(a, b, w)| (VertexId(a), VertexId(b), w))
        .collect();
        let topology = Topology::load(6, edges).unwrap();

        for kind in AlgorithmKind::ALL {
            let result = dispatch(&topology, kind, VertexId(0), Some(VertexId(5)));
            assert!(result.is_ok(), "{kind} failed: {result:?}");
        }
    }
}
