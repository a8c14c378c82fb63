//! Single-source and all-pairs shortest paths.
//!
//! All three algorithms return the same [`PathResult`] shape and are
//! deterministic: whenever two routes have equal weight, the one assembled
//! from earlier-ordinal edges wins. Dijkstra rejects negative weights the
//! moment a reachable one is scanned; Bellman-Ford and Floyd-Warshall accept
//! them and instead report negative cycles. On an undirected topology any
//! reachable negative edge forms a two-vertex negative cycle, so those two
//! algorithms reject reachable negative edges by detection rather than by
//! fiat.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use waypoint_topology::{Topology, VertexId};

use crate::check_vertex;
use crate::error::{Error, Result};
use crate::result::PathResult;

/// Largest vertex count [`floyd_warshall`] will build its dense matrices for.
///
/// Above this the quadratic memory and cubic time are no longer interactive;
/// callers get [`Error::DenseLimitExceeded`] before any allocation happens.
pub const FLOYD_WARSHALL_VERTEX_LIMIT: usize = 512;

/// Dijkstra's algorithm from `source`, settling every reachable vertex.
///
/// The frontier heap is keyed by `(distance, edge ordinal, vertex)`, so
/// equal-distance vertices settle in the order of the edges that discovered
/// them. Scanning a negative-weight edge from a settled vertex fails with
/// [`Error::NegativeWeight`]; negative edges in unreachable components are
/// never scanned and do not fail the computation.
pub fn dijkstra(
    topology: &Topology,
    source: VertexId,
    target: Option<VertexId>,
) -> Result<PathResult> {
    check_vertex(topology, source)?;
    if let Some(t) = target {
        check_vertex(topology, t)?;
    }

    let n = topology.vertex_count();
    let mut distances: Vec<Option<i64>> = vec![None; n];
    let mut predecessor: Vec<Option<VertexId>> = vec![None; n];
    let mut settled = vec![false; n];

    let mut frontier = BinaryHeap::new();
    distances[source.index()] = Some(0);
    frontier.push(Reverse((0i64, 0u32, source)));

    while let Some(Reverse((distance, _, vertex))) = frontier.pop() {
        if settled[vertex.index()] {
            continue;
        }
        settled[vertex.index()] = true;

        for entry in topology.neighbors(vertex) {
            if entry.weight < 0 {
                let edge = topology.edges()[entry.ordinal as usize];
                return Err(Error::NegativeWeight {
                    from: edge.from,
                    to: edge.to,
                    weight: edge.weight,
                });
            }
            let candidate = distance + entry.weight;
            if distances[entry.vertex.index()].map_or(true, |d| candidate < d) {
                distances[entry.vertex.index()] = Some(candidate);
                predecessor[entry.vertex.index()] = Some(vertex);
                frontier.push(Reverse((candidate, entry.ordinal, entry.vertex)));
            }
        }
    }

    Ok(PathResult::assemble(source, target, distances, predecessor))
}

/// Bellman-Ford from `source` with negative cycle detection.
///
/// Runs up to `n - 1` relaxation passes over the edge list in input order,
/// relaxing each edge in both directions. A pass with no improvement ends the
/// loop early with final distances. If all `n - 1` passes improved something,
/// one detection pass follows: any further improvement proves a reachable
/// negative cycle, reported through a vertex on that cycle.
pub fn bellman_ford(
    topology: &Topology,
    source: VertexId,
    target: Option<VertexId>,
) -> Result<PathResult> {
    check_vertex(topology, source)?;
    if let Some(t) = target {
        check_vertex(topology, t)?;
    }

    let n = topology.vertex_count();
    let mut distances: Vec<Option<i64>> = vec![None; n];
    let mut predecessor: Vec<Option<VertexId>> = vec![None; n];
    distances[source.index()] = Some(0);

    let mut stable = false;
    for _ in 1..n {
        let mut improved = false;
        for edge in topology.edges() {
            improved |= relax(&mut distances, &mut predecessor, edge.from, edge.to, edge.weight);
            improved |= relax(&mut distances, &mut predecessor, edge.to, edge.from, edge.weight);
        }
        if !improved {
            stable = true;
            break;
        }
    }

    if !stable {
        for edge in topology.edges() {
            for (u, v) in [(edge.from, edge.to), (edge.to, edge.from)] {
                let Some(du) = distances[u.index()] else {
                    continue;
                };
                let candidate = du + edge.weight;
                if distances[v.index()].map_or(true, |dv| candidate < dv) {
                    // Still improving after n - 1 passes: v hangs off a
                    // negative cycle. n predecessor hops land inside it.
                    predecessor[v.index()] = Some(u);
                    return Err(Error::NegativeCycle {
                        vertex: walk_to_cycle(&predecessor, v, n),
                    });
                }
            }
        }
    }

    Ok(PathResult::assemble(source, target, distances, predecessor))
}

fn relax(
    distances: &mut [Option<i64>],
    predecessor: &mut [Option<VertexId>],
    u: VertexId,
    v: VertexId,
    weight: i64,
) -> bool {
    let Some(du) = distances[u.index()] else {
        return false;
    };
    let candidate = du + weight;
    if distances[v.index()].map_or(true, |dv| candidate < dv) {
        distances[v.index()] = Some(candidate);
        predecessor[v.index()] = Some(u);
        true
    } else {
        false
    }
}

fn walk_to_cycle(predecessor: &[Option<VertexId>], mut vertex: VertexId, hops: usize) -> VertexId {
    for _ in 0..hops {
        if let Some(p) = predecessor[vertex.index()] {
            vertex = p;
        }
    }
    vertex
}

/// Floyd-Warshall all-pairs shortest paths, reported from `source`'s row.
///
/// Builds dense `n x n` distance and next-hop matrices, so the vertex count
/// is capped at [`FLOYD_WARSHALL_VERTEX_LIMIT`]. Parallel edges collapse to
/// their minimum weight before the main loop. A negative diagonal entry after
/// the main loop means a negative cycle; the smallest such vertex index is
/// reported.
pub fn floyd_warshall(
    topology: &Topology,
    source: VertexId,
    target: Option<VertexId>,
) -> Result<PathResult> {
    check_vertex(topology, source)?;
    if let Some(t) = target {
        check_vertex(topology, t)?;
    }

    let n = topology.vertex_count();
    if n > FLOYD_WARSHALL_VERTEX_LIMIT {
        return Err(Error::DenseLimitExceeded { vertices: n });
    }

    let mut dist: Vec<Vec<Option<i64>>> = vec![vec![None; n]; n];
    let mut next_hop: Vec<Vec<Option<VertexId>>> = vec![vec![None; n]; n];
    for i in 0..n {
        dist[i][i] = Some(0);
    }
    for edge in topology.edges() {
        let (a, b) = (edge.from.index(), edge.to.index());
        for (i, j) in [(a, b), (b, a)] {
            if dist[i][j].map_or(true, |d| edge.weight < d) {
                dist[i][j] = Some(edge.weight);
                next_hop[i][j] = Some(VertexId(j as u32));
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let Some(dik) = dist[i][k] else {
                continue;
            };
            for j in 0..n {
                let Some(dkj) = dist[k][j] else {
                    continue;
                };
                let through = dik + dkj;
                if dist[i][j].map_or(true, |d| through < d) {
                    dist[i][j] = Some(through);
                    next_hop[i][j] = next_hop[i][k];
                }
            }
        }
    }

    for i in 0..n {
        if dist[i][i].map_or(false, |d| d < 0) {
            return Err(Error::NegativeCycle { vertex: VertexId(i as u32) });
        }
    }

    // Translate the source's next-hop chains into a predecessor map so the
    // result shape matches the single-source algorithms.
    let source_row = dist[source.index()].clone();
    let mut predecessor: Vec<Option<VertexId>> = vec![None; n];
    for j in 0..n {
        if j == source.index() || source_row[j].is_none() {
            continue;
        }
        let mut current = source;
        while let Some(next) = next_hop[current.index()][j] {
            if next.index() == j {
                predecessor[j] = Some(current);
                break;
            }
            current = next;
        }
    }

    Ok(PathResult::assemble(source, target, source_row, predecessor))
}
