//! Minimum spanning trees.
//!
//! Both algorithms report accepted edges in acceptance order, each in its
//! original input orientation; that order is the animation order downstream.
//! Neither rejects negative weights: spanning trees are well defined for any
//! weights, and the `(weight, ordinal)` tie-break keeps both deterministic.
//! On disconnected input neither errors; the resulting forest is reported
//! through `components_covered`.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use waypoint_topology::{Topology, VertexId};

use crate::check_vertex;
use crate::error::Result;
use crate::result::TreeResult;

/// Prim's algorithm grown from `root`.
///
/// Keeps a lazy frontier of candidate edges keyed by
/// `(weight, ordinal, vertex)`; entries whose vertex joined the tree in the
/// meantime are dropped on pop. Only `root`'s component is covered, so on
/// disconnected input `components_covered` counts the root's tree plus every
/// untouched vertex as its own group.
pub fn prim(topology: &Topology, root: VertexId) -> Result<TreeResult> {
    check_vertex(topology, root)?;

    let n = topology.vertex_count();
    let mut in_tree = vec![false; n];
    let mut edges = Vec::new();
    let mut total_weight = 0i64;

    let mut frontier = BinaryHeap::new();
    in_tree[root.index()] = true;
    push_incident(topology, root, &in_tree, &mut frontier);

    while let Some(Reverse((weight, ordinal, vertex))) = frontier.pop() {
        if in_tree[vertex.index()] {
            continue;
        }
        in_tree[vertex.index()] = true;
        edges.push(topology.edges()[ordinal as usize]);
        total_weight += weight;
        push_incident(topology, vertex, &in_tree, &mut frontier);
    }

    let components_covered = n - edges.len();
    Ok(TreeResult {
        edges,
        total_weight,
        components_covered,
    })
}

fn push_incident(
    topology: &Topology,
    vertex: VertexId,
    in_tree: &[bool],
    frontier: &mut BinaryHeap<Reverse<(i64, u32, VertexId)>>,
) {
    for entry in topology.neighbors(vertex) {
        if !in_tree[entry.vertex.index()] {
            frontier.push(Reverse((entry.weight, entry.ordinal, entry.vertex)));
        }
    }
}

/// Kruskal's algorithm over the whole topology.
///
/// Edges are sorted by `(weight, ordinal)` ascending, so equal weights are
/// taken in input order. Acceptance is tested through a disjoint-set forest;
/// the scan stops once `n - 1` edges are in. Self-loops and duplicates are
/// rejected by the cycle test, never by special-casing.
pub fn kruskal(topology: &Topology) -> Result<TreeResult> {
    let n = topology.vertex_count();

    let mut order: Vec<usize> = (0..topology.edge_count()).collect();
    order.sort_by_key(|&i| {
        let edge = topology.edges()[i];
        (edge.weight, edge.ordinal)
    });

    let mut sets = DisjointSet::new(n);
    let mut edges = Vec::new();
    let mut total_weight = 0i64;

    for i in order {
        let edge = topology.edges()[i];
        if sets.union(edge.from.0, edge.to.0) {
            edges.push(edge);
            total_weight += edge.weight;
            if edges.len() == n - 1 {
                break;
            }
        }
    }

    let components_covered = n - edges.len();
    Ok(TreeResult {
        edges,
        total_weight,
        components_covered,
    })
}

/// Disjoint-set forest with union by rank and two-pass path compression.
#[derive(Debug, Clone)]
struct DisjointSet {
    parent: Vec<u32>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size as u32).collect(),
            rank: vec![0; size],
        }
    }

    /// Representative of `v`'s set, compressing the walked path.
    fn find(&mut self, v: u32) -> u32 {
        let mut root = v;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }
        let mut current = v;
        while current != root {
            let next = self.parent[current as usize];
            self.parent[current as usize] = root;
            current = next;
        }
        root
    }

    /// Merge the sets holding `a` and `b`; false if already merged.
    fn union(&mut self, a: u32, b: u32) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        let (keep, absorb) = if self.rank[root_a as usize] >= self.rank[root_b as usize] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parent[absorb as usize] = keep;
        if self.rank[root_a as usize] == self.rank[root_b as usize] {
            self.rank[keep as usize] += 1;
        }
        true
    }
}
