//! Weighted undirected graph with deterministic adjacency order.
//!
//! The graph is built once from an edge list and is read-only afterwards;
//! replacing a topology means constructing a fresh value. Every edge records
//! the position it held in the input (`ordinal`), and adjacency lists are
//! filled in that same order, so any iteration over edges or neighbors is
//! reproducible run to run.

use crate::error::{Error, Result};
use crate::{MAX_EDGES, MAX_VERTICES, MAX_WEIGHT, MIN_VERTICES, MIN_WEIGHT};

/// A vertex identifier in `[0, vertex_count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexId(pub u32);

impl VertexId {
    /// Create a vertex identifier.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The identifier as an adjacency index.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An undirected weighted edge.
///
/// `ordinal` is the 0-based position of the edge in the original input list
/// and is the tie-break key for every routing algorithm. The `from`/`to`
/// labels keep the input orientation for display; traversal is valid from
/// either endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: i64,
    pub ordinal: u32,
}

/// One adjacency entry: the vertex across an edge, with that edge's weight
/// and tie-break ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub vertex: VertexId,
    pub weight: i64,
    pub ordinal: u32,
}

/// Validated, immutable weighted undirected graph.
///
/// Self-loops are accepted (they appear once per traversal direction in their
/// vertex's adjacency list) and duplicate edges are retained without
/// deduplication. No mutation is exposed after construction.
#[derive(Debug, Clone)]
pub struct Topology {
    vertex_count: usize,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<Neighbor>>,
}

impl Topology {
    /// Build a topology from `(from, to, weight)` triples.
    ///
    /// Validates the vertex count, the edge count, and every endpoint, but
    /// places no bound on weights: zero and negative weights are allowed
    /// here. Input arriving through the text loader goes through
    /// [`Topology::load`] instead, which also enforces the weight range.
    pub fn new(vertex_count: usize, edges: Vec<(VertexId, VertexId, i64)>) -> Result<Self> {
        if !(MIN_VERTICES..=MAX_VERTICES).contains(&vertex_count) {
            return Err(Error::InvalidVertexCount { n: vertex_count });
        }
        if edges.len() > MAX_EDGES {
            return Err(Error::TooManyEdges { m: edges.len() });
        }

        let mut adjacency = vec![Vec::new(); vertex_count];
        let mut recorded = Vec::with_capacity(edges.len());

        for (position, (from, to, weight)) in edges.into_iter().enumerate() {
            for endpoint in [from, to] {
                if endpoint.index() >= vertex_count {
                    return Err(Error::EndpointOutOfRange {
                        edge: position,
                        vertex: endpoint.0,
                        vertex_count,
                    });
                }
            }
            let ordinal = position as u32;
            adjacency[from.index()].push(Neighbor { vertex: to, weight, ordinal });
            adjacency[to.index()].push(Neighbor { vertex: from, weight, ordinal });
            recorded.push(Edge { from, to, weight, ordinal });
        }

        Ok(Self {
            vertex_count,
            edges: recorded,
            adjacency,
        })
    }

    /// Build a topology enforcing the full input contract.
    ///
    /// In addition to the structural checks of [`Topology::new`], every
    /// weight must lie in `[MIN_WEIGHT, MAX_WEIGHT]`.
    ///
    /// [`MIN_WEIGHT`]: crate::MIN_WEIGHT
    /// [`MAX_WEIGHT`]: crate::MAX_WEIGHT
    pub fn load(vertex_count: usize, edges: Vec<(VertexId, VertexId, i64)>) -> Result<Self> {
        for (position, &(_, _, weight)) in edges.iter().enumerate() {
            if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
                return Err(Error::WeightOutOfRange {
                    edge: position,
                    weight,
                });
            }
        }
        Self::new(vertex_count, edges)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges in input order; an edge's ordinal is its index here.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Iterator over all vertex identifiers in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertex_count as u32).map(VertexId)
    }

    /// Neighbors of `v` in edge-input order, stable across calls.
    ///
    /// # Panics
    ///
    /// Panics if `v` is outside `[0, vertex_count)`.
    pub fn neighbors(&self, v: VertexId) -> &[Neighbor] {
        &self.adjacency[v.index()]
    }
}
