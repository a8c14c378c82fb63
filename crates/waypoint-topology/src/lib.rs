//! Waypoint Topology
//!
//! Validated, immutable weighted-graph model for the Waypoint routing engine.
//!
//! # Model
//!
//! A topology is a set of `n` vertices identified by integers in `[0, n)` plus
//! an ordered list of undirected weighted edges. Each edge carries its
//! `ordinal` (its 0-based position in the input), which every routing
//! algorithm uses as the tie-break key, so outputs are deterministic even when
//! weights collide. Adjacency lists are filled in input order, making neighbor
//! iteration deterministic as well.
//!
//! # Input contract
//!
//! [`Topology::load`] and the text loader enforce the documented bounds on
//! vertex count, edge count, endpoints, and weights. [`Topology::new`] relaxes
//! only the weight bound for programmatic construction; that is the path by
//! which zero and negative weights can reach the routing layer.

mod error;
mod graph;
mod loader;

pub use error::{Error, Result};
pub use graph::{Edge, Neighbor, Topology, VertexId};
pub use loader::{load_path, parse};

/// Smallest usable vertex count.
pub const MIN_VERTICES: usize = 2;

/// Largest supported vertex count.
pub const MAX_VERTICES: usize = 100_000;

/// Largest supported edge count.
pub const MAX_EDGES: usize = 100_000;

/// Smallest weight accepted by the input contract.
pub const MIN_WEIGHT: i64 = 1;

/// Largest weight accepted by the input contract.
pub const MAX_WEIGHT: i64 = 1_000_000;

// Compile-time assertion that the contract bounds are coherent
const _: () = assert!(MIN_VERTICES >= 2 && MIN_WEIGHT >= 1 && MIN_WEIGHT <= MAX_WEIGHT);
