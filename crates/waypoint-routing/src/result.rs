//! Algorithm output types.
//!
//! Shortest-path algorithms produce a [`PathResult`]: per-vertex distances and
//! predecessors plus the reconstructed path to the target, if one was asked
//! for and is reachable. Spanning-tree algorithms produce a [`TreeResult`]:
//! accepted edges in acceptance order. Both are plain data, detached from the
//! topology they were computed over.

use waypoint_topology::{Edge, VertexId};

/// Outcome of a single-source shortest-path computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// The source vertex the search started from.
    pub source: VertexId,
    /// The target vertex, when the caller asked for a concrete path.
    pub target: Option<VertexId>,
    /// Distance from the source per vertex; `None` means unreachable.
    pub distances: Vec<Option<i64>>,
    /// Predecessor per vertex on a shortest path from the source.
    pub predecessor: Vec<Option<VertexId>>,
    /// Vertices from source to target inclusive; empty when there is no
    /// target or the target is unreachable.
    pub path: Vec<VertexId>,
}

impl PathResult {
    /// Assemble a result, reconstructing the path by walking the predecessor
    /// chain back from the target.
    ///
    /// When `target` is `None` or unreachable the path is left empty. A
    /// reachable target always yields a path that starts at the source and
    /// ends at the target; `source == target` yields the single-vertex path.
    pub fn assemble(
        source: VertexId,
        target: Option<VertexId>,
        distances: Vec<Option<i64>>,
        predecessor: Vec<Option<VertexId>>,
    ) -> Self {
        let path = match target {
            Some(t) if distances[t.index()].is_some() => {
                let mut path = vec![t];
                let mut current = t;
                while let Some(p) = predecessor[current.index()] {
                    current = p;
                    path.push(current);
                }
                path.reverse();
                path
            }
            _ => Vec::new(),
        };

        Self {
            source,
            target,
            distances,
            predecessor,
            path,
        }
    }

    /// Distance from the source to `v`, or `None` if unreachable.
    pub fn distance_to(&self, v: VertexId) -> Option<i64> {
        self.distances[v.index()]
    }

    /// Whether `v` is reachable from the source.
    pub fn is_reachable(&self, v: VertexId) -> bool {
        self.distances[v.index()].is_some()
    }
}

impl std::fmt::Display for PathResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.target {
            Some(t) => match self.distance_to(t) {
                Some(d) => write!(f, "path {} -> {} distance {} ({} hops)", self.source, t, d, self.path.len().saturating_sub(1)),
                None => write!(f, "path {} -> {} unreachable", self.source, t),
            },
            None => {
                let reached = self.distances.iter().filter(|d| d.is_some()).count();
                write!(f, "distances from {} ({}/{} reachable)", self.source, reached, self.distances.len())
            }
        }
    }
}

/// Outcome of a spanning-tree computation.
///
/// With a disconnected topology this is a spanning forest: `edges` covers
/// every vertex the algorithm could reach and `components_covered` reports
/// how many disjoint groups remain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeResult {
    /// Accepted edges in acceptance order, in their original input
    /// orientation.
    pub edges: Vec<Edge>,
    /// Sum of accepted edge weights.
    pub total_weight: i64,
    /// Number of disjoint vertex groups after accepting `edges`.
    pub components_covered: usize,
}

impl TreeResult {
    /// Whether the accepted edges connect the whole topology.
    pub fn spans_all(&self) -> bool {
        self.components_covered == 1
    }
}

impl std::fmt::Display for TreeResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "tree with {} edges, total weight {}, {} component(s)",
            self.edges.len(),
            self.total_weight,
            self.components_covered
        )
    }
}

/// Either kind of algorithm outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComputationResult {
    Path(PathResult),
    Tree(TreeResult),
}

impl ComputationResult {
    /// The path result, if this came from a shortest-path algorithm.
    pub fn as_path(&self) -> Option<&PathResult> {
        match self {
            Self::Path(p) => Some(p),
            Self::Tree(_) => None,
        }
    }

    /// The tree result, if this came from a spanning-tree algorithm.
    pub fn as_tree(&self) -> Option<&TreeResult> {
        match self {
            Self::Path(_) => None,
            Self::Tree(t) => Some(t),
        }
    }
}

impl std::fmt::Display for ComputationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path(p) => p.fmt(f),
            Self::Tree(t) => t.fmt(f),
        }
    }
}

impl From<PathResult> for ComputationResult {
    fn from(value: PathResult) -> Self {
        Self::Path(value)
    }
}

impl From<TreeResult> for ComputationResult {
    fn from(value: TreeResult) -> Self {
        Self::Tree(value)
    }
}
