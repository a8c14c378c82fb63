//! Animation frames for the playback timeline.

use serde::{Deserialize, Serialize};
use waypoint_routing::ComputationResult;
use waypoint_topology::VertexId;

/// One step of an animated computation.
///
/// Frames are emitted strictly by ascending `index`; the tagged serde
/// representation lets an out-of-process renderer consume them as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AnimationFrame {
    /// A vertex was settled by the search
    NodeVisited {
        vertex: VertexId,
        distance: i64,
        index: usize,
    },

    /// An edge was accepted into the spanning tree
    EdgeIncluded {
        from: VertexId,
        to: VertexId,
        weight: i64,
        ordinal: u32,
        index: usize,
    },

    /// A vertex on the final source-to-target path
    PathStep {
        vertex: VertexId,
        distance: i64,
        index: usize,
    },
}

impl AnimationFrame {
    /// Position of this frame in the playback order.
    pub fn index(&self) -> usize {
        match self {
            AnimationFrame::NodeVisited { index, .. } => *index,
            AnimationFrame::EdgeIncluded { index, .. } => *index,
            AnimationFrame::PathStep { index, .. } => *index,
        }
    }
}

impl std::fmt::Display for AnimationFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnimationFrame::NodeVisited { vertex, distance, index } => {
                write!(f, "[{index}] visit {vertex} at distance {distance}")
            }
            AnimationFrame::EdgeIncluded { from, to, weight, index, .. } => {
                write!(f, "[{index}] include edge {from}-{to} (weight {weight})")
            }
            AnimationFrame::PathStep { vertex, distance, index } => {
                write!(f, "[{index}] path step {vertex} at distance {distance}")
            }
        }
    }
}

/// Build the playback sequence for a computation outcome.
///
/// Path results open with a `NodeVisited` frame for the source, then one
/// `PathStep` per vertex along the path (the source included). An absent or
/// unreachable target leaves just the opening frame. Tree results yield one
/// `EdgeIncluded` per accepted edge, in acceptance order.
pub fn build_frames(result: &ComputationResult) -> Vec<AnimationFrame> {
    match result {
        ComputationResult::Path(path) => {
            let mut frames = vec![AnimationFrame::NodeVisited {
                vertex: path.source,
                distance: 0,
                index: 0,
            }];
            for &vertex in &path.path {
                frames.push(AnimationFrame::PathStep {
                    vertex,
                    distance: path.distance_to(vertex).unwrap_or(0),
                    index: frames.len(),
                });
            }
            frames
        }
        ComputationResult::Tree(tree) => tree
            .edges
            .iter()
            .enumerate()
            .map(|(index, edge)| AnimationFrame::EdgeIncluded {
                from: edge.from,
                to: edge.to,
                weight: edge.weight,
                ordinal: edge.ordinal,
                index,
            })
            .collect(),
    }
}

/// The highlight state implied by a frame prefix.
///
/// Lets a renderer that attaches mid-run catch up to the current picture
/// without replaying frames one by one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSnapshot {
    /// Vertices settled so far, in visit order.
    pub visited: Vec<VertexId>,
    /// Path vertices stepped so far, in path order.
    pub path: Vec<VertexId>,
    /// Accepted tree edges so far, in acceptance order.
    pub tree_edges: Vec<(VertexId, VertexId)>,
    /// Latest distance annotation per vertex.
    pub distances: Vec<(VertexId, i64)>,
    /// How many frames this snapshot reflects.
    pub frames_applied: usize,
}

impl HighlightSnapshot {
    /// Rebuild highlight state from frames up to (but not including) `up_to`.
    pub fn from_frames(frames: &[AnimationFrame], up_to: usize) -> Self {
        let mut snapshot = Self::default();

        for frame in frames.iter().take(up_to) {
            match frame {
                AnimationFrame::NodeVisited { vertex, distance, .. } => {
                    if !snapshot.visited.contains(vertex) {
                        snapshot.visited.push(*vertex);
                    }
                    upsert_distance(&mut snapshot.distances, *vertex, *distance);
                }
                AnimationFrame::EdgeIncluded { from, to, .. } => {
                    snapshot.tree_edges.push((*from, *to));
                }
                AnimationFrame::PathStep { vertex, distance, .. } => {
                    if !snapshot.path.contains(vertex) {
                        snapshot.path.push(*vertex);
                    }
                    upsert_distance(&mut snapshot.distances, *vertex, *distance);
                }
            }
        }

        snapshot.frames_applied = up_to.min(frames.len());
        snapshot
    }
}

fn upsert_distance(distances: &mut Vec<(VertexId, i64)>, vertex: VertexId, distance: i64) {
    match distances.iter_mut().find(|(v, _)| *v == vertex) {
        Some(entry) => entry.1 = distance,
        None => distances.push((vertex, distance)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_routing::{dijkstra, kruskal};
    use waypoint_topology::Topology;

    fn sample() -> Topology {
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
        Topology::load(6, edges).unwrap()
    }

    #[test]
    fn frame_serialization() {
        let frame = AnimationFrame::EdgeIncluded {
            from: VertexId(0),
            to: VertexId(3),
            weight: 1,
            ordinal: 3,
            index: 0,
        };

        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains("EdgeIncluded"));
        assert!(json.contains("\"ordinal\":3"));

        let parsed: AnimationFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, frame);
    }

    #[test]
    fn path_frames_open_with_source_visit() {
        let result = dijkstra(&sample(), VertexId(0), Some(VertexId(5))).unwrap();
        let frames = build_frames(&result.into());

        assert_eq!(frames.len(), 6);
        assert_eq!(
            frames[0],
            AnimationFrame::NodeVisited { vertex: VertexId(0), distance: 0, index: 0 }
        );

        let steps: Vec<(u32, i64)> = frames[1..]
            .iter()
            .map(|f| match f {
                AnimationFrame::PathStep { vertex, distance, .. } => (vertex.0, *distance),
                other => panic!("unexpected frame {other:?}"),
            })
            .collect();
        assert_eq!(steps, [(0, 0), (3, 1), (2, 4), (4, 5), (5, 7)]);
    }

    #[test]
    fn frame_indexes_are_contiguous() {
        let result = dijkstra(&sample(), VertexId(0), Some(VertexId(5))).unwrap();
        let frames = build_frames(&result.into());
        for (position, frame) in frames.iter().enumerate() {
            assert_eq!(frame.index(), position);
        }
    }

    #[test]
    fn tree_frames_follow_acceptance_order() {
        let result = kruskal(&sample()).unwrap();
        let frames = build_frames(&result.into());

        let ordinals: Vec<u32> = frames
            .iter()
            .map(|f| match f {
                AnimationFrame::EdgeIncluded { ordinal, .. } => *ordinal,
                other => panic!("unexpected frame {other:?}"),
            })
            .collect();
        assert_eq!(ordinals, [3, 5, 0, 6, 4]);
    }

    #[test]
    fn unreachable_target_yields_single_frame() {
        let topology = Topology::load(3, vec![(VertexId(0), VertexId(1), 1)]).unwrap();
        let result = dijkstra(&topology, VertexId(0), Some(VertexId(2))).unwrap();
        let frames = build_frames(&result.into());
        assert_eq!(frames.len(), 1);
        assert!(matches!(frames[0], AnimationFrame::NodeVisited { .. }));
    }

    #[test]
    fn snapshot_rebuilds_prefix() {
        let result = dijkstra(&sample(), VertexId(0), Some(VertexId(5))).unwrap();
        let frames = build_frames(&result.into());

        let snapshot = HighlightSnapshot::from_frames(&frames, 3);
        assert_eq!(snapshot.visited, [VertexId(0)]);
        assert_eq!(snapshot.path, [VertexId(0), VertexId(3)]);
        assert_eq!(snapshot.frames_applied, 3);
        assert!(snapshot.distances.contains(&(VertexId(3), 1)));
    }

    #[test]
    fn snapshot_clamps_to_frame_count() {
        let result = kruskal(&sample()).unwrap();
        let frames = build_frames(&result.into());

        let snapshot = HighlightSnapshot::from_frames(&frames, 100);
        assert_eq!(snapshot.frames_applied, frames.len());
        assert_eq!(snapshot.tree_edges.len(), 5);

        let empty = HighlightSnapshot::from_frames(&frames, 0);
        assert_eq!(empty, HighlightSnapshot::default());
    }

    #[test]
    fn snapshot_updates_distance_in_place() {
        let frames = vec![
            AnimationFrame::NodeVisited { vertex: VertexId(4), distance: 9, index: 0 },
            AnimationFrame::PathStep { vertex: VertexId(4), distance: 5, index: 1 },
        ];
        let snapshot = HighlightSnapshot::from_frames(&frames, 2);
        assert_eq!(snapshot.distances, [(VertexId(4), 5)]);
    }

    #[test]
    fn display_is_compact() {
        let frame = AnimationFrame::PathStep { vertex: VertexId(3), distance: 1, index: 2 };
        assert_eq!(frame.to_string(), "[2] path step 3 at distance 1");
    }
}
