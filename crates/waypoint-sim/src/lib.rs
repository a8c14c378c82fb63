//! Waypoint Route Animator
//!
//! Deterministic route computation with frame-by-frame playback.
//!
//! # Architecture
//!
//! - **Controller**: Owns one topology and at most one animation at a time
//! - **Frames**: Algorithm results lowered to an ordered highlight sequence
//! - **Driver**: Paces frame emission on a tokio interval
//! - **Harness**: Runs every algorithm side by side over one topology
//!
//! # Usage
//!
//! ```ignore
//! let topology = waypoint_topology::load_path("route.txt")?;
//! let mut controller = SimulationController::new(topology, ConsoleSink::default());
//! controller.start(AlgorithmKind::Dijkstra, VertexId(0), Some(VertexId(5)))?;
//! run_playback(&mut controller, DEFAULT_TICK).await;
//! ```

mod controller;
mod driver;
mod events;
mod harness;
mod sink;

pub use controller::{ControllerStatus, SimulationController, SimulationState};
pub use driver::{run_playback, DEFAULT_TICK};
pub use events::{build_frames, AnimationFrame, HighlightSnapshot};
pub use harness::{consistency_lines, render_report, run_batch, AlgorithmRun};
pub use sink::{ConsoleSink, RecordingSink, RenderSink, SinkEvent};
