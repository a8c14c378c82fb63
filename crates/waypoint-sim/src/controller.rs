//! The animation state machine.
//!
//! One controller owns one topology, one sink, and at most one animation.
//! Computation runs synchronously inside `start`; playback advances only
//! when the caller ticks. Nothing here spawns tasks or keeps timers, which
//! is what keeps the whole state machine single-writer and testable without
//! a runtime.

use serde::{Deserialize, Serialize};
use waypoint_routing::{dispatch, AlgorithmKind, ComputationResult, Result};
use waypoint_topology::{Topology, VertexId};

use crate::events::{build_frames, AnimationFrame, HighlightSnapshot};
use crate::sink::RenderSink;

/// Lifecycle of one animated computation.
///
/// `Computing` is transient: `start` passes through it and settles in
/// `Animating` or `Idle` before returning, so callers never observe it
/// between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationState {
    /// Nothing computed, nothing highlighted
    Idle,
    /// Dispatch in progress
    Computing,
    /// Frames remain to be emitted
    Animating,
    /// Every frame was emitted
    Completed,
}

/// Drives algorithm runs and feeds their frames to a render sink.
pub struct SimulationController<S: RenderSink> {
    topology: Topology,
    sink: S,
    state: SimulationState,
    frames: Vec<AnimationFrame>,
    cursor: usize,
    result: Option<ComputationResult>,
}

impl<S: RenderSink> SimulationController<S> {
    /// Create an idle controller over `topology`.
    pub fn new(topology: Topology, sink: S) -> Self {
        Self {
            topology,
            sink,
            state: SimulationState::Idle,
            frames: Vec::new(),
            cursor: 0,
            result: None,
        }
    }

    /// Compute `kind` and arm the animation.
    ///
    /// Valid from any state; from `Animating` or `Completed` it is a hard
    /// restart and the previous frame sequence is discarded before anything
    /// else, so two sequences never interleave. On success one `on_clear`
    /// tells the renderer to start from the neutral state and the controller
    /// moves to `Animating` (the first frame waits for the first tick). On
    /// failure the controller lands in `Idle`; the renderer is cleared only
    /// if an active animation was interrupted, and no partial animation is
    /// produced.
    pub fn start(
        &mut self,
        kind: AlgorithmKind,
        source: VertexId,
        target: Option<VertexId>,
    ) -> Result<()> {
        let interrupted = self.state != SimulationState::Idle;
        self.frames.clear();
        self.cursor = 0;
        self.result = None;
        self.state = SimulationState::Computing;
        tracing::debug!("computing {} from {} (target {:?})", kind, source, target);

        match dispatch(&self.topology, kind, source, target) {
            Ok(result) => {
                self.frames = build_frames(&result);
                self.result = Some(result);
                self.sink.on_clear();
                self.state = SimulationState::Animating;
                tracing::info!("{} ready, {} frames queued", kind, self.frames.len());
                Ok(())
            }
            Err(error) => {
                if interrupted {
                    self.sink.on_clear();
                }
                self.state = SimulationState::Idle;
                tracing::warn!("{} failed: {}", kind, error);
                Err(error)
            }
        }
    }

    /// Emit the next frame, if any. Returns whether a frame was emitted.
    ///
    /// No-op outside `Animating`. Emitting the last frame also transitions
    /// to `Completed` and signals `on_complete` on the same tick; a
    /// zero-frame animation completes on its first tick without emitting.
    pub fn tick(&mut self) -> bool {
        if self.state != SimulationState::Animating {
            return false;
        }

        if self.cursor >= self.frames.len() {
            self.state = SimulationState::Completed;
            self.sink.on_complete();
            return false;
        }

        self.sink.on_frame(&self.frames[self.cursor]);
        self.cursor += 1;
        if self.cursor == self.frames.len() {
            self.state = SimulationState::Completed;
            self.sink.on_complete();
        }
        true
    }

    /// Return to `Idle`, clearing the result, the frames, and the renderer.
    ///
    /// A single `on_clear` is emitted. Calling this when already `Idle` is a
    /// no-op: no state changes, no signal.
    pub fn reset(&mut self) {
        if self.state == SimulationState::Idle {
            return;
        }
        self.frames.clear();
        self.cursor = 0;
        self.result = None;
        self.sink.on_clear();
        self.state = SimulationState::Idle;
        tracing::debug!("controller reset");
    }

    /// Replace the topology wholesale, resetting first if not idle.
    pub fn load_topology(&mut self, topology: Topology) {
        self.reset();
        self.topology = topology;
    }

    /// Current state.
    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// The topology runs are computed over.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// The armed frame sequence (empty outside a run).
    pub fn frames(&self) -> &[AnimationFrame] {
        &self.frames
    }

    /// How many frames have been emitted so far.
    pub fn frames_emitted(&self) -> usize {
        self.cursor
    }

    /// Total frames in the current sequence.
    pub fn total_frames(&self) -> usize {
        self.frames.len()
    }

    /// Emission progress as a fraction (0.0 - 1.0).
    pub fn progress(&self) -> f64 {
        if self.frames.is_empty() {
            0.0
        } else {
            self.cursor as f64 / self.frames.len() as f64
        }
    }

    /// The result behind the current animation, if any.
    pub fn result(&self) -> Option<&ComputationResult> {
        self.result.as_ref()
    }

    /// The sink, for inspection.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Highlight state implied by the frames emitted so far.
    pub fn highlight(&self) -> HighlightSnapshot {
        HighlightSnapshot::from_frames(&self.frames, self.cursor)
    }
}

/// Controller status for reporting to a frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerStatus {
    pub state: SimulationState,
    pub cursor: usize,
    pub total_frames: usize,
    pub progress: f64,
}

impl<S: RenderSink> From<&SimulationController<S>> for ControllerStatus {
    fn from(controller: &SimulationController<S>) -> Self {
        Self {
            state: controller.state,
            cursor: controller.cursor,
            total_frames: controller.total_frames(),
            progress: controller.progress(),
        }
    }
}
