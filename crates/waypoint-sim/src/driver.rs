//! Timed playback.
//!
//! The controller itself never sleeps; this module supplies the cadence.
//! Uses tokio intervals for steady frame pacing.

use std::time::Duration;

use crate::controller::{SimulationController, SimulationState};
use crate::sink::RenderSink;

/// Cadence used when the caller does not pick one.
pub const DEFAULT_TICK: Duration = Duration::from_millis(1000);

/// Tick the controller once per `period` until the animation finishes.
///
/// Returns the number of frames emitted. Resolves immediately when the
/// controller is not animating, so calling this without a prior `start`
/// is harmless.
pub async fn run_playback<S: RenderSink>(
    controller: &mut SimulationController<S>,
    period: Duration,
) -> usize {
    let mut interval = tokio::time::interval(period);
    let mut emitted = 0;

    tracing::info!(
        "playback of {} frames at one per {:?}",
        controller.total_frames(),
        period
    );

    while controller.state() == SimulationState::Animating {
        interval.tick().await;
        if controller.tick() {
            emitted += 1;
        }
    }

    emitted
}
