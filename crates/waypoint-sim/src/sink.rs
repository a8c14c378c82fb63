//! The renderer callback boundary.
//!
//! The engine knows nothing about drawing; exactly three signals cross to
//! the presentation side, and anything that implements them can be driven by
//! the controller: a terminal printer, a websocket bridge, or a recording
//! stub in tests.

use crate::events::AnimationFrame;

/// Receiver for playback signals.
///
/// Calls are synchronous and must not fail; a sink with fallible output
/// should buffer and surface problems out of band.
pub trait RenderSink {
    /// Draw one frame. Frames arrive in strict `index` order.
    fn on_frame(&mut self, frame: &AnimationFrame);

    /// The animation ran to its natural end.
    fn on_complete(&mut self);

    /// Drop every highlight and return to the neutral state.
    fn on_clear(&mut self);
}

/// Headless sink that prints each signal to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl RenderSink for ConsoleSink {
    fn on_frame(&mut self, frame: &AnimationFrame) {
        println!("{frame}");
    }

    fn on_complete(&mut self) {
        println!("(complete)");
    }

    fn on_clear(&mut self) {
        println!("(clear)");
    }
}

/// One recorded sink signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Frame(AnimationFrame),
    Complete,
    Clear,
}

/// Sink that records every signal for later inspection.
///
/// This is the headless test double: ordering assertions read `events`
/// directly, the helpers below answer the common questions.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded frames, in arrival order.
    pub fn frames(&self) -> Vec<&AnimationFrame> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Frame(frame) => Some(frame),
                _ => None,
            })
            .collect()
    }

    /// How many clear signals arrived.
    pub fn clears(&self) -> usize {
        self.events.iter().filter(|e| matches!(e, SinkEvent::Clear)).count()
    }

    /// How many completion signals arrived.
    pub fn completions(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SinkEvent::Complete))
            .count()
    }
}

impl RenderSink for RecordingSink {
    fn on_frame(&mut self, frame: &AnimationFrame) {
        self.events.push(SinkEvent::Frame(frame.clone()));
    }

    fn on_complete(&mut self) {
        self.events.push(SinkEvent::Complete);
    }

    fn on_clear(&mut self) {
        self.events.push(SinkEvent::Clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_topology::VertexId;

    #[test]
    fn recording_sink_preserves_order() {
        let mut sink = RecordingSink::new();
        sink.on_clear();
        sink.on_frame(&AnimationFrame::NodeVisited {
            vertex: VertexId(0),
            distance: 0,
            index: 0,
        });
        sink.on_complete();

        assert_eq!(sink.clears(), 1);
        assert_eq!(sink.frames().len(), 1);
        assert_eq!(sink.completions(), 1);
        assert!(matches!(sink.events[0], SinkEvent::Clear));
        assert!(matches!(sink.events[2], SinkEvent::Complete));
    }
}
