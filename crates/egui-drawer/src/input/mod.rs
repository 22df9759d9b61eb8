use egui::{Event, PointerButton, Pos2, Rect, Vec2};
use tracing::trace;

/// One step of a primary-button drag, in the shape the controller consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// Cumulative `translation` since the press; `start` is relative to the container's leading edge.
    Changed { translation: Vec2, start: Pos2 },
    Ended { translation: Vec2 },
    Cancelled,
}

/// Turns raw pointer events into a drag stream.
///
/// Only presses inside the container that the host `accepts` arm the recognizer, and
/// nothing is reported until the pointer has travelled `min_distance` from the press.
#[derive(Debug, Clone, Default)]
pub struct DragRecognizer {
    origin: Option<Pos2>,
    container_min: Pos2,
    started: bool,
}

impl DragRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A primary press is being tracked.
    pub fn is_armed(&self) -> bool {
        self.origin.is_some()
    }

    /// The tracked press has turned into a drag.
    pub fn is_dragging(&self) -> bool {
        self.started
    }

    /// Processes one frame of events. Consecutive moves collapse into a single
    /// `Changed` carrying the latest translation.
    pub fn process_events(
        &mut self,
        events: &[Event],
        container: Rect,
        min_distance: f32,
        accepts: impl Fn(Pos2) -> bool,
    ) -> Vec<DragEvent> {
        let mut drags: Vec<DragEvent> = Vec::new();
        for event in events {
            let Some(drag) = self.process(event, container, min_distance, &accepts) else {
                continue;
            };
            if matches!(drag, DragEvent::Changed { .. })
                && matches!(drags.last(), Some(DragEvent::Changed { .. }))
            {
                drags.pop();
            }
            drags.push(drag);
        }
        drags
    }

    pub fn process(
        &mut self,
        event: &Event,
        container: Rect,
        min_distance: f32,
        accepts: impl Fn(Pos2) -> bool,
    ) -> Option<DragEvent> {
        match event {
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: true,
                ..
            } => {
                let interrupted = self.reset();
                if container.contains(*pos) && accepts(*pos) {
                    self.origin = Some(*pos);
                    self.container_min = container.min;
                }
                interrupted
            }
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: false,
                ..
            } => {
                let origin = self.origin.take()?;
                let started = std::mem::take(&mut self.started);
                started.then(|| DragEvent::Ended {
                    translation: *pos - origin,
                })
            }
            Event::PointerMoved(pos) => {
                let origin = self.origin?;
                let translation = *pos - origin;
                if !self.started && translation.length() >= min_distance {
                    trace!("pointer drag started at {origin:?}");
                    self.started = true;
                }
                self.started.then(|| DragEvent::Changed {
                    translation,
                    start: (origin - self.container_min).to_pos2(),
                })
            }
            Event::PointerGone | Event::WindowFocused(false) => self.reset(),
            _ => None,
        }
    }

    /// Drops the tracked press, reporting a cancel if it had become a drag.
    pub fn reset(&mut self) -> Option<DragEvent> {
        self.origin = None;
        std::mem::take(&mut self.started).then_some(DragEvent::Cancelled)
    }
}
