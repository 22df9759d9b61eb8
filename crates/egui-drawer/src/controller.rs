use crate::animation::Transition;
use crate::config::DrawerConfig;
use crate::types::{RenderOutput, SafeAreaInsets, Settle, SettleReason};
use egui::{Pos2, Vec2};
use tracing::{debug, trace};

pub const OPENED_OFFSET: f32 = 0.0;

/// Offset that hides a panel of `panel_width` behind an inset of `edge_inset`.
pub fn closed_offset(panel_width: f32, edge_inset: f32) -> f32 {
    -panel_width - edge_inset
}

/// Backdrop opacity for a panel drawn at `offset`: 0 when hidden, `max_dim` when fully open.
///
/// An unmeasured panel (`panel_width == 0`) never dims.
pub fn dim_level(offset: f32, panel_width: f32, max_dim: f32) -> f32 {
    if panel_width <= 0.0 || !panel_width.is_finite() || !offset.is_finite() {
        return 0.0;
    }
    let max_dim = max_dim.clamp(0.0, 1.0);
    (max_dim * (1.0 + offset / panel_width)).clamp(0.0, max_dim)
}

fn is_horizontal(delta: Vec2) -> bool {
    delta.x.abs() > delta.y.abs()
}

fn sanitize_length(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Pointer is down and moving but no horizontal increment has been seen yet.
    Pending,
    Dragging,
    /// Rest of the gesture is ignored: it started outside the edge zone, or the
    /// panel was reset underneath it.
    Ignored,
}

/// Offset and gesture state machine for one slide-out panel.
#[derive(Debug, Clone)]
pub struct PanelController {
    config: DrawerConfig,
    is_open: bool,
    panel_width: f32,
    edge_inset: f32,
    live_offset: f32,
    phase: DragPhase,
    previous_translation: Vec2,
    last_delta_x: f32,
    drag_start: Option<Pos2>,
    intentional: bool,
    last_change: Option<SettleReason>,
}

impl Default for PanelController {
    fn default() -> Self {
        Self::new(DrawerConfig::default())
    }
}

impl PanelController {
    pub fn new(config: DrawerConfig) -> Self {
        Self {
            config,
            is_open: false,
            panel_width: 0.0,
            edge_inset: 0.0,
            live_offset: 0.0,
            phase: DragPhase::Idle,
            previous_translation: Vec2::ZERO,
            last_delta_x: 0.0,
            drag_start: None,
            intentional: false,
            last_change: None,
        }
    }

    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: DrawerConfig) {
        self.config = config;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// True while any gesture is being tracked, qualifying or not.
    pub fn is_tracking(&self) -> bool {
        self.phase != DragPhase::Idle
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn panel_width(&self) -> f32 {
        self.panel_width
    }

    pub fn edge_inset(&self) -> f32 {
        self.edge_inset
    }

    pub fn drag_start(&self) -> Option<Pos2> {
        self.drag_start
    }

    /// Why the open flag last changed through the drawer, cleared by the call.
    pub fn take_change_reason(&mut self) -> Option<SettleReason> {
        self.last_change.take()
    }

    pub fn closed_offset(&self) -> f32 {
        closed_offset(self.panel_width, self.edge_inset)
    }

    pub fn resting_offset(&self) -> f32 {
        if self.is_open {
            OPENED_OFFSET
        } else {
            self.closed_offset()
        }
    }

    pub fn current_offset(&self) -> f32 {
        if self.is_dragging() {
            self.live_offset
        } else {
            self.resting_offset()
        }
    }

    pub fn dim_level(&self) -> f32 {
        dim_level(self.current_offset(), self.panel_width, self.config.max_dim)
    }

    pub fn output(&self) -> RenderOutput {
        self.output_at(self.current_offset())
    }

    /// Render values for the panel drawn at `offset`, e.g. mid-animation.
    pub fn output_at(&self, offset: f32) -> RenderOutput {
        let offset = offset.clamp(self.closed_offset(), OPENED_OFFSET);
        RenderOutput {
            offset,
            dim_opacity: dim_level(offset, self.panel_width, self.config.max_dim),
        }
    }

    // layout

    /// Records a newly measured panel width. A change closes the panel.
    pub fn set_panel_width(&mut self, width: f32) -> bool {
        let width = sanitize_length(width);
        if width == self.panel_width {
            return false;
        }
        debug!(
            "panel width changed {} -> {width}, resetting to closed",
            self.panel_width
        );
        self.panel_width = width;
        self.force_closed();
        true
    }

    /// Records the inset on the edge the panel emerges from. A change closes the panel.
    pub fn set_edge_inset(&mut self, inset: f32) -> bool {
        let inset = sanitize_length(inset);
        if inset == self.edge_inset {
            return false;
        }
        debug!(
            "edge inset changed {} -> {inset}, resetting to closed",
            self.edge_inset
        );
        self.edge_inset = inset;
        self.force_closed();
        true
    }

    pub fn set_safe_area_insets(&mut self, insets: SafeAreaInsets) -> bool {
        self.set_edge_inset(insets.leading)
    }

    fn force_closed(&mut self) {
        let mid_gesture = self.phase != DragPhase::Idle;
        if self.is_open {
            self.last_change = Some(SettleReason::LayoutChanged);
        }
        self.is_open = false;
        self.reset_drag();
        self.live_offset = self.closed_offset();
        if mid_gesture {
            self.phase = DragPhase::Ignored;
        }
    }

    // bound state

    /// Moves the panel to the given resting state, abandoning any drag.
    pub fn set_open(&mut self, open: bool) -> Option<Transition> {
        let was_dragging = self.is_dragging();
        if open == self.is_open && !was_dragging {
            return None;
        }
        let from = self.current_offset();
        self.is_open = open;
        if self.phase != DragPhase::Idle {
            self.reset_drag();
            self.phase = DragPhase::Ignored;
        }
        Some(self.transition_from(from))
    }

    pub fn toggle(&mut self) -> Option<Transition> {
        self.set_open(!self.is_open)
    }

    /// Reconciles an externally owned open flag with the controller.
    pub fn sync_open(&mut self, open: bool) -> Option<Transition> {
        if open == self.is_open {
            return None;
        }
        debug!("open flag changed externally to {open}");
        self.set_open(open)
    }

    /// Backdrop tap.
    pub fn dismiss(&mut self) -> Option<Transition> {
        let was_open = self.is_open;
        let transition = self.set_open(false);
        if was_open {
            self.last_change = Some(SettleReason::Dismissed);
        }
        transition
    }

    // drag stream

    /// Feeds the cumulative `translation` of the active gesture and where it started,
    /// relative to the controlling edge.
    pub fn drag_changed(&mut self, translation: Vec2, start: Pos2) {
        self.drag_changed_from(translation, start, self.current_offset());
    }

    /// Like [`Self::drag_changed`], but a drag that qualifies now picks the panel up at
    /// `displayed_offset`, e.g. the value of a running animation.
    pub fn drag_changed_from(&mut self, translation: Vec2, start: Pos2, displayed_offset: f32) {
        if self.phase == DragPhase::Idle {
            self.begin_gesture(start);
        }
        if self.phase == DragPhase::Ignored {
            return;
        }

        let delta = translation - self.previous_translation;
        self.previous_translation = translation;
        if !is_horizontal(delta) {
            return;
        }

        if self.phase == DragPhase::Pending {
            self.live_offset = displayed_offset.clamp(self.closed_offset(), OPENED_OFFSET);
            self.phase = DragPhase::Dragging;
            trace!("drag began at offset {}", self.live_offset);
        }
        self.apply_delta(delta.x);
    }

    pub fn drag_ended(&mut self, translation: Vec2) -> Option<Transition> {
        match self.phase {
            DragPhase::Dragging => {
                let delta = translation - self.previous_translation;
                self.previous_translation = translation;
                let final_delta = if is_horizontal(delta) {
                    self.apply_delta(delta.x);
                    delta.x
                } else {
                    self.last_delta_x
                };
                let (settle, reason) = self.settle_decision(final_delta);
                Some(self.settle(settle, reason))
            }
            DragPhase::Idle => None,
            DragPhase::Pending | DragPhase::Ignored => {
                self.reset_drag();
                None
            }
        }
    }

    /// The gesture stream stopped without an end event.
    pub fn drag_cancelled(&mut self) -> Option<Transition> {
        match self.phase {
            DragPhase::Dragging => {
                let settle = self.position_decision();
                Some(self.settle(settle, SettleReason::Cancelled))
            }
            DragPhase::Idle => None,
            DragPhase::Pending | DragPhase::Ignored => {
                self.reset_drag();
                None
            }
        }
    }

    /// Called once per frame with whether the host still sees the gesture; a gesture
    /// that disappeared without an end event is cancelled.
    pub fn sync_gesture_active(&mut self, active: bool) -> Option<Transition> {
        if active || self.phase == DragPhase::Idle {
            return None;
        }
        debug!("gesture dropped without an end event");
        self.drag_cancelled()
    }

    fn begin_gesture(&mut self, start: Pos2) {
        self.previous_translation = Vec2::ZERO;
        self.last_delta_x = 0.0;
        self.drag_start = Some(start);
        self.intentional = self.is_in_activation_zone(start);
        self.phase = if self.intentional {
            DragPhase::Pending
        } else {
            trace!("drag from x={} outside the edge zone, ignoring", start.x);
            DragPhase::Ignored
        };
    }

    fn is_in_activation_zone(&self, start: Pos2) -> bool {
        if self.is_open || !self.config.edge_gated {
            return true;
        }
        start.x <= self.config.edge_activation_width
    }

    fn apply_delta(&mut self, dx: f32) {
        self.last_delta_x = dx;
        self.live_offset = (self.live_offset + dx).clamp(self.closed_offset(), OPENED_OFFSET);
    }

    fn position_decision(&self) -> Settle {
        if self.live_offset >= self.closed_offset() / 2.0 {
            Settle::Open
        } else {
            Settle::Closed
        }
    }

    fn settle_decision(&self, final_delta: f32) -> (Settle, SettleReason) {
        if self.intentional && final_delta.abs() > self.config.flick_threshold {
            let settle = if final_delta >= 0.0 {
                Settle::Open
            } else {
                Settle::Closed
            };
            return (settle, SettleReason::Flick);
        }
        (self.position_decision(), SettleReason::Position)
    }

    fn settle(&mut self, settle: Settle, reason: SettleReason) -> Transition {
        let from = self.live_offset.clamp(self.closed_offset(), OPENED_OFFSET);
        self.is_open = settle == Settle::Open;
        self.last_change = Some(reason);
        self.reset_drag();
        debug!("settled {settle:?} ({reason:?}) from offset {from}");
        self.transition_from(from)
    }

    fn transition_from(&self, from: f32) -> Transition {
        Transition {
            from,
            to: self.resting_offset(),
            duration: self.config.animation_duration,
        }
    }

    fn reset_drag(&mut self) {
        self.phase = DragPhase::Idle;
        self.previous_translation = Vec2::ZERO;
        self.last_delta_x = 0.0;
        self.drag_start = None;
        self.intentional = false;
    }
}
