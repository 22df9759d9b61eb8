use crate::animation::{OffsetAnimation, Transition};
use crate::config::DrawerConfig;
use crate::controller::PanelController;
use crate::input::{DragEvent, DragRecognizer};
use crate::types::{RenderOutput, SafeAreaInsets, SettleReason};
use egui::{
    Area, Color32, Context, Frame, Id, LayerId, Order, Pos2, Rect, Response, Sense, Ui, Vec2,
};
use std::hash::Hash;
use tracing::debug;

#[derive(Clone, Default)]
pub struct DrawerState {
    pub controller: PanelController,
    pub recognizer: DragRecognizer,
    pub animation: Option<OffsetAnimation>,
}

impl DrawerState {
    pub fn load(ctx: &Context, id: Id) -> Self {
        ctx.data_mut(|d| d.get_temp::<Self>(id).unwrap_or_default())
    }

    pub fn store(self, ctx: &Context, id: Id) {
        ctx.data_mut(|d| d.insert_temp(id, self));
    }

    fn start(&mut self, transition: Option<Transition>, now: f64) {
        if let Some(transition) = transition {
            self.animation = Some(OffsetAnimation::supersede(
                self.animation.as_ref(),
                transition,
                now,
            ));
        }
    }

    fn handle_drag(&mut self, event: DragEvent, now: f64) {
        match event {
            DragEvent::Changed { translation, start } => {
                let displayed = match self.animation {
                    Some(anim) if !anim.is_finished(now) => anim.value(now),
                    _ => self.controller.current_offset(),
                };
                self.controller.drag_changed_from(translation, start, displayed);
                if self.controller.is_dragging() {
                    self.animation = None;
                }
            }
            DragEvent::Ended { translation } => {
                let transition = self.controller.drag_ended(translation);
                self.start(transition, now);
            }
            DragEvent::Cancelled => {
                let transition = self.controller.drag_cancelled();
                self.start(transition, now);
            }
        }
    }

    /// Offset to paint this frame, following a running animation if there is one.
    fn displayed_offset(&mut self, now: f64) -> f32 {
        if self.controller.is_dragging() {
            self.animation = None;
        }
        match self.animation {
            Some(anim) if !anim.is_finished(now) => anim.value(now),
            _ => {
                self.animation = None;
                self.controller.current_offset()
            }
        }
    }
}

pub struct DrawerResponse<R> {
    pub id: Id,
    /// Return value of the panel contents.
    pub inner: R,
    pub output: RenderOutput,
    pub is_open: bool,
    /// The drawer itself changed the open flag this frame.
    pub changed: bool,
    /// Why it did, when `changed`.
    pub reason: Option<SettleReason>,
    pub panel: Response,
    pub backdrop: Option<Response>,
}

/// A panel that slides over `ui.max_rect()` from the leading edge.
///
/// Paint the main content first, then call [`Drawer::show`] from the same `Ui`.
pub struct Drawer {
    id_salt: Id,
    config: Option<DrawerConfig>,
    edge_inset: f32,
}

impl Drawer {
    pub fn new(id_salt: impl Hash) -> Self {
        Self {
            id_salt: Id::new(id_salt),
            config: None,
            edge_inset: 0.0,
        }
    }

    #[inline]
    pub fn config(mut self, config: DrawerConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[inline]
    pub fn edge_inset(mut self, inset: f32) -> Self {
        self.edge_inset = inset;
        self
    }

    #[inline]
    pub fn safe_area_insets(mut self, insets: SafeAreaInsets) -> Self {
        self.edge_inset = insets.leading;
        self
    }

    pub fn show<R>(
        self,
        ui: &mut Ui,
        open: &mut bool,
        add_contents: impl FnOnce(&mut Ui) -> R,
    ) -> DrawerResponse<R> {
        let ctx = ui.ctx().clone();
        let id = ui.make_persistent_id(self.id_salt);
        let container = ui.max_rect();
        let mut state = DrawerState::load(&ctx, id);
        if let Some(config) = self.config {
            state.controller.set_config(config);
        }
        let config = state.controller.config().clone();
        let now = ctx.input(|i| i.time);
        let was_open = *open;

        if state.controller.set_edge_inset(self.edge_inset) {
            state.animation = None;
        }
        let transition = state.controller.sync_open(*open);
        state.start(transition, now);

        // presses on other windows or popups belong to them
        let own_layers = [ui.layer_id(), backdrop_layer(id), panel_layer(id)];
        let accepts =
            |pos: Pos2| ctx.layer_id_at(pos).map_or(true, |layer| own_layers.contains(&layer));
        let (events, primary_down) = ctx.input(|i| (i.events.clone(), i.pointer.primary_down()));
        let drags = state.recognizer.process_events(
            &events,
            container,
            config.min_drag_distance,
            accepts,
        );
        for drag in drags {
            state.handle_drag(drag, now);
        }
        if !primary_down && state.recognizer.is_armed() {
            if let Some(cancel) = state.recognizer.reset() {
                state.handle_drag(cancel, now);
            }
        }
        let transition = state
            .controller
            .sync_gesture_active(state.recognizer.is_dragging());
        state.start(transition, now);

        let offset = state.displayed_offset(now);
        let mut output = state.controller.output_at(offset);

        let backdrop =
            (output.dim_opacity > 0.0).then(|| show_backdrop(&ctx, id, container, output));
        if backdrop.as_ref().is_some_and(|r| r.clicked()) && !state.controller.is_dragging() {
            debug!("backdrop tapped, closing drawer");
            let transition = state.controller.dismiss();
            state.start(transition, now);
            let offset = state.displayed_offset(now);
            output = state.controller.output_at(offset);
        }

        let measured = state.controller.panel_width() > 0.0;
        let visible = output.offset > state.controller.closed_offset();
        let panel = Area::new(panel_layer(id).id)
            .order(panel_layer(id).order)
            .fixed_pos(container.min + Vec2::new(output.offset, 0.0))
            .constrain(false)
            .interactable(visible)
            .show(&ctx, |ui| {
                ui.set_clip_rect(container);
                if !measured {
                    ui.set_invisible();
                }
                Frame::side_top_panel(ui.style())
                    .show(ui, |ui| {
                        ui.set_min_height(container.height());
                        if let Some(width) = config.panel_width {
                            ui.set_width(width);
                        }
                        add_contents(ui)
                    })
                    .inner
            });

        if state.controller.set_panel_width(panel.response.rect.width()) {
            state.animation = None;
            ctx.request_repaint();
        }

        if state.animation.is_some() || state.controller.is_tracking() {
            ctx.request_repaint();
        }

        let is_open = state.controller.is_open();
        let changed = was_open != is_open;
        let reason = state.controller.take_change_reason().filter(|_| changed);
        *open = is_open;
        state.store(&ctx, id);

        DrawerResponse {
            id,
            inner: panel.inner,
            output,
            is_open,
            changed,
            reason,
            panel: panel.response,
            backdrop,
        }
    }
}

fn backdrop_layer(id: Id) -> LayerId {
    LayerId::new(Order::Middle, id.with("backdrop"))
}

fn panel_layer(id: Id) -> LayerId {
    LayerId::new(Order::Foreground, id.with("panel"))
}

fn show_backdrop(ctx: &Context, id: Id, container: Rect, output: RenderOutput) -> Response {
    let alpha = (output.dim_opacity * 255.0).round() as u8;
    let layer = backdrop_layer(id);
    Area::new(layer.id)
        .order(layer.order)
        .fixed_pos(container.min)
        .constrain(false)
        .interactable(true)
        .show(ctx, |ui| {
            ui.painter()
                .rect_filled(container, 0.0, Color32::from_black_alpha(alpha));
            ui.allocate_rect(container, Sense::click())
        })
        .inner
}

/// Shorthand for [`Drawer`] on any `Ui`.
pub trait DrawerExt {
    fn drawer<R>(
        &mut self,
        open: &mut bool,
        add_contents: impl FnOnce(&mut Ui) -> R,
    ) -> DrawerResponse<R>;
}

impl DrawerExt for Ui {
    fn drawer<R>(
        &mut self,
        open: &mut bool,
        add_contents: impl FnOnce(&mut Ui) -> R,
    ) -> DrawerResponse<R> {
        Drawer::new("drawer").show(self, open, add_contents)
    }
}
