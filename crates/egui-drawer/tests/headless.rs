//! Headless frame-by-frame tests driving the drawer through `egui::Context::run`.

use egui::{pos2, vec2, Event, Modifiers, PointerButton, Pos2, RawInput, Rect, Slider};
use egui_drawer::{Drawer, DrawerConfig, DrawerState, RenderOutput, SettleReason};

const FRAME: f64 = 1.0 / 60.0;

struct Frame {
    id: egui::Id,
    container: Rect,
    output: RenderOutput,
    is_open: bool,
    changed: bool,
    reason: Option<SettleReason>,
    /// Rail of the slider in the floating window, when shown.
    slider: Option<Rect>,
}

struct Harness {
    ctx: egui::Context,
    time: f64,
    open: bool,
    config: DrawerConfig,
    /// Show a window with a slider over the main surface.
    window: bool,
    slider: f32,
}

impl Harness {
    fn new() -> Self {
        Self {
            ctx: egui::Context::default(),
            time: 0.0,
            open: false,
            config: DrawerConfig::default().panel_width(300.0),
            window: false,
            slider: 50.0,
        }
    }

    fn frame(&mut self, events: Vec<Event>) -> Frame {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(1024.0, 768.0))),
            time: Some(self.time),
            events,
            ..Default::default()
        };
        self.time += FRAME;

        let mut frame = None;
        let mut slider_rect = None;
        let open = &mut self.open;
        let slider = &mut self.slider;
        let window = self.window;
        let config = self.config.clone();
        let _ = self.ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.label("main content");
                let container = ui.max_rect();
                let response = Drawer::new("drawer")
                    .config(config.clone())
                    .show(ui, open, |ui| ui.label("panel content"));
                frame = Some(Frame {
                    id: response.id,
                    container,
                    output: response.output,
                    is_open: response.is_open,
                    changed: response.changed,
                    reason: response.reason,
                    slider: None,
                });
            });
            if window {
                slider_rect = egui::Window::new("tuning")
                    .fixed_pos(pos2(500.0, 280.0))
                    .collapsible(false)
                    .show(ctx, |ui| {
                        ui.add(Slider::new(&mut *slider, 0.0..=100.0).show_value(false))
                            .rect
                    })
                    .and_then(|window| window.inner);
            }
        });
        let mut frame = frame.expect("central panel ran");
        frame.slider = slider_rect;
        frame
    }

    fn idle(&mut self, frames: usize) -> Frame {
        let mut last = self.frame(vec![]);
        for _ in 1..frames {
            last = self.frame(vec![]);
        }
        last
    }

    fn panel_width(&self, id: egui::Id) -> f32 {
        DrawerState::load(&self.ctx, id).controller.panel_width()
    }
}

fn press(pos: Pos2) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed: true,
        modifiers: Modifiers::NONE,
    }
}

fn release(pos: Pos2) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed: false,
        modifiers: Modifiers::NONE,
    }
}

#[test]
fn first_frames_measure_the_panel() {
    let mut harness = Harness::new();
    let first = harness.frame(vec![]);
    assert_eq!(first.output.dim_opacity, 0.0);

    let settled = harness.idle(3);
    let width = harness.panel_width(settled.id);
    assert!(width >= 300.0, "measured {width}");
    assert_eq!(settled.output.offset, -width);
    assert!(!settled.is_open);
}

#[test]
fn bound_flag_opens_with_animation() {
    let mut harness = Harness::new();
    harness.idle(3);

    harness.open = true;
    let start = harness.frame(vec![]);
    assert!(start.is_open);
    assert!(!start.changed);
    assert!(start.output.offset < 0.0);

    let settled = harness.idle(30);
    assert_eq!(settled.output.offset, 0.0);
    assert_eq!(settled.output.dim_opacity, 0.5);
    assert!(harness.open);
}

#[test]
fn edge_drag_opens_panel() {
    let mut harness = Harness::new();
    let measured = harness.idle(3);
    let origin = measured.container.min + vec2(5.0, 200.0);

    harness.frame(vec![Event::PointerMoved(origin), press(origin)]);
    let mut last = measured;
    for step in 1..=7 {
        let pos = origin + vec2(40.0 * step as f32, 0.0);
        last = harness.frame(vec![Event::PointerMoved(pos)]);
    }
    assert!(last.output.offset > -harness.panel_width(last.id));
    assert!(last.output.dim_opacity > 0.0);

    let end = origin + vec2(280.0, 0.0);
    let released = harness.frame(vec![release(end)]);
    assert!(released.is_open);
    assert!(released.changed);
    assert!(harness.open);

    let settled = harness.idle(30);
    assert_eq!(settled.output.offset, 0.0);
}

#[test]
fn drag_away_from_edge_is_ignored_while_closed() {
    let mut harness = Harness::new();
    let measured = harness.idle(3);
    let origin = measured.container.min + vec2(200.0, 200.0);

    harness.frame(vec![Event::PointerMoved(origin), press(origin)]);
    for step in 1..=7 {
        let pos = origin + vec2(40.0 * step as f32, 0.0);
        harness.frame(vec![Event::PointerMoved(pos)]);
    }
    let released = harness.frame(vec![release(origin + vec2(280.0, 0.0))]);
    assert!(!released.is_open);
    assert_eq!(released.output.dim_opacity, 0.0);
}

#[test]
fn vertical_scroll_over_open_panel_keeps_it_open() {
    let mut harness = Harness::new();
    harness.idle(3);
    harness.open = true;
    let open = harness.idle(30);
    let origin = open.container.min + vec2(100.0, 100.0);

    harness.frame(vec![Event::PointerMoved(origin), press(origin)]);
    for step in 1..=5 {
        let pos = origin + vec2(0.0, 40.0 * step as f32);
        harness.frame(vec![Event::PointerMoved(pos)]);
    }
    let released = harness.frame(vec![release(origin + vec2(0.0, 200.0))]);
    assert!(released.is_open);
    assert_eq!(released.output.offset, 0.0);
}

#[test]
fn backdrop_tap_closes_panel() {
    let mut harness = Harness::new();
    harness.idle(3);
    harness.open = true;
    let open = harness.idle(30);
    let tap = pos2(open.container.max.x - 20.0, open.container.center().y);

    harness.frame(vec![Event::PointerMoved(tap)]);
    harness.frame(vec![press(tap)]);
    let tapped = harness.frame(vec![release(tap)]);
    assert!(!tapped.is_open);
    assert!(tapped.changed);
    assert_eq!(tapped.reason, Some(SettleReason::Dismissed));
    assert!(!harness.open);

    let settled = harness.idle(30);
    assert_eq!(settled.output.dim_opacity, 0.0);
}

#[test]
fn panel_resize_forces_closed() {
    let mut harness = Harness::new();
    harness.idle(3);
    harness.open = true;
    let open = harness.idle(30);
    let before = harness.panel_width(open.id);

    harness.config = harness.config.clone().panel_width(250.0);
    let frames: Vec<Frame> = (0..3).map(|_| harness.frame(vec![])).collect();
    let closing = frames
        .iter()
        .find(|frame| frame.changed)
        .expect("resize closes the panel");
    assert_eq!(closing.reason, Some(SettleReason::LayoutChanged));

    let resized = &frames[2];
    let after = harness.panel_width(resized.id);
    assert!(after < before);
    assert!(!resized.is_open);
    assert!(!harness.open);
    assert_eq!(resized.output.offset, -after);
}

#[test]
fn one_frame_flick_closes_panel() {
    let mut harness = Harness::new();
    harness.idle(3);
    harness.open = true;
    let open = harness.idle(30);
    let origin = open.container.min + vec2(250.0, 200.0);

    harness.frame(vec![Event::PointerMoved(origin), press(origin)]);
    // a fast mouse reports many small moves within one frame
    let burst = (1..=12)
        .map(|step| Event::PointerMoved(origin - vec2(10.0 * step as f32, 0.0)))
        .collect();
    let moved = harness.frame(burst);
    assert!(moved.output.offset < 0.0);

    let released = harness.frame(vec![release(origin - vec2(120.0, 0.0))]);
    assert!(!released.is_open);
    assert_eq!(released.reason, Some(SettleReason::Flick));
    assert!(!harness.open);
}

#[test]
fn slider_in_window_does_not_drive_drawer() {
    let mut harness = Harness::new();
    harness.idle(3);
    harness.open = true;
    harness.idle(30);
    harness.window = true;
    let shown = harness.idle(3);
    let grab = shown.slider.expect("window shows the slider").center();

    harness.frame(vec![Event::PointerMoved(grab)]);
    harness.frame(vec![press(grab)]);
    for step in 1..=10 {
        let pos = grab - vec2(20.0 * step as f32, 0.0);
        let frame = harness.frame(vec![Event::PointerMoved(pos)]);
        assert_eq!(frame.output.offset, 0.0);
    }
    let released = harness.frame(vec![release(grab - vec2(200.0, 0.0))]);
    assert!(released.is_open);
    assert!(!released.changed);
    assert!(harness.open);
    assert!(harness.slider < 50.0, "slider at {}", harness.slider);

    let state = DrawerState::load(&harness.ctx, released.id);
    assert!(!state.recognizer.is_armed());
}

#[test]
fn pointer_leaving_mid_drag_settles_by_position() {
    let mut harness = Harness::new();
    let measured = harness.idle(3);
    let origin = measured.container.min + vec2(5.0, 200.0);

    harness.frame(vec![Event::PointerMoved(origin), press(origin)]);
    let mut last = measured;
    for step in 1..=5 {
        let pos = origin + vec2(50.0 * step as f32, 0.0);
        last = harness.frame(vec![Event::PointerMoved(pos)]);
    }
    assert!(DrawerState::load(&harness.ctx, last.id)
        .controller
        .is_dragging());

    let gone = harness.frame(vec![Event::PointerGone]);
    let state = DrawerState::load(&harness.ctx, gone.id);
    assert!(!state.controller.is_tracking());
    assert!(!state.recognizer.is_armed());
    assert!(gone.is_open);
    assert_eq!(gone.reason, Some(SettleReason::Cancelled));

    let settled = harness.idle(30);
    assert_eq!(settled.output.offset, 0.0);
    assert!(harness.open);
}

#[test]
fn focus_loss_mid_drag_settles_by_position() {
    let mut harness = Harness::new();
    harness.idle(3);
    harness.open = true;
    let open = harness.idle(30);
    let origin = open.container.min + vec2(280.0, 200.0);

    harness.frame(vec![Event::PointerMoved(origin), press(origin)]);
    for step in 1..=5 {
        let pos = origin - vec2(50.0 * step as f32, 0.0);
        harness.frame(vec![Event::PointerMoved(pos)]);
    }

    let unfocused = harness.frame(vec![Event::WindowFocused(false)]);
    assert!(!unfocused.is_open);
    assert_eq!(unfocused.reason, Some(SettleReason::Cancelled));
    assert!(!DrawerState::load(&harness.ctx, unfocused.id)
        .controller
        .is_tracking());

    let settled = harness.idle(30);
    assert_eq!(settled.output.offset, -harness.panel_width(settled.id));
}

#[test]
fn drag_during_animation_continues_from_displayed_offset() {
    let mut harness = Harness::new();
    harness.idle(3);
    harness.open = true;
    let opening = harness.idle(5);
    assert!(opening.output.offset < -100.0, "at {}", opening.output.offset);

    let origin = opening.container.min + vec2(600.0, 300.0);
    harness.frame(vec![Event::PointerMoved(origin), press(origin)]);
    let dragged = harness.frame(vec![Event::PointerMoved(origin + vec2(20.0, 0.0))]);
    assert!(
        dragged.output.offset < -50.0,
        "jumped to {}",
        dragged.output.offset
    );
    assert!(dragged.output.offset > opening.output.offset);
}
