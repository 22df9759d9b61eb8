use crate::app::Slideout;
use crate::config::save_drawer_config;
use crate::ui::side_panel::SidePanel;
use egui::{Button, Checkbox, Grid, Slider};
use egui_drawer::{DrawerConfig, SafeAreaInsets};
use tracing::{error, info};

const BTN_WIDTH: f32 = 80.0;

/// Uncommitted edits of the drawer config.
#[derive(Debug, Clone)]
pub struct SettingsState {
    pub draft: DrawerConfig,
    pub fixed_width: bool,
    pub width: f32,
    /// Simulated leading safe-area inset.
    pub edge_inset: f32,
}

impl SettingsState {
    pub fn new(config: &DrawerConfig, insets: SafeAreaInsets) -> Self {
        Self {
            draft: config.clone(),
            fixed_width: config.panel_width.is_some(),
            width: config.panel_width.unwrap_or(SidePanel::WIDTH),
            edge_inset: insets.leading,
        }
    }

    pub fn to_config(&self) -> DrawerConfig {
        let width = self.fixed_width.then_some(self.width);
        self.draft.clone().panel_width(width)
    }

    pub fn insets(&self) -> SafeAreaInsets {
        SafeAreaInsets::leading(self.edge_inset)
    }

    fn form(&mut self, ui: &mut egui::Ui) {
        Grid::new("drawer_settings_grid")
            .num_columns(2)
            .spacing([20.0, 8.0])
            .striped(true)
            .show(ui, |ui| {
                let draft = &mut self.draft;
                ui.label("Flick threshold");
                ui.add(Slider::new(&mut draft.flick_threshold, 0.0..=200.0).suffix(" pt"));
                ui.end_row();

                ui.label("Edge gated");
                ui.add(Checkbox::without_text(&mut draft.edge_gated));
                ui.end_row();

                ui.label("Edge zone");
                ui.add_enabled(
                    draft.edge_gated,
                    Slider::new(&mut draft.edge_activation_width, 0.0..=120.0).suffix(" pt"),
                );
                ui.end_row();

                ui.label("Max dim");
                ui.add(Slider::new(&mut draft.max_dim, 0.0..=1.0));
                ui.end_row();

                ui.label("Animation");
                ui.add(Slider::new(&mut draft.animation_duration, 0.0..=1.0).suffix(" s"));
                ui.end_row();

                ui.label("Drag slop");
                ui.add(Slider::new(&mut draft.min_drag_distance, 0.0..=40.0).suffix(" pt"));
                ui.end_row();

                ui.label("Fixed width");
                ui.add(Checkbox::without_text(&mut self.fixed_width));
                ui.end_row();

                ui.label("Panel width");
                ui.add_enabled(
                    self.fixed_width,
                    Slider::new(&mut self.width, 120.0..=600.0).suffix(" pt"),
                );
                ui.end_row();

                ui.label("Leading inset");
                ui.add(Slider::new(&mut self.edge_inset, 0.0..=80.0).suffix(" pt"));
                ui.end_row();
            });
    }
}

impl Slideout {
    pub fn settings_window(&mut self, ctx: &egui::Context) {
        let mut open = self.opts.show_settings;
        egui::Window::new("Settings")
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                self.settings.form(ui);
                ui.separator();
                ui.horizontal(|ui| {
                    let apply_btn = Button::new("Apply").min_size((BTN_WIDTH, 0.).into());
                    if ui.add(apply_btn).clicked() {
                        self.apply_settings();
                    }
                    let save_btn = Button::new("Save").min_size((BTN_WIDTH, 0.).into());
                    if ui.add(save_btn).clicked() && self.apply_settings() {
                        if let Err(err) = save_drawer_config(&self.config_path, &self.drawer_config)
                        {
                            self.report(err);
                        }
                    }
                    let reset_btn = Button::new("Defaults").min_size((BTN_WIDTH, 0.).into());
                    if ui.add(reset_btn).clicked() {
                        self.settings = SettingsState::new(&DrawerConfig::default(), self.insets);
                    }
                });
            });
        self.opts.show_settings = open;
    }

    /// Validates the draft and makes it live. Returns whether it was applied.
    pub fn apply_settings(&mut self) -> bool {
        match self.settings.to_config().validated() {
            Ok(config) => {
                info!("applied drawer settings");
                self.drawer_config = config;
                self.insets = self.settings.insets();
                self.status = None;
                true
            }
            Err(err) => {
                error!("rejected drawer settings: {err}");
                self.status = Some(err.to_string());
                false
            }
        }
    }
}
