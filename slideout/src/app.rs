use crate::config::{config_path, load_drawer_config};
use crate::consts::DRAWER_ID;
use crate::errors::SlideoutError;
use crate::ui::settings::SettingsState;
use crate::ui::side_panel::SidePanel;
use eframe::{egui, NativeOptions};
use egui::{Button, Color32, Frame};
use egui_drawer::{Drawer, DrawerConfig, RenderOutput, SafeAreaInsets};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Debug, Clone, Default)]
pub struct SlideoutOptions {
    /// Bound open flag shared with the drawer.
    pub is_panel_open: bool,
    pub show_settings: bool,
}

pub struct Slideout {
    pub opts: SlideoutOptions,
    pub drawer_config: DrawerConfig,
    pub insets: SafeAreaInsets,
    pub config_path: PathBuf,
    pub settings: SettingsState,
    pub side_panel: SidePanel,
    /// What the drawer painted last frame.
    pub last_output: RenderOutput,
    /// Last error, shown in the status bar until dismissed.
    pub status: Option<String>,
}

impl Slideout {
    fn new() -> Self {
        let config_path = config_path();
        let mut status = None;
        let drawer_config = match load_drawer_config(&config_path) {
            Ok(config) => config,
            Err(err) => {
                error!("loading {} error: {err}", config_path.display());
                status = Some(err.to_string());
                DrawerConfig::default()
            }
        };
        let insets = SafeAreaInsets::ZERO;
        Self {
            opts: SlideoutOptions::default(),
            settings: SettingsState::new(&drawer_config, insets),
            drawer_config,
            insets,
            config_path,
            side_panel: SidePanel::default(),
            last_output: RenderOutput::default(),
            status,
        }
    }

    pub fn start(options: NativeOptions) -> eframe::Result<()> {
        eframe::run_native(
            "Slideout",
            options,
            Box::new(|cc| {
                cc.egui_ctx
                    .options_mut(|opt| opt.zoom_with_keyboard = false);
                Ok(Box::new(Slideout::new()))
            }),
        )
    }

    pub fn toggle_panel(&mut self) {
        self.opts.is_panel_open = !self.opts.is_panel_open;
    }

    pub fn report(&mut self, err: SlideoutError) {
        error!("{err}");
        self.status = Some(err.to_string());
    }
}

impl eframe::App for Slideout {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("main_top_panel").show(ctx, |ui| {
            self.menubar(ui);
        });
        egui::TopBottomPanel::bottom("main_bottom_panel").show(ctx, |ui| {
            self.status_bar(ui);
        });

        if self.opts.show_settings {
            self.settings_window(ctx);
        }

        egui::CentralPanel::default()
            .frame(Frame::central_panel(&ctx.style()).fill(Color32::from_rgb(120, 40, 40)))
            .show(ctx, |ui| {
                self.main_view(ui);

                let side_panel = &self.side_panel;
                let response = Drawer::new(DRAWER_ID)
                    .config(self.drawer_config.clone())
                    .safe_area_insets(self.insets)
                    .show(ui, &mut self.opts.is_panel_open, |ui| side_panel.ui(ui));
                if response.changed {
                    let state = if response.is_open { "opened" } else { "closed" };
                    match response.reason {
                        Some(reason) => info!("panel {state} ({reason:?})"),
                        None => info!("panel {state}"),
                    }
                }
                self.last_output = response.output;
            });
    }
}

impl Slideout {
    fn main_view(&mut self, ui: &mut egui::Ui) {
        let button_size = egui::vec2(160., 40.);
        ui.vertical_centered(|ui| {
            ui.add_space(((ui.available_height() - button_size.y) / 2.).max(0.));
            if ui
                .add(Button::new("Toggle panel").min_size(button_size))
                .clicked()
            {
                self.toggle_panel();
            }
        });
    }
}
