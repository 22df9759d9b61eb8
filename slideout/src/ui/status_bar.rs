use crate::app::Slideout;
use egui::{Align, Color32, Layout, RichText};

impl Slideout {
    pub fn status_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let state = if self.opts.is_panel_open {
                "open"
            } else {
                "closed"
            };
            ui.label(format!("panel: {state}"));
            ui.separator();
            ui.label(format!("offset: {:.1}", self.last_output.offset));
            ui.separator();
            ui.label(format!("dim: {:.2}", self.last_output.dim_opacity));

            if let Some(status) = &self.status {
                let mut clear = false;
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    clear = ui.small_button("x").clicked();
                    ui.label(RichText::new(status).color(Color32::LIGHT_RED));
                });
                if clear {
                    self.status = None;
                }
            }
        });
    }
}
