use crate::app::Slideout;
use crate::consts::REPOSITORY_URL;
use egui::{Button, Key, KeyboardShortcut, Modifiers};
use tracing::error;

const BTN_WIDTH: f32 = 200.0;

impl Slideout {
    pub fn menubar(&mut self, ui: &mut egui::Ui) {
        egui::MenuBar::new().ui(ui, |ui| {
            // View
            self.view_menu(ui);
            // Help
            help_menu(ui);
        });
    }

    fn view_menu(&mut self, ui: &mut egui::Ui) {
        let toggle_shortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::B);
        if ui.input_mut(|i| i.consume_shortcut(&toggle_shortcut)) {
            self.toggle_panel();
        }
        ui.menu_button("View", |ui| {
            let toggle_shortcut = ui.ctx().format_shortcut(&toggle_shortcut);
            let toggle_btn = Button::new("Toggle Panel")
                .min_size((BTN_WIDTH, 0.).into())
                .shortcut_text(toggle_shortcut);
            if ui.add(toggle_btn).clicked() {
                self.toggle_panel();
                ui.close();
            }
            let settings_btn = Button::new("Settings").min_size((BTN_WIDTH, 0.).into());
            if ui.add(settings_btn).clicked() {
                self.opts.show_settings = true;
                ui.close();
            }
            ui.separator();
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    }
}

fn help_menu(ui: &mut egui::Ui) {
    ui.menu_button("Help", |ui| {
        let about_btn = Button::new("About").min_size((BTN_WIDTH, 0.).into());
        if ui.add(about_btn).clicked() {
            if let Err(err) = open::that(REPOSITORY_URL) {
                error!("opening page {REPOSITORY_URL} error: {err}");
            }
            ui.close();
        }
    });
}
