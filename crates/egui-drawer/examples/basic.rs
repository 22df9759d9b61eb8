use egui_drawer::{DrawerConfig, DrawerExt};

pub struct App {
    open: bool,
}

impl App {
    pub fn new(_: &eframe::CreationContext<'_>) -> Self {
        Self { open: false }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() / 2.0 - 10.0);
                if ui.button("Main").clicked() {
                    self.open = !self.open;
                }
            });

            ui.drawer(&mut self.open, |ui| {
                ui.set_width(DrawerConfig::DEFAULT_EDGE_ACTIVATION_WIDTH * 10.0);
                ui.heading("Side");
                ui.label("Drag from the left edge, flick, or tap outside to close.");
            });
        });
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "drawer example",
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc)))),
    )
}
