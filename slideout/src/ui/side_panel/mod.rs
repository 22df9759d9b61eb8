use egui::{ScrollArea, Ui};

#[derive(Debug, Clone)]
pub struct SidePanel {
    pub rows: usize,
}

impl Default for SidePanel {
    fn default() -> Self {
        Self { rows: Self::ROWS }
    }
}

impl SidePanel {
    pub const WIDTH: f32 = 300.0;
    pub const ROWS: usize = 100;
    pub const HEADER_COLUMNS: usize = 2;
}

impl SidePanel {
    pub fn ui(&self, ui: &mut Ui) {
        ui.set_min_width(Self::WIDTH);
        ui.horizontal(|ui| {
            for index in 1..=Self::HEADER_COLUMNS {
                ui.label(index.to_string());
            }
        });
        ui.separator();
        // vertical drags scroll the list, horizontal ones move the drawer
        ScrollArea::vertical()
            .auto_shrink([true, false])
            .show(ui, |ui| {
                for index in 1..=self.rows {
                    ui.label(index.to_string());
                }
            });
    }
}
