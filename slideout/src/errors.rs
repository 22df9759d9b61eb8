use egui_drawer::DrawerError;

#[derive(Debug, thiserror::Error)]
pub enum SlideoutError {
    #[error("{0}")]
    Drawer(#[from] DrawerError),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
