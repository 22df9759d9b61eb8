mod menubar;
pub mod settings;
pub mod side_panel;
mod status_bar;
