use crate::consts::{CONFIG_ENV, DEFAULT_CONFIG_FILE};
use crate::errors::SlideoutError;
use egui_drawer::DrawerConfig;
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn config_path() -> PathBuf {
    env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// A missing file is not an error: the defaults apply.
pub fn load_drawer_config(path: &Path) -> Result<DrawerConfig, SlideoutError> {
    if !path.exists() {
        info!("no drawer config at {}, using defaults", path.display());
        return Ok(DrawerConfig::default());
    }
    Ok(DrawerConfig::load(path)?)
}

pub fn save_drawer_config(path: &Path, config: &DrawerConfig) -> Result<(), SlideoutError> {
    let json = config.clone().validated()?.to_json_string()?;
    std::fs::write(path, json)?;
    info!("saved drawer config to {}", path.display());
    Ok(())
}
