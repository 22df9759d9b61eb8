pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const REPOSITORY_URL: &str = env!("CARGO_PKG_REPOSITORY");

/// Overrides the drawer config path.
pub const CONFIG_ENV: &str = "SLIDEOUT_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "slideout.json";

pub const DRAWER_ID: &str = "main_drawer";
