mod animation;
mod config;
mod controller;
mod errors;
mod input;
mod types;
mod view;

pub use animation::{OffsetAnimation, Transition};
pub use config::DrawerConfig;
pub use controller::{closed_offset, dim_level, DragPhase, PanelController, OPENED_OFFSET};
pub use errors::DrawerError;
pub use input::{DragEvent, DragRecognizer};
pub use types::{RenderOutput, SafeAreaInsets, Settle, SettleReason};
pub use view::{Drawer, DrawerExt, DrawerResponse, DrawerState};
