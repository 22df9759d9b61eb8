use crate::errors::DrawerError;
use garde::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Tunables for a [`crate::Drawer`].
///
/// Lengths are in logical points, durations in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DrawerConfig {
    /// Final drag delta above which release settles in the direction of travel.
    #[garde(range(min = 0.0, max = 10_000.0))]
    pub flick_threshold: f32,
    /// Width of the strip along the leading edge where a drag may open a closed panel.
    #[garde(range(min = 0.0, max = 10_000.0))]
    pub edge_activation_width: f32,
    /// Disable to let a drag anywhere open the panel.
    #[garde(skip)]
    pub edge_gated: bool,
    /// Backdrop opacity when fully open.
    #[garde(range(min = 0.0, max = 1.0))]
    pub max_dim: f32,
    #[garde(range(min = 0.0, max = 10.0))]
    pub animation_duration: f32,
    /// Pointer travel before a press becomes a drag.
    #[garde(range(min = 0.0, max = 1_000.0))]
    pub min_drag_distance: f32,
    /// Lay the panel out at this width instead of sizing it to its content.
    #[garde(custom(positive_width))]
    pub panel_width: Option<f32>,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            flick_threshold: Self::DEFAULT_FLICK_THRESHOLD,
            edge_activation_width: Self::DEFAULT_EDGE_ACTIVATION_WIDTH,
            edge_gated: true,
            max_dim: Self::DEFAULT_MAX_DIM,
            animation_duration: Self::DEFAULT_ANIMATION_DURATION,
            min_drag_distance: Self::DEFAULT_MIN_DRAG_DISTANCE,
            panel_width: None,
        }
    }
}

impl DrawerConfig {
    pub const DEFAULT_FLICK_THRESHOLD: f32 = 50.0;
    pub const DEFAULT_EDGE_ACTIVATION_WIDTH: f32 = 30.0;
    pub const DEFAULT_MAX_DIM: f32 = 0.5;
    pub const DEFAULT_ANIMATION_DURATION: f32 = 0.25;
    pub const DEFAULT_MIN_DRAG_DISTANCE: f32 = 10.0;

    #[inline]
    pub fn flick_threshold(mut self, threshold: f32) -> Self {
        self.flick_threshold = threshold;
        self
    }

    #[inline]
    pub fn edge_activation_width(mut self, width: f32) -> Self {
        self.edge_activation_width = width;
        self
    }

    #[inline]
    pub fn edge_gated(mut self, gated: bool) -> Self {
        self.edge_gated = gated;
        self
    }

    #[inline]
    pub fn max_dim(mut self, max_dim: f32) -> Self {
        self.max_dim = max_dim;
        self
    }

    #[inline]
    pub fn animation_duration(mut self, seconds: f32) -> Self {
        self.animation_duration = seconds;
        self
    }

    #[inline]
    pub fn min_drag_distance(mut self, distance: f32) -> Self {
        self.min_drag_distance = distance;
        self
    }

    #[inline]
    pub fn panel_width(mut self, width: impl Into<Option<f32>>) -> Self {
        self.panel_width = width.into();
        self
    }

    /// Checks every field, handing the config back on success.
    pub fn validated(self) -> Result<Self, DrawerError> {
        self.validate()?;
        Ok(self)
    }

    pub fn from_json_str(json: &str) -> Result<Self, DrawerError> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Reads a JSON config file. Missing fields fall back to their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DrawerError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        debug!("loaded drawer config from {}", path.display());
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, DrawerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn positive_width(value: &Option<f32>, _ctx: &()) -> garde::Result {
    match value {
        Some(width) if !width.is_finite() || *width <= 0.0 => {
            Err(garde::Error::new("panel width must be a positive number"))
        }
        _ => Ok(()),
    }
}
