/// Safe-area insets of the surface hosting the drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SafeAreaInsets {
    pub top: f32,
    pub bottom: f32,
    pub leading: f32,
    pub trailing: f32,
}

impl SafeAreaInsets {
    pub const ZERO: Self = Self {
        top: 0.0,
        bottom: 0.0,
        leading: 0.0,
        trailing: 0.0,
    };

    pub fn leading(leading: f32) -> Self {
        Self {
            leading,
            ..Self::ZERO
        }
    }
}

/// Values the host paints with: the panel's horizontal offset and the backdrop opacity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderOutput {
    pub offset: f32,
    pub dim_opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    Open,
    Closed,
}

/// Why the drawer itself last moved the open flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleReason {
    Flick,
    Position,
    Cancelled,
    /// Backdrop tap.
    Dismissed,
    /// Panel width or edge inset changed while open.
    LayoutChanged,
}
