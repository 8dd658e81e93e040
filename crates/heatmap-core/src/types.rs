// File: crates/heatmap-core/src/types.rs
// Summary: Shared figure constants (default size, dpi, margins).

/// Default figure width in pixels (10 in at 100 dpi).
pub const WIDTH: i32 = 1000;
/// Default figure height in pixels.
pub const HEIGHT: i32 = 1000;
/// Default resolution used to turn point sizes into pixels.
pub const DPI: f32 = 100.0;

/// Outer figure margins, in pixels, before text and legend space is reserved.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(24, 32, 24, 24)
    }
}
