use serde::{Deserialize, Serialize};

/// Host view size in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Margins reserved around the plot rectangle, mainly for axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Default for Insets {
    fn default() -> Self {
        Self {
            top: 8.0,
            left: 16.0,
            bottom: 24.0,
            right: 16.0,
        }
    }
}

impl Insets {
    #[must_use]
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Inset sub-region of the viewport where data geometry is drawn.
///
/// Recomputed from the current viewport and insets on every layout pass.
/// Zero or negative area is a render-skip condition, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn from_viewport(viewport: Viewport, insets: Insets) -> Self {
        Self {
            x: insets.left,
            y: insets.top,
            width: f64::from(viewport.width) - insets.left - insets.right,
            height: f64::from(viewport.height) - insets.top - insets.bottom,
        }
    }

    #[must_use]
    pub fn has_positive_area(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.y
    }

    /// Pixel y of the bottom edge. Visual y grows downward, so this is the
    /// largest y inside the rectangle and serves as the fill baseline.
    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }
}

/// Vertex in pixel coordinates used by deterministic geometry output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
