use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::geometry::{MAX_GRID_LINES, MIN_GRID_LINES};
use crate::core::types::Insets;
use crate::render::Color;

pub const LINE_WIDTH_MIN: f64 = 0.1;
pub const LINE_WIDTH_MAX: f64 = 20.0;
pub const DOT_RADIUS_MIN: f64 = 0.1;
pub const DOT_RADIUS_MAX: f64 = 20.0;
pub const MAX_LABEL_COUNT_MIN: usize = 1;
pub const MAX_LABEL_COUNT_MAX: usize = 20;
pub const LABEL_FONT_SIZE_MIN: f64 = 8.0;
pub const LABEL_FONT_SIZE_MAX: f64 = 24.0;
pub const ANIMATION_DURATION_MIN: f64 = 0.0;
pub const ANIMATION_DURATION_MAX: f64 = 5.0;

/// Display settings for the chart, each numeric setting range-validated.
///
/// Assignment goes through setters with reject-and-retain semantics: an
/// out-of-range (or non-finite) value is rejected, the previous value kept,
/// and a `tracing` diagnostic emitted. Values are never clamped to the
/// boundary. Colors, insets and visibility toggles are unconstrained and
/// exposed as plain fields.
///
/// The type is serializable so hosts can persist chart setup; deserialized
/// configs should pass through [`ChartConfig::sanitized`], which re-validates
/// every constrained field and falls back to the default for violations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    line_width: f64,
    dot_radius: f64,
    grid_line_count: usize,
    max_label_count: usize,
    label_font_size: f64,
    animation_duration_secs: f64,
    pub plot_insets: Insets,
    pub line_color: Color,
    pub fill_top_color: Color,
    pub fill_bottom_color: Color,
    pub grid_color: Color,
    pub axis_color: Color,
    pub label_color: Color,
    pub dot_color: Color,
    pub show_grid: bool,
    pub show_fill: bool,
    pub show_dots: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        let line_color = Color::rgb(0.16, 0.38, 1.0);
        Self {
            line_width: 2.0,
            dot_radius: 3.0,
            grid_line_count: 4,
            max_label_count: 6,
            label_font_size: 11.0,
            animation_duration_secs: 0.8,
            plot_insets: Insets::default(),
            line_color,
            fill_top_color: line_color.with_alpha(0.35),
            fill_bottom_color: line_color.with_alpha(0.02),
            grid_color: Color::rgb(0.89, 0.92, 0.95),
            axis_color: Color::rgb(0.82, 0.84, 0.88),
            label_color: Color::rgb(0.10, 0.12, 0.16),
            dot_color: line_color,
            show_grid: true,
            show_fill: true,
            show_dots: true,
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    #[must_use]
    pub fn dot_radius(&self) -> f64 {
        self.dot_radius
    }

    #[must_use]
    pub fn grid_line_count(&self) -> usize {
        self.grid_line_count
    }

    #[must_use]
    pub fn max_label_count(&self) -> usize {
        self.max_label_count
    }

    #[must_use]
    pub fn label_font_size(&self) -> f64 {
        self.label_font_size
    }

    #[must_use]
    pub fn animation_duration_secs(&self) -> f64 {
        self.animation_duration_secs
    }

    #[must_use = "a rejected value keeps the previous setting"]
    pub fn set_line_width(&mut self, width: f64) -> bool {
        accept_f64(
            "line_width",
            width,
            LINE_WIDTH_MIN,
            LINE_WIDTH_MAX,
            &mut self.line_width,
        )
    }

    #[must_use = "a rejected value keeps the previous setting"]
    pub fn set_dot_radius(&mut self, radius: f64) -> bool {
        accept_f64(
            "dot_radius",
            radius,
            DOT_RADIUS_MIN,
            DOT_RADIUS_MAX,
            &mut self.dot_radius,
        )
    }

    #[must_use = "a rejected value keeps the previous setting"]
    pub fn set_grid_line_count(&mut self, count: usize) -> bool {
        accept_usize(
            "grid_line_count",
            count,
            MIN_GRID_LINES,
            MAX_GRID_LINES,
            &mut self.grid_line_count,
        )
    }

    #[must_use = "a rejected value keeps the previous setting"]
    pub fn set_max_label_count(&mut self, count: usize) -> bool {
        accept_usize(
            "max_label_count",
            count,
            MAX_LABEL_COUNT_MIN,
            MAX_LABEL_COUNT_MAX,
            &mut self.max_label_count,
        )
    }

    #[must_use = "a rejected value keeps the previous setting"]
    pub fn set_label_font_size(&mut self, size: f64) -> bool {
        accept_f64(
            "label_font_size",
            size,
            LABEL_FONT_SIZE_MIN,
            LABEL_FONT_SIZE_MAX,
            &mut self.label_font_size,
        )
    }

    #[must_use = "a rejected value keeps the previous setting"]
    pub fn set_animation_duration_secs(&mut self, duration: f64) -> bool {
        accept_f64(
            "animation_duration_secs",
            duration,
            ANIMATION_DURATION_MIN,
            ANIMATION_DURATION_MAX,
            &mut self.animation_duration_secs,
        )
    }

    /// Re-validates every constrained field through its setter, keeping the
    /// default for violations. Unconstrained fields pass through unchanged.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let mut clean = Self {
            plot_insets: self.plot_insets,
            line_color: self.line_color,
            fill_top_color: self.fill_top_color,
            fill_bottom_color: self.fill_bottom_color,
            grid_color: self.grid_color,
            axis_color: self.axis_color,
            label_color: self.label_color,
            dot_color: self.dot_color,
            show_grid: self.show_grid,
            show_fill: self.show_fill,
            show_dots: self.show_dots,
            ..Self::default()
        };
        let _ = clean.set_line_width(self.line_width);
        let _ = clean.set_dot_radius(self.dot_radius);
        let _ = clean.set_grid_line_count(self.grid_line_count);
        let _ = clean.set_max_label_count(self.max_label_count);
        let _ = clean.set_label_font_size(self.label_font_size);
        let _ = clean.set_animation_duration_secs(self.animation_duration_secs);
        clean
    }
}

fn accept_f64(name: &str, value: f64, min: f64, max: f64, slot: &mut f64) -> bool {
    if !value.is_finite() || value < min || value > max {
        warn!(
            setting = name,
            rejected = value,
            retained = *slot,
            "config value outside valid range; keeping previous value"
        );
        return false;
    }
    *slot = value;
    true
}

fn accept_usize(name: &str, value: usize, min: usize, max: usize, slot: &mut usize) -> bool {
    if value < min || value > max {
        warn!(
            setting = name,
            rejected = value,
            retained = *slot,
            "config value outside valid range; keeping previous value"
        );
        return false;
    }
    *slot = value;
    true
}
