//! Projection of samples into pixel-space geometry.
//!
//! Every builder shares [`LinearScale`] and the index mapping so all visual
//! layers stay geometrically consistent on each re-layout. The functions are
//! deterministic and side-effect free so rendering and tests consume the
//! exact same output.

use serde::{Deserialize, Serialize};

use crate::core::sample::{SampleSet, ValueRange};
use crate::core::scale::{LinearScale, index_to_position};
use crate::core::types::{PlotPoint, PlotRect};
use crate::error::{ChartError, ChartResult};

pub const MIN_GRID_LINES: usize = 2;
pub const MAX_GRID_LINES: usize = 20;

/// Projected segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

fn ensure_projectable(samples: &SampleSet, plot: PlotRect) -> ChartResult<()> {
    if !samples.meets_render_minimum() {
        return Err(ChartError::InsufficientSamples {
            required: SampleSet::MIN_RENDER_SAMPLES,
            actual: samples.len(),
        });
    }
    ensure_positive_plot(plot)
}

fn ensure_positive_plot(plot: PlotRect) -> ChartResult<()> {
    if !plot.has_positive_area() {
        return Err(ChartError::InvalidPlotRect {
            width: plot.width,
            height: plot.height,
        });
    }
    Ok(())
}

/// Projects samples into line-path vertices, one per sample.
///
/// X comes from the index mapping, y from a value scale whose range runs
/// bottom-to-top: visual y grows downward while chart value grows upward.
pub fn project_line_points(
    samples: &SampleSet,
    plot: PlotRect,
    range: ValueRange,
) -> ChartResult<Vec<PlotPoint>> {
    ensure_projectable(samples, plot)?;

    let value_scale = LinearScale::new(range.min, range.max, plot.bottom(), plot.top())?;
    let count = samples.len();
    let points = samples
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            PlotPoint::new(
                index_to_position(index, count, plot.left(), plot.right()),
                value_scale.map(sample.value()),
            )
        })
        .collect();
    Ok(points)
}

/// Projects samples into a closed fill region against the plot-bottom
/// baseline: the line vertices plus closing vertices under the last and
/// first x positions. Consumers treat the vertex list as a closed ring.
pub fn project_fill_polygon(
    samples: &SampleSet,
    plot: PlotRect,
    range: ValueRange,
) -> ChartResult<Vec<PlotPoint>> {
    let line_points = project_line_points(samples, plot, range)?;

    let baseline_y = plot.bottom();
    let first_x = line_points[0].x;
    let last_x = line_points[line_points.len() - 1].x;

    let mut polygon = Vec::with_capacity(line_points.len() + 2);
    polygon.extend(line_points);
    polygon.push(PlotPoint::new(last_x, baseline_y));
    polygon.push(PlotPoint::new(first_x, baseline_y));
    Ok(polygon)
}

/// Dot centers are the line-path vertices; the dots pass renders each as a
/// filled circle of configured radius.
pub fn project_dot_centers(
    samples: &SampleSet,
    plot: PlotRect,
    range: ValueRange,
) -> ChartResult<Vec<PlotPoint>> {
    project_line_points(samples, plot, range)
}

/// Evenly spaced horizontal gridlines across the plot width.
///
/// `rows` is clamped to `[MIN_GRID_LINES, MAX_GRID_LINES]`; the i-th line
/// sits at fractional height `i/(rows+1)` from the bottom, leaving the exact
/// top and bottom edges to the axes.
pub fn project_grid_lines(plot: PlotRect, rows: usize) -> ChartResult<Vec<LineSegment>> {
    ensure_positive_plot(plot)?;

    let rows = rows.clamp(MIN_GRID_LINES, MAX_GRID_LINES);
    let segments = (1..=rows)
        .map(|row| {
            let fraction = row as f64 / (rows + 1) as f64;
            let y = plot.bottom() - fraction * plot.height;
            LineSegment {
                x1: plot.left(),
                y1: y,
                x2: plot.right(),
                y2: y,
            }
        })
        .collect();
    Ok(segments)
}

/// The two axis lines bounding the plot rectangle: the vertical y-axis on
/// the left edge and the horizontal x-axis on the bottom edge.
pub fn project_axis_frame(plot: PlotRect) -> ChartResult<[LineSegment; 2]> {
    ensure_positive_plot(plot)?;

    let y_axis = LineSegment {
        x1: plot.left(),
        y1: plot.top(),
        x2: plot.left(),
        y2: plot.bottom(),
    };
    let x_axis = LineSegment {
        x1: plot.left(),
        y1: plot.bottom(),
        x2: plot.right(),
        y2: plot.bottom(),
    };
    Ok([y_axis, x_axis])
}

/// Short vertical tick marks extending below the bottom edge at the given
/// label x positions.
pub fn project_axis_ticks(
    plot: PlotRect,
    label_xs: &[f64],
    tick_length: f64,
) -> ChartResult<Vec<LineSegment>> {
    ensure_positive_plot(plot)?;

    let bottom = plot.bottom();
    let ticks = label_xs
        .iter()
        .map(|&x| LineSegment {
            x1: x,
            y1: bottom,
            x2: x,
            y2: bottom + tick_length,
        })
        .collect();
    Ok(ticks)
}
