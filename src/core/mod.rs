pub mod geometry;
pub mod labels;
pub mod sample;
pub mod scale;
pub mod types;

pub use geometry::{
    LineSegment, MAX_GRID_LINES, MIN_GRID_LINES, project_axis_frame, project_axis_ticks,
    project_dot_centers, project_fill_polygon, project_grid_lines, project_line_points,
};
pub use labels::{LabelIndices, MIN_LABEL_SPACING_PX, select_label_indices};
pub use sample::{Sample, SampleSet, ValueRange};
pub use scale::{LinearScale, index_to_position};
pub use types::{Insets, PlotPoint, PlotRect, Viewport};
