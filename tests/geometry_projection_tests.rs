use approx::assert_abs_diff_eq;
use linechart_rs::ChartError;
use linechart_rs::core::{
    PlotRect, SampleSet, ValueRange, project_axis_frame, project_axis_ticks, project_dot_centers,
    project_fill_polygon, project_grid_lines, project_line_points,
};

fn plot() -> PlotRect {
    PlotRect::new(0.0, 0.0, 100.0, 100.0)
}

fn two_samples() -> SampleSet {
    SampleSet::from_pairs([("Jan", 10.0), ("Feb", 25.0)]).expect("finite values")
}

#[test]
fn minimum_sample_count_produces_exactly_two_vertices() {
    let samples = two_samples();
    let range = samples.value_range().expect("non-empty");

    let points = project_line_points(&samples, plot(), range).expect("projectable");

    assert_eq!(points.len(), 2);
    assert_abs_diff_eq!(points[0].x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[1].x, 100.0, epsilon = 1e-9);
    // Smallest value sits on the bottom edge, largest on the top edge.
    assert_abs_diff_eq!(points[0].y, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[1].y, 0.0, epsilon = 1e-9);
}

#[test]
fn higher_values_map_to_smaller_y() {
    let samples =
        SampleSet::from_pairs([("a", 0.0), ("b", 50.0), ("c", 100.0)]).expect("finite values");
    let range = samples.value_range().expect("non-empty");

    let points = project_line_points(&samples, plot(), range).expect("projectable");

    assert!(points[0].y > points[1].y);
    assert!(points[1].y > points[2].y);
    assert_abs_diff_eq!(points[1].y, 50.0, epsilon = 1e-9);
}

#[test]
fn single_sample_fails_with_insufficient_samples() {
    let samples = SampleSet::from_pairs([("only", 10.0)]).expect("finite values");
    let range = ValueRange::new(0.0, 1.0);

    let err = project_line_points(&samples, plot(), range).expect_err("one sample cannot render");
    match err {
        ChartError::InsufficientSamples { required, actual } => {
            assert_eq!(required, 2);
            assert_eq!(actual, 1);
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
}

#[test]
fn non_positive_plot_rect_fails_projection() {
    let samples = two_samples();
    let range = samples.value_range().expect("non-empty");
    let flat = PlotRect::new(0.0, 0.0, 100.0, 0.0);

    let err = project_line_points(&samples, flat, range).expect_err("zero height must fail");
    assert!(matches!(err, ChartError::InvalidPlotRect { .. }));
}

#[test]
fn fill_polygon_closes_against_the_baseline() {
    let samples = two_samples();
    let range = samples.value_range().expect("non-empty");

    let polygon = project_fill_polygon(&samples, plot(), range).expect("projectable");

    assert_eq!(polygon.len(), 4);
    // Closing vertices sit on the plot bottom under the last and first x.
    assert_abs_diff_eq!(polygon[2].x, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(polygon[2].y, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(polygon[3].x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(polygon[3].y, 100.0, epsilon = 1e-9);
}

#[test]
fn dot_centers_equal_line_vertices() {
    let samples =
        SampleSet::from_pairs([("a", 3.0), ("b", 8.0), ("c", 5.0)]).expect("finite values");
    let range = samples.value_range().expect("non-empty");

    let line = project_line_points(&samples, plot(), range).expect("projectable");
    let dots = project_dot_centers(&samples, plot(), range).expect("projectable");

    assert_eq!(line, dots);
}

#[test]
fn grid_lines_sit_at_fractional_heights_excluding_edges() {
    let segments = project_grid_lines(plot(), 4).expect("positive plot");

    assert_eq!(segments.len(), 4);
    let expected_ys = [80.0, 60.0, 40.0, 20.0];
    for (segment, expected_y) in segments.iter().zip(expected_ys) {
        assert_abs_diff_eq!(segment.y1, expected_y, epsilon = 1e-9);
        assert_abs_diff_eq!(segment.y2, expected_y, epsilon = 1e-9);
        assert_abs_diff_eq!(segment.x1, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(segment.x2, 100.0, epsilon = 1e-9);
    }
}

#[test]
fn grid_row_count_is_clamped_to_the_valid_range() {
    assert_eq!(project_grid_lines(plot(), 0).expect("clamped").len(), 2);
    assert_eq!(project_grid_lines(plot(), 100).expect("clamped").len(), 20);
}

#[test]
fn axis_frame_bounds_the_plot_rectangle() {
    let [y_axis, x_axis] = project_axis_frame(plot()).expect("positive plot");

    assert_eq!((y_axis.x1, y_axis.y1, y_axis.x2, y_axis.y2), (0.0, 0.0, 0.0, 100.0));
    assert_eq!((x_axis.x1, x_axis.y1, x_axis.x2, x_axis.y2), (0.0, 100.0, 100.0, 100.0));
}

#[test]
fn axis_ticks_extend_below_the_bottom_edge() {
    let ticks = project_axis_ticks(plot(), &[0.0, 50.0, 100.0], 6.0).expect("positive plot");

    assert_eq!(ticks.len(), 3);
    for tick in &ticks {
        assert_eq!(tick.y1, 100.0);
        assert_eq!(tick.y2, 106.0);
        assert_eq!(tick.x1, tick.x2);
    }
}
