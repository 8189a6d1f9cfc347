use linechart_rs::core::{Insets, SampleSet, Viewport};
use linechart_rs::render::{NullCompositor, NullRenderer, PassKind, Renderer};
use linechart_rs::{ChartConfig, LineChart, RenderOutcome};

fn three_samples() -> SampleSet {
    SampleSet::from_pairs([("Jan", 10.0), ("Feb", 25.0), ("Mar", 18.0)]).expect("finite values")
}

fn viewport() -> Viewport {
    Viewport::new(640, 480)
}

#[test]
fn full_cycle_populates_every_layer() {
    let mut chart = LineChart::new(NullCompositor::default());
    chart.set_samples(three_samples());

    let report = chart.render_chart(viewport());

    assert!(report.is_complete());
    for layer in chart.layers() {
        assert!(!layer.is_empty(), "layer {:?} should have content", layer.kind());
    }
}

#[test]
fn layers_follow_the_canonical_stacking_order() {
    let mut chart = LineChart::new(NullCompositor::default());
    chart.set_samples(three_samples());
    let _ = chart.render_chart(viewport());

    let kinds: Vec<PassKind> = chart.layers().map(|layer| layer.kind()).collect();
    assert_eq!(kinds, PassKind::canonical_order());

    // Data geometry lives in the top layers, never below the chrome.
    let dots = chart.layers().last().expect("five layers");
    assert_eq!(dots.kind(), PassKind::Dots);
    assert!(!dots.circles().is_empty());
}

#[test]
fn flattened_frame_validates_and_counts_match() {
    let mut chart = LineChart::new(NullCompositor::default());
    chart.set_samples(three_samples());
    let _ = chart.render_chart(viewport());

    let frame = chart.frame();
    let mut backend = NullRenderer::default();
    backend.render(&frame).expect("frame validates");

    assert_eq!(backend.last_polygon_count, 1);
    assert_eq!(backend.last_polyline_count, 1);
    assert_eq!(backend.last_circle_count, 3);
    assert_eq!(backend.last_text_count, 3);
    // Grid rows plus the axis frame and one tick per label.
    assert_eq!(
        backend.last_line_count,
        chart.config().grid_line_count() + 2 + 3
    );
}

#[test]
fn undersized_sample_set_is_a_silent_no_op() {
    let mut chart = LineChart::new(NullCompositor::default());
    chart.set_samples(SampleSet::from_pairs([("only", 1.0)]).expect("finite values"));

    let report = chart.render_chart(viewport());

    assert_eq!(report.outcome, RenderOutcome::SkippedPrecondition);
    assert!(chart.layers().all(|layer| layer.is_empty()));
    assert!(chart.compositor().requests.is_empty());
}

#[test]
fn zero_sized_viewport_is_a_silent_no_op() {
    let mut chart = LineChart::new(NullCompositor::default());
    chart.set_samples(three_samples());

    let report = chart.render_chart(Viewport::new(0, 480));

    assert_eq!(report.outcome, RenderOutcome::SkippedPrecondition);
}

#[test]
fn insets_consuming_the_viewport_skip_the_cycle() {
    let mut config = ChartConfig::default();
    config.plot_insets = Insets::new(300.0, 0.0, 300.0, 0.0);
    let mut chart = LineChart::with_config(NullCompositor::default(), config);
    chart.set_samples(three_samples());

    let report = chart.render_chart(viewport());

    assert_eq!(report.outcome, RenderOutcome::SkippedPrecondition);
}

#[test]
fn skipped_cycles_keep_the_last_good_layers() {
    let mut chart = LineChart::new(NullCompositor::default());
    chart.set_samples(three_samples());
    let _ = chart.render_chart(viewport());
    let grid_lines = chart.layers().next().expect("grid layer").lines().len();
    assert!(grid_lines > 0);

    chart.set_samples(SampleSet::from_pairs([("only", 1.0)]).expect("finite values"));
    let report = chart.render_chart(viewport());

    assert_eq!(report.outcome, RenderOutcome::SkippedPrecondition);
    assert_eq!(
        chart.layers().next().expect("grid layer").lines().len(),
        grid_lines
    );
}

#[test]
fn degenerate_value_range_aborts_the_cycle_and_keeps_state() {
    let mut chart = LineChart::new(NullCompositor::default());
    chart.set_samples(three_samples());
    let _ = chart.render_chart(viewport());
    let requests_before = chart.compositor().requests.len();

    chart.set_samples(
        SampleSet::from_pairs([("a", 5.0), ("b", 5.0), ("c", 5.0)]).expect("finite values"),
    );
    let report = chart.render_chart(viewport());

    assert_eq!(report.outcome, RenderOutcome::SkippedDegenerateRange);
    assert!(matches!(
        report.cycle_error,
        Some(linechart_rs::ChartError::DegenerateValueRange { value }) if value == 5.0
    ));
    assert!(report.pass_failures.is_empty());
    assert!(chart.layers().all(|layer| !layer.is_empty()));
    assert_eq!(chart.compositor().requests.len(), requests_before);
}

#[test]
fn every_render_cycle_restarts_the_draw_in_animation() {
    let mut config = ChartConfig::default();
    assert!(config.set_animation_duration_secs(1.25));
    let mut chart = LineChart::with_config(NullCompositor::default(), config);
    chart.set_samples(three_samples());

    let _ = chart.render_chart(viewport());
    let _ = chart.render_chart(viewport());

    let requests = &chart.compositor().requests;
    assert_eq!(requests.len(), 2);
    for (target, animation) in requests {
        assert_eq!(*target, PassKind::LineFill);
        assert_eq!(animation.duration_secs, 1.25);
    }
}

#[test]
fn feature_toggles_empty_their_layers() {
    let mut config = ChartConfig::default();
    config.show_grid = false;
    config.show_dots = false;
    let mut chart = LineChart::with_config(NullCompositor::default(), config);
    chart.set_samples(three_samples());

    let report = chart.render_chart(viewport());
    assert!(report.is_complete());

    for layer in chart.layers() {
        match layer.kind() {
            PassKind::Grid | PassKind::Dots => assert!(layer.is_empty()),
            _ => assert!(!layer.is_empty()),
        }
    }
}

#[test]
fn clear_all_then_render_matches_a_fresh_chart() {
    let mut fresh = LineChart::new(NullCompositor::default());
    fresh.set_samples(three_samples());
    let _ = fresh.render_chart(viewport());
    let expected = fresh.snapshot_json().expect("snapshot");

    let mut recycled = LineChart::new(NullCompositor::default());
    recycled.set_samples(three_samples());
    let _ = recycled.render_chart(viewport());
    recycled.clear_all();
    assert!(recycled.layers().all(|layer| layer.is_empty()));
    let _ = recycled.render_chart(viewport());

    assert_eq!(recycled.snapshot_json().expect("snapshot"), expected);
}

#[test]
fn appending_samples_feeds_the_next_cycle() {
    let mut chart = LineChart::new(NullCompositor::default());
    chart.set_samples(three_samples());
    chart.append_sample(
        linechart_rs::core::Sample::new("Apr", 31.0).expect("finite value"),
    );

    let report = chart.render_chart(viewport());

    assert!(report.is_complete());
    let dots = chart.layers().last().expect("dots layer");
    assert_eq!(dots.circles().len(), 4);
}
