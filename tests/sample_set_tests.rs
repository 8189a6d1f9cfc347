use linechart_rs::ChartError;
use linechart_rs::core::{Sample, SampleSet};

#[test]
fn finite_values_construct() {
    for value in [0.0, -17.5, 1e12, f64::MIN_POSITIVE, f64::MAX] {
        assert!(Sample::new("s", value).is_ok(), "value {value} should be accepted");
    }
}

#[test]
fn non_finite_values_fail_construction() {
    for value in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        let err = Sample::new("broken", value).expect_err("non-finite value must be rejected");
        match err {
            ChartError::NonFiniteValue { label } => assert_eq!(label, "broken"),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }
}

#[test]
fn from_pairs_propagates_the_first_invalid_value() {
    let result = SampleSet::from_pairs([("Jan", 10.0), ("Feb", f64::NAN), ("Mar", 3.0)]);
    assert!(result.is_err());
}

#[test]
fn labels_have_no_uniqueness_constraint() {
    let set = SampleSet::from_pairs([("Q1", 1.0), ("Q1", 2.0), ("", 3.0)]).expect("finite values");
    assert_eq!(set.len(), 3);
    assert_eq!(set.get(0).expect("first").label(), "Q1");
    assert_eq!(set.get(2).expect("third").label(), "");
}

#[test]
fn value_range_tracks_minimum_and_maximum() {
    let set = SampleSet::from_pairs([("a", 4.0), ("b", -2.5), ("c", 9.0), ("d", 0.0)])
        .expect("finite values");

    let range = set.value_range().expect("non-empty set");
    assert_eq!(range.min, -2.5);
    assert_eq!(range.max, 9.0);
    assert_eq!(range.span(), 11.5);
    assert!(!range.is_degenerate());
}

#[test]
fn empty_set_has_no_value_range() {
    assert!(SampleSet::new().value_range().is_none());
}

#[test]
fn uniform_values_yield_a_degenerate_range() {
    let set = SampleSet::from_pairs([("a", 5.0), ("b", 5.0), ("c", 5.0)]).expect("finite values");
    let range = set.value_range().expect("non-empty set");
    assert!(range.is_degenerate());
}

#[test]
fn render_minimum_is_two_samples() {
    let mut set = SampleSet::new();
    assert!(!set.meets_render_minimum());

    set.push(Sample::new("one", 1.0).expect("finite"));
    assert!(!set.meets_render_minimum());

    set.push(Sample::new("two", 2.0).expect("finite"));
    assert!(set.meets_render_minimum());
}
