//! Overlap-avoiding x-axis label selection.

use smallvec::SmallVec;

/// Minimum pixel distance between the anchors of two shown labels.
pub const MIN_LABEL_SPACING_PX: f64 = 40.0;

/// Selected sample indices; never spills for the supported label-count range.
pub type LabelIndices = SmallVec<[usize; 20]>;

/// Chooses which sample indices receive an x-axis label.
///
/// Picks the smallest stride `k >= 1` keeping at most `max_labels` labels
/// with consecutive anchors at least `min_spacing_px` apart, then selects
/// `0, k, 2k, ..` and force-includes the last index even when that breaks
/// exact stride spacing. Deterministic for a given
/// `(sample_count, available_width, max_labels)` triple.
#[must_use]
pub fn select_label_indices(
    sample_count: usize,
    available_width: f64,
    max_labels: usize,
    min_spacing_px: f64,
) -> LabelIndices {
    let mut selected = LabelIndices::new();
    if sample_count == 0 {
        return selected;
    }
    if sample_count == 1 {
        selected.push(0);
        return selected;
    }

    let last = sample_count - 1;
    // The first/last force-include rule wins over `max_labels == 1`.
    let count_stride = if max_labels >= 2 {
        last.div_ceil(max_labels - 1)
    } else {
        last
    };
    let spacing_stride =
        if available_width.is_finite() && available_width > 0.0 && min_spacing_px > 0.0 {
            let index_spacing = available_width / last as f64;
            (min_spacing_px / index_spacing).ceil() as usize
        } else {
            last
        };
    let stride = count_stride.max(spacing_stride).max(1);

    let mut index = 0;
    while index < last {
        selected.push(index);
        index += stride;
    }
    selected.push(last);
    selected
}
