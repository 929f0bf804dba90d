use std::ops::RangeInclusive;

use crate::core::{ViewDomain, YRange};

/// Whole-number value ticks covering `range`, at most `max_ticks` of them.
///
/// The step is the smallest integer that keeps the tick count in budget, so
/// grid lines always land on whole numbers.
pub(super) fn value_axis_ticks(range: YRange, max_ticks: usize) -> Vec<f64> {
    let max_ticks = max_ticks.max(2);
    let span = range.span();
    if !span.is_finite() || span <= 0.0 {
        return Vec::new();
    }

    let step = (span / (max_ticks - 1) as f64).ceil().max(1.0);
    // `+ 0.0` turns a `-0.0` first tick into `0.0` so it never prints as "-0".
    let first = (range.min() / step).ceil() * step + 0.0;
    let mut ticks = Vec::with_capacity(max_ticks);
    let mut value = first;
    while value <= range.max() && ticks.len() < max_ticks {
        ticks.push(value);
        value += step;
    }
    ticks
}

/// Category indices to label, thinned to keep labels `min_spacing_px` apart.
///
/// Labels are kept on a stride anchored at index 0 so they do not jump while
/// panning.
pub(super) fn category_axis_indices(
    visible: RangeInclusive<usize>,
    domain: ViewDomain,
    plot_width: f64,
    min_spacing_px: f64,
) -> Vec<usize> {
    let px_per_index = plot_width / domain.width();
    if !px_per_index.is_finite() || px_per_index <= 0.0 {
        return Vec::new();
    }
    let stride = ((min_spacing_px / px_per_index).ceil() as usize).max(1);
    visible.filter(|index| index % stride == 0).collect()
}
