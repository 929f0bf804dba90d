use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{Series, ViewDomain};
use crate::error::{ChartError, ChartResult};

/// Value-axis bounds used by the vertical mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "YRangeBounds")]
pub struct YRange {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct YRangeBounds {
    min: f64,
    max: f64,
}

impl TryFrom<YRangeBounds> for YRange {
    type Error = ChartError;

    fn try_from(bounds: YRangeBounds) -> ChartResult<Self> {
        Self::new(bounds.min, bounds.max)
    }
}

impl YRange {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ChartError::InvalidData(
                "y range must be finite with min < max".to_owned(),
            ));
        }
        Ok(Self { min, max })
    }

    /// Range used when nothing is visible.
    #[must_use]
    pub const fn unit() -> Self {
        Self { min: 0.0, max: 1.0 }
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

/// Tuning for auto-derived value ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YRangeTuning {
    /// Fraction of the observed span added on each padded end.
    pub padding_ratio: f64,
    /// Absolute margin used instead of `padding_ratio` when all visible
    /// values are equal.
    pub zero_span_margin: f64,
}

impl Default for YRangeTuning {
    fn default() -> Self {
        Self {
            padding_ratio: 0.1,
            zero_span_margin: 1.0,
        }
    }
}

impl YRangeTuning {
    pub(crate) fn validate(self) -> ChartResult<Self> {
        if !self.padding_ratio.is_finite() || self.padding_ratio < 0.0 {
            return Err(ChartError::InvalidData(
                "y range padding ratio must be finite and >= 0".to_owned(),
            ));
        }
        if !self.zero_span_margin.is_finite() || self.zero_span_margin <= 0.0 {
            return Err(ChartError::InvalidData(
                "y range zero-span margin must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// How the value range of a chart is obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum YRangePolicy {
    /// Caller-supplied bounds, used unmodified.
    Fixed(YRange),
    /// Derived from the visible samples of every series.
    Auto { non_negative: bool },
    /// Derived from the visible per-index stack totals; lower bound is 0.
    Stacked,
}

/// Resolves the value range for the current view.
#[must_use]
pub fn resolve_y_range(
    series: &[Series],
    label_count: usize,
    domain: ViewDomain,
    policy: YRangePolicy,
    tuning: YRangeTuning,
) -> YRange {
    match policy {
        YRangePolicy::Fixed(range) => range,
        YRangePolicy::Auto { non_negative } => {
            derive_auto_y_range(series, label_count, domain, non_negative, tuning)
        }
        YRangePolicy::Stacked => derive_stacked_y_range(series, label_count, domain, tuning),
    }
}

/// Derives bounds from every defined value inside the visible window.
///
/// With `non_negative` set and no negative sample in view, the lower bound is
/// pinned at zero and never padded below it.
#[must_use]
pub fn derive_auto_y_range(
    series: &[Series],
    label_count: usize,
    domain: ViewDomain,
    non_negative: bool,
    tuning: YRangeTuning,
) -> YRange {
    let Some(indices) = domain.visible_indices(label_count) else {
        return YRange::unit();
    };

    let visible = || {
        indices
            .clone()
            .flat_map(move |index| series.iter().filter_map(move |item| item.value_at(index)))
            .map(OrderedFloat)
    };
    let (Some(observed_min), Some(observed_max)) = (visible().min(), visible().max()) else {
        return YRange::unit();
    };

    let floored = non_negative && observed_min.0 >= 0.0;
    let raw_min = if floored { 0.0 } else { observed_min.0 };
    finalize_range(raw_min, observed_max.0, floored, tuning)
}

/// Derives bounds from per-index stack totals inside the visible window.
///
/// Missing samples contribute zero to a total.
#[must_use]
pub fn derive_stacked_y_range(
    series: &[Series],
    label_count: usize,
    domain: ViewDomain,
    tuning: YRangeTuning,
) -> YRange {
    let Some(indices) = domain.visible_indices(label_count) else {
        return YRange::unit();
    };

    let max_total = indices
        .map(|index| OrderedFloat(stack_total_at(series, index)))
        .max()
        .map_or(0.0, |total| total.0);

    finalize_range(0.0, max_total.max(0.0), true, tuning)
}

/// Sum of every defined value at `index`.
#[must_use]
pub fn stack_total_at(series: &[Series], index: usize) -> f64 {
    series.iter().filter_map(|item| item.value_at(index)).sum()
}

fn finalize_range(raw_min: f64, raw_max: f64, min_floored: bool, tuning: YRangeTuning) -> YRange {
    let span = raw_max - raw_min;
    let pad = if span == 0.0 {
        tuning.zero_span_margin
    } else if span.is_finite() {
        span * tuning.padding_ratio
    } else {
        // Span overflowed: scale each end first.
        raw_max * tuning.padding_ratio - raw_min * tuning.padding_ratio
    };

    let lower = if min_floored { raw_min } else { raw_min - pad };
    let lower = lower.floor().max(f64::MIN);
    let mut upper = (raw_max + pad).ceil().min(f64::MAX);
    if upper <= lower {
        upper = lower + 1.0;
    }

    YRange::new(lower, upper).unwrap_or(YRange::unit())
}
