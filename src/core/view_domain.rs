use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Visible sub-range of the categorical index axis, in fractional index units.
///
/// Construction guarantees `min < max` with both ends finite, so mapping
/// through a `ViewDomain` never divides by a zero width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ViewDomainBounds")]
pub struct ViewDomain {
    min: f64,
    max: f64,
}

/// Unchecked wire form; deserialized domains go through [`ViewDomain::new`].
#[derive(Deserialize)]
struct ViewDomainBounds {
    min: f64,
    max: f64,
}

impl TryFrom<ViewDomainBounds> for ViewDomain {
    type Error = ChartError;

    fn try_from(bounds: ViewDomainBounds) -> ChartResult<Self> {
        Self::new(bounds.min, bounds.max)
    }
}

impl ViewDomain {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ChartError::InvalidData(
                "view domain must be finite with min < max".to_owned(),
            ));
        }
        Ok(Self { min, max })
    }

    /// Full domain for a chart with `label_count` categories.
    ///
    /// Charts with zero or one label use `[0, 1]`.
    #[must_use]
    pub fn full(label_count: usize) -> Self {
        let max = if label_count <= 1 {
            1.0
        } else {
            (label_count - 1) as f64
        };
        Self { min: 0.0, max }
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
    pub fn width(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(self, index: f64) -> bool {
        index >= self.min && index <= self.max
    }

    /// Translates the window by `delta` and shifts it back inside `bounds`
    /// without changing its width.
    ///
    /// When the window is wider than `bounds` it collapses to `bounds`.
    #[must_use]
    pub fn translated_within(self, delta: f64, bounds: Self) -> Self {
        Self::clamp_window(self.min + delta, self.width(), bounds)
    }

    /// Places a window of `width` starting at `start`, shifted inside `bounds`.
    #[must_use]
    pub(crate) fn clamp_window(start: f64, width: f64, bounds: Self) -> Self {
        if width >= bounds.width() {
            return bounds;
        }
        if start + width >= bounds.max {
            return Self {
                min: bounds.max - width,
                max: bounds.max,
            };
        }
        let start = start.max(bounds.min);
        Self {
            min: start,
            max: start + width,
        }
    }

    /// Integer indices fully inside the window: `[ceil(min), floor(max)]`,
    /// limited to `label_count`.
    ///
    /// Returns `None` when no label index falls inside the window.
    #[must_use]
    pub fn visible_indices(self, label_count: usize) -> Option<RangeInclusive<usize>> {
        index_range(self.min.ceil(), self.max.floor(), label_count)
    }

    /// Indices touched by the window including the partially visible
    /// neighbours on each edge: `[floor(min), ceil(max)]`.
    ///
    /// Geometry built over this range extends to the plot edges.
    #[must_use]
    pub fn render_indices(self, label_count: usize) -> Option<RangeInclusive<usize>> {
        index_range(self.min.floor(), self.max.ceil(), label_count)
    }
}

fn index_range(start: f64, end: f64, label_count: usize) -> Option<RangeInclusive<usize>> {
    if label_count == 0 {
        return None;
    }
    let last = (label_count - 1) as f64;
    let start = start.max(0.0);
    let end = end.min(last);
    if start > end {
        return None;
    }
    Some(start as usize..=end as usize)
}
