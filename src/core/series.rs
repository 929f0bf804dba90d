use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Render style selected for every series of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    Area,
}

impl ChartKind {
    /// Bar and area charts grow from a zero baseline.
    #[must_use]
    pub const fn is_non_negative(self) -> bool {
        matches!(self, Self::Bar | Self::Area)
    }
}

/// One named value sequence aligned index-for-index with the chart labels.
///
/// `None` marks a gap (missing sample).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub values: Vec<Option<f64>>,
    pub color: String,
    #[serde(default)]
    pub unit: String,
}

impl Series {
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        values: Vec<Option<f64>>,
        color: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            values,
            color: color.into(),
            unit: unit.into(),
        }
    }

    /// Value at `index`, treating non-finite samples as gaps.
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.values
            .get(index)
            .copied()
            .flatten()
            .filter(|value| value.is_finite())
    }
}

/// Checks that every series carries exactly one value per label.
pub fn validate_series_alignment(labels: &[String], series: &[Series]) -> ChartResult<()> {
    for item in series {
        if item.values.len() != labels.len() {
            return Err(ChartError::SeriesLengthMismatch {
                series: item.label.clone(),
                expected: labels.len(),
                actual: item.values.len(),
            });
        }
    }
    Ok(())
}
