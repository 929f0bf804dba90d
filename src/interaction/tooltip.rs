use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ProjectionContext, Series, pixel_x_to_index};

/// One series line of a tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipEntry {
    pub series_label: String,
    pub color: String,
    pub unit: String,
    /// Value rounded to one decimal place.
    pub value: Decimal,
}

impl TooltipEntry {
    /// `label: value unit`, omitting the unit when empty.
    #[must_use]
    pub fn text(&self) -> String {
        if self.unit.is_empty() {
            format!("{}: {}", self.series_label, self.value)
        } else {
            format!("{}: {} {}", self.series_label, self.value, self.unit)
        }
    }
}

/// Hover tooltip content for one category index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub index: usize,
    pub category: String,
    /// Container x of the hovered index.
    pub x: f64,
    /// Container y of the pointer.
    pub y: f64,
    pub entries: SmallVec<[TooltipEntry; 4]>,
}

/// Rounds half away from zero to one decimal and drops trailing zeros.
#[must_use]
pub fn round_tooltip_value(value: f64) -> Option<Decimal> {
    let value = Decimal::from_f64(value)?;
    Some(
        value
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
            .normalize(),
    )
}

/// Resolves tooltip content for a pointer at container `(x, y)`.
///
/// Returns `None` when the nearest index lies outside the label axis or the
/// visible domain, or when no series has a value there.
#[must_use]
pub fn resolve_tooltip(
    labels: &[String],
    series: &[Series],
    ctx: &ProjectionContext,
    x: f64,
    y: f64,
) -> Option<Tooltip> {
    let local_x = ctx.plot.local_x(x);
    let index = pixel_x_to_index(local_x, ctx.domain, ctx.plot.width)
        .ok()?
        .round();
    if index < 0.0 || index > (labels.len() as f64 - 1.0) || !ctx.domain.contains(index) {
        return None;
    }
    let index = index as usize;

    let entries: SmallVec<[TooltipEntry; 4]> = series
        .iter()
        .filter_map(|item| {
            let value = round_tooltip_value(item.value_at(index)?)?;
            Some(TooltipEntry {
                series_label: item.label.clone(),
                color: item.color.clone(),
                unit: item.unit.clone(),
                value,
            })
        })
        .collect();
    if entries.is_empty() {
        return None;
    }

    Some(Tooltip {
        index,
        category: labels[index].clone(),
        x: ctx.x_of(index as f64).ok()?,
        y,
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::round_tooltip_value;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_tooltip_value(71.25).expect("value").to_string(), "71.3");
        assert_eq!(round_tooltip_value(-0.25).expect("value").to_string(), "-0.3");
    }

    #[test]
    fn whole_numbers_have_no_decimals() {
        assert_eq!(round_tooltip_value(71.0).expect("value").to_string(), "71");
        assert_eq!(round_tooltip_value(19.96).expect("value").to_string(), "20");
    }

    #[test]
    fn non_finite_values_are_dropped() {
        assert!(round_tooltip_value(f64::NAN).is_none());
    }
}
