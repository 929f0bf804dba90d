//! Pure mappings between data space and plot-local pixel space.
//!
//! All functions work in plot-local coordinates: `x = 0` is the left edge of
//! the plot and `y = 0` its top edge. Callers add the plot offset.

use crate::core::{LinearScale, ViewDomain, YRange};
use crate::error::ChartResult;

/// Maps a (fractional) category index onto `[0, plot_width]`.
pub fn index_to_pixel_x(index: f64, domain: ViewDomain, plot_width: f64) -> ChartResult<f64> {
    LinearScale::new(domain.min(), domain.max())?.domain_to_pixel(index, plot_width)
}

/// Inverse of [`index_to_pixel_x`].
///
/// The result is not rounded or range-checked.
pub fn pixel_x_to_index(pixel_x: f64, domain: ViewDomain, plot_width: f64) -> ChartResult<f64> {
    LinearScale::new(domain.min(), domain.max())?.pixel_to_domain(pixel_x, plot_width)
}

/// Maps a value onto `[plot_height, 0]`; larger values land higher.
pub fn value_to_pixel_y(value: f64, y_range: YRange, plot_height: f64) -> ChartResult<f64> {
    let from_bottom =
        LinearScale::new(y_range.min(), y_range.max())?.domain_to_pixel(value, plot_height)?;
    Ok(plot_height - from_bottom)
}

/// Inverse of [`value_to_pixel_y`].
pub fn pixel_y_to_value(pixel_y: f64, y_range: YRange, plot_height: f64) -> ChartResult<f64> {
    LinearScale::new(y_range.min(), y_range.max())?.pixel_to_domain(plot_height - pixel_y, plot_height)
}
