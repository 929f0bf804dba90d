use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::ChartStyle;
use super::engine::ResolvedStyle;

pub(super) fn validate_chart_style(style: ChartStyle) -> ChartResult<ResolvedStyle> {
    for (name, value) in [
        ("font_size_px", style.font_size_px),
        ("grid_line_width", style.grid_line_width),
        ("series_line_width", style.series_line_width),
        ("min_x_label_spacing_px", style.min_x_label_spacing_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "chart style `{name}` must be finite and > 0"
            )));
        }
    }
    if !style.area_fill_opacity.is_finite() || !(0.0..=1.0).contains(&style.area_fill_opacity) {
        return Err(ChartError::InvalidData(
            "chart style `area_fill_opacity` must be in [0, 1]".to_owned(),
        ));
    }
    if style.y_tick_count < 2 {
        return Err(ChartError::InvalidData(
            "chart style `y_tick_count` must be >= 2".to_owned(),
        ));
    }

    let grid_color = Color::from_css(&style.grid_color)?;
    let axis_text_color = Color::from_css(&style.axis_text_color)?;
    Ok(ResolvedStyle {
        source: style,
        grid_color,
        axis_text_color,
    })
}
