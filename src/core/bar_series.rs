use serde::{Deserialize, Serialize};

use crate::core::{ProjectionContext, Series};
use crate::error::ChartResult;

/// Share of each category slot covered by its bar group.
pub const BAR_GROUP_FILL_RATIO: f64 = 0.8;

/// Deterministic bar rectangle in container pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub series_index: usize,
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Projects grouped bars for every visible index.
///
/// Each index gets a group `plot_width / (visible_count + 1) * 0.8` wide,
/// centred on the index and split equally between the series. A missing
/// value leaves its place in the group empty.
pub fn project_grouped_bars(
    series: &[Series],
    ctx: &ProjectionContext,
) -> ChartResult<Vec<BarGeometry>> {
    let Some(indices) = ctx.visible_indices() else {
        return Ok(Vec::new());
    };
    if series.is_empty() {
        return Ok(Vec::new());
    }

    let visible_count = indices.end() - indices.start() + 1;
    let group_width = ctx.plot.width / (visible_count as f64 + 1.0) * BAR_GROUP_FILL_RATIO;
    let bar_width = group_width / series.len() as f64;
    let baseline_y = ctx.baseline_y();

    let mut bars = Vec::new();
    for index in indices {
        let group_left = ctx.x_of(index as f64)? - group_width / 2.0;
        for (series_index, item) in series.iter().enumerate() {
            let Some(value) = item.value_at(index) else {
                continue;
            };
            let top = ctx.y_of(value)?.clamp(ctx.plot.top, baseline_y);
            bars.push(BarGeometry {
                series_index,
                index,
                x: group_left + series_index as f64 * bar_width,
                y: top,
                width: bar_width,
                height: baseline_y - top,
            });
        }
    }

    Ok(bars)
}
