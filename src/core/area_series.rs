use serde::{Deserialize, Serialize};

use crate::core::{PlotPoint, ProjectionContext, Series, project_line_paths};
use crate::error::ChartResult;

/// Deterministic geometry for one gap-free run of an area series.
///
/// `line_points` follows the mapped samples (the stroke).
/// `fill_polygon` is an explicitly closed polygon against the plot baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaSegment {
    pub line_points: Vec<PlotPoint>,
    pub fill_polygon: Vec<PlotPoint>,
}

/// Projects a non-stacked area series into one segment per gap-free run.
pub fn project_area_segments(
    series: &Series,
    ctx: &ProjectionContext,
) -> ChartResult<Vec<AreaSegment>> {
    let baseline_y = ctx.baseline_y();
    let segments = project_line_paths(series, ctx)?
        .into_iter()
        .map(|path| {
            let first_x = path.points[0].x;
            let last_x = path.points[path.points.len() - 1].x;

            let mut fill_polygon = Vec::with_capacity(path.points.len() + 3);
            fill_polygon.push(PlotPoint::new(first_x, baseline_y));
            fill_polygon.extend(path.points.iter().copied());
            fill_polygon.push(PlotPoint::new(last_x, baseline_y));
            // Repeat the first vertex so consumers never need implicit closure.
            fill_polygon.push(PlotPoint::new(first_x, baseline_y));

            AreaSegment {
                line_points: path.points,
                fill_polygon,
            }
        })
        .collect();
    Ok(segments)
}

/// One closed band of a stacked series between two cumulative curves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedBand {
    pub first_index: usize,
    pub last_index: usize,
    /// Cumulative total including this series, left to right.
    pub upper: Vec<PlotPoint>,
    /// Cumulative total before this series, left to right.
    pub lower: Vec<PlotPoint>,
    /// `upper` forward, `lower` reversed, then the first vertex again.
    pub fill_polygon: Vec<PlotPoint>,
}

/// All bands of one series in a stacked area chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedAreaLayer {
    pub series_index: usize,
    pub bands: Vec<StackedBand>,
}

/// Projects stacked area bands in caller order.
///
/// A running per-index offset accumulates every defined value. A missing
/// value ends the current band of that series; it contributes nothing to the
/// offset seen by later series. Layers come back bottom-first.
pub fn project_stacked_area_layers(
    series: &[Series],
    ctx: &ProjectionContext,
) -> ChartResult<Vec<StackedAreaLayer>> {
    let Some(indices) = ctx.render_indices() else {
        return Ok(Vec::new());
    };

    let first = *indices.start();
    let mut cumulative = vec![0.0; indices.end() - first + 1];
    let mut layers = Vec::with_capacity(series.len());

    for (series_index, item) in series.iter().enumerate() {
        let mut bands = Vec::new();
        let mut current: Option<BandBuilder> = None;

        for index in indices.clone() {
            let slot = index - first;
            let Some(value) = item.value_at(index) else {
                bands.extend(current.take().map(BandBuilder::finish));
                continue;
            };

            let before = cumulative[slot];
            let after = before + value;
            cumulative[slot] = after;

            let upper = ctx.point(index, after)?;
            let lower = ctx.point(index, before)?;
            let builder = current.get_or_insert_with(|| BandBuilder::start(index));
            builder.last_index = index;
            builder.upper.push(upper);
            builder.lower.push(lower);
        }
        bands.extend(current.map(BandBuilder::finish));

        layers.push(StackedAreaLayer {
            series_index,
            bands,
        });
    }

    Ok(layers)
}

struct BandBuilder {
    first_index: usize,
    last_index: usize,
    upper: Vec<PlotPoint>,
    lower: Vec<PlotPoint>,
}

impl BandBuilder {
    fn start(index: usize) -> Self {
        Self {
            first_index: index,
            last_index: index,
            upper: Vec::new(),
            lower: Vec::new(),
        }
    }

    fn finish(self) -> StackedBand {
        let mut fill_polygon = Vec::with_capacity(self.upper.len() * 2 + 1);
        fill_polygon.extend(self.upper.iter().copied());
        fill_polygon.extend(self.lower.iter().rev().copied());
        fill_polygon.push(self.upper[0]);

        StackedBand {
            first_index: self.first_index,
            last_index: self.last_index,
            upper: self.upper,
            lower: self.lower,
            fill_polygon,
        }
    }
}
