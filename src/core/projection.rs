use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, ViewDomain, YRange, index_to_pixel_x, value_to_pixel_y};
use crate::error::{ChartError, ChartResult};

/// Point in container pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Everything series projection needs to place samples on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionContext {
    pub domain: ViewDomain,
    pub y_range: YRange,
    pub plot: PlotArea,
    pub label_count: usize,
}

impl ProjectionContext {
    pub fn new(
        domain: ViewDomain,
        y_range: YRange,
        plot: PlotArea,
        label_count: usize,
    ) -> ChartResult<Self> {
        if !plot.is_valid() {
            return Err(ChartError::InvalidPlotArea {
                width: plot.width,
                height: plot.height,
            });
        }
        Ok(Self {
            domain,
            y_range,
            plot,
            label_count,
        })
    }

    /// Container x coordinate of a category index.
    pub fn x_of(&self, index: f64) -> ChartResult<f64> {
        Ok(self.plot.left + index_to_pixel_x(index, self.domain, self.plot.width)?)
    }

    /// Container y coordinate of a value.
    pub fn y_of(&self, value: f64) -> ChartResult<f64> {
        Ok(self.plot.top + value_to_pixel_y(value, self.y_range, self.plot.height)?)
    }

    pub fn point(&self, index: usize, value: f64) -> ChartResult<PlotPoint> {
        Ok(PlotPoint::new(self.x_of(index as f64)?, self.y_of(value)?))
    }

    /// Bottom edge of the plot, used as the fill baseline.
    #[must_use]
    pub fn baseline_y(&self) -> f64 {
        self.plot.bottom()
    }

    /// Indices whose geometry reaches into the plot.
    #[must_use]
    pub fn render_indices(&self) -> Option<RangeInclusive<usize>> {
        self.domain.render_indices(self.label_count)
    }

    /// Indices fully inside the domain.
    #[must_use]
    pub fn visible_indices(&self) -> Option<RangeInclusive<usize>> {
        self.domain.visible_indices(self.label_count)
    }
}
