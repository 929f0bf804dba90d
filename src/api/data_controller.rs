use tracing::{debug, trace};

use crate::core::{Series, Viewport, validate_series_alignment};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartEngine;
use super::engine_init::resolve_series_colors;

impl<R: Renderer> ChartEngine<R> {
    /// Replaces labels and series.
    ///
    /// The view domain resets to full only when the label count changes, so
    /// a zoomed or panned view survives live refreshes of the same axis.
    /// Misaligned series are rejected and leave the current data untouched.
    pub fn set_data(&mut self, labels: Vec<String>, series: Vec<Series>) -> ChartResult<()> {
        validate_series_alignment(&labels, &series)?;
        let series_colors = resolve_series_colors(&series)?;

        debug!(
            labels = labels.len(),
            series = series.len(),
            "set chart data"
        );
        let label_count = labels.len();
        self.labels = labels;
        self.series = series;
        self.series_colors = series_colors;
        if self.controller.sync_label_count(label_count) {
            self.interaction.on_pan_end();
        }
        self.refresh_tooltip();
        Ok(())
    }

    /// Replaces series values while keeping the label axis.
    pub fn set_series(&mut self, series: Vec<Series>) -> ChartResult<()> {
        validate_series_alignment(&self.labels, &series)?;
        self.series_colors = resolve_series_colors(&series)?;
        trace!(series = series.len(), "set chart series");
        self.series = series;
        self.refresh_tooltip();
        Ok(())
    }

    /// Applies a new container size; the view domain is not touched.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        debug!(
            width = viewport.width,
            height = viewport.height,
            "chart viewport resized"
        );
        self.viewport = viewport;
        self.refresh_tooltip();
    }
}
