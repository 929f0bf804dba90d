use tracing::trace;

use crate::core::{
    ChartKind, ProjectionContext, project_area_segments, project_grouped_bars, project_line_paths,
    project_stacked_area_layers,
};
use crate::error::ChartResult;
use crate::render::{
    Color, LinePrimitive, PathPrimitive, PathStroke, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

use super::ChartEngine;
use super::axis_ticks::{category_axis_indices, value_axis_ticks};

const Y_LABEL_GAP_PX: f64 = 6.0;
const X_LABEL_GAP_PX: f64 = 4.0;

impl<R: Renderer> ChartEngine<R> {
    /// Materializes the current view into a backend-agnostic frame.
    ///
    /// Returns an empty frame while the plot has no positive size.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let frame = RenderFrame::new(self.viewport);
        let Some(ctx) = self.projection_context() else {
            trace!(
                width = self.viewport.width,
                height = self.viewport.height,
                "plot area not laid out, emitting empty frame"
            );
            return Ok(frame);
        };

        let mut frame = frame.with_plot_clip(ctx.plot);
        self.push_value_axis(&mut frame, &ctx);
        self.push_category_axis(&mut frame, &ctx);
        match self.kind {
            ChartKind::Line => self.push_line_series(&mut frame, &ctx)?,
            ChartKind::Area if self.is_stacked() => self.push_stacked_area_series(&mut frame, &ctx)?,
            ChartKind::Area => self.push_area_series(&mut frame, &ctx)?,
            ChartKind::Bar => self.push_bar_series(&mut frame, &ctx)?,
        }

        trace!(
            lines = frame.lines.len(),
            paths = frame.paths.len(),
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            "render frame built"
        );
        Ok(frame)
    }

    fn push_value_axis(&self, frame: &mut RenderFrame, ctx: &ProjectionContext) {
        let style = &self.style;
        for value in value_axis_ticks(ctx.y_range, style.source.y_tick_count) {
            let Ok(y) = ctx.y_of(value) else {
                continue;
            };
            frame.lines.push(LinePrimitive::new(
                ctx.plot.left,
                y,
                ctx.plot.right(),
                y,
                style.source.grid_line_width,
                style.grid_color,
            ));
            frame.texts.push(TextPrimitive::new(
                format!("{value}"),
                ctx.plot.left - Y_LABEL_GAP_PX,
                y + style.source.font_size_px / 3.0,
                style.source.font_size_px,
                style.axis_text_color,
                TextHAlign::Right,
            ));
        }
    }

    fn push_category_axis(&self, frame: &mut RenderFrame, ctx: &ProjectionContext) {
        let Some(visible) = ctx.visible_indices() else {
            return;
        };
        let style = &self.style;
        let label_y = ctx.plot.bottom() + X_LABEL_GAP_PX + style.source.font_size_px;
        for index in category_axis_indices(
            visible,
            ctx.domain,
            ctx.plot.width,
            style.source.min_x_label_spacing_px,
        ) {
            let label = &self.labels[index];
            if label.is_empty() {
                continue;
            }
            let Ok(x) = ctx.x_of(index as f64) else {
                continue;
            };
            frame.texts.push(TextPrimitive::new(
                label.clone(),
                x,
                label_y,
                style.source.font_size_px,
                style.axis_text_color,
                TextHAlign::Center,
            ));
        }
    }

    fn series_stroke(&self, series_index: usize) -> PathStroke {
        PathStroke {
            color: self.series_colors[series_index],
            width: self.style.source.series_line_width,
        }
    }

    fn series_fill(&self, series_index: usize) -> Color {
        let color = self.series_colors[series_index];
        color.with_alpha(color.alpha * self.style.source.area_fill_opacity)
    }

    fn push_line_series(&self, frame: &mut RenderFrame, ctx: &ProjectionContext) -> ChartResult<()> {
        for (series_index, series) in self.series.iter().enumerate() {
            for path in project_line_paths(series, ctx)? {
                frame
                    .paths
                    .push(PathPrimitive::polyline(path.points, self.series_stroke(series_index)));
            }
        }
        Ok(())
    }

    fn push_area_series(&self, frame: &mut RenderFrame, ctx: &ProjectionContext) -> ChartResult<()> {
        for (series_index, series) in self.series.iter().enumerate() {
            let segments = project_area_segments(series, ctx)?;
            let fill = self.series_fill(series_index);
            let stroke = self.series_stroke(series_index);
            let mut strokes = Vec::with_capacity(segments.len());
            for segment in segments {
                frame
                    .paths
                    .push(PathPrimitive::polygon(segment.fill_polygon, fill));
                strokes.push(PathPrimitive::polyline(segment.line_points, stroke));
            }
            frame.paths.extend(strokes);
        }
        Ok(())
    }

    /// Topmost layer first so lower bands and their borders paint last.
    fn push_stacked_area_series(
        &self,
        frame: &mut RenderFrame,
        ctx: &ProjectionContext,
    ) -> ChartResult<()> {
        let layers = project_stacked_area_layers(&self.series, ctx)?;
        for layer in layers.into_iter().rev() {
            let fill = self.series_fill(layer.series_index);
            let stroke = self.series_stroke(layer.series_index);
            for band in layer.bands {
                frame
                    .paths
                    .push(PathPrimitive::polygon(band.fill_polygon, fill));
                frame.paths.push(PathPrimitive::polyline(band.upper, stroke));
            }
        }
        Ok(())
    }

    fn push_bar_series(&self, frame: &mut RenderFrame, ctx: &ProjectionContext) -> ChartResult<()> {
        for bar in project_grouped_bars(&self.series, ctx)? {
            frame.rects.push(RectPrimitive::new(
                bar.x,
                bar.y,
                bar.width,
                bar.height,
                self.series_colors[bar.series_index],
            ));
        }
        Ok(())
    }
}
