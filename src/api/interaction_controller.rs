use tracing::warn;

use crate::core::ZoomDirection;
use crate::interaction::resolve_tooltip;
use crate::render::Renderer;

use super::ChartEngine;

/// Pointer, touch and wheel input in container coordinates.
impl<R: Renderer> ChartEngine<R> {
    /// Begins a drag pan and hides the tooltip.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            warn!(x, y, "ignoring pointer down with non-finite coordinates");
            return;
        }
        self.interaction.on_pointer_move(x, y);
        self.interaction.on_pan_start(x, self.controller.domain());
    }

    /// Pans while a drag is active, otherwise updates the hover tooltip.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            warn!(x, y, "ignoring pointer move with non-finite coordinates");
            return;
        }
        self.interaction.on_pointer_move(x, y);

        match self.interaction.gesture() {
            Some(gesture) => {
                let plot_width = self.plot_area().width;
                self.controller
                    .pan_from(gesture.domain_at_start, x - gesture.start_x, plot_width);
                self.interaction.clear_tooltip();
            }
            None => self.refresh_tooltip(),
        }
    }

    /// Ends an active drag.
    pub fn pointer_up(&mut self) {
        self.interaction.on_pan_end();
        self.refresh_tooltip();
    }

    /// Ends an active drag and hides the tooltip.
    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }

    pub fn touch_start(&mut self, x: f64, y: f64) {
        self.pointer_down(x, y);
    }

    pub fn touch_move(&mut self, x: f64, y: f64) {
        self.pointer_move(x, y);
    }

    pub fn touch_end(&mut self) {
        self.interaction.on_pan_end();
    }

    /// Zooms around the wheel position.
    ///
    /// Negative `delta_y` (wheel up) zooms in. Returns `true` when the pointer
    /// is over the plot, in which case the host must suppress native page
    /// scrolling for this event.
    pub fn wheel(&mut self, x: f64, y: f64, delta_y: f64) -> bool {
        let plot = self.plot_area();
        if !plot.is_valid() || !plot.contains(x, y) {
            return false;
        }
        if delta_y == 0.0 || !delta_y.is_finite() {
            return true;
        }

        let direction = if delta_y < 0.0 {
            ZoomDirection::In
        } else {
            ZoomDirection::Out
        };
        let step = self.controller.tuning().wheel_zoom_step;
        self.interaction.on_pointer_move(x, y);
        self.after_navigation(|engine| {
            engine
                .controller
                .zoom_at_point(direction, plot.local_x(x), plot.width, step)
        });
        true
    }

    /// Recomputes the tooltip at the last known cursor position.
    ///
    /// The tooltip stays hidden while a drag is active or the cursor is
    /// outside the chart.
    pub(super) fn refresh_tooltip(&mut self) {
        if self.interaction.gesture().is_some() {
            self.interaction.clear_tooltip();
            return;
        }
        let tooltip = self.interaction.cursor().and_then(|(x, y)| {
            let ctx = self.projection_context()?;
            resolve_tooltip(&self.labels, &self.series, &ctx, x, y)
        });
        self.interaction.set_tooltip(tooltip);
    }
}
