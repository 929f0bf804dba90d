use crate::core::{PanDirection, ViewDomain, ZoomDirection};
use crate::render::Renderer;

use super::ChartEngine;

/// Toolbar commands. Each returns `true` when the visible domain changed.
impl<R: Renderer> ChartEngine<R> {
    pub fn pan_left(&mut self) -> bool {
        self.after_navigation(|engine| engine.controller.pan_by_step(PanDirection::Left))
    }

    pub fn pan_right(&mut self) -> bool {
        self.after_navigation(|engine| engine.controller.pan_by_step(PanDirection::Right))
    }

    /// Zooms in around the plot centre by the button step.
    pub fn zoom_in(&mut self) -> bool {
        self.zoom_centered(ZoomDirection::In)
    }

    /// Zooms out around the plot centre by the button step.
    pub fn zoom_out(&mut self) -> bool {
        self.zoom_centered(ZoomDirection::Out)
    }

    pub fn reset_view(&mut self) -> bool {
        self.after_navigation(|engine| engine.controller.reset())
    }

    /// Restores a domain captured earlier, e.g. from a snapshot.
    pub fn set_view_domain(&mut self, domain: ViewDomain) -> bool {
        self.after_navigation(|engine| engine.controller.set_domain(domain))
    }

    fn zoom_centered(&mut self, direction: ZoomDirection) -> bool {
        let plot_width = self.plot_area().width;
        let step = self.controller.tuning().button_zoom_step;
        self.after_navigation(|engine| engine.controller.zoom_centered(direction, plot_width, step))
    }

    /// Runs a domain transition and keeps the hover tooltip in sync with it.
    pub(super) fn after_navigation(&mut self, transition: impl FnOnce(&mut Self) -> bool) -> bool {
        let changed = transition(self);
        if changed {
            self.refresh_tooltip();
        }
        changed
    }
}
