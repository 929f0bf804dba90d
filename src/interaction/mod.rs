mod tooltip;

use serde::{Deserialize, Serialize};

use crate::core::ViewDomain;

pub use tooltip::{Tooltip, TooltipEntry, resolve_tooltip, round_tooltip_value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Panning,
}

/// Drag session captured at pointer/touch down.
///
/// Moves are applied against `domain_at_start` so the result depends only on
/// the total drag distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanGesture {
    pub start_x: f64,
    pub domain_at_start: ViewDomain,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    gesture: Option<PanGesture>,
    tooltip: Option<Tooltip>,
    cursor: Option<(f64, f64)>,
}

impl InteractionState {
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        if self.gesture.is_some() {
            InteractionMode::Panning
        } else {
            InteractionMode::Idle
        }
    }

    #[must_use]
    pub fn gesture(&self) -> Option<PanGesture> {
        self.gesture
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    #[must_use]
    pub fn cursor(&self) -> Option<(f64, f64)> {
        self.cursor
    }

    pub fn on_pan_start(&mut self, start_x: f64, domain: ViewDomain) {
        self.gesture = Some(PanGesture {
            start_x,
            domain_at_start: domain,
        });
        self.tooltip = None;
    }

    pub fn on_pan_end(&mut self) {
        self.gesture = None;
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
    }

    pub fn on_pointer_leave(&mut self) {
        self.gesture = None;
        self.tooltip = None;
        self.cursor = None;
    }

    pub fn set_tooltip(&mut self, tooltip: Option<Tooltip>) {
        self.tooltip = tooltip;
    }

    pub fn clear_tooltip(&mut self) {
        self.tooltip = None;
    }
}
