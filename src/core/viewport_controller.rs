use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{ViewDomain, pixel_x_to_index};
use crate::error::{ChartError, ChartResult};

/// Zoom direction for wheel and button input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Pan direction for step (button) input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanDirection {
    Left,
    Right,
}

/// Step sizes and limits for view navigation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavigationTuning {
    /// Width ratio changed per wheel tick.
    pub wheel_zoom_step: f64,
    /// Width ratio changed per zoom button press.
    pub button_zoom_step: f64,
    /// Fraction of the current width shifted per pan button press.
    pub pan_step_ratio: f64,
    /// Narrowest allowed domain, in index units.
    pub min_domain_width: f64,
}

impl Default for NavigationTuning {
    fn default() -> Self {
        Self {
            wheel_zoom_step: 0.1,
            button_zoom_step: 0.25,
            pan_step_ratio: 0.2,
            min_domain_width: 2.0,
        }
    }
}

impl NavigationTuning {
    pub(crate) fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("wheel_zoom_step", self.wheel_zoom_step),
            ("button_zoom_step", self.button_zoom_step),
        ] {
            if !value.is_finite() || value <= 0.0 || value >= 1.0 {
                return Err(ChartError::InvalidData(format!(
                    "navigation `{name}` must be finite and in (0, 1)"
                )));
            }
        }
        if !self.pan_step_ratio.is_finite() || self.pan_step_ratio <= 0.0 {
            return Err(ChartError::InvalidData(
                "navigation pan step ratio must be finite and > 0".to_owned(),
            ));
        }
        if !self.min_domain_width.is_finite() || self.min_domain_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "navigation min domain width must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Owner of the visible index window.
///
/// Every transition is clamp-and-return: invalid input leaves the domain
/// untouched and the transition reports `false`. Clamping always translates
/// the whole window so pans never change its width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportController {
    domain: ViewDomain,
    label_count: usize,
    tuning: NavigationTuning,
}

impl ViewportController {
    #[must_use]
    pub fn new(label_count: usize, tuning: NavigationTuning) -> Self {
        Self {
            domain: ViewDomain::full(label_count),
            label_count,
            tuning,
        }
    }

    #[must_use]
    pub fn domain(&self) -> ViewDomain {
        self.domain
    }

    #[must_use]
    pub fn full_domain(&self) -> ViewDomain {
        ViewDomain::full(self.label_count)
    }

    #[must_use]
    pub fn label_count(&self) -> usize {
        self.label_count
    }

    #[must_use]
    pub fn tuning(&self) -> NavigationTuning {
        self.tuning
    }

    /// Rebinds the controller to a label axis.
    ///
    /// The domain resets to full only when the label count actually changed,
    /// so live data refreshes keep the user's zoom and pan.
    pub fn sync_label_count(&mut self, label_count: usize) -> bool {
        if label_count == self.label_count {
            return false;
        }
        debug!(
            previous = self.label_count,
            label_count, "label count changed, resetting view domain"
        );
        self.label_count = label_count;
        self.domain = self.full_domain();
        true
    }

    pub fn reset(&mut self) -> bool {
        self.replace(self.full_domain())
    }

    /// Restores a previously captured domain, shifted inside the label axis.
    ///
    /// A domain wider than the axis collapses to the full domain. Bounds that
    /// are not finite with `min < max` leave the domain unchanged.
    pub fn set_domain(&mut self, domain: ViewDomain) -> bool {
        if let Err(err) = ViewDomain::new(domain.min(), domain.max()) {
            warn!(error = %err, "ignoring invalid view domain");
            return false;
        }
        self.replace(ViewDomain::clamp_window(
            domain.min(),
            domain.width(),
            self.full_domain(),
        ))
    }

    /// Zooms around the index under `pivot_px` (plot-local pixels).
    ///
    /// `step` is the relative width change, e.g. `0.1` per wheel tick.
    pub fn zoom_at_point(
        &mut self,
        direction: ZoomDirection,
        pivot_px: f64,
        plot_width: f64,
        step: f64,
    ) -> bool {
        let pivot = match pixel_x_to_index(pivot_px, self.domain, plot_width) {
            Ok(pivot) => pivot.clamp(self.domain.min(), self.domain.max()),
            Err(err) => {
                warn!(error = %err, pivot_px, plot_width, "ignoring zoom with invalid pivot");
                return false;
            }
        };
        if !step.is_finite() || step <= 0.0 || step >= 1.0 {
            warn!(step, "ignoring zoom with invalid step");
            return false;
        }

        let width = self.domain.width();
        let target_width = match direction {
            ZoomDirection::In => width * (1.0 - step),
            ZoomDirection::Out => width * (1.0 + step),
        };

        if direction == ZoomDirection::In && target_width < self.tuning.min_domain_width {
            trace!(target_width, "zoom-in rejected below min domain width");
            return false;
        }
        let full = self.full_domain();
        if direction == ZoomDirection::Out && target_width >= full.width() {
            return self.reset();
        }

        let pivot_ratio = (pivot - self.domain.min()) / width;
        let start = pivot - pivot_ratio * target_width;
        self.replace(ViewDomain::clamp_window(start, target_width, full))
    }

    /// Zooms around the plot centre, as toolbar buttons do.
    pub fn zoom_centered(
        &mut self,
        direction: ZoomDirection,
        plot_width: f64,
        step: f64,
    ) -> bool {
        self.zoom_at_point(direction, plot_width / 2.0, plot_width, step)
    }

    /// Pans the current domain by a pixel delta.
    ///
    /// Positive `delta_px` (content dragged right) reveals lower indices.
    pub fn pan_by_delta(&mut self, delta_px: f64, plot_width: f64) -> bool {
        self.pan_from(self.domain, delta_px, plot_width)
    }

    /// Pans relative to a gesture snapshot instead of the current domain.
    ///
    /// Drag gestures call this with the domain captured at pointer-down so
    /// repeated move events never accumulate rounding drift.
    pub fn pan_from(&mut self, origin: ViewDomain, delta_px: f64, plot_width: f64) -> bool {
        match resolve_pan_delta_index(delta_px, plot_width, origin.width()) {
            Ok(delta) => self.replace(origin.translated_within(delta, self.full_domain())),
            Err(err) => {
                warn!(error = %err, delta_px, plot_width, "ignoring pan with invalid input");
                false
            }
        }
    }

    /// Shifts the domain by `pan_step_ratio` of its width.
    pub fn pan_by_step(&mut self, direction: PanDirection) -> bool {
        let step = self.domain.width() * self.tuning.pan_step_ratio;
        let delta = match direction {
            PanDirection::Left => -step,
            PanDirection::Right => step,
        };
        self.replace(self.domain.translated_within(delta, self.full_domain()))
    }

    fn replace(&mut self, domain: ViewDomain) -> bool {
        if domain == self.domain {
            return false;
        }
        trace!(min = domain.min(), max = domain.max(), "view domain updated");
        self.domain = domain;
        true
    }
}

pub(crate) fn resolve_pan_delta_index(
    delta_px: f64,
    plot_width: f64,
    domain_width: f64,
) -> ChartResult<f64> {
    if !plot_width.is_finite() || plot_width <= 0.0 {
        return Err(ChartError::InvalidData(
            "pan plot width must be finite and > 0".to_owned(),
        ));
    }
    let delta = -(delta_px / plot_width) * domain_width;
    if !delta.is_finite() {
        return Err(ChartError::InvalidData(
            "computed pan delta must be finite".to_owned(),
        ));
    }
    Ok(delta)
}
