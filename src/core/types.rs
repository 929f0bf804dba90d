use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Container size in device-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Resolves the plot rectangle left after removing `padding`.
    ///
    /// The result may have a non-positive extent when the container is not
    /// laid out yet or is smaller than the padding; check
    /// [`PlotArea::is_valid`] before mapping through it.
    #[must_use]
    pub fn plot_area(self, padding: PlotPadding) -> PlotArea {
        PlotArea {
            left: padding.left,
            top: padding.top,
            width: f64::from(self.width) - padding.left - padding.right,
            height: f64::from(self.height) - padding.top - padding.bottom,
        }
    }
}

/// Space reserved around the plot for axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPadding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for PlotPadding {
    fn default() -> Self {
        Self {
            top: 10.0,
            right: 10.0,
            bottom: 30.0,
            left: 40.0,
        }
    }
}

impl PlotPadding {
    pub(crate) fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "plot padding `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Plot rectangle in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Converts a container x coordinate into plot-local space.
    #[must_use]
    pub fn local_x(self, container_x: f64) -> f64 {
        container_x - self.left
    }

    #[must_use]
    pub fn contains(self, container_x: f64, container_y: f64) -> bool {
        container_x >= self.left
            && container_x <= self.right()
            && container_y >= self.top
            && container_y <= self.bottom()
    }
}
