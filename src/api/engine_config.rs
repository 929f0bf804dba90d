use serde::{Deserialize, Serialize};

use crate::core::{
    ChartKind, NavigationTuning, PlotPadding, Series, Viewport, YRange, YRangeTuning,
};
use crate::error::{ChartError, ChartResult};

/// Visual defaults shared by every series of a chart.
///
/// Colors are CSS strings so configs stay readable when stored as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub grid_color: String,
    pub axis_text_color: String,
    pub font_size_px: f64,
    pub grid_line_width: f64,
    pub series_line_width: f64,
    pub area_fill_opacity: f64,
    /// Upper bound on horizontal grid lines.
    pub y_tick_count: usize,
    /// Minimum distance between category labels on the x axis.
    pub min_x_label_spacing_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            grid_color: "#e0e0e0".to_owned(),
            axis_text_color: "#666666".to_owned(),
            font_size_px: 11.0,
            grid_line_width: 1.0,
            series_line_width: 2.0,
            area_fill_opacity: 0.3,
            y_tick_count: 5,
            min_x_label_spacing_px: 48.0,
        }
    }
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub kind: ChartKind,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub series: Vec<Series>,
    #[serde(default)]
    pub y_axis_min: Option<f64>,
    #[serde(default)]
    pub y_axis_max: Option<f64>,
    /// Only meaningful for [`ChartKind::Area`].
    #[serde(default)]
    pub stacked: bool,
    #[serde(default)]
    pub padding: PlotPadding,
    #[serde(default)]
    pub navigation: NavigationTuning,
    #[serde(default)]
    pub y_range_tuning: YRangeTuning,
    #[serde(default)]
    pub style: ChartStyle,
}

impl ChartEngineConfig {
    /// Creates an empty chart config with default tuning.
    #[must_use]
    pub fn new(viewport: Viewport, kind: ChartKind) -> Self {
        Self {
            viewport,
            kind,
            labels: Vec::new(),
            series: Vec::new(),
            y_axis_min: None,
            y_axis_max: None,
            stacked: false,
            padding: PlotPadding::default(),
            navigation: NavigationTuning::default(),
            y_range_tuning: YRangeTuning::default(),
            style: ChartStyle::default(),
        }
    }

    /// Sets labels and series.
    #[must_use]
    pub fn with_data(mut self, labels: Vec<String>, series: Vec<Series>) -> Self {
        self.labels = labels;
        self.series = series;
        self
    }

    /// Pins the value axis, bypassing auto-derivation.
    #[must_use]
    pub fn with_fixed_y_range(mut self, min: f64, max: f64) -> Self {
        self.y_axis_min = Some(min);
        self.y_axis_max = Some(max);
        self
    }

    #[must_use]
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: PlotPadding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_navigation(mut self, navigation: NavigationTuning) -> Self {
        self.navigation = navigation;
        self
    }

    #[must_use]
    pub fn with_y_range_tuning(mut self, tuning: YRangeTuning) -> Self {
        self.y_range_tuning = tuning;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Fixed value range when both bounds are supplied.
    pub fn fixed_y_range(&self) -> ChartResult<Option<YRange>> {
        match (self.y_axis_min, self.y_axis_max) {
            (Some(min), Some(max)) => YRange::new(min, max).map(Some),
            _ => Ok(None),
        }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}
