use tracing::debug;

use crate::core::{Series, ViewportController, validate_series_alignment};
use crate::error::ChartResult;
use crate::interaction::InteractionState;
use crate::render::{Color, Renderer};

use super::validation::validate_chart_style;
use super::{ChartEngine, ChartEngineConfig};

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine showing the full label axis.
    ///
    /// A zero-sized viewport is accepted: the chart stays empty until
    /// [`ChartEngine::set_viewport`] reports a real size.
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        let fixed_y_range = config.fixed_y_range()?;
        let padding = config.padding.validate()?;
        let navigation = config.navigation.validate()?;
        let y_range_tuning = config.y_range_tuning.validate()?;
        let style = validate_chart_style(config.style)?;

        validate_series_alignment(&config.labels, &config.series)?;
        let series_colors = resolve_series_colors(&config.series)?;

        debug!(
            kind = ?config.kind,
            labels = config.labels.len(),
            series = config.series.len(),
            stacked = config.stacked,
            "chart engine created"
        );

        Ok(Self {
            renderer,
            viewport: config.viewport,
            padding,
            kind: config.kind,
            stacked: config.stacked,
            fixed_y_range,
            y_range_tuning,
            controller: ViewportController::new(config.labels.len(), navigation),
            labels: config.labels,
            series: config.series,
            series_colors,
            style,
            interaction: InteractionState::default(),
        })
    }
}

pub(super) fn resolve_series_colors(series: &[Series]) -> ChartResult<Vec<Color>> {
    series
        .iter()
        .map(|item| Color::from_css(&item.color))
        .collect()
}
