use crate::core::{
    ChartKind, PlotArea, PlotPadding, ProjectionContext, Series, ViewDomain, Viewport,
    ViewportController, YRange, YRangePolicy, YRangeTuning, resolve_y_range,
};
use crate::error::ChartResult;
use crate::interaction::{InteractionMode, InteractionState, Tooltip};
use crate::render::{Color, Renderer};

use super::ChartStyle;

/// Style with every CSS color parsed once at configuration time.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct ResolvedStyle {
    pub(super) source: ChartStyle,
    pub(super) grid_color: Color,
    pub(super) axis_text_color: Color,
}

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the label axis, series data, viewport controller and
/// interaction state of one chart, and hands materialized frames to its
/// renderer. Engines are fully independent of each other.
#[derive(Debug)]
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) viewport: Viewport,
    pub(super) padding: PlotPadding,
    pub(super) kind: ChartKind,
    pub(super) stacked: bool,
    pub(super) fixed_y_range: Option<YRange>,
    pub(super) y_range_tuning: YRangeTuning,
    pub(super) labels: Vec<String>,
    pub(super) series: Vec<Series>,
    pub(super) series_colors: Vec<Color>,
    pub(super) style: ResolvedStyle,
    pub(super) controller: ViewportController,
    pub(super) interaction: InteractionState,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.stacked && self.kind == ChartKind::Area
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.viewport.plot_area(self.padding)
    }

    #[must_use]
    pub fn style(&self) -> &ChartStyle {
        &self.style.source
    }

    #[must_use]
    pub fn view_domain(&self) -> ViewDomain {
        self.controller.domain()
    }

    #[must_use]
    pub fn full_domain(&self) -> ViewDomain {
        self.controller.full_domain()
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.interaction.tooltip()
    }

    #[must_use]
    pub fn y_range_policy(&self) -> YRangePolicy {
        match self.fixed_y_range {
            Some(range) => YRangePolicy::Fixed(range),
            None if self.is_stacked() => YRangePolicy::Stacked,
            None => YRangePolicy::Auto {
                non_negative: self.kind.is_non_negative(),
            },
        }
    }

    /// Value range for the current view, recomputed on every call.
    #[must_use]
    pub fn y_range(&self) -> YRange {
        resolve_y_range(
            &self.series,
            self.labels.len(),
            self.controller.domain(),
            self.y_range_policy(),
            self.y_range_tuning,
        )
    }

    /// Projection parameters for the current view.
    ///
    /// Returns `None` while the plot has no positive size.
    #[must_use]
    pub fn projection_context(&self) -> Option<ProjectionContext> {
        ProjectionContext::new(
            self.controller.domain(),
            self.y_range(),
            self.plot_area(),
            self.labels.len(),
        )
        .ok()
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
