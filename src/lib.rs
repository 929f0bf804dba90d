//! trend-chart: headless viewport engine for categorical time-series charts.
//!
//! Line, area (optionally stacked) and grouped bar charts over a shared label
//! axis, with wheel/drag/button pan and zoom, hover tooltips and an SVG
//! backend. The engine owns no domain knowledge; hosts feed it labels and
//! series and draw the frames it produces.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
