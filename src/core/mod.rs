pub mod area_series;
pub mod bar_series;
pub mod coordinates;
pub mod line_series;
pub mod projection;
pub mod scale;
pub mod series;
pub mod types;
pub mod view_domain;
pub mod viewport_controller;
pub mod y_range;

pub use area_series::{
    AreaSegment, StackedAreaLayer, StackedBand, project_area_segments,
    project_stacked_area_layers,
};
pub use bar_series::{BAR_GROUP_FILL_RATIO, BarGeometry, project_grouped_bars};
pub use coordinates::{index_to_pixel_x, pixel_x_to_index, pixel_y_to_value, value_to_pixel_y};
pub use line_series::{LinePath, project_line_paths};
pub use projection::{PlotPoint, ProjectionContext};
pub use scale::LinearScale;
pub use series::{ChartKind, Series, validate_series_alignment};
pub use types::{PlotArea, PlotPadding, Viewport};
pub use view_domain::ViewDomain;
pub use viewport_controller::{NavigationTuning, PanDirection, ViewportController, ZoomDirection};
pub use y_range::{
    YRange, YRangePolicy, YRangeTuning, derive_auto_y_range, derive_stacked_y_range,
    resolve_y_range, stack_total_at,
};
