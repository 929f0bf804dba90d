use approx::assert_abs_diff_eq;
use trend_chart::ChartError;
use trend_chart::core::{
    PlotArea, PlotPoint, ProjectionContext, Series, ViewDomain, YRange, project_area_segments,
    project_grouped_bars, project_line_paths, project_stacked_area_layers,
};

fn context(label_count: usize, width: f64, height: f64, y_max: f64) -> ProjectionContext {
    ProjectionContext::new(
        ViewDomain::full(label_count),
        YRange::new(0.0, y_max).expect("valid range"),
        PlotArea {
            left: 0.0,
            top: 0.0,
            width,
            height,
        },
        label_count,
    )
    .expect("valid context")
}

fn series(values: &[Option<f64>]) -> Series {
    Series::new("s", values.to_vec(), "#3366cc", "")
}

fn assert_points(actual: &[PlotPoint], expected: &[(f64, f64)]) {
    assert_eq!(actual.len(), expected.len(), "point count");
    for (point, &(x, y)) in actual.iter().zip(expected) {
        assert_abs_diff_eq!(point.x, x, epsilon = 1e-9);
        assert_abs_diff_eq!(point.y, y, epsilon = 1e-9);
    }
}

#[test]
fn line_paths_break_at_gaps() {
    let ctx = context(4, 300.0, 100.0, 40.0);
    let paths = project_line_paths(&series(&[Some(10.0), None, Some(30.0), Some(40.0)]), &ctx)
        .expect("projection");

    assert_eq!(paths.len(), 2);
    assert_eq!((paths[0].first_index, paths[0].last_index), (0, 0));
    assert!(paths[0].is_isolated());
    assert_points(&paths[0].points, &[(0.0, 75.0)]);

    assert_eq!((paths[1].first_index, paths[1].last_index), (2, 3));
    assert_points(&paths[1].points, &[(200.0, 25.0), (300.0, 0.0)]);
}

#[test]
fn line_paths_include_partially_visible_edges() {
    let ctx = ProjectionContext::new(
        ViewDomain::new(1.5, 3.5).expect("domain"),
        YRange::new(0.0, 10.0).expect("range"),
        PlotArea {
            left: 0.0,
            top: 0.0,
            width: 200.0,
            height: 100.0,
        },
        6,
    )
    .expect("context");
    let data = series(&[Some(1.0); 6]);

    let paths = project_line_paths(&data, &ctx).expect("projection");
    assert_eq!(paths.len(), 1);
    assert_eq!((paths[0].first_index, paths[0].last_index), (1, 4));
    assert_abs_diff_eq!(paths[0].points[0].x, -50.0, epsilon = 1e-9);
}

#[test]
fn area_segments_are_closed_against_baseline() {
    let ctx = context(4, 300.0, 100.0, 40.0);
    let segments =
        project_area_segments(&series(&[Some(10.0), None, Some(30.0), Some(40.0)]), &ctx)
            .expect("projection");

    assert_eq!(segments.len(), 2);
    assert_points(&segments[0].line_points, &[(0.0, 75.0)]);
    assert_points(
        &segments[0].fill_polygon,
        &[(0.0, 100.0), (0.0, 75.0), (0.0, 100.0), (0.0, 100.0)],
    );
    assert_points(
        &segments[1].fill_polygon,
        &[
            (200.0, 100.0),
            (200.0, 25.0),
            (300.0, 0.0),
            (300.0, 100.0),
            (200.0, 100.0),
        ],
    );
}

#[test]
fn stacked_layers_accumulate_and_split_at_gaps() {
    let ctx = context(3, 200.0, 100.0, 10.0);
    let data = [
        series(&[Some(1.0), Some(2.0), Some(3.0)]),
        series(&[Some(4.0), None, Some(5.0)]),
    ];

    let layers = project_stacked_area_layers(&data, &ctx).expect("projection");
    assert_eq!(layers.len(), 2);

    let bottom = &layers[0];
    assert_eq!(bottom.series_index, 0);
    assert_eq!(bottom.bands.len(), 1);
    assert_points(&bottom.bands[0].upper, &[(0.0, 90.0), (100.0, 80.0), (200.0, 70.0)]);
    assert_points(&bottom.bands[0].lower, &[(0.0, 100.0), (100.0, 100.0), (200.0, 100.0)]);
    assert_eq!(bottom.bands[0].fill_polygon.len(), 7);
    assert_eq!(
        bottom.bands[0].fill_polygon.first(),
        bottom.bands[0].fill_polygon.last()
    );

    let top = &layers[1];
    assert_eq!(top.series_index, 1);
    assert_eq!(top.bands.len(), 2);
    assert_eq!((top.bands[0].first_index, top.bands[0].last_index), (0, 0));
    assert_points(&top.bands[0].upper, &[(0.0, 50.0)]);
    assert_points(&top.bands[0].lower, &[(0.0, 90.0)]);
    assert_eq!((top.bands[1].first_index, top.bands[1].last_index), (2, 2));
    assert_points(&top.bands[1].upper, &[(200.0, 20.0)]);
    assert_points(&top.bands[1].lower, &[(200.0, 70.0)]);
}

#[test]
fn stacked_layer_below_a_gap_does_not_lift_upper_layers() {
    let ctx = context(2, 100.0, 100.0, 10.0);
    let data = [series(&[None, Some(2.0)]), series(&[Some(3.0), Some(3.0)])];

    let layers = project_stacked_area_layers(&data, &ctx).expect("projection");
    let top = &layers[1];
    assert_eq!(top.bands.len(), 1);
    assert_points(&top.bands[0].upper, &[(0.0, 70.0), (100.0, 50.0)]);
    assert_points(&top.bands[0].lower, &[(0.0, 100.0), (100.0, 80.0)]);
}

#[test]
fn grouped_bars_share_each_slot() {
    let ctx = context(4, 500.0, 100.0, 4.0);
    let data = [
        series(&[Some(1.0), Some(2.0), Some(3.0), Some(4.0)]),
        series(&[Some(4.0), None, Some(2.0), Some(1.0)]),
    ];

    let bars = project_grouped_bars(&data, &ctx).expect("projection");
    assert_eq!(bars.len(), 7);
    assert!(!bars.iter().any(|bar| bar.series_index == 1 && bar.index == 1));

    let first = bars[0];
    assert_eq!((first.series_index, first.index), (0, 0));
    assert_abs_diff_eq!(first.x, -40.0, epsilon = 1e-9);
    assert_abs_diff_eq!(first.width, 40.0, epsilon = 1e-9);
    assert_abs_diff_eq!(first.y, 75.0, epsilon = 1e-9);
    assert_abs_diff_eq!(first.height, 25.0, epsilon = 1e-9);

    let second = bars[1];
    assert_eq!((second.series_index, second.index), (1, 0));
    assert_abs_diff_eq!(second.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(second.height, 100.0, epsilon = 1e-9);
}

#[test]
fn bar_slots_widen_when_zoomed_in() {
    let ctx = ProjectionContext::new(
        ViewDomain::new(0.5, 2.5).expect("domain"),
        YRange::new(0.0, 4.0).expect("range"),
        PlotArea {
            left: 0.0,
            top: 0.0,
            width: 500.0,
            height: 100.0,
        },
        4,
    )
    .expect("context");
    let data = [series(&[Some(1.0), Some(2.0), Some(3.0), Some(4.0)])];

    let bars = project_grouped_bars(&data, &ctx).expect("projection");
    assert_eq!(bars.iter().map(|bar| bar.index).collect::<Vec<_>>(), vec![1, 2]);
    assert_abs_diff_eq!(bars[0].width, 500.0 / 3.0 * 0.8, epsilon = 1e-9);
}

#[test]
fn bars_above_range_are_clamped_to_plot() {
    let ctx = context(2, 100.0, 100.0, 4.0);
    let bars = project_grouped_bars(&[series(&[Some(8.0), Some(2.0)])], &ctx).expect("projection");

    assert_abs_diff_eq!(bars[0].y, 0.0);
    assert_abs_diff_eq!(bars[0].height, 100.0);
}

#[test]
fn zero_sized_plot_is_rejected() {
    let result = ProjectionContext::new(
        ViewDomain::full(3),
        YRange::unit(),
        PlotArea {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 100.0,
        },
        3,
    );

    assert!(matches!(result, Err(ChartError::InvalidPlotArea { .. })));
}
