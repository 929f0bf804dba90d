use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use trend_chart::api::{ChartEngine, ChartEngineConfig};
use trend_chart::core::{
    ChartKind, PlotArea, ProjectionContext, Series, ViewDomain, Viewport, YRange,
    index_to_pixel_x, pixel_x_to_index, project_line_paths, project_stacked_area_layers,
};
use trend_chart::render::{NullRenderer, SvgRenderer};

const SAMPLES: usize = 10_000;

fn plot() -> PlotArea {
    PlotArea {
        left: 40.0,
        top: 10.0,
        width: 1870.0,
        height: 1040.0,
    }
}

fn wave(label: &str, phase: f64) -> Series {
    let values = (0..SAMPLES)
        .map(|i| {
            let t = i as f64;
            // every 97th sample missing to exercise gap splitting
            (i % 97 != 0).then_some(50.0 + 25.0 * (t / 40.0 + phase).sin())
        })
        .collect();
    Series::new(label, values, "#3366cc", "")
}

fn bench_index_mapping_round_trip(c: &mut Criterion) {
    let domain = ViewDomain::new(1_250.0, 8_750.0).expect("valid domain");

    c.bench_function("index_mapping_round_trip", |b| {
        b.iter(|| {
            let px = index_to_pixel_x(black_box(4_321.5), domain, 1870.0).expect("to pixel");
            let _ = pixel_x_to_index(px, domain, 1870.0).expect("from pixel");
        })
    });
}

fn bench_line_projection_10k(c: &mut Criterion) {
    let series = wave("wave", 0.0);
    let ctx = ProjectionContext::new(
        ViewDomain::full(SAMPLES),
        YRange::new(0.0, 100.0).expect("valid range"),
        plot(),
        SAMPLES,
    )
    .expect("valid context");

    c.bench_function("line_projection_10k", |b| {
        b.iter(|| {
            let _ = project_line_paths(black_box(&series), black_box(&ctx))
                .expect("projection should succeed");
        })
    });
}

fn bench_stacked_area_projection_3x10k(c: &mut Criterion) {
    let series: Vec<Series> = (0..3_i32)
        .map(|i| wave(&format!("layer{i}"), f64::from(i)))
        .collect();
    let ctx = ProjectionContext::new(
        ViewDomain::full(SAMPLES),
        YRange::new(0.0, 300.0).expect("valid range"),
        plot(),
        SAMPLES,
    )
    .expect("valid context");

    c.bench_function("stacked_area_projection_3x10k", |b| {
        b.iter(|| {
            let _ = project_stacked_area_layers(black_box(&series), black_box(&ctx))
                .expect("projection should succeed");
        })
    });
}

fn bench_engine_wheel_zoom_and_frame(c: &mut Criterion) {
    let labels: Vec<String> = (0..SAMPLES).map(|i| format!("t{i}")).collect();
    let config = ChartEngineConfig::new(Viewport::new(1920, 1080), ChartKind::Line)
        .with_data(labels, vec![wave("wave", 0.0)]);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");

    c.bench_function("engine_wheel_zoom_and_frame_10k", |b| {
        b.iter(|| {
            engine.wheel(black_box(960.0), 500.0, -120.0);
            let _ = engine.build_render_frame().expect("frame");
            engine.reset_view();
        })
    });
}

fn bench_svg_render_2k(c: &mut Criterion) {
    let labels: Vec<String> = (0..2_000).map(|i| format!("t{i}")).collect();
    let series = Series::new(
        "wave",
        (0..2_000).map(|i| Some((i as f64 / 30.0).sin())).collect(),
        "#dc3912",
        "",
    );
    let config = ChartEngineConfig::new(Viewport::new(1600, 900), ChartKind::Area)
        .with_data(labels, vec![series]);
    let mut engine = ChartEngine::new(SvgRenderer::new(), config).expect("engine init");

    c.bench_function("svg_render_area_2k", |b| {
        b.iter(|| {
            engine.render().expect("render");
            black_box(engine.renderer().document().len());
        })
    });
}

criterion_group!(
    benches,
    bench_index_mapping_round_trip,
    bench_line_projection_10k,
    bench_stacked_area_projection_3x10k,
    bench_engine_wheel_zoom_and_frame,
    bench_svg_render_2k
);
criterion_main!(benches);
