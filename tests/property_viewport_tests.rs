use proptest::prelude::*;
use trend_chart::core::{
    NavigationTuning, PanDirection, ViewDomain, ViewportController, ZoomDirection,
    index_to_pixel_x, pixel_x_to_index,
};

const PLOT_WIDTH: f64 = 800.0;

#[derive(Debug, Clone, Copy)]
enum NavOp {
    WheelIn(f64),
    WheelOut(f64),
    Drag(f64),
    StepLeft,
    StepRight,
    Reset,
}

fn nav_op() -> impl Strategy<Value = NavOp> {
    prop_oneof![
        (0.0f64..PLOT_WIDTH).prop_map(NavOp::WheelIn),
        (0.0f64..PLOT_WIDTH).prop_map(NavOp::WheelOut),
        (-3_000.0f64..3_000.0).prop_map(NavOp::Drag),
        Just(NavOp::StepLeft),
        Just(NavOp::StepRight),
        Just(NavOp::Reset),
    ]
}

fn apply(controller: &mut ViewportController, op: NavOp) -> bool {
    match op {
        NavOp::WheelIn(px) => controller.zoom_at_point(ZoomDirection::In, px, PLOT_WIDTH, 0.1),
        NavOp::WheelOut(px) => controller.zoom_at_point(ZoomDirection::Out, px, PLOT_WIDTH, 0.1),
        NavOp::Drag(dx) => controller.pan_by_delta(dx, PLOT_WIDTH),
        NavOp::StepLeft => controller.pan_by_step(PanDirection::Left),
        NavOp::StepRight => controller.pan_by_step(PanDirection::Right),
        NavOp::Reset => controller.reset(),
    }
}

proptest! {
    #[test]
    fn index_pixel_round_trip_property(
        domain_min in -1_000.0f64..1_000.0,
        domain_width in 0.5f64..5_000.0,
        index_factor in 0.0f64..1.0,
        plot_width in 1.0f64..4_000.0
    ) {
        let domain = ViewDomain::new(domain_min, domain_min + domain_width).expect("valid domain");
        let index = domain_min + index_factor * domain_width;

        let px = index_to_pixel_x(index, domain, plot_width).expect("to pixel");
        let recovered = pixel_x_to_index(px, domain, plot_width).expect("from pixel");

        prop_assert!((recovered - index).abs() <= 1e-6);
    }

    #[test]
    fn domain_stays_inside_axis_after_any_navigation(
        label_count in 0usize..300,
        ops in prop::collection::vec(nav_op(), 1..40)
    ) {
        let mut controller = ViewportController::new(label_count, NavigationTuning::default());
        let full = controller.full_domain();

        for op in ops {
            apply(&mut controller, op);
            let domain = controller.domain();
            prop_assert!(domain.min() >= full.min());
            prop_assert!(domain.max() <= full.max());
            prop_assert!(domain.min() < domain.max());
            prop_assert!(domain.width() >= 2.0 - 1e-9 || domain == full);
        }
    }

    #[test]
    fn pan_preserves_window_width(
        label_count in 3usize..500,
        start_factor in 0.0f64..1.0,
        width_factor in 0.0f64..1.0,
        delta_px in -10_000.0f64..10_000.0
    ) {
        let mut controller = ViewportController::new(label_count, NavigationTuning::default());
        let full = controller.full_domain();
        let width = 2.0 + width_factor * (full.width() - 2.0);
        let min = start_factor * (full.width() - width);
        if let Ok(domain) = ViewDomain::new(min, min + width) {
            controller.set_domain(domain);
        }
        let before = controller.domain().width();

        controller.pan_by_delta(delta_px, PLOT_WIDTH);
        prop_assert!((controller.domain().width() - before).abs() <= 1e-9);
    }

    #[test]
    fn rejected_zoom_in_leaves_domain_unchanged(
        label_count in 0usize..4,
        pivot_px in 0.0f64..PLOT_WIDTH
    ) {
        let mut controller = ViewportController::new(label_count, NavigationTuning::default());
        let before = controller.domain();

        prop_assert!(!controller.zoom_at_point(ZoomDirection::In, pivot_px, PLOT_WIDTH, 0.1));
        prop_assert_eq!(controller.domain(), before);
    }

    #[test]
    fn reset_is_idempotent_after_any_navigation(
        label_count in 0usize..300,
        ops in prop::collection::vec(nav_op(), 0..20)
    ) {
        let mut controller = ViewportController::new(label_count, NavigationTuning::default());
        for op in ops {
            apply(&mut controller, op);
        }

        controller.reset();
        let once = controller.domain();
        prop_assert!(!controller.reset());
        prop_assert_eq!(controller.domain(), once);
        prop_assert_eq!(once, controller.full_domain());
    }
}
