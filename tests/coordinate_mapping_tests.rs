use approx::assert_abs_diff_eq;
use trend_chart::core::{
    LinearScale, ViewDomain, YRange, index_to_pixel_x, pixel_x_to_index, pixel_y_to_value,
    value_to_pixel_y,
};

#[test]
fn index_mapping_spans_plot_width() {
    let domain = ViewDomain::new(0.0, 10.0).expect("valid domain");

    assert_abs_diff_eq!(index_to_pixel_x(0.0, domain, 500.0).expect("x"), 0.0);
    assert_abs_diff_eq!(index_to_pixel_x(10.0, domain, 500.0).expect("x"), 500.0);
    assert_abs_diff_eq!(index_to_pixel_x(4.0, domain, 500.0).expect("x"), 200.0);
}

#[test]
fn zoomed_domain_maps_outside_indices_off_plot() {
    let domain = ViewDomain::new(2.0, 6.0).expect("valid domain");

    assert_abs_diff_eq!(index_to_pixel_x(1.0, domain, 400.0).expect("x"), -100.0);
    assert_abs_diff_eq!(index_to_pixel_x(7.0, domain, 400.0).expect("x"), 500.0);
}

#[test]
fn value_mapping_is_inverted() {
    let range = YRange::new(0.0, 40.0).expect("valid range");

    assert_abs_diff_eq!(value_to_pixel_y(0.0, range, 200.0).expect("y"), 200.0);
    assert_abs_diff_eq!(value_to_pixel_y(40.0, range, 200.0).expect("y"), 0.0);
    assert_abs_diff_eq!(value_to_pixel_y(30.0, range, 200.0).expect("y"), 50.0);
}

#[test]
fn pixel_mappings_invert_forward_mappings() {
    let domain = ViewDomain::new(1.25, 8.75).expect("valid domain");
    let range = YRange::new(-5.0, 15.0).expect("valid range");

    let x = index_to_pixel_x(3.5, domain, 960.0).expect("x");
    assert_abs_diff_eq!(pixel_x_to_index(x, domain, 960.0).expect("index"), 3.5, epsilon = 1e-9);

    let y = value_to_pixel_y(7.25, range, 240.0).expect("y");
    assert_abs_diff_eq!(pixel_y_to_value(y, range, 240.0).expect("value"), 7.25, epsilon = 1e-9);
}

#[test]
fn zero_extent_is_rejected() {
    let domain = ViewDomain::full(5);
    let range = YRange::unit();

    assert!(index_to_pixel_x(1.0, domain, 0.0).is_err());
    assert!(pixel_x_to_index(1.0, domain, -10.0).is_err());
    assert!(value_to_pixel_y(0.5, range, 0.0).is_err());
}

#[test]
fn linear_scale_maps_both_ways() {
    let scale = LinearScale::new(10.0, 20.0).expect("valid scale");

    let px = scale.domain_to_pixel(15.0, 300.0).expect("to pixel");
    assert_abs_diff_eq!(px, 150.0);
    assert_abs_diff_eq!(scale.pixel_to_domain(px, 300.0).expect("from pixel"), 15.0);
}

#[test]
fn degenerate_domains_are_rejected() {
    assert!(ViewDomain::new(3.0, 3.0).is_err());
    assert!(ViewDomain::new(f64::NAN, 3.0).is_err());
    assert!(YRange::new(5.0, 1.0).is_err());
    assert!(LinearScale::new(1.0, 1.0).is_err());
}
