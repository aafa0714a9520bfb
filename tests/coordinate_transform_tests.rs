use approx::assert_abs_diff_eq;
use court_rs::core::dimensions::{HALF_LENGTH, HALF_WIDTH_DOUBLES, HALF_WIDTH_SINGLES};
use court_rs::core::{
    CoordinateTransform, CourtPoint, RAW_ORIGIN_X_OFFSET, fold_to_canonical_half, to_centered,
};

#[test]
fn raw_origin_offset_is_half_the_doubles_width() {
    assert_abs_diff_eq!(RAW_ORIGIN_X_OFFSET, HALF_WIDTH_DOUBLES, epsilon = 1e-12);
    assert_eq!(CoordinateTransform::default(), CoordinateTransform::raw_data());
}

#[test]
fn far_half_point_keeps_its_side() {
    let (x, y) = to_centered(7.0, 3.0);
    assert_abs_diff_eq!(x, 7.0 - RAW_ORIGIN_X_OFFSET, epsilon = 1e-12);
    assert_abs_diff_eq!(y, HALF_LENGTH - 3.0, epsilon = 1e-12);
}

#[test]
fn near_half_point_is_reflected_through_the_net_center() {
    let (x, y) = to_centered(7.0, 20.0);
    assert_abs_diff_eq!(x, -(7.0 - RAW_ORIGIN_X_OFFSET), epsilon = 1e-12);
    assert_abs_diff_eq!(y, 20.0 - HALF_LENGTH, epsilon = 1e-12);
}

#[test]
fn point_on_the_net_is_not_folded() {
    let (x, y) = to_centered(1.0, HALF_LENGTH);
    assert_abs_diff_eq!(x, 1.0 - RAW_ORIGIN_X_OFFSET, epsilon = 1e-12);
    assert_eq!(y, 0.0);
}

#[test]
fn applying_the_transform_twice_is_not_idempotent() {
    let transform = CoordinateTransform::raw_data();
    let once = transform.to_centered(CourtPoint::new(6.0, 2.0));
    let twice = transform.to_centered(once);
    assert_ne!(once, twice);
}

#[test]
fn singles_centerline_uses_the_singles_half_width() {
    let transform = CoordinateTransform::singles_centerline();
    assert_abs_diff_eq!(transform.x_offset(), HALF_WIDTH_SINGLES, epsilon = 1e-12);
    let centered = transform.center(CourtPoint::new(HALF_WIDTH_SINGLES, HALF_LENGTH));
    assert_eq!(centered, CourtPoint::new(0.0, 0.0));
}

#[test]
fn custom_offset_must_be_finite() {
    assert!(CoordinateTransform::with_x_offset(f64::NAN).is_err());
    let transform = CoordinateTransform::with_x_offset(0.0).expect("zero offset");
    assert_eq!(transform.center(CourtPoint::new(1.0, HALF_LENGTH)).x, 1.0);
}

#[test]
fn batch_transform_preserves_order() {
    let transform = CoordinateTransform::raw_data();
    let raw = [
        CourtPoint::new(1.0, 1.0),
        CourtPoint::new(2.0, 22.0),
        CourtPoint::new(9.0, 11.0),
    ];
    let centered = transform.to_centered_all(&raw);
    assert_eq!(centered.len(), raw.len());
    for (point, expected) in centered.iter().zip(raw) {
        assert_eq!(*point, transform.to_centered(expected));
    }
}

#[test]
fn fold_leaves_far_half_untouched() {
    let point = CourtPoint::new(-2.0, 4.0);
    assert_eq!(fold_to_canonical_half(point), point);
    assert_eq!(
        fold_to_canonical_half(CourtPoint::new(-2.0, -4.0)),
        CourtPoint::new(2.0, 4.0)
    );
}

#[test]
fn raw_origin_maps_to_the_far_left_corner() {
    let (x, y) = to_centered(0.0, 0.0);
    assert_abs_diff_eq!(x, -5.485, epsilon = 1e-12);
    assert_abs_diff_eq!(y, 11.885, epsilon = 1e-12);
}
