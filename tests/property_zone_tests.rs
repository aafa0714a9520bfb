use court_rs::core::dimensions::{HALF_LENGTH, HALF_WIDTH_SINGLES, SERVICE_LINE_DISTANCE};
use court_rs::core::{
    CoordinateTransform, CourtPoint, DepthZone, ServeZone, classify_depth, classify_serve_zone,
    to_centered,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn centered_points_are_never_behind_the_net(x in -50.0f64..50.0, y in -50.0f64..80.0) {
        let (_, centered_y) = to_centered(x, y);
        prop_assert!(centered_y >= 0.0);
    }

    #[test]
    fn centered_distance_from_net_matches_raw(x in 0.0f64..11.0, y in 0.0f64..23.77) {
        let (_, centered_y) = to_centered(x, y);
        prop_assert!((centered_y - (HALF_LENGTH - y).abs()).abs() <= 1e-9);
    }

    #[test]
    fn batch_transform_matches_pointwise(
        points in proptest::collection::vec((0.0f64..11.0, 0.0f64..23.77), 0..64)
    ) {
        let transform = CoordinateTransform::raw_data();
        let raw: Vec<CourtPoint> = points.into_iter().map(CourtPoint::from).collect();
        let batch = transform.to_centered_all(&raw);
        prop_assert_eq!(batch.len(), raw.len());
        for (centered, original) in batch.iter().zip(&raw) {
            prop_assert_eq!(*centered, transform.to_centered(*original));
        }
    }

    #[test]
    fn depth_is_monotonic(a in -5.0f64..20.0, b in -5.0f64..20.0) {
        let rank = |zone: DepthZone| match zone {
            DepthZone::Short => 0,
            DepthZone::Medium => 1,
            DepthZone::Deep => 2,
        };
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rank(classify_depth(low)) <= rank(classify_depth(high)));
    }

    #[test]
    fn depth_sequence_matches_scalar(values in proptest::collection::vec(-5.0f64..20.0, 0..64)) {
        let labels = classify_depth(&values);
        prop_assert_eq!(labels.len(), values.len());
        for (label, value) in labels.iter().zip(&values) {
            prop_assert_eq!(*label, classify_depth(*value));
        }
    }

    #[test]
    fn serve_zone_is_mirror_symmetric(x in 0.0f64..5.0, y in 0.01f64..SERVICE_LINE_DISTANCE) {
        // Band edges are closed on the low side, so exact edges differ by side.
        let third = HALF_WIDTH_SINGLES / 3.0;
        prop_assume!(x != third && x != 2.0 * third);
        prop_assert_eq!(classify_serve_zone(x, y), classify_serve_zone(-x, y));
    }

    #[test]
    fn points_inside_the_service_boxes_are_never_out(
        x in -HALF_WIDTH_SINGLES..=HALF_WIDTH_SINGLES,
        y in 0.001f64..=SERVICE_LINE_DISTANCE
    ) {
        prop_assert_ne!(classify_serve_zone(x, y), ServeZone::Out);
    }
}
