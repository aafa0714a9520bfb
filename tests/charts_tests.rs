use std::f64::consts::{FRAC_PI_2, TAU};

use approx::assert_abs_diff_eq;
use court_rs::charts::{
    PizzaConfig, PizzaTheme, Radar, RadarRings, SonarConfig, SonarGrid, SonarScheme, SonarZone,
    layout_pizza, pizza, shot_bearing, sonar_from_shots, sonar_wedges, zone_grid,
};
use court_rs::core::dimensions::{HALF_LENGTH, HALF_WIDTH_SINGLES, ZONE_GRID_LENGTH};
use court_rs::core::{CourtPoint, Orientation};
use court_rs::render::Color;
use court_rs::CourtError;
use indexmap::IndexMap;

fn four_param_radar() -> Radar {
    Radar::new(
        &["aces", "winners", "errors", "net points"],
        &[0.0, 0.0, 0.0, 0.0],
        &[10.0, 10.0, 10.0, 10.0],
    )
    .expect("radar")
}

#[test]
fn radar_angles_are_evenly_spaced_and_closed() {
    let angles = four_param_radar().angles();
    assert_eq!(angles.len(), 5);
    assert_eq!(angles[0], 0.0);
    assert_eq!(angles[4], 0.0);
    assert_abs_diff_eq!(angles[1], FRAC_PI_2, epsilon = 1e-12);
}

#[test]
fn radar_normalizes_and_clips_to_unit_range() {
    let radar = four_param_radar();
    let normalized = radar.normalize(&[5.0, 15.0, -1.0, 10.0]).expect("normalize");
    assert_eq!(normalized, vec![0.5, 1.0, 0.0, 1.0]);
    assert_eq!(radar.scale_to_rings(&normalized), vec![3.0, 5.0, 1.0, 5.0]);
}

#[test]
fn lower_is_better_inverts_the_scale() {
    let radar = four_param_radar().with_lower_is_better(&["errors", "unknown"]);
    let normalized = radar.normalize(&[5.0, 5.0, 2.0, 5.0]).expect("normalize");
    assert_abs_diff_eq!(normalized[2], 0.8, epsilon = 1e-12);
    assert_abs_diff_eq!(normalized[0], 0.5, epsilon = 1e-12);
    assert!(radar.params()[2].lower_is_better);
    assert!(!radar.params()[0].lower_is_better);
}

#[test]
fn radar_polygon_closes_on_the_first_vertex() {
    let polygon = four_param_radar()
        .polygon(&[10.0, 0.0, 5.0, 5.0])
        .expect("polygon");
    assert_eq!(polygon.len(), 5);
    assert_eq!(polygon[0], polygon[4]);
    assert_eq!(polygon[0].radius, 5.0);
    assert_eq!(polygon[1].radius, 1.0);
}

#[test]
fn radar_rings_and_labels() {
    let radar = four_param_radar();
    assert_eq!(radar.ring_radii(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    let labels = radar.label_positions();
    assert_eq!(labels.len(), 4);
    assert!(labels.iter().all(|label| label.radius == 5.5));
    assert_eq!(labels[3].text, "net points");

    let wide = radar
        .with_rings(RadarRings {
            num_rings: 2,
            ring_width: 2.0,
            center_circle_radius: 0.5,
        })
        .expect("rings");
    assert_eq!(wide.ring_radii(), vec![0.5, 2.5, 4.5]);
}

#[test]
fn radar_rejects_bad_parameters() {
    assert!(matches!(
        Radar::new(&["a", "b"], &[0.0], &[1.0, 1.0]),
        Err(CourtError::InvalidData(_))
    ));
    assert!(Radar::new(&["a"], &[1.0], &[1.0]).is_err());
    assert!(Radar::new(&[], &[], &[]).is_err());
    assert!(four_param_radar().normalize(&[1.0]).is_err());
    assert!(
        four_param_radar()
            .with_rings(RadarRings {
                num_rings: 0,
                ..RadarRings::default()
            })
            .is_err()
    );
}

#[test]
fn pizza_slices_clamp_radii_and_place_value_labels() {
    let layout = layout_pizza(
        "Player",
        &["aces", "winners", "returns"],
        &[80.0, 40.0, 5.0],
        Some(&[10.0, 200.0, 3.0][..]),
        &PizzaConfig::default(),
    )
    .expect("pizza");

    let slices = &layout.slices;
    assert_eq!(slices.len(), 3);
    assert_abs_diff_eq!(slices[0].radius, 0.8, epsilon = 1e-12);
    assert_abs_diff_eq!(slices[2].radius, 0.1, epsilon = 1e-12);
    assert_eq!(slices[0].compare_radius, Some(0.1));
    assert_eq!(slices[1].compare_radius, Some(1.0));
    assert_eq!(slices[2].compare_radius, Some(0.05));
    assert_abs_diff_eq!(slices[0].width, TAU / 3.0 * 0.92, epsilon = 1e-12);
    assert_abs_diff_eq!(slices[0].value_label.radius, 0.4 + 0.4 + 0.08, epsilon = 1e-12);
    assert_eq!(slices[0].value_label.text, "80");
    assert_eq!(slices[1].param_label.radius, 1.15);
}

#[test]
fn pizza_value_label_colors_follow_value_bands() {
    let layout = layout_pizza(
        "Player",
        &["a", "b", "c"],
        &[80.0, 40.0, 20.0],
        None,
        &PizzaConfig::default(),
    )
    .expect("pizza");
    let palette = PizzaTheme::Dark.palette();

    assert_eq!(layout.slices[0].value_label.color, Color::WHITE);
    assert_eq!(layout.slices[1].value_label.color, layout.slices[1].color);
    assert_eq!(layout.slices[2].value_label.color, palette.text);
    assert!(layout.slices.iter().all(|slice| slice.compare_radius.is_none()));
}

#[test]
fn pizza_slice_color_overrides_replace_the_gradient() {
    let config = PizzaConfig::default()
        .with_slice_color(1, Color::BLACK)
        .with_text_color(0, Color::BLACK);
    let layout = layout_pizza("P", &["a", "b"], &[10.0, 10.0], None, &config).expect("pizza");
    assert_eq!(layout.slices[1].color, Color::BLACK);
    assert_eq!(layout.slices[0].param_label.color, Color::BLACK);
    assert_ne!(layout.slices[0].color, Color::BLACK);
}

#[test]
fn pizza_rejects_mismatched_lengths() {
    let config = PizzaConfig::default();
    assert!(matches!(
        layout_pizza("P", &["a", "b"], &[1.0], None, &config),
        Err(CourtError::InvalidData(_))
    ));
    assert!(layout_pizza("P", &["a"], &[1.0], Some(&[1.0, 2.0][..]), &config).is_err());
    assert!(layout_pizza("P", &[], &[], None, &config).is_err());
}

#[test]
fn pizza_from_ordered_stats_uses_bsu_theme() {
    let mut stats = IndexMap::new();
    stats.insert("1st serve %".to_owned(), 68.0);
    stats.insert("aces".to_owned(), 85.0);
    let layout = pizza("Player", &stats).expect("pizza");

    assert_eq!(layout.title, "Player");
    assert_eq!(layout.slices[0].param, "1st serve %");
    assert_eq!(layout.slices[1].param, "aces");
    assert_eq!(layout.background, PizzaTheme::Bsu.palette().background);
}

#[test]
fn zone_grid_centers_cells_over_singles_width() {
    let zones = zone_grid(2, 3, true).expect("grid");
    assert_eq!(zones.len(), 6);
    assert_abs_diff_eq!(
        zones[0].center.x,
        -HALF_WIDTH_SINGLES + HALF_WIDTH_SINGLES / 3.0,
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(zones[0].center.y, ZONE_GRID_LENGTH / 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(zones[4].center.x, 0.0, epsilon = 1e-12);
    assert!(zones.iter().all(|zone| zone.directions.is_empty()));

    let full = zone_grid(2, 1, false).expect("full grid");
    assert_abs_diff_eq!(full[0].center.y, -ZONE_GRID_LENGTH / 2.0, epsilon = 1e-12);
    assert!(matches!(
        zone_grid(0, 3, true),
        Err(CourtError::InvalidArgument(_))
    ));
}

#[test]
fn shot_bearing_wraps_into_a_full_turn() {
    assert_abs_diff_eq!(shot_bearing(1.0, 1.0), 45.0, epsilon = 1e-9);
    assert_abs_diff_eq!(shot_bearing(-1.0, 1.0), 315.0, epsilon = 1e-9);
    let bearing = shot_bearing(-1.0, -1e-12);
    assert!((0.0..360.0).contains(&bearing));
}

#[test]
fn shots_are_binned_by_zone_and_direction() {
    let origins = [
        CourtPoint::new(0.0, 3.0),
        CourtPoint::new(0.5, 2.0),
        CourtPoint::new(0.0, -1.0),
        CourtPoint::new(f64::NAN, 3.0),
    ];
    let deltas = [
        CourtPoint::new(0.0, 1.0),
        CourtPoint::new(1.0, 0.0),
        CourtPoint::new(0.0, 1.0),
        CourtPoint::new(0.0, 1.0),
    ];
    let zones = sonar_from_shots(&origins, &deltas, SonarGrid::default(), 6).expect("sonar");

    assert_eq!(zones.len(), 6);
    assert_eq!(zones[1].directions, vec![1.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
    let total: f64 = zones.iter().flat_map(|zone| &zone.directions).sum();
    assert_eq!(total, 2.0);
}

#[test]
fn sonar_from_shots_validates_inputs() {
    let origin = [CourtPoint::new(0.0, 3.0)];
    assert!(matches!(
        sonar_from_shots(&origin, &[], SonarGrid::default(), 6),
        Err(CourtError::InvalidData(_))
    ));
    assert!(matches!(
        sonar_from_shots(&origin, &origin, SonarGrid::default(), 0),
        Err(CourtError::InvalidArgument(_))
    ));
}

#[test]
fn sonar_wedges_scale_with_the_busiest_direction() {
    let zones = [SonarZone {
        center: CourtPoint::new(1.0, 4.0),
        directions: vec![3.0, 1.0, 0.0, 0.0, 0.0, 0.0],
    }];
    let layout = sonar_wedges(&zones, &SonarConfig::default()).expect("wedges");

    assert_eq!(layout.wedges.len(), 6);
    assert_abs_diff_eq!(layout.wedges[0].radius, 1.8, epsilon = 1e-12);
    assert_abs_diff_eq!(layout.wedges[2].radius, 1.8 * 0.3, epsilon = 1e-12);
    assert_abs_diff_eq!(layout.wedges[0].theta1, 60.0, epsilon = 1e-12);
    assert_abs_diff_eq!(layout.wedges[0].theta2, 120.0, epsilon = 1e-12);
    assert_abs_diff_eq!(layout.wedges[1].theta1, 0.0, epsilon = 1e-12);

    assert_eq!(layout.labels.len(), 2);
    assert_eq!(layout.labels[0].text, "75%");
    assert_eq!(layout.labels[0].color, Color::WHITE);
    assert_eq!(layout.labels[1].text, "25%");
    assert_abs_diff_eq!(layout.labels[0].position.x, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(layout.labels[0].position.y, 4.0 + 1.8 * 0.65, epsilon = 1e-9);

    assert_eq!(layout.hubs.len(), 1);
    assert_abs_diff_eq!(layout.hubs[0].radius, 1.8 * 0.15, epsilon = 1e-12);
}

#[test]
fn empty_zone_draws_minimum_wedges_without_labels() {
    let zones = [SonarZone {
        center: CourtPoint::new(0.0, 2.0),
        directions: vec![0.0; 6],
    }];
    let layout = sonar_wedges(&zones, &SonarConfig::default()).expect("wedges");
    assert!(layout.labels.is_empty());
    assert!(
        layout
            .wedges
            .iter()
            .all(|wedge| (wedge.radius - 1.8 * 0.3).abs() <= 1e-12)
    );
}

#[test]
fn horizontal_sonar_swaps_zone_centers() {
    let zones = [SonarZone {
        center: CourtPoint::new(1.0, 4.0),
        directions: vec![1.0; 4],
    }];
    let config = SonarConfig::default()
        .with_directions(4)
        .with_orientation(Orientation::Horizontal);
    let layout = sonar_wedges(&zones, &config).expect("wedges");
    assert!(
        layout
            .wedges
            .iter()
            .all(|wedge| wedge.center == CourtPoint::new(4.0, 1.0))
    );
}

#[test]
fn sonar_rejects_direction_count_mismatch() {
    let zones = [SonarZone {
        center: CourtPoint::new(0.0, 2.0),
        directions: vec![1.0; 4],
    }];
    assert!(matches!(
        sonar_wedges(&zones, &SonarConfig::default()),
        Err(CourtError::InvalidData(_))
    ));
}

#[test]
fn color_schemes_cycle_and_fall_back() {
    assert_eq!(SonarScheme::from_name("neon"), SonarScheme::Bsu);
    let colors = SonarScheme::Heat.cycled(10);
    assert_eq!(colors.len(), 10);
    assert_eq!(colors[8], colors[0]);
    assert_eq!(colors[9], colors[1]);
}

#[test]
fn shots_from_the_baseline_are_counted() {
    let origins = [
        CourtPoint::new(0.0, HALF_LENGTH),
        CourtPoint::new(0.0, 11.887),
        CourtPoint::new(0.0, ZONE_GRID_LENGTH),
    ];
    let deltas = [CourtPoint::new(0.0, 1.0); 3];
    let zones = sonar_from_shots(&origins, &deltas, SonarGrid::default(), 6).expect("sonar");

    assert_eq!(zones[4].directions[0], 2.0);
    let total: f64 = zones.iter().flat_map(|zone| &zone.directions).sum();
    assert_eq!(total, 2.0);

    let full = SonarGrid {
        half: false,
        ..SonarGrid::default()
    };
    let zones = sonar_from_shots(&[CourtPoint::new(0.0, -HALF_LENGTH)], &deltas[..1], full, 6)
        .expect("full-court sonar");
    assert_eq!(zones[1].directions[0], 1.0);
}
