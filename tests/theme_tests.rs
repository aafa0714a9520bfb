use court_rs::render::{Color, MarkerShape};
use court_rs::theme::{CourtTheme, ScatterStyle, ScatterStyleRegistry, ThemeRegistry};
use court_rs::CourtError;

#[test]
fn builtin_themes_validate() {
    let themes = ThemeRegistry::builtin();
    assert_eq!(themes.len(), 6);
    for name in themes.names() {
        themes
            .get(name)
            .expect("listed theme")
            .validate()
            .expect("builtin theme is valid");
    }
}

#[test]
fn bsu_theme_is_transparent_with_zone_color() {
    let themes = ThemeRegistry::builtin();
    let bsu = themes.get("bsu").expect("bsu theme");
    assert!(bsu.pitch_color.is_none());
    assert!(bsu.zone_color.is_some());
    assert_eq!(bsu.line_color, Color::BLACK);
}

#[test]
fn unknown_theme_error_lists_available_names() {
    let themes = ThemeRegistry::builtin();
    match themes.get("carpet") {
        Err(CourtError::InvalidArgument(message)) => {
            assert!(message.contains("carpet"));
            assert!(message.contains("clay"));
        }
        other => panic!("expected invalid argument, got {other:?}"),
    }
}

#[test]
fn json_entries_extend_and_override_builtins() {
    let mut themes = ThemeRegistry::builtin();
    themes
        .merge_json_str(
            r#"{
                "night": {
                    "line_color": { "red": 1.0, "green": 1.0, "blue": 0.0, "alpha": 1.0 },
                    "pitch_color": { "red": 0.0, "green": 0.0, "blue": 0.1, "alpha": 1.0 }
                },
                "hard": {
                    "line_color": { "red": 0.0, "green": 0.0, "blue": 0.0, "alpha": 1.0 }
                }
            }"#,
        )
        .expect("merge themes");

    assert_eq!(themes.len(), 7);
    assert!(themes.contains("night"));
    let hard = themes.get("hard").expect("hard theme");
    assert_eq!(hard.line_color, Color::BLACK);
    assert!(hard.pitch_color.is_none());
    assert_eq!(themes.names().last(), Some("night"));
}

#[test]
fn malformed_registry_json_is_invalid_data() {
    let result = ThemeRegistry::from_json_str("{ not json");
    assert!(matches!(result, Err(CourtError::InvalidData(_))));
}

#[test]
fn scatter_style_json_uses_defaults() {
    let styles = ScatterStyleRegistry::from_json_str(
        r#"{ "dot": { "size": 12.0, "face_color": { "red": 0.0, "green": 0.0, "blue": 0.0, "alpha": 1.0 } } }"#,
    )
    .expect("styles");
    let dot = styles.get("dot").expect("dot style");
    assert_eq!(dot.shape, MarkerShape::Circle);
    assert_eq!(dot.edge_width, 1.0);
    assert_eq!(dot.alpha, 1.0);
    assert!(dot.edge_color.is_none());
}

#[test]
fn builtin_scatter_presets_cover_shot_outcomes() {
    let styles = ScatterStyleRegistry::builtin();
    for name in ["winner_fh", "forcing_bh", "ue", "ace", "standard", "landing"] {
        assert!(styles.contains(name), "missing {name}");
    }
    let ace = styles.get("ace").expect("ace style");
    assert_eq!(ace.shape, MarkerShape::Star);
    assert!(ace.face_color.is_none());
}

#[test]
fn style_alpha_scales_both_colors() {
    let style = ScatterStyle::filled(Color::WHITE, MarkerShape::Triangle, 40.0).with_alpha(0.5);
    let face = style.resolved_face().expect("face");
    let edge = style.resolved_edge().expect("edge");
    assert!((face.alpha - 0.5).abs() <= 1e-12);
    assert!((edge.alpha - 0.5).abs() <= 1e-12);
}

#[test]
fn theme_with_invalid_color_fails_validation() {
    let theme = CourtTheme::new(Color::rgba(1.5, 0.0, 0.0, 1.0), None);
    assert!(theme.validate().is_err());
}
