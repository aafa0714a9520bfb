//! Named court themes and scatter presets.
//!
//! Registries are plain values: build one at startup (usually with
//! `builtin()`), optionally merge user entries from JSON, and pass it by
//! reference to whatever needs a lookup.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{CourtError, CourtResult};
use crate::render::{Color, MarkerShape};

const LIGHT_SEA_GREEN: Color = Color::rgb8(0x20, 0xb2, 0xaa);
const INDIAN_RED: Color = Color::rgb8(0xcd, 0x5c, 0x5c);
const DIM_GREY: Color = Color::rgb8(0x69, 0x69, 0x69);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourtTheme {
    pub line_color: Color,
    /// `None` leaves the court transparent.
    #[serde(default)]
    pub pitch_color: Option<Color>,
    /// Fill used when service zones are highlighted.
    #[serde(default)]
    pub zone_color: Option<Color>,
}

impl Default for CourtTheme {
    fn default() -> Self {
        Self::new(Color::WHITE, Some(Color::rgb8(0x7b, 0xa6, 0xb6)))
    }
}

impl CourtTheme {
    #[must_use]
    pub const fn new(line_color: Color, pitch_color: Option<Color>) -> Self {
        Self {
            line_color,
            pitch_color,
            zone_color: None,
        }
    }

    #[must_use]
    pub const fn with_zone_color(mut self, zone_color: Color) -> Self {
        self.zone_color = Some(zone_color);
        self
    }

    pub fn validate(&self) -> CourtResult<()> {
        self.line_color.validate()?;
        for color in [self.pitch_color, self.zone_color].into_iter().flatten() {
            color.validate()?;
        }
        Ok(())
    }
}

/// Marker preset for scatter overlays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterStyle {
    #[serde(default)]
    pub face_color: Option<Color>,
    #[serde(default)]
    pub edge_color: Option<Color>,
    #[serde(default)]
    pub shape: MarkerShape,
    pub size: f64,
    #[serde(default = "default_edge_width")]
    pub edge_width: f64,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
}

fn default_edge_width() -> f64 {
    1.0
}

fn default_alpha() -> f64 {
    1.0
}

impl Default for ScatterStyle {
    fn default() -> Self {
        Self::outlined(DIM_GREY, MarkerShape::Circle, 30.0)
    }
}

impl ScatterStyle {
    #[must_use]
    pub const fn filled(face: Color, shape: MarkerShape, size: f64) -> Self {
        Self {
            face_color: Some(face),
            edge_color: Some(Color::BLACK),
            shape,
            size,
            edge_width: 0.5,
            alpha: 0.8,
        }
    }

    #[must_use]
    pub const fn outlined(edge: Color, shape: MarkerShape, size: f64) -> Self {
        Self {
            face_color: None,
            edge_color: Some(edge),
            shape,
            size,
            edge_width: 1.0,
            alpha: 1.0,
        }
    }

    #[must_use]
    pub const fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Face color with the style alpha applied.
    #[must_use]
    pub fn resolved_face(&self) -> Option<Color> {
        self.face_color
            .map(|color| color.with_alpha(color.alpha * self.alpha))
    }

    /// Edge color with the style alpha applied.
    #[must_use]
    pub fn resolved_edge(&self) -> Option<Color> {
        self.edge_color
            .map(|color| color.with_alpha(color.alpha * self.alpha))
    }
}

/// Insertion-ordered name → value lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry<T> {
    entries: IndexMap<String, T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T> Registry<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Unknown names are an `InvalidArgument`.
    pub fn get(&self, name: &str) -> CourtResult<&T> {
        self.entries.get(name).ok_or_else(|| {
            CourtError::InvalidArgument(format!(
                "unknown entry `{name}`, expected one of: {}",
                self.entries.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
            ))
        })
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Adds or replaces an entry, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, value: T) -> Option<T> {
        self.entries.insert(name.into(), value)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: DeserializeOwned> Registry<T> {
    /// Parses a JSON object of name → entry.
    pub fn from_json_str(json: &str) -> CourtResult<Self> {
        serde_json::from_str(json)
            .map_err(|err| CourtError::InvalidData(format!("failed to parse registry json: {err}")))
    }

    /// Parses JSON entries and adds them on top of `self`.
    pub fn merge_json_str(&mut self, json: &str) -> CourtResult<()> {
        let extra = Self::from_json_str(json)?;
        self.entries.extend(extra.entries);
        Ok(())
    }
}

pub type ThemeRegistry = Registry<CourtTheme>;
pub type ScatterStyleRegistry = Registry<ScatterStyle>;

impl Registry<CourtTheme> {
    #[must_use]
    pub fn builtin() -> Self {
        let mut themes = Self::new();
        themes.insert(
            "bsu",
            CourtTheme::new(Color::BLACK, None).with_zone_color(LIGHT_SEA_GREEN),
        );
        themes.insert(
            "hard",
            CourtTheme::new(Color::WHITE, Some(Color::rgb8(0x3c, 0x63, 0x8e))),
        );
        themes.insert(
            "clay",
            CourtTheme::new(Color::WHITE, Some(Color::rgb8(0xcc, 0x55, 0x00))),
        );
        themes.insert(
            "grass",
            CourtTheme::new(Color::WHITE, Some(Color::rgb8(0x4b, 0x8b, 0x3b))),
        );
        themes.insert(
            "dark",
            CourtTheme::new(
                Color::rgb8(0xcf, 0xcf, 0xcf),
                Some(Color::rgb8(0x22, 0x22, 0x22)),
            ),
        );
        themes.insert(
            "light",
            CourtTheme::new(Color::BLACK, Some(Color::rgb8(0xf9, 0xf9, 0xf9))),
        );
        themes
    }
}

impl Registry<ScatterStyle> {
    #[must_use]
    pub fn builtin() -> Self {
        use MarkerShape::{Circle, Star, Triangle};

        let mut styles = Self::new();
        // Shot outcomes, split by wing where tagged.
        for (name, face, shape, size) in [
            ("winner_fh", Color::rgb8(0xe6, 0x68, 0x68), Star, 80.0),
            ("forcing_fh", Color::rgb8(0xeb, 0x86, 0x86), Triangle, 40.0),
            ("winner_bh", Color::rgb8(0x55, 0x6e, 0xe6), Star, 80.0),
            ("forcing_bh", Color::rgb8(0x77, 0x8b, 0xeb), Triangle, 40.0),
            ("winner", Color::rgb8(0x3e, 0xc1, 0xd3), Star, 80.0),
            ("forcing", Color::rgb8(0x64, 0xcd, 0xdb), Triangle, 40.0),
        ] {
            styles.insert(name, ScatterStyle::filled(face, shape, size));
        }
        // Errors and aces are drawn hollow.
        for (name, edge, shape, size) in [
            ("ue", INDIAN_RED, Triangle, 40.0),
            ("fe", INDIAN_RED, Triangle, 40.0),
            ("ace", INDIAN_RED, Star, 60.0),
            ("standard", DIM_GREY, Circle, 30.0),
        ] {
            styles.insert(name, ScatterStyle::outlined(edge, shape, size));
        }
        styles.insert(
            "landing",
            ScatterStyle {
                face_color: Some(Color::BLACK),
                edge_color: None,
                shape: Circle,
                size: 10.0,
                edge_width: 0.0,
                alpha: 0.6,
            },
        );
        styles
    }
}
