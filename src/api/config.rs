use serde::{Deserialize, Serialize};

use crate::core::{CourtGeometry, CourtType, GuideOptions, Orientation};
use crate::error::{CourtError, CourtResult};
use crate::render::CourtStyle;

/// Public chart bootstrap configuration.
///
/// Serializable so host applications can persist court setups as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourtConfig {
    #[serde(default)]
    pub court_type: CourtType,
    #[serde(default = "default_orientation")]
    pub orientation: Orientation,
    #[serde(default)]
    pub half: bool,
    /// Registry theme name; `None` uses `CourtTheme::default()`.
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default)]
    pub show_axis: bool,
    #[serde(default)]
    pub guides: GuideOptions,
}

fn default_orientation() -> Orientation {
    Orientation::Horizontal
}

fn default_line_width() -> f64 {
    2.0
}

fn default_padding() -> f64 {
    2.0
}

impl Default for CourtConfig {
    fn default() -> Self {
        Self::new(CourtType::default(), default_orientation(), false)
    }
}

impl CourtConfig {
    #[must_use]
    pub fn new(court_type: CourtType, orientation: Orientation, half: bool) -> Self {
        Self {
            court_type,
            orientation,
            half,
            theme: None,
            line_width: default_line_width(),
            padding: default_padding(),
            show_axis: false,
            guides: GuideOptions::default(),
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_axis(mut self, show_axis: bool) -> Self {
        self.show_axis = show_axis;
        self
    }

    #[must_use]
    pub fn with_guides(mut self, guides: GuideOptions) -> Self {
        self.guides = guides;
        self
    }

    #[must_use]
    pub fn geometry(&self) -> CourtGeometry {
        CourtGeometry::new(self.court_type, self.orientation, self.half)
    }

    #[must_use]
    pub fn court_style(&self) -> CourtStyle {
        CourtStyle {
            line_width: self.line_width,
            padding: self.padding,
            show_axis: self.show_axis,
        }
    }

    pub fn validate(&self) -> CourtResult<()> {
        if let Some(theme) = &self.theme {
            if theme.trim().is_empty() {
                return Err(CourtError::InvalidArgument(
                    "theme name must not be empty".to_owned(),
                ));
            }
        }
        self.court_style().validate()
    }

    pub fn from_json_str(json: &str) -> CourtResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CourtError::InvalidData(format!("failed to parse court config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> CourtResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CourtError::InvalidData(format!("failed to serialize court config: {e}")))
    }
}
