use std::collections::BTreeMap;
use std::f64::consts::TAU;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CourtError, CourtResult};
use crate::render::Color;

const SLICE_WIDTH_FRACTION: f64 = 0.92;
const COMPARE_WIDTH_FRACTION: f64 = 0.3;
const PARAM_LABEL_RADIUS: f64 = 1.15;
const VALUE_LABEL_OFFSET: f64 = 0.08;
const RADIAL_LIMIT: f64 = 1.2;

/// Background, text and slice colors for one pizza theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PizzaPalette {
    pub background: Color,
    pub text: Color,
    pub inner: Color,
    pub grid: Color,
    pub gradient: &'static [Color],
}

const DARK_GRADIENT: [Color; 6] = [
    Color::rgb8(0xe9, 0x45, 0x60),
    Color::rgb8(0xff, 0x6b, 0x6b),
    Color::rgb8(0xff, 0xa5, 0x02),
    Color::rgb8(0x2e, 0xd5, 0x73),
    Color::rgb8(0x1e, 0x90, 0xff),
    Color::rgb8(0xa5, 0x5e, 0xea),
];

const LIGHT_GRADIENT: [Color; 6] = [
    Color::rgb8(0xe7, 0x4c, 0x3c),
    Color::rgb8(0xe6, 0x7e, 0x22),
    Color::rgb8(0xf1, 0xc4, 0x0f),
    Color::rgb8(0x27, 0xae, 0x60),
    Color::rgb8(0x34, 0x98, 0xdb),
    Color::rgb8(0x9b, 0x59, 0xb6),
];

const BSU_GRADIENT: [Color; 6] = [
    Color::rgb8(0x92, 0xe3, 0xda),
    Color::rgb8(0x5b, 0xc0, 0xbe),
    Color::rgb8(0x3a, 0x86, 0xff),
    Color::rgb8(0x83, 0x38, 0xec),
    Color::rgb8(0xff, 0x00, 0x6e),
    Color::rgb8(0xfb, 0x56, 0x07),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PizzaTheme {
    #[default]
    Dark,
    Light,
    Bsu,
}

impl PizzaTheme {
    /// Unknown names fall back to `Dark`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::Light,
            "bsu" => Self::Bsu,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn palette(self) -> PizzaPalette {
        match self {
            Self::Dark => PizzaPalette {
                background: Color::rgb8(0x1a, 0x1a, 0x2e),
                text: Color::WHITE,
                inner: Color::rgb8(0x16, 0x21, 0x3e),
                grid: Color::rgb8(0x0f, 0x34, 0x60),
                gradient: &DARK_GRADIENT,
            },
            Self::Light => PizzaPalette {
                background: Color::WHITE,
                text: Color::rgb8(0x2d, 0x2d, 0x2d),
                inner: Color::rgb8(0xf0, 0xf0, 0xf0),
                grid: Color::rgb8(0xe0, 0xe0, 0xe0),
                gradient: &LIGHT_GRADIENT,
            },
            Self::Bsu => PizzaPalette {
                background: Color::rgb8(0x0d, 0x1b, 0x2a),
                text: Color::WHITE,
                inner: Color::rgb8(0x1b, 0x26, 0x3b),
                grid: Color::rgb8(0x41, 0x5a, 0x77),
                gradient: &BSU_GRADIENT,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PizzaConfig {
    #[serde(default)]
    pub theme: PizzaTheme,
    #[serde(default = "default_inner_circle_size")]
    pub inner_circle_size: f64,
    /// Replaces the gradient color of the slice at that index.
    #[serde(default)]
    pub slice_colors: BTreeMap<usize, Color>,
    /// Replaces the parameter label color at that index.
    #[serde(default)]
    pub text_colors: BTreeMap<usize, Color>,
}

fn default_inner_circle_size() -> f64 {
    0.4
}

impl Default for PizzaConfig {
    fn default() -> Self {
        Self {
            theme: PizzaTheme::default(),
            inner_circle_size: default_inner_circle_size(),
            slice_colors: BTreeMap::new(),
            text_colors: BTreeMap::new(),
        }
    }
}

impl PizzaConfig {
    #[must_use]
    pub fn with_theme(mut self, theme: PizzaTheme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_inner_circle_size(mut self, size: f64) -> Self {
        self.inner_circle_size = size;
        self
    }

    #[must_use]
    pub fn with_slice_color(mut self, index: usize, color: Color) -> Self {
        self.slice_colors.insert(index, color);
        self
    }

    #[must_use]
    pub fn with_text_color(mut self, index: usize, color: Color) -> Self {
        self.text_colors.insert(index, color);
        self
    }

    pub fn validate(&self) -> CourtResult<()> {
        if !self.inner_circle_size.is_finite() || self.inner_circle_size < 0.0 {
            return Err(CourtError::InvalidData(
                "pizza inner circle size must be finite and >= 0".to_owned(),
            ));
        }
        for color in self.slice_colors.values().chain(self.text_colors.values()) {
            color.validate()?;
        }
        Ok(())
    }
}

/// Text placed at a polar position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarText {
    pub text: String,
    pub angle: f64,
    pub radius: f64,
    pub color: Color,
}

/// One radial bar. `bottom` is the inner circle radius; the bar spans
/// `bottom..bottom + radius`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PizzaSlice {
    pub param: String,
    pub value: f64,
    pub angle: f64,
    pub width: f64,
    pub bottom: f64,
    pub radius: f64,
    pub color: Color,
    pub compare_radius: Option<f64>,
    pub compare_width: f64,
    pub param_label: PolarText,
    pub value_label: PolarText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PizzaLayout {
    pub title: String,
    pub slices: Vec<PizzaSlice>,
    pub inner_radius: f64,
    pub inner_color: Color,
    pub background: Color,
    pub text_color: Color,
    pub radial_limit: f64,
}

fn ensure_finite_values(values: &[f64], what: &str) -> CourtResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(CourtError::InvalidData(format!("pizza {what} must be finite")))
    }
}

/// Lays out a pizza chart for values on a 0-100 scale.
pub fn layout_pizza(
    title: impl Into<String>,
    params: &[&str],
    values: &[f64],
    compare: Option<&[f64]>,
    config: &PizzaConfig,
) -> CourtResult<PizzaLayout> {
    config.validate()?;
    let count = params.len();
    if count == 0 {
        return Err(CourtError::InvalidData(
            "pizza needs at least one parameter".to_owned(),
        ));
    }
    if values.len() != count {
        return Err(CourtError::InvalidData(format!(
            "pizza params ({count}) and values ({}) must have the same length",
            values.len()
        )));
    }
    ensure_finite_values(values, "values")?;
    if let Some(compare) = compare {
        if compare.len() != count {
            return Err(CourtError::InvalidData(format!(
                "pizza params ({count}) and comparison values ({}) must have the same length",
                compare.len()
            )));
        }
        ensure_finite_values(compare, "comparison values")?;
    }

    let palette = config.theme.palette();
    let gradient_len = palette.gradient.len();
    let step = TAU / count as f64;
    let inner = config.inner_circle_size;

    let slices = params
        .iter()
        .zip(values)
        .enumerate()
        .map(|(index, (param, &value))| {
            let angle = index as f64 * step;
            let color = config
                .slice_colors
                .get(&index)
                .copied()
                .unwrap_or(palette.gradient[(index * gradient_len / count) % gradient_len]);

            let value_color = if value > 50.0 {
                Color::WHITE
            } else if value > 30.0 {
                color
            } else {
                palette.text
            };

            PizzaSlice {
                param: (*param).to_owned(),
                value,
                angle,
                width: step * SLICE_WIDTH_FRACTION,
                bottom: inner,
                radius: (value / 100.0).clamp(0.1, 1.0),
                color,
                compare_radius: compare.map(|compare| (compare[index] / 100.0).clamp(0.05, 1.0)),
                compare_width: step * COMPARE_WIDTH_FRACTION,
                param_label: PolarText {
                    text: (*param).to_owned(),
                    angle,
                    radius: PARAM_LABEL_RADIUS,
                    color: config
                        .text_colors
                        .get(&index)
                        .copied()
                        .unwrap_or(palette.text),
                },
                value_label: PolarText {
                    text: format!("{value:.0}"),
                    angle,
                    radius: inner + (value / 100.0) / 2.0 + VALUE_LABEL_OFFSET,
                    color: value_color,
                },
            }
        })
        .collect();

    Ok(PizzaLayout {
        title: title.into(),
        slices,
        inner_radius: inner,
        inner_color: palette.inner,
        background: palette.background,
        text_color: palette.text,
        radial_limit: RADIAL_LIMIT,
    })
}

/// Pizza chart from ordered stat name → value pairs, using the `bsu` theme.
pub fn pizza(title: impl Into<String>, stats: &IndexMap<String, f64>) -> CourtResult<PizzaLayout> {
    let params: Vec<&str> = stats.keys().map(String::as_str).collect();
    let values: Vec<f64> = stats.values().copied().collect();
    layout_pizza(
        title,
        &params,
        &values,
        None,
        &PizzaConfig::default().with_theme(PizzaTheme::Bsu),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_spreads_over_fewer_slices() {
        let layout = layout_pizza(
            "p",
            &["a", "b", "c"],
            &[10.0, 20.0, 30.0],
            None,
            &PizzaConfig::default(),
        )
        .expect("layout");
        assert_eq!(layout.slices[0].color, DARK_GRADIENT[0]);
        assert_eq!(layout.slices[1].color, DARK_GRADIENT[2]);
        assert_eq!(layout.slices[2].color, DARK_GRADIENT[4]);
    }

    #[test]
    fn unknown_theme_name_falls_back_to_dark() {
        assert_eq!(PizzaTheme::from_name("neon"), PizzaTheme::Dark);
        assert_eq!(PizzaTheme::from_name("bsu"), PizzaTheme::Bsu);
    }
}
