use std::collections::HashSet;
use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::error::{CourtError, CourtResult};

/// Ring layout of a radar chart, in polar radius units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarRings {
    pub num_rings: usize,
    pub ring_width: f64,
    pub center_circle_radius: f64,
}

impl Default for RadarRings {
    fn default() -> Self {
        Self {
            num_rings: 4,
            ring_width: 1.0,
            center_circle_radius: 1.0,
        }
    }
}

impl RadarRings {
    pub fn validate(self) -> CourtResult<()> {
        if self.num_rings == 0 {
            return Err(CourtError::InvalidData(
                "radar needs at least one ring".to_owned(),
            ));
        }
        if !self.ring_width.is_finite() || self.ring_width <= 0.0 {
            return Err(CourtError::InvalidData(
                "radar ring width must be finite and > 0".to_owned(),
            ));
        }
        if !self.center_circle_radius.is_finite() || self.center_circle_radius < 0.0 {
            return Err(CourtError::InvalidData(
                "radar center radius must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn outer_radius(self) -> f64 {
        self.center_circle_radius + self.num_rings as f64 * self.ring_width
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarParam {
    pub name: String,
    pub low: f64,
    pub high: f64,
    /// Low raw values score towards the outer edge.
    pub lower_is_better: bool,
}

/// A point in polar plot space: `angle` in radians, `radius` in ring units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarPoint {
    pub angle: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarLabel {
    pub text: String,
    pub angle: f64,
    pub radius: f64,
}

/// Radar chart layout: parameter ranges, angles and ring scaling.
///
/// Always holds at least one parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Radar {
    params: Vec<RadarParam>,
    rings: RadarRings,
}

impl Radar {
    /// Builds a radar from parallel name/low/high slices.
    pub fn new(names: &[&str], low: &[f64], high: &[f64]) -> CourtResult<Self> {
        if names.is_empty() {
            return Err(CourtError::InvalidData(
                "radar needs at least one parameter".to_owned(),
            ));
        }
        if names.len() != low.len() || names.len() != high.len() {
            return Err(CourtError::InvalidData(format!(
                "radar params ({}), low ({}) and high ({}) must have the same length",
                names.len(),
                low.len(),
                high.len()
            )));
        }

        let mut params = Vec::with_capacity(names.len());
        for ((name, low), high) in names.iter().zip(low).zip(high) {
            if !low.is_finite() || !high.is_finite() || low == high {
                return Err(CourtError::InvalidData(format!(
                    "radar range for `{name}` must be finite and non-empty"
                )));
            }
            params.push(RadarParam {
                name: (*name).to_owned(),
                low: *low,
                high: *high,
                lower_is_better: false,
            });
        }

        Ok(Self {
            params,
            rings: RadarRings::default(),
        })
    }

    /// Marks the named parameters as lower-is-better; unknown names are ignored.
    #[must_use]
    pub fn with_lower_is_better(mut self, names: &[&str]) -> Self {
        let names: HashSet<&str> = names.iter().copied().collect();
        for param in &mut self.params {
            param.lower_is_better = names.contains(param.name.as_str());
        }
        self
    }

    pub fn with_rings(mut self, rings: RadarRings) -> CourtResult<Self> {
        rings.validate()?;
        self.rings = rings;
        Ok(self)
    }

    #[must_use]
    pub fn params(&self) -> &[RadarParam] {
        &self.params
    }

    #[must_use]
    pub fn rings(&self) -> RadarRings {
        self.rings
    }

    /// Evenly spaced axis angles starting at 0, with the first repeated at the
    /// end to close the polygon.
    #[must_use]
    pub fn angles(&self) -> Vec<f64> {
        let count = self.params.len();
        let step = TAU / count as f64;
        (0..count)
            .map(|index| index as f64 * step)
            .chain(std::iter::once(0.0))
            .collect()
    }

    /// Maps raw values to `[0, 1]` per parameter range.
    pub fn normalize(&self, values: &[f64]) -> CourtResult<Vec<f64>> {
        if values.len() != self.params.len() {
            return Err(CourtError::InvalidData(format!(
                "radar expects {} values, got {}",
                self.params.len(),
                values.len()
            )));
        }

        Ok(self
            .params
            .iter()
            .zip(values)
            .map(|(param, value)| {
                let span = param.high - param.low;
                let normalized = if param.lower_is_better {
                    (param.high - value) / span
                } else {
                    (value - param.low) / span
                };
                normalized.clamp(0.0, 1.0)
            })
            .collect())
    }

    /// `0` lands on the center circle, `1` on the outermost ring.
    #[must_use]
    pub fn scale_to_rings(&self, normalized: &[f64]) -> Vec<f64> {
        let span = self.rings.num_rings as f64 * self.rings.ring_width;
        normalized
            .iter()
            .map(|value| self.rings.center_circle_radius + value * span)
            .collect()
    }

    /// Closed polygon for one set of raw values.
    pub fn polygon(&self, values: &[f64]) -> CourtResult<Vec<PolarPoint>> {
        let mut radii = self.scale_to_rings(&self.normalize(values)?);
        if let Some(first) = radii.first().copied() {
            radii.push(first);
        }
        Ok(self
            .angles()
            .into_iter()
            .zip(radii)
            .map(|(angle, radius)| PolarPoint { angle, radius })
            .collect())
    }

    /// Background ring radii from the center circle outwards.
    #[must_use]
    pub fn ring_radii(&self) -> Vec<f64> {
        (0..=self.rings.num_rings)
            .map(|ring| self.rings.center_circle_radius + ring as f64 * self.rings.ring_width)
            .collect()
    }

    /// Parameter labels half a ring outside the outermost ring.
    #[must_use]
    pub fn label_positions(&self) -> Vec<RadarLabel> {
        let radius = self.rings.outer_radius() + self.rings.ring_width * 0.5;
        self.angles()
            .into_iter()
            .zip(&self.params)
            .map(|(angle, param)| RadarLabel {
                text: param.name.clone(),
                angle,
                radius,
            })
            .collect()
    }
}
