use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

#[cfg(feature = "parallel-classification")]
use rayon::prelude::*;

use crate::core::dimensions::{
    DEEP_LINE_DISTANCE, HALF_LENGTH, HALF_WIDTH_SINGLES, SERVICE_LINE_DISTANCE,
};
use crate::core::transform::CoordinateTransform;
use crate::core::types::CourtPoint;
use crate::error::{CourtError, CourtResult};

/// Landing zone of a serve inside the service boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServeZone {
    Wide,
    Body,
    T,
    /// Long, into the net, or wider than the singles sideline.
    Out,
}

impl ServeZone {
    pub const ALL: [Self; 4] = [Self::Wide, Self::Body, Self::T, Self::Out];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wide => "Wide",
            Self::Body => "Body",
            Self::T => "T",
            Self::Out => "Out",
        }
    }

    #[must_use]
    pub const fn is_in(self) -> bool {
        !matches!(self, Self::Out)
    }
}

impl fmt::Display for ServeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Landing depth of a shot measured from the net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepthZone {
    Short,
    Medium,
    Deep,
}

impl DepthZone {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Short => "Short",
            Self::Medium => "Medium",
            Self::Deep => "Deep",
        }
    }
}

impl fmt::Display for DepthZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a centered, folded point into a serve zone.
///
/// `y` must be the distance from the net on the canonical half. Each service
/// box is split into three equal bands of `HALF_WIDTH_SINGLES / 3`. Band edges
/// are closed on the low side, and the center line and both singles sidelines
/// are inclusive.
#[must_use]
#[allow(clippy::if_same_then_else)]
pub fn classify_serve_zone(x: f64, y: f64) -> ServeZone {
    if !(y > 0.0 && y <= SERVICE_LINE_DISTANCE) {
        return ServeZone::Out;
    }

    let h = HALF_WIDTH_SINGLES;
    let third = h / 3.0;

    if -h <= x && x < -2.0 * third {
        ServeZone::Wide
    } else if -2.0 * third <= x && x < -third {
        ServeZone::Body
    } else if -third <= x && x <= 0.0 {
        ServeZone::T
    } else if 0.0 <= x && x < third {
        ServeZone::T
    } else if third <= x && x < 2.0 * third {
        ServeZone::Body
    } else if 2.0 * third <= x && x <= h {
        ServeZone::Wide
    } else {
        ServeZone::Out
    }
}

/// Point form of [`classify_serve_zone`].
#[must_use]
pub fn classify_serve_point(point: CourtPoint) -> ServeZone {
    classify_serve_zone(point.x, point.y)
}

/// Classifies a batch of centered points, preserving input order.
#[must_use]
pub fn classify_serve_zones(points: &[CourtPoint]) -> Vec<ServeZone> {
    #[cfg(feature = "parallel-classification")]
    {
        points.par_iter().map(|point| classify_serve_point(*point)).collect()
    }

    #[cfg(not(feature = "parallel-classification"))]
    {
        points.iter().map(|point| classify_serve_point(*point)).collect()
    }
}

/// Depth thresholds measured from the net.
///
/// `max_length` bounds the configured thresholds only; landings past it still
/// classify as `Deep`, and negative depths classify as `Short`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDepthBands")]
pub struct DepthBands {
    short_max: f64,
    medium_max: f64,
    max_length: f64,
}

#[derive(Deserialize)]
struct RawDepthBands {
    short_max: f64,
    medium_max: f64,
    max_length: f64,
}

impl TryFrom<RawDepthBands> for DepthBands {
    type Error = CourtError;

    fn try_from(raw: RawDepthBands) -> CourtResult<Self> {
        Self::new(raw.short_max, raw.medium_max, raw.max_length)
    }
}

impl Default for DepthBands {
    fn default() -> Self {
        Self {
            short_max: SERVICE_LINE_DISTANCE,
            medium_max: DEEP_LINE_DISTANCE,
            max_length: HALF_LENGTH,
        }
    }
}

impl DepthBands {
    pub fn new(short_max: f64, medium_max: f64, max_length: f64) -> CourtResult<Self> {
        if !short_max.is_finite() || !medium_max.is_finite() || !max_length.is_finite() {
            return Err(CourtError::InvalidData(
                "depth thresholds must be finite".to_owned(),
            ));
        }
        if short_max <= 0.0 || short_max >= medium_max || medium_max > max_length {
            return Err(CourtError::InvalidData(
                "depth thresholds must satisfy 0 < short < medium <= max length".to_owned(),
            ));
        }
        Ok(Self {
            short_max,
            medium_max,
            max_length,
        })
    }

    /// Default thresholds checked against a different court length.
    pub fn with_max_length(max_length: f64) -> CourtResult<Self> {
        Self::new(SERVICE_LINE_DISTANCE, DEEP_LINE_DISTANCE, max_length)
    }

    #[must_use]
    pub fn short_max(self) -> f64 {
        self.short_max
    }

    #[must_use]
    pub fn medium_max(self) -> f64 {
        self.medium_max
    }

    #[must_use]
    pub fn max_length(self) -> f64 {
        self.max_length
    }

    #[must_use]
    pub fn classify(self, y: f64) -> DepthZone {
        if y <= self.short_max {
            DepthZone::Short
        } else if y <= self.medium_max {
            DepthZone::Medium
        } else {
            DepthZone::Deep
        }
    }

    /// Classifies a scalar or a sequence, returning a same-shaped result.
    #[must_use]
    pub fn classify_sample<S: DepthSample>(self, sample: S) -> S::Output {
        sample.classify_with(self)
    }
}

/// Inputs accepted by depth classification.
///
/// Scalars yield one label; sequences yield labels in input order with the
/// same length.
pub trait DepthSample {
    type Output;

    fn classify_with(self, bands: DepthBands) -> Self::Output;
}

impl DepthSample for f64 {
    type Output = DepthZone;

    fn classify_with(self, bands: DepthBands) -> DepthZone {
        bands.classify(self)
    }
}

impl DepthSample for &[f64] {
    type Output = Vec<DepthZone>;

    fn classify_with(self, bands: DepthBands) -> Vec<DepthZone> {
        #[cfg(feature = "parallel-classification")]
        {
            self.par_iter().map(|y| bands.classify(*y)).collect()
        }

        #[cfg(not(feature = "parallel-classification"))]
        {
            self.iter().map(|y| bands.classify(*y)).collect()
        }
    }
}

impl DepthSample for &Vec<f64> {
    type Output = Vec<DepthZone>;

    fn classify_with(self, bands: DepthBands) -> Vec<DepthZone> {
        self.as_slice().classify_with(bands)
    }
}

impl DepthSample for Vec<f64> {
    type Output = Vec<DepthZone>;

    fn classify_with(self, bands: DepthBands) -> Vec<DepthZone> {
        self.as_slice().classify_with(bands)
    }
}

impl<const N: usize> DepthSample for [f64; N] {
    type Output = [DepthZone; N];

    fn classify_with(self, bands: DepthBands) -> [DepthZone; N] {
        self.map(|y| bands.classify(y))
    }
}

impl<const N: usize> DepthSample for &[f64; N] {
    type Output = [DepthZone; N];

    fn classify_with(self, bands: DepthBands) -> [DepthZone; N] {
        (*self).classify_with(bands)
    }
}

/// Classifies landing depth with the default bands.
///
/// ```
/// use court_rs::core::{DepthZone, classify_depth};
///
/// assert_eq!(classify_depth(6.40), DepthZone::Short);
/// assert_eq!(
///     classify_depth([3.0, 7.0, 10.0]),
///     [DepthZone::Short, DepthZone::Medium, DepthZone::Deep]
/// );
/// ```
#[must_use]
pub fn classify_depth<S: DepthSample>(sample: S) -> S::Output {
    DepthBands::default().classify_sample(sample)
}

/// Per-zone serve landing counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServeZoneSummary {
    pub wide: usize,
    pub body: usize,
    pub t: usize,
    pub out: usize,
}

impl ServeZoneSummary {
    /// Transforms each raw landing once, classifies it and tallies the result.
    #[must_use]
    pub fn from_raw(transform: CoordinateTransform, raw_points: &[CourtPoint]) -> Self {
        let centered = transform.to_centered_all(raw_points);
        let summary = Self::from_zones(&classify_serve_zones(&centered));
        trace!(
            total = summary.total(),
            out = summary.out,
            "summarized serve landings"
        );
        summary
    }

    #[must_use]
    pub fn from_zones(zones: &[ServeZone]) -> Self {
        zones.iter().fold(Self::default(), |mut summary, zone| {
            match zone {
                ServeZone::Wide => summary.wide += 1,
                ServeZone::Body => summary.body += 1,
                ServeZone::T => summary.t += 1,
                ServeZone::Out => summary.out += 1,
            }
            summary
        })
    }

    #[must_use]
    pub fn count(&self, zone: ServeZone) -> usize {
        match zone {
            ServeZone::Wide => self.wide,
            ServeZone::Body => self.body,
            ServeZone::T => self.t,
            ServeZone::Out => self.out,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.wide + self.body + self.t + self.out
    }

    /// Share of all landings in `zone`, in percent. Zero for an empty summary.
    #[must_use]
    pub fn percentage(&self, zone: ServeZone) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(zone) as f64 / total as f64 * 100.0
    }
}
