use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::dimensions::{WIDTH_DOUBLES, WIDTH_SINGLES};
use crate::error::{CourtError, CourtResult};

/// A coordinate pair in meters.
///
/// The same type is used for the raw (corner origin) and the centered (net
/// origin) frame; which one a value lives in is decided by the function that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CourtPoint {
    pub x: f64,
    pub y: f64,
}

impl CourtPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn swapped(self) -> Self {
        Self::new(self.y, self.x)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for CourtPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<CourtPoint> for (f64, f64) {
    fn from(point: CourtPoint) -> Self {
        (point.x, point.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourtType {
    Singles,
    #[default]
    Doubles,
}

impl CourtType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Singles => "singles",
            Self::Doubles => "doubles",
        }
    }

    /// Full playable width between the outer sidelines.
    #[must_use]
    pub const fn width(self) -> f64 {
        match self {
            Self::Singles => WIDTH_SINGLES,
            Self::Doubles => WIDTH_DOUBLES,
        }
    }
}

impl fmt::Display for CourtType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourtType {
    type Err = CourtError;

    fn from_str(value: &str) -> CourtResult<Self> {
        match value {
            "singles" => Ok(Self::Singles),
            "doubles" => Ok(Self::Doubles),
            other => Err(CourtError::InvalidArgument(format!(
                "court type must be `singles` or `doubles`, got `{other}`"
            ))),
        }
    }
}

/// Plot orientation of the court.
///
/// `Vertical` draws the length along the y axis and is the standard data
/// frame; `Horizontal` draws the length along the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

impl Orientation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    /// Maps a point from the vertical standard frame into plot coordinates.
    #[must_use]
    pub fn to_plot(self, point: CourtPoint) -> CourtPoint {
        match self {
            Self::Horizontal => point.swapped(),
            Self::Vertical => point,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = CourtError;

    fn from_str(value: &str) -> CourtResult<Self> {
        match value {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            other => Err(CourtError::InvalidArgument(format!(
                "orientation must be `horizontal` or `vertical`, got `{other}`"
            ))),
        }
    }
}

/// Axis-aligned bounds `(x_min, x_max, y_min, y_max)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Extent {
    #[must_use]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y_max - self.y_min
    }

    /// Inclusive on every edge.
    #[must_use]
    pub fn contains(self, point: CourtPoint) -> bool {
        point.x >= self.x_min
            && point.x <= self.x_max
            && point.y >= self.y_min
            && point.y <= self.y_max
    }

    #[must_use]
    pub fn padded(self, padding: f64) -> Self {
        Self::new(
            self.x_min - padding,
            self.x_max + padding,
            self.y_min - padding,
            self.y_max + padding,
        )
    }

    #[must_use]
    pub fn swapped(self) -> Self {
        Self::new(self.y_min, self.y_max, self.x_min, self.x_max)
    }

    #[must_use]
    pub fn as_array(self) -> [f64; 4] {
        [self.x_min, self.x_max, self.y_min, self.y_max]
    }
}
