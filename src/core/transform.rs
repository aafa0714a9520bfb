use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-classification")]
use rayon::prelude::*;

use crate::core::dimensions::{HALF_LENGTH, HALF_WIDTH_DOUBLES, HALF_WIDTH_SINGLES};
use crate::core::types::CourtPoint;
use crate::error::{CourtError, CourtResult};

/// Raw-frame x of the court's longitudinal centerline.
///
/// Tracking data puts its origin on the doubles sideline, so the centerline
/// sits half a doubles width away. Numerically this equals
/// `BASELINE_TO_SERVICE_LINE`, which is an unrelated length.
pub const RAW_ORIGIN_X_OFFSET: f64 = HALF_WIDTH_DOUBLES;

/// Reflects a centered point through the net center when it lies on the near
/// half, so every output has `y >= 0`.
#[must_use]
pub fn fold_to_canonical_half(point: CourtPoint) -> CourtPoint {
    if point.y < 0.0 {
        CourtPoint::new(-point.x, -point.y)
    } else {
        point
    }
}

/// Raw (corner origin) to centered (net origin) conversion.
///
/// `to_centered` is not idempotent: it must be applied exactly once per raw
/// point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateTransform {
    x_offset: f64,
    net_y: f64,
}

impl Default for CoordinateTransform {
    fn default() -> Self {
        Self::raw_data()
    }
}

impl CoordinateTransform {
    /// Transform for tracking data with the origin on the doubles sideline.
    #[must_use]
    pub const fn raw_data() -> Self {
        Self {
            x_offset: RAW_ORIGIN_X_OFFSET,
            net_y: HALF_LENGTH,
        }
    }

    /// Transform for data with the origin on the singles sideline.
    #[must_use]
    pub const fn singles_centerline() -> Self {
        Self {
            x_offset: HALF_WIDTH_SINGLES,
            net_y: HALF_LENGTH,
        }
    }

    pub fn with_x_offset(x_offset: f64) -> CourtResult<Self> {
        if !x_offset.is_finite() {
            return Err(CourtError::InvalidData(
                "transform x offset must be finite".to_owned(),
            ));
        }
        Ok(Self {
            x_offset,
            net_y: HALF_LENGTH,
        })
    }

    #[must_use]
    pub fn x_offset(self) -> f64 {
        self.x_offset
    }

    /// Shifts and flips a raw point without folding it.
    #[must_use]
    pub fn center(self, raw: CourtPoint) -> CourtPoint {
        CourtPoint::new(raw.x - self.x_offset, self.net_y - raw.y)
    }

    /// Centers a raw point and folds it onto the canonical half.
    #[must_use]
    pub fn to_centered(self, raw: CourtPoint) -> CourtPoint {
        fold_to_canonical_half(self.center(raw))
    }

    /// Batch form of [`Self::to_centered`]; output order matches input order.
    #[must_use]
    pub fn to_centered_all(self, raw: &[CourtPoint]) -> Vec<CourtPoint> {
        #[cfg(feature = "parallel-classification")]
        {
            raw.par_iter().map(|point| self.to_centered(*point)).collect()
        }

        #[cfg(not(feature = "parallel-classification"))]
        {
            raw.iter().map(|point| self.to_centered(*point)).collect()
        }
    }
}

/// Centers and folds a raw `(x, y)` pair with the default raw-data transform.
#[must_use]
pub fn to_centered(x: f64, y: f64) -> (f64, f64) {
    CoordinateTransform::raw_data()
        .to_centered(CourtPoint::new(x, y))
        .into()
}
