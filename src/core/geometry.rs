use serde::{Deserialize, Serialize};

use crate::core::dimensions::{
    ALLEY_WIDTH, HALF_LENGTH, HALF_WIDTH_DOUBLES, HALF_WIDTH_SINGLES, LENGTH,
    SERVICE_LINE_DISTANCE, ZONE_GRID_LENGTH,
};
use crate::core::types::{CourtPoint, CourtType, Extent, Orientation};
use crate::error::CourtResult;

/// Half of the playable width for `court_type`.
#[must_use]
pub const fn half_width(court_type: CourtType) -> f64 {
    match court_type {
        CourtType::Singles => HALF_WIDTH_SINGLES,
        CourtType::Doubles => HALF_WIDTH_DOUBLES,
    }
}

/// String-keyed variant of [`half_width`].
///
/// Fails with `InvalidArgument` unless `court_type` is `singles` or `doubles`.
pub fn half_width_for(court_type: &str) -> CourtResult<f64> {
    Ok(half_width(court_type.parse()?))
}

/// Playable-area bounds for a court configuration.
///
/// Vertical courts keep the width on x; horizontal courts swap the axes. Half
/// courts only cover `[0, HALF_LENGTH]` along the length.
#[must_use]
pub fn extent(court_type: CourtType, orientation: Orientation, half: bool) -> Extent {
    let w = half_width(court_type);
    let length_min = if half { 0.0 } else { -HALF_LENGTH };
    let vertical = Extent::new(-w, w, length_min, HALF_LENGTH);
    match orientation {
        Orientation::Vertical => vertical,
        Orientation::Horizontal => vertical.swapped(),
    }
}

/// String-keyed variant of [`extent`]; unknown names are `InvalidArgument`.
pub fn extent_for(court_type: &str, orientation: &str, half: bool) -> CourtResult<Extent> {
    Ok(extent(court_type.parse()?, orientation.parse()?, half))
}

/// Court geometry for one drawing configuration.
///
/// Coordinates handed to geometry helpers are always in the vertical standard
/// frame (x across the width, y along the length, origin at the net center).
/// Orientation only affects the plot-space outputs (`extent`, `aspect`,
/// `plot_limits`, `density_extent`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CourtGeometry {
    court_type: CourtType,
    orientation: Orientation,
    half: bool,
}

impl CourtGeometry {
    #[must_use]
    pub const fn new(court_type: CourtType, orientation: Orientation, half: bool) -> Self {
        Self {
            court_type,
            orientation,
            half,
        }
    }

    pub fn from_names(court_type: &str, orientation: &str, half: bool) -> CourtResult<Self> {
        Ok(Self::new(court_type.parse()?, orientation.parse()?, half))
    }

    #[must_use]
    pub fn court_type(&self) -> CourtType {
        self.court_type
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn is_half(&self) -> bool {
        self.half
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.court_type.width()
    }

    #[must_use]
    pub fn half_width(&self) -> f64 {
        half_width(self.court_type)
    }

    /// Alley width drawn for this court; singles courts have none.
    #[must_use]
    pub fn alley_width(&self) -> f64 {
        match self.court_type {
            CourtType::Singles => 0.0,
            CourtType::Doubles => ALLEY_WIDTH,
        }
    }

    #[must_use]
    pub fn service_line_distance(&self) -> f64 {
        SERVICE_LINE_DISTANCE
    }

    /// Length covered along the court axis (full or half court).
    #[must_use]
    pub fn visible_length(&self) -> f64 {
        if self.half { HALF_LENGTH } else { LENGTH }
    }

    /// Bounds in the vertical standard (data) frame.
    #[must_use]
    pub fn centered_bounds(&self) -> Extent {
        extent(self.court_type, Orientation::Vertical, self.half)
    }

    /// Playable-area bounds for another orientation/half setting of this court type.
    #[must_use]
    pub fn extent(&self, orientation: Orientation, half: bool) -> Extent {
        extent(self.court_type, orientation, half)
    }

    /// Playable-area bounds in plot space for this configuration.
    #[must_use]
    pub fn plot_extent(&self) -> Extent {
        self.extent(self.orientation, self.half)
    }

    /// Plot-space height over width.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => self.width() / self.visible_length(),
            Orientation::Vertical => self.visible_length() / self.width(),
        }
    }

    /// Whether a centered, vertical-frame point lies inside the playable area.
    #[must_use]
    pub fn contains(&self, point: CourtPoint) -> bool {
        self.centered_bounds().contains(point)
    }

    /// Plot limits with `padding` meters of runoff on every side.
    #[must_use]
    pub fn plot_limits(&self, padding: f64) -> Extent {
        self.plot_extent().padded(padding)
    }

    /// Evaluation extent for density overlays (heatmap, hexbin, kde).
    ///
    /// Half courts always span the doubles width so that alley shots stay
    /// inside the grid. `half_override` replaces the configured half flag.
    #[must_use]
    pub fn density_extent(&self, half_override: Option<bool>) -> Extent {
        let half = half_override.unwrap_or(self.half);
        if !half {
            return self.extent(self.orientation, false);
        }
        let vertical = Extent::new(-HALF_WIDTH_DOUBLES, HALF_WIDTH_DOUBLES, 0.0, HALF_LENGTH);
        match self.orientation {
            Orientation::Vertical => vertical,
            Orientation::Horizontal => vertical.swapped(),
        }
    }

    /// Bounds over which sonar zones are laid out: singles width, reaching just
    /// past each baseline.
    #[must_use]
    pub fn zone_bounds(half: bool) -> Extent {
        let length_min = if half { 0.0 } else { -ZONE_GRID_LENGTH };
        Extent::new(-HALF_WIDTH_SINGLES, HALF_WIDTH_SINGLES, length_min, ZONE_GRID_LENGTH)
    }
}
