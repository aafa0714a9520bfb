use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{CellGrid, CourtGeometry, CourtPoint, EdgeRule, Orientation};
use crate::error::{CourtError, CourtResult};
use crate::render::Color;

const CENTER_CIRCLE_FRACTION: f64 = 0.15;
const MIN_RADIUS_FRACTION: f64 = 0.3;
const LABEL_RADIUS_FRACTION: f64 = 0.65;
const MIN_LABEL_PERCENTAGE: f64 = 5.0;

/// One grid cell: its center in the vertical standard frame and one value
/// per direction bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SonarZone {
    pub center: CourtPoint,
    pub directions: Vec<f64>,
}

/// Zone grid over the singles width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SonarGrid {
    pub rows: usize,
    pub cols: usize,
    pub half: bool,
}

impl Default for SonarGrid {
    fn default() -> Self {
        Self {
            rows: 2,
            cols: 3,
            half: true,
        }
    }
}

impl SonarGrid {
    pub fn validate(self) -> CourtResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(CourtError::InvalidArgument(format!(
                "sonar grid needs at least one row and column, got {}x{}",
                self.rows, self.cols
            )));
        }
        Ok(())
    }

    /// Half-open cells over `CourtGeometry::zone_bounds`.
    pub fn cells(self) -> CourtResult<CellGrid> {
        self.validate()?;
        CellGrid::new(CourtGeometry::zone_bounds(self.half), self.rows, self.cols)
    }
}

/// Empty zones laid out on a `rows x cols` grid.
pub fn zone_grid(rows: usize, cols: usize, half: bool) -> CourtResult<Vec<SonarZone>> {
    let cells = SonarGrid { rows, cols, half }.cells()?;
    Ok(cells
        .centers()
        .into_iter()
        .map(|center| SonarZone {
            center,
            directions: Vec::new(),
        })
        .collect())
}

/// Compass bearing of a shot vector in degrees: 0 is up, increasing clockwise.
#[must_use]
pub fn shot_bearing(dx: f64, dy: f64) -> f64 {
    (90.0 - dy.atan2(dx).to_degrees()).rem_euclid(360.0)
}

/// Direction bin of a bearing; bins are `[i·step, (i+1)·step)` and a bearing
/// of exactly 360 lands in the last bin.
#[must_use]
pub fn direction_bin(bearing: f64, n_directions: usize) -> usize {
    let step = 360.0 / n_directions as f64;
    ((bearing / step).floor() as usize).min(n_directions.saturating_sub(1))
}

/// Counts shots per zone and direction bin.
///
/// `origins` and `deltas` are parallel slices; shots outside the grid are
/// dropped and non-finite shots are skipped with a warning.
pub fn sonar_from_shots(
    origins: &[CourtPoint],
    deltas: &[CourtPoint],
    grid: SonarGrid,
    n_directions: usize,
) -> CourtResult<Vec<SonarZone>> {
    let cells = grid.cells()?;
    if n_directions == 0 {
        return Err(CourtError::InvalidArgument(
            "sonar needs at least one direction".to_owned(),
        ));
    }
    if origins.len() != deltas.len() {
        return Err(CourtError::InvalidData(format!(
            "shot origins ({}) and deltas ({}) must have the same length",
            origins.len(),
            deltas.len()
        )));
    }

    let mut zones: Vec<SonarZone> = cells
        .centers()
        .into_iter()
        .map(|center| SonarZone {
            center,
            directions: vec![0.0; n_directions],
        })
        .collect();

    for (index, (origin, delta)) in origins.iter().zip(deltas).enumerate() {
        if !origin.is_finite() || !delta.is_finite() {
            warn!(index, "skipping non-finite shot");
            continue;
        }
        let Some(cell) = cells.cell_index(*origin, EdgeRule::HalfOpen) else {
            continue;
        };
        let bin = direction_bin(shot_bearing(delta.x, delta.y), n_directions);
        zones[cell].directions[bin] += 1.0;
    }

    Ok(zones)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SonarScheme {
    #[default]
    Bsu,
    Heat,
    Cool,
}

const BSU_SCHEME: [Color; 8] = [
    Color::rgb8(0x92, 0xe3, 0xda),
    Color::rgb8(0x5b, 0xc0, 0xbe),
    Color::rgb8(0x3a, 0x86, 0xff),
    Color::rgb8(0x83, 0x38, 0xec),
    Color::rgb8(0xff, 0x00, 0x6e),
    Color::rgb8(0xfb, 0x56, 0x07),
    Color::rgb8(0xff, 0xbe, 0x0b),
    Color::rgb8(0x06, 0xd6, 0xa0),
];

const HEAT_SCHEME: [Color; 8] = [
    Color::rgb8(0xff, 0x00, 0x00),
    Color::rgb8(0xff, 0x44, 0x00),
    Color::rgb8(0xff, 0x88, 0x00),
    Color::rgb8(0xff, 0xcc, 0x00),
    Color::rgb8(0xff, 0xff, 0x00),
    Color::rgb8(0xcc, 0xff, 0x00),
    Color::rgb8(0x88, 0xff, 0x00),
    Color::rgb8(0x44, 0xff, 0x00),
];

const COOL_SCHEME: [Color; 8] = [
    Color::rgb8(0x34, 0x98, 0xdb),
    Color::rgb8(0x29, 0x80, 0xb9),
    Color::rgb8(0x9b, 0x59, 0xb6),
    Color::rgb8(0x8e, 0x44, 0xad),
    Color::rgb8(0x1a, 0xbc, 0x9c),
    Color::rgb8(0x16, 0xa0, 0x85),
    Color::rgb8(0xe7, 0x4c, 0x3c),
    Color::rgb8(0xc0, 0x39, 0x2b),
];

impl SonarScheme {
    /// Unknown names fall back to `Bsu`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "heat" => Self::Heat,
            "cool" => Self::Cool,
            _ => Self::Bsu,
        }
    }

    #[must_use]
    pub fn colors(self) -> &'static [Color] {
        match self {
            Self::Bsu => &BSU_SCHEME,
            Self::Heat => &HEAT_SCHEME,
            Self::Cool => &COOL_SCHEME,
        }
    }

    /// One color per direction, cycling the scheme when it is shorter.
    #[must_use]
    pub fn cycled(self, n_directions: usize) -> Vec<Color> {
        self.colors().iter().copied().cycle().take(n_directions).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SonarConfig {
    pub n_directions: usize,
    /// Full wedge radius in meters.
    pub zone_size: f64,
    pub scheme: SonarScheme,
    pub alpha: f64,
    pub show_labels: bool,
    pub center_color: Color,
    pub edge_color: Color,
    pub orientation: Orientation,
}

impl Default for SonarConfig {
    fn default() -> Self {
        Self {
            n_directions: 6,
            zone_size: 1.8,
            scheme: SonarScheme::Bsu,
            alpha: 0.85,
            show_labels: true,
            center_color: Color::rgb8(0x1a, 0x1a, 0x2e),
            edge_color: Color::WHITE,
            orientation: Orientation::Vertical,
        }
    }
}

impl SonarConfig {
    #[must_use]
    pub fn with_directions(mut self, n_directions: usize) -> Self {
        self.n_directions = n_directions;
        self
    }

    #[must_use]
    pub fn with_zone_size(mut self, zone_size: f64) -> Self {
        self.zone_size = zone_size;
        self
    }

    #[must_use]
    pub fn with_scheme(mut self, scheme: SonarScheme) -> Self {
        self.scheme = scheme;
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = show_labels;
        self
    }

    pub fn validate(self) -> CourtResult<()> {
        if self.n_directions == 0 {
            return Err(CourtError::InvalidArgument(
                "sonar needs at least one direction".to_owned(),
            ));
        }
        if !self.zone_size.is_finite() || self.zone_size <= 0.0 {
            return Err(CourtError::InvalidData(
                "sonar zone size must be finite and > 0".to_owned(),
            ));
        }
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(CourtError::InvalidData(
                "sonar alpha must be in [0, 1]".to_owned(),
            ));
        }
        self.center_color.validate()?;
        self.edge_color.validate()
    }
}

/// Circular sector with angles in degrees, counter-clockwise from +x.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SonarWedge {
    pub center: CourtPoint,
    pub radius: f64,
    pub theta1: f64,
    pub theta2: f64,
    pub face_color: Color,
    pub edge_color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SonarLabel {
    pub text: String,
    pub position: CourtPoint,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SonarHub {
    pub center: CourtPoint,
    pub radius: f64,
    pub face_color: Color,
    pub edge_color: Color,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SonarLayout {
    pub wedges: Vec<SonarWedge>,
    pub labels: Vec<SonarLabel>,
    pub hubs: Vec<SonarHub>,
}

/// Wedges, percentage labels and hub circles for every zone, in plot space.
pub fn sonar_wedges(zones: &[SonarZone], config: &SonarConfig) -> CourtResult<SonarLayout> {
    config.validate()?;
    let n = config.n_directions;
    let colors = config.scheme.cycled(n);
    let step = 360.0 / n as f64;
    let label_dark = Color::rgb8(0x33, 0x33, 0x33);

    let mut layout = SonarLayout::default();
    for zone in zones {
        if zone.directions.len() != n {
            return Err(CourtError::InvalidData(format!(
                "sonar zone has {} direction values, expected {n}",
                zone.directions.len()
            )));
        }
        if zone
            .directions
            .iter()
            .any(|value| !value.is_finite() || *value < 0.0)
        {
            return Err(CourtError::InvalidData(
                "sonar direction values must be finite and >= 0".to_owned(),
            ));
        }

        let center = config.orientation.to_plot(zone.center);
        let max = zone.directions.iter().copied().fold(0.0_f64, f64::max);
        let total: f64 = zone.directions.iter().sum();

        for (index, value) in zone.directions.iter().enumerate() {
            let norm = if max > 0.0 { value / max } else { 0.0 };
            let percentage = if total > 0.0 { value / total * 100.0 } else { 0.0 };
            let mid = 90.0 - index as f64 * step;
            let radius =
                config.zone_size * (MIN_RADIUS_FRACTION + (1.0 - MIN_RADIUS_FRACTION) * norm);
            let color = colors[index];

            layout.wedges.push(SonarWedge {
                center,
                radius,
                theta1: mid - step / 2.0,
                theta2: mid + step / 2.0,
                face_color: color.with_alpha(config.alpha),
                edge_color: config.edge_color,
            });

            if config.show_labels && percentage >= MIN_LABEL_PERCENTAGE {
                let label_radius = radius * LABEL_RADIUS_FRACTION;
                let (sin, cos) = mid.to_radians().sin_cos();
                layout.labels.push(SonarLabel {
                    text: format!("{percentage:.0}%"),
                    position: CourtPoint::new(
                        center.x + label_radius * cos,
                        center.y + label_radius * sin,
                    ),
                    color: if norm > 0.5 { Color::WHITE } else { label_dark },
                });
            }
        }

        layout.hubs.push(SonarHub {
            center,
            radius: config.zone_size * CENTER_CIRCLE_FRACTION,
            face_color: config.center_color,
            edge_color: config.edge_color,
        });
    }

    Ok(layout)
}
