//! ITF court dimensions in meters.
//!
//! Raw event data uses a corner origin; everything derived here assumes the
//! centered frame with the origin at the middle of the net.

pub const LENGTH: f64 = 23.77;
pub const WIDTH_SINGLES: f64 = 8.23;
pub const WIDTH_DOUBLES: f64 = 10.97;

pub const HALF_LENGTH: f64 = LENGTH / 2.0;
pub const HALF_WIDTH_SINGLES: f64 = WIDTH_SINGLES / 2.0;
pub const HALF_WIDTH_DOUBLES: f64 = WIDTH_DOUBLES / 2.0;

/// Distance from the net to the service line.
pub const SERVICE_LINE_DISTANCE: f64 = 6.40;
/// Distance from the service line to the baseline (`HALF_LENGTH - SERVICE_LINE_DISTANCE`).
pub const BASELINE_TO_SERVICE_LINE: f64 = 5.485;
/// Distance from the net beyond which a landing counts as deep.
pub const DEEP_LINE_DISTANCE: f64 = 9.00;

pub const ALLEY_WIDTH: f64 = (WIDTH_DOUBLES - WIDTH_SINGLES) / 2.0;

/// Runoff drawn around the court on every side.
pub const RUNOFF: f64 = 2.0;
pub const COURT_LENGTH_EXTENDED: f64 = LENGTH + 2.0 * RUNOFF;
pub const COURT_WIDTH_EXTENDED: f64 = WIDTH_DOUBLES + 2.0 * RUNOFF;

/// Net posts stand this far outside the doubles sidelines.
pub const NET_POST_OFFSET: f64 = 0.914;

/// Far edge of zone grids, just behind the baseline so baseline shots stay in.
pub const ZONE_GRID_LENGTH: f64 = 11.89;

pub const CENTER_MARK_LENGTH: f64 = 0.1;
pub const HALF_COURT_CENTER_MARK_LENGTH: f64 = 0.15;
