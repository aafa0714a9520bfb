//! Polar stat charts and per-zone shot direction charts.
//!
//! These produce layout data (angles, radii, colors, label anchors) rather
//! than render primitives; backends draw them with their own polar support.

mod pizza;
mod radar;
mod sonar;

pub use pizza::{
    PizzaConfig, PizzaLayout, PizzaPalette, PizzaSlice, PizzaTheme, PolarText, layout_pizza,
    pizza,
};
pub use radar::{PolarPoint, Radar, RadarLabel, RadarParam, RadarRings};
pub use sonar::{
    SonarConfig, SonarGrid, SonarHub, SonarLabel, SonarLayout, SonarScheme, SonarWedge,
    SonarZone, direction_bin, shot_bearing, sonar_from_shots, sonar_wedges, zone_grid,
};
