//! court-rs: tennis court geometry, zone classification and overlay layout.
//!
//! The crate is split into a pure `core` (dimensions, coordinate transform,
//! serve/depth classification, court line segments), a backend-agnostic
//! `render` layer that turns a court into a `RenderFrame`, and stat `charts`
//! (radar, pizza, sonar) that produce layout data. `api::CourtChart` wires a
//! configured court to a `Renderer`.

pub mod api;
pub mod charts;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod theme;

pub use api::{CourtChart, CourtConfig};
pub use error::{CourtError, CourtResult};
