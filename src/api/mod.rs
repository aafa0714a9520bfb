mod chart;
mod config;

pub use chart::{ChartSnapshot, CourtChart};
pub use config::CourtConfig;
