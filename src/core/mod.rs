pub mod court_lines;
pub mod dimensions;
pub mod geometry;
pub mod grid;
pub mod transform;
pub mod types;
pub mod zones;

pub use court_lines::{
    CourtLineKind, CourtSegment, GuideOptions, ServiceSplit, court_segments, guide_segments,
    net_segment,
};
pub use geometry::{CourtGeometry, extent, extent_for, half_width, half_width_for};
pub use grid::{CellGrid, EdgeRule};
pub use transform::{
    CoordinateTransform, RAW_ORIGIN_X_OFFSET, fold_to_canonical_half, to_centered,
};
pub use types::{CourtPoint, CourtType, Extent, Orientation};
pub use zones::{
    DepthBands, DepthSample, DepthZone, ServeZone, ServeZoneSummary, classify_depth,
    classify_serve_point, classify_serve_zone, classify_serve_zones,
};
