mod court_plot;
mod frame;
mod null_renderer;
mod primitives;

pub use court_plot::{
    ArrowStyle, CourtPlot, CourtStyle, GuideStyle, HeatmapGrid, HeatmapStatistic, HeatmapStyle,
    TextStyle,
};
pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    ArrowHead, ArrowPrimitive, Color, LinePrimitive, LineStrokeStyle, MarkerPrimitive,
    MarkerShape, RectPrimitive, TextHAlign, TextPrimitive,
};

use crate::error::CourtResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from court geometry and classification.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> CourtResult<()>;
}
