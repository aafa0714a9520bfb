use serde::{Deserialize, Serialize};

use crate::core::Extent;
use crate::error::{CourtError, CourtResult};
use crate::render::{ArrowPrimitive, LinePrimitive, MarkerPrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one court draw pass.
///
/// Primitives are in plot units (meters after orientation). Backends draw
/// them in field order: rects, lines, markers, arrows, texts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub limits: Extent,
    pub show_axis: bool,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub markers: Vec<MarkerPrimitive>,
    pub arrows: Vec<ArrowPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(limits: Extent) -> Self {
        Self {
            limits,
            show_axis: false,
            rects: Vec::new(),
            lines: Vec::new(),
            markers: Vec::new(),
            arrows: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_axis(mut self, show_axis: bool) -> Self {
        self.show_axis = show_axis;
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    /// Appends every primitive of `other`; limits and axis flag stay as they are.
    pub fn extend(&mut self, other: RenderFrame) {
        self.rects.extend(other.rects);
        self.lines.extend(other.lines);
        self.markers.extend(other.markers);
        self.arrows.extend(other.arrows);
        self.texts.extend(other.texts);
    }

    pub fn validate(&self) -> CourtResult<()> {
        let limits = self.limits;
        if !limits.as_array().iter().all(|value| value.is_finite())
            || limits.width() <= 0.0
            || limits.height() <= 0.0
        {
            return Err(CourtError::InvalidData(
                "frame limits must be finite with positive width and height".to_owned(),
            ));
        }

        for rect in &self.rects {
            rect.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }
        for arrow in &self.arrows {
            arrow.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.rects.len()
            + self.lines.len()
            + self.markers.len()
            + self.arrows.len()
            + self.texts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }
}
