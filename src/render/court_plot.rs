use serde::{Deserialize, Serialize};

use crate::core::dimensions::{HALF_WIDTH_SINGLES, SERVICE_LINE_DISTANCE};
use crate::core::{
    CellGrid, CourtGeometry, CourtPoint, CourtSegment, EdgeRule, Extent, GuideOptions,
    court_segments, guide_segments, net_segment,
};
use crate::error::{CourtError, CourtResult};
use crate::render::{
    ArrowHead, ArrowPrimitive, Color, LinePrimitive, LineStrokeStyle, MarkerPrimitive,
    RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};
use crate::theme::{CourtTheme, ScatterStyle};

/// Line width and runoff for the court itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourtStyle {
    pub line_width: f64,
    /// Meters of runoff shown around the playable area.
    pub padding: f64,
    pub show_axis: bool,
}

impl Default for CourtStyle {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            padding: 2.0,
            show_axis: false,
        }
    }
}

impl CourtStyle {
    pub fn validate(self) -> CourtResult<()> {
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(CourtError::InvalidData(
                "court line width must be finite and > 0".to_owned(),
            ));
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(CourtError::InvalidData(
                "court padding must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideStyle {
    pub color: Color,
    pub stroke_style: LineStrokeStyle,
    pub line_width: f64,
    pub alpha: f64,
}

impl Default for GuideStyle {
    fn default() -> Self {
        Self {
            color: Color::rgb8(0x80, 0x80, 0x80),
            stroke_style: LineStrokeStyle::Dashed,
            line_width: 0.8,
            alpha: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub background: Option<Color>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 10.0,
            color: Color::WHITE,
            h_align: TextHAlign::Center,
            background: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrowStyle {
    pub color: Color,
    pub line_width: f64,
    pub stroke_style: LineStrokeStyle,
    pub head: ArrowHead,
    pub alpha: f64,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            line_width: 2.0,
            stroke_style: LineStrokeStyle::Solid,
            head: ArrowHead::Fancy,
            alpha: 1.0,
        }
    }
}

/// Cell value reported by `CourtPlot::heatmap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatmapStatistic {
    /// Points per cell.
    #[default]
    Count,
    /// Percent of all binned points per cell.
    Frequency,
}

impl HeatmapStatistic {
    /// Annotation text: whole counts, one decimal for percentages.
    #[must_use]
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Count => format!("{value:.0}"),
            Self::Frequency => format!("{value:.1}"),
        }
    }
}

/// Diverging three-stop ramp with white cell borders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapStyle {
    pub low_color: Color,
    pub mid_color: Color,
    pub high_color: Color,
    pub edge_color: Color,
    pub edge_width: f64,
    /// Label every non-empty cell with its value.
    pub annotate: bool,
    pub font_size: f64,
    pub text_color: Color,
}

impl Default for HeatmapStyle {
    fn default() -> Self {
        Self {
            low_color: Color::rgb8(0x3b, 0x4c, 0xc0),
            mid_color: Color::rgb8(0xdd, 0xdd, 0xdd),
            high_color: Color::rgb8(0xb4, 0x04, 0x26),
            edge_color: Color::WHITE,
            edge_width: 0.5,
            annotate: false,
            font_size: 8.0,
            text_color: Color::BLACK,
        }
    }
}

impl HeatmapStyle {
    #[must_use]
    pub fn with_annotations(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }

    /// Ramp color for `t` in `[0, 1]`.
    #[must_use]
    pub fn color_at(&self, t: f64) -> Color {
        if t <= 0.5 {
            self.low_color.lerp(self.mid_color, t * 2.0)
        } else {
            self.mid_color.lerp(self.high_color, (t - 0.5) * 2.0)
        }
    }

    pub fn validate(&self) -> CourtResult<()> {
        for color in [
            self.low_color,
            self.mid_color,
            self.high_color,
            self.edge_color,
            self.text_color,
        ] {
            color.validate()?;
        }
        if !self.edge_width.is_finite() || self.edge_width <= 0.0 {
            return Err(CourtError::InvalidData(
                "heatmap edge width must be finite and > 0".to_owned(),
            ));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(CourtError::InvalidData(
                "heatmap font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Binned values behind a heatmap, in plot coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapGrid {
    pub cells: CellGrid,
    pub statistic: HeatmapStatistic,
    /// Row-major values, first row at the lowest plot `y`.
    pub values: Vec<f64>,
}

impl HeatmapGrid {
    #[must_use]
    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.cells.rows() || col >= self.cells.cols() {
            return None;
        }
        self.values.get(row * self.cells.cols() + col).copied()
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Builds render frames for one court.
///
/// The plot borrows geometry and theme; it never owns or mutates them. Data
/// passed to overlay methods is in the vertical standard frame and is mapped
/// to plot space with the geometry's orientation.
#[derive(Debug, Clone, Copy)]
pub struct CourtPlot<'a> {
    geometry: &'a CourtGeometry,
    theme: &'a CourtTheme,
    style: CourtStyle,
}

impl<'a> CourtPlot<'a> {
    #[must_use]
    pub fn new(geometry: &'a CourtGeometry, theme: &'a CourtTheme) -> Self {
        Self {
            geometry,
            theme,
            style: CourtStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: CourtStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn geometry(&self) -> &'a CourtGeometry {
        self.geometry
    }

    #[must_use]
    pub fn limits(&self) -> Extent {
        self.geometry.plot_limits(self.style.padding)
    }

    fn to_plot(&self, point: CourtPoint) -> CourtPoint {
        self.geometry.orientation().to_plot(point)
    }

    fn segment_line(&self, segment: CourtSegment, width: f64, color: Color) -> LinePrimitive {
        let oriented = segment.oriented(self.geometry.orientation());
        LinePrimitive::new(
            oriented.start.x,
            oriented.start.y,
            oriented.end.x,
            oriented.end.y,
            width,
            color,
        )
    }

    /// Background, court lines and net.
    pub fn draw(&self) -> CourtResult<RenderFrame> {
        self.style.validate()?;
        self.theme.validate()?;

        let limits = self.limits();
        let mut frame = RenderFrame::new(limits).with_axis(self.style.show_axis);

        if let Some(pitch_color) = self.theme.pitch_color {
            frame = frame.with_rect(RectPrimitive::new(
                limits.x_min,
                limits.y_min,
                limits.width(),
                limits.height(),
                pitch_color,
            ));
        }

        let line_color = self.theme.line_color;
        for segment in court_segments(self.geometry) {
            frame = frame.with_line(self.segment_line(segment, self.style.line_width, line_color));
        }
        let net = self.segment_line(net_segment(), self.style.line_width, line_color);
        frame = frame.with_line(net);

        Ok(frame)
    }

    /// Appends guide lines (service-box splits and backcourt bisector).
    pub fn draw_guides(
        &self,
        frame: &mut RenderFrame,
        options: GuideOptions,
        style: GuideStyle,
    ) -> CourtResult<()> {
        let color = style.color.with_alpha(style.color.alpha * style.alpha);
        for segment in guide_segments(self.geometry, options) {
            let line = self
                .segment_line(segment, style.line_width, color)
                .with_stroke_style(style.stroke_style);
            line.validate()?;
            frame.lines.push(line);
        }
        Ok(())
    }

    /// Fills the service boxes with the theme zone color; no-op without one.
    pub fn shade_service_boxes(&self, frame: &mut RenderFrame, alpha: f64) -> CourtResult<()> {
        let Some(zone_color) = self.theme.zone_color else {
            return Ok(());
        };
        let fill = zone_color.with_alpha(alpha);
        fill.validate()?;

        let mut starts = vec![0.0];
        if !self.geometry.is_half() {
            starts.push(-SERVICE_LINE_DISTANCE);
        }
        for y in starts {
            let corner = self.to_plot(CourtPoint::new(-HALF_WIDTH_SINGLES, y));
            let size =
                self.to_plot(CourtPoint::new(2.0 * HALF_WIDTH_SINGLES, SERVICE_LINE_DISTANCE));
            frame
                .rects
                .push(RectPrimitive::new(corner.x, corner.y, size.x, size.y, fill));
        }
        Ok(())
    }

    /// Appends one marker per point.
    pub fn scatter(
        &self,
        frame: &mut RenderFrame,
        points: &[CourtPoint],
        style: &ScatterStyle,
    ) -> CourtResult<()> {
        let face_color = style.resolved_face();
        let edge_color = style.resolved_edge();
        let mut markers = Vec::with_capacity(points.len());
        for point in points {
            let plot = self.to_plot(*point);
            let marker = MarkerPrimitive {
                x: plot.x,
                y: plot.y,
                shape: style.shape,
                size: style.size,
                face_color,
                edge_color,
                edge_width: style.edge_width,
            };
            marker.validate()?;
            markers.push(marker);
        }
        frame.markers.extend(markers);
        Ok(())
    }

    /// Appends a text label at a data point.
    pub fn annotate(
        &self,
        frame: &mut RenderFrame,
        point: CourtPoint,
        text: impl Into<String>,
        style: TextStyle,
    ) -> CourtResult<()> {
        let plot = self.to_plot(point);
        let mut label = TextPrimitive::new(
            text,
            plot.x,
            plot.y,
            style.font_size,
            style.color,
            style.h_align,
        );
        if let Some(background) = style.background {
            label = label.with_background(background);
        }
        label.validate()?;
        frame.texts.push(label);
        Ok(())
    }

    /// Bins points into a `bins x bins` grid over the density extent and
    /// appends one filled cell per bin.
    ///
    /// Points are in the vertical standard frame. The last row and column
    /// include their upper edge; points outside the extent are not counted.
    /// `half_override` replaces the court's half flag for the extent.
    pub fn heatmap(
        &self,
        frame: &mut RenderFrame,
        points: &[CourtPoint],
        bins: usize,
        statistic: HeatmapStatistic,
        half_override: Option<bool>,
        style: HeatmapStyle,
    ) -> CourtResult<HeatmapGrid> {
        style.validate()?;
        let cells = CellGrid::new(self.geometry.density_extent(half_override), bins, bins)?;

        let mut counts = vec![0.0; cells.len()];
        for (index, point) in points.iter().enumerate() {
            if !point.is_finite() {
                return Err(CourtError::InvalidData(format!(
                    "heatmap point {index} must be finite"
                )));
            }
            if let Some(cell) = cells.cell_index(self.to_plot(*point), EdgeRule::ClosedLast) {
                counts[cell] += 1.0;
            }
        }

        let total: f64 = counts.iter().sum();
        let values = match statistic {
            HeatmapStatistic::Frequency if total > 0.0 => {
                counts.iter().map(|count| count / total * 100.0).collect()
            }
            _ => counts,
        };

        let (low, high) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), value| {
                (low.min(*value), high.max(*value))
            });
        let span = high - low;

        let mut rects = Vec::with_capacity(values.len());
        let mut labels = Vec::new();
        for (index, value) in values.iter().enumerate() {
            let Some(cell) = cells.cell_extent(index) else {
                continue;
            };
            let t = if span > 0.0 { (value - low) / span } else { 0.0 };
            let rect = RectPrimitive::new(
                cell.x_min,
                cell.y_min,
                cell.width(),
                cell.height(),
                style.color_at(t),
            )
            .with_edge(style.edge_color, style.edge_width);
            rect.validate()?;
            rects.push(rect);

            if style.annotate && *value > 0.0 {
                labels.push(TextPrimitive::new(
                    statistic.format(*value),
                    (cell.x_min + cell.x_max) / 2.0,
                    (cell.y_min + cell.y_max) / 2.0,
                    style.font_size,
                    style.text_color,
                    TextHAlign::Center,
                ));
            }
        }
        frame.rects.extend(rects);
        frame.texts.extend(labels);

        Ok(HeatmapGrid {
            cells,
            statistic,
            values,
        })
    }

    /// Appends one arrow per start/end pair.
    pub fn arrows(
        &self,
        frame: &mut RenderFrame,
        starts: &[CourtPoint],
        ends: &[CourtPoint],
        style: ArrowStyle,
    ) -> CourtResult<()> {
        if starts.len() != ends.len() {
            return Err(CourtError::InvalidData(format!(
                "arrow starts ({}) and ends ({}) must have the same length",
                starts.len(),
                ends.len()
            )));
        }

        let color = style.color.with_alpha(style.color.alpha * style.alpha);
        let mut arrows = Vec::with_capacity(starts.len());
        for (start, end) in starts.iter().zip(ends) {
            let from = self.to_plot(*start);
            let to = self.to_plot(*end);
            let arrow = ArrowPrimitive {
                x1: from.x,
                y1: from.y,
                x2: to.x,
                y2: to.y,
                stroke_width: style.line_width,
                color,
                stroke_style: style.stroke_style,
                head: style.head,
            };
            arrow.validate()?;
            arrows.push(arrow);
        }
        frame.arrows.extend(arrows);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CourtType, Orientation};

    #[test]
    fn transparent_theme_draws_no_background() {
        let geometry = CourtGeometry::new(CourtType::Doubles, Orientation::Vertical, true);
        let theme = CourtTheme::new(Color::BLACK, None);
        let frame = CourtPlot::new(&geometry, &theme).draw().expect("court frame");
        assert!(frame.rects.is_empty());
        assert!(!frame.lines.is_empty());
    }

    #[test]
    fn shading_is_skipped_without_zone_color() {
        let geometry = CourtGeometry::default();
        let theme = CourtTheme::default();
        let plot = CourtPlot::new(&geometry, &theme);
        let mut frame = plot.draw().expect("court frame");
        let before = frame.rects.len();
        plot.shade_service_boxes(&mut frame, 0.3).expect("shade");
        assert_eq!(frame.rects.len(), before);
    }
}
