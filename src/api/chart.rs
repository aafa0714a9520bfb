use serde::Serialize;
use tracing::debug;

use crate::core::{
    CoordinateTransform, CourtGeometry, CourtPoint, GuideOptions, ServeZoneSummary,
    classify_serve_zones,
};
use crate::error::{CourtError, CourtResult};
use crate::render::{CourtPlot, CourtStyle, GuideStyle, RenderFrame, Renderer};
use crate::theme::{CourtTheme, ScatterStyle, ThemeRegistry};

use super::CourtConfig;

/// Serializable chart state used by regression tests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSnapshot {
    pub geometry: CourtGeometry,
    pub theme: CourtTheme,
    pub style: CourtStyle,
    pub guides: GuideOptions,
    pub frame: RenderFrame,
}

/// A court bound to a rendering backend.
pub struct CourtChart<R: Renderer> {
    renderer: R,
    geometry: CourtGeometry,
    theme: CourtTheme,
    style: CourtStyle,
    guides: GuideOptions,
    transform: CoordinateTransform,
}

impl<R: Renderer> CourtChart<R> {
    /// Resolves the configured theme against `themes`; an unknown name is an
    /// `InvalidArgument`.
    pub fn new(renderer: R, config: CourtConfig, themes: &ThemeRegistry) -> CourtResult<Self> {
        config.validate()?;
        let theme = match &config.theme {
            Some(name) => *themes.get(name)?,
            None => CourtTheme::default(),
        };
        theme.validate()?;

        let geometry = config.geometry();
        debug!(
            court_type = %geometry.court_type(),
            orientation = %geometry.orientation(),
            half = geometry.is_half(),
            theme = config.theme.as_deref().unwrap_or("default"),
            "create court chart"
        );

        Ok(Self {
            renderer,
            geometry,
            theme,
            style: config.court_style(),
            guides: config.guides,
            transform: CoordinateTransform::default(),
        })
    }

    /// Replaces the transform applied to raw points in `render_serves`.
    #[must_use]
    pub fn with_transform(mut self, transform: CoordinateTransform) -> Self {
        self.transform = transform;
        self
    }

    #[must_use]
    pub fn geometry(&self) -> &CourtGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn theme(&self) -> &CourtTheme {
        &self.theme
    }

    #[must_use]
    pub fn transform(&self) -> CoordinateTransform {
        self.transform
    }

    #[must_use]
    pub fn plot(&self) -> CourtPlot<'_> {
        CourtPlot::new(&self.geometry, &self.theme).with_style(self.style)
    }

    /// Court lines plus the configured guides.
    pub fn court_frame(&self) -> CourtResult<RenderFrame> {
        let plot = self.plot();
        let mut frame = plot.draw()?;
        if !self.guides.is_empty() {
            plot.draw_guides(&mut frame, self.guides, GuideStyle::default())?;
        }
        Ok(frame)
    }

    pub fn render(&mut self) -> CourtResult<()> {
        let frame = self.court_frame()?;
        self.renderer.render(&frame)
    }

    fn centered_serves(&self, raw_points: &[CourtPoint]) -> CourtResult<Vec<CourtPoint>> {
        if let Some(index) = raw_points.iter().position(|point| !point.is_finite()) {
            return Err(CourtError::InvalidData(format!(
                "serve landing {index} must be finite"
            )));
        }
        Ok(self.transform.to_centered_all(raw_points))
    }

    fn scatter_frame(
        &self,
        centered: &[CourtPoint],
        style: &ScatterStyle,
    ) -> CourtResult<RenderFrame> {
        let mut frame = self.court_frame()?;
        self.plot().scatter(&mut frame, centered, style)?;
        Ok(frame)
    }

    /// Court frame with raw serve landings transformed and scattered on top.
    pub fn serve_frame(
        &self,
        raw_points: &[CourtPoint],
        style: &ScatterStyle,
    ) -> CourtResult<RenderFrame> {
        let centered = self.centered_serves(raw_points)?;
        self.scatter_frame(&centered, style)
    }

    /// Renders serve landings and returns their zone tally.
    pub fn render_serves(
        &mut self,
        raw_points: &[CourtPoint],
        style: &ScatterStyle,
    ) -> CourtResult<ServeZoneSummary> {
        let centered = self.centered_serves(raw_points)?;
        let frame = self.scatter_frame(&centered, style)?;
        self.renderer.render(&frame)?;

        let summary = ServeZoneSummary::from_zones(&classify_serve_zones(&centered));
        debug!(
            total = summary.total(),
            wide = summary.wide,
            body = summary.body,
            t = summary.t,
            out = summary.out,
            "render serves"
        );
        Ok(summary)
    }

    pub fn snapshot(&self) -> CourtResult<ChartSnapshot> {
        Ok(ChartSnapshot {
            geometry: self.geometry,
            theme: self.theme,
            style: self.style,
            guides: self.guides,
            frame: self.court_frame()?,
        })
    }

    /// Pretty JSON of `snapshot()` for fixture-based regression checks.
    pub fn snapshot_json(&self) -> CourtResult<String> {
        let snapshot = self.snapshot()?;
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| CourtError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
