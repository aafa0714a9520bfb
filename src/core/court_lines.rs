use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::dimensions::{
    CENTER_MARK_LENGTH, HALF_COURT_CENTER_MARK_LENGTH, HALF_LENGTH, HALF_WIDTH_DOUBLES,
    HALF_WIDTH_SINGLES, NET_POST_OFFSET, SERVICE_LINE_DISTANCE,
};
use crate::core::geometry::CourtGeometry;
use crate::core::types::{CourtPoint, CourtType, Orientation};
use crate::error::{CourtError, CourtResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourtLineKind {
    Baseline,
    Sideline,
    SinglesSideline,
    ServiceLine,
    CenterServiceLine,
    CenterMark,
    Net,
    ServiceGuide,
    BackcourtGuide,
}

/// One straight court marking, endpoints in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourtSegment {
    pub kind: CourtLineKind,
    pub start: CourtPoint,
    pub end: CourtPoint,
}

impl CourtSegment {
    #[must_use]
    pub const fn new(kind: CourtLineKind, start: CourtPoint, end: CourtPoint) -> Self {
        Self { kind, start, end }
    }

    fn between(kind: CourtLineKind, (x1, y1): (f64, f64), (x2, y2): (f64, f64)) -> Self {
        Self::new(kind, CourtPoint::new(x1, y1), CourtPoint::new(x2, y2))
    }

    /// Maps both endpoints from the vertical standard frame into plot space.
    #[must_use]
    pub fn oriented(self, orientation: Orientation) -> Self {
        Self::new(
            self.kind,
            orientation.to_plot(self.start),
            orientation.to_plot(self.end),
        )
    }

    #[must_use]
    pub fn length(self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }
}

/// Court markings in the vertical standard frame, excluding the net.
///
/// Singles sidelines are only emitted for doubles courts; on singles courts
/// they coincide with the outer sidelines.
#[must_use]
pub fn court_segments(geometry: &CourtGeometry) -> Vec<CourtSegment> {
    use CourtLineKind::{
        Baseline, CenterMark, CenterServiceLine, ServiceLine, Sideline, SinglesSideline,
    };

    let w = geometry.half_width();
    let l = HALF_LENGTH;
    let sw = HALF_WIDTH_SINGLES;
    let sl = SERVICE_LINE_DISTANCE;
    let with_alleys = geometry.court_type() == CourtType::Doubles;
    let mut segments = Vec::with_capacity(12);

    if geometry.is_half() {
        segments.push(CourtSegment::between(Baseline, (-w, l), (w, l)));
        segments.push(CourtSegment::between(Sideline, (-w, 0.0), (-w, l)));
        segments.push(CourtSegment::between(Sideline, (w, 0.0), (w, l)));
        if with_alleys {
            segments.push(CourtSegment::between(SinglesSideline, (-sw, 0.0), (-sw, l)));
            segments.push(CourtSegment::between(SinglesSideline, (sw, 0.0), (sw, l)));
        }
        segments.push(CourtSegment::between(ServiceLine, (-sw, sl), (sw, sl)));
        segments.push(CourtSegment::between(CenterServiceLine, (0.0, 0.0), (0.0, sl)));
        segments.push(CourtSegment::between(
            CenterMark,
            (0.0, l),
            (0.0, l - HALF_COURT_CENTER_MARK_LENGTH),
        ));
        return segments;
    }

    segments.push(CourtSegment::between(Baseline, (-w, -l), (w, -l)));
    segments.push(CourtSegment::between(Baseline, (-w, l), (w, l)));
    segments.push(CourtSegment::between(Sideline, (-w, -l), (-w, l)));
    segments.push(CourtSegment::between(Sideline, (w, -l), (w, l)));
    if with_alleys {
        segments.push(CourtSegment::between(SinglesSideline, (-sw, -l), (-sw, l)));
        segments.push(CourtSegment::between(SinglesSideline, (sw, -l), (sw, l)));
    }
    segments.push(CourtSegment::between(ServiceLine, (-sw, -sl), (sw, -sl)));
    segments.push(CourtSegment::between(ServiceLine, (-sw, sl), (sw, sl)));
    segments.push(CourtSegment::between(CenterServiceLine, (0.0, -sl), (0.0, sl)));
    segments.push(CourtSegment::between(
        CenterMark,
        (0.0, -l),
        (0.0, -l + CENTER_MARK_LENGTH),
    ));
    segments.push(CourtSegment::between(
        CenterMark,
        (0.0, l),
        (0.0, l - CENTER_MARK_LENGTH),
    ));
    segments
}

/// The net, drawn post to post.
///
/// Singles matches are played with the doubles net on singles sticks, so the
/// span never depends on the court type.
#[must_use]
pub fn net_segment() -> CourtSegment {
    let half_span = HALF_WIDTH_DOUBLES + NET_POST_OFFSET;
    CourtSegment::between(CourtLineKind::Net, (-half_span, 0.0), (half_span, 0.0))
}

/// How each service box is split by guide lines parallel to the sidelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceSplit {
    #[default]
    None,
    /// Two zones per box.
    Bisect,
    /// Wide/Body/T.
    Trisect,
}

impl TryFrom<u8> for ServiceSplit {
    type Error = CourtError;

    fn try_from(lines: u8) -> CourtResult<Self> {
        match lines {
            0 => Ok(Self::None),
            1 => Ok(Self::Bisect),
            2 => Ok(Self::Trisect),
            other => Err(CourtError::InvalidArgument(format!(
                "service split must be 0, 1 or 2 lines, got {other}"
            ))),
        }
    }
}

impl ServiceSplit {
    /// Guide x positions across both service boxes.
    #[must_use]
    pub fn guide_positions(self) -> SmallVec<[f64; 4]> {
        let ws = HALF_WIDTH_SINGLES;
        match self {
            Self::None => SmallVec::new(),
            Self::Bisect => SmallVec::from_slice(&[ws / 2.0, -ws / 2.0]),
            Self::Trisect => {
                let split_1 = ws / 3.0;
                let split_2 = ws * 2.0 / 3.0;
                SmallVec::from_slice(&[split_1, split_2, -split_1, -split_2])
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GuideOptions {
    #[serde(default)]
    pub service_split: ServiceSplit,
    /// Bisects the backcourt between the service line and the baseline.
    #[serde(default)]
    pub backcourt_line: bool,
}

impl GuideOptions {
    #[must_use]
    pub const fn new(service_split: ServiceSplit, backcourt_line: bool) -> Self {
        Self {
            service_split,
            backcourt_line,
        }
    }

    /// Trisected service boxes plus the backcourt bisector.
    #[must_use]
    pub const fn bsu() -> Self {
        Self::new(ServiceSplit::Trisect, true)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.service_split == ServiceSplit::None && !self.backcourt_line
    }
}

/// Guide markings in the vertical standard frame.
#[must_use]
pub fn guide_segments(geometry: &CourtGeometry, options: GuideOptions) -> Vec<CourtSegment> {
    let sl = SERVICE_LINE_DISTANCE;
    let ws = HALF_WIDTH_SINGLES;
    let service_start = if geometry.is_half() { 0.0 } else { -sl };

    let mut segments: Vec<CourtSegment> = options
        .service_split
        .guide_positions()
        .into_iter()
        .map(|x| {
            CourtSegment::between(CourtLineKind::ServiceGuide, (x, service_start), (x, sl))
        })
        .collect();

    if options.backcourt_line {
        let y_mid = (sl + HALF_LENGTH) / 2.0;
        segments.push(CourtSegment::between(
            CourtLineKind::BackcourtGuide,
            (-ws, y_mid),
            (ws, y_mid),
        ));
        if !geometry.is_half() {
            segments.push(CourtSegment::between(
                CourtLineKind::BackcourtGuide,
                (-ws, -y_mid),
                (ws, -y_mid),
            ));
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singles_court_skips_inner_sidelines() {
        let geometry = CourtGeometry::new(CourtType::Singles, Orientation::Vertical, false);
        let segments = court_segments(&geometry);
        assert!(
            segments
                .iter()
                .all(|segment| segment.kind != CourtLineKind::SinglesSideline)
        );
        assert_eq!(segments.len(), 9);
    }

    #[test]
    fn service_split_rejects_unknown_counts() {
        assert_eq!(ServiceSplit::try_from(2u8), Ok(ServiceSplit::Trisect));
        assert!(matches!(
            ServiceSplit::try_from(3u8),
            Err(CourtError::InvalidArgument(_))
        ));
    }
}
