use serde::{Deserialize, Serialize};

use crate::core::{CourtPoint, Extent};
use crate::error::{CourtError, CourtResult};

/// How a value on the upper edge of the grid is binned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeRule {
    /// Every cell is `[lo, hi)`; the upper grid edge is outside.
    #[default]
    HalfOpen,
    /// Like `HalfOpen`, but the last row and column also take their upper edge.
    ClosedLast,
}

/// Regular `rows x cols` cells over an extent.
///
/// Cells are numbered row by row, starting from the lowest `y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellGrid {
    bounds: Extent,
    rows: usize,
    cols: usize,
}

impl CellGrid {
    pub fn new(bounds: Extent, rows: usize, cols: usize) -> CourtResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(CourtError::InvalidArgument(format!(
                "cell grid needs at least one row and column, got {rows}x{cols}"
            )));
        }
        if !bounds.as_array().iter().all(|value| value.is_finite())
            || bounds.width() <= 0.0
            || bounds.height() <= 0.0
        {
            return Err(CourtError::InvalidData(
                "cell grid bounds must be finite with positive width and height".to_owned(),
            ));
        }
        Ok(Self { bounds, rows, cols })
    }

    #[must_use]
    pub fn bounds(&self) -> Extent {
        self.bounds
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn x_edges(&self) -> Vec<f64> {
        edges(self.bounds.x_min, self.bounds.x_max, self.cols)
    }

    #[must_use]
    pub fn y_edges(&self) -> Vec<f64> {
        edges(self.bounds.y_min, self.bounds.y_max, self.rows)
    }

    #[must_use]
    pub fn centers(&self) -> Vec<CourtPoint> {
        (0..self.len())
            .filter_map(|index| self.cell_extent(index))
            .map(|cell| {
                CourtPoint::new((cell.x_min + cell.x_max) / 2.0, (cell.y_min + cell.y_max) / 2.0)
            })
            .collect()
    }

    #[must_use]
    pub fn cell_extent(&self, index: usize) -> Option<Extent> {
        if index >= self.len() {
            return None;
        }
        let (row, col) = (index / self.cols, index % self.cols);
        let x_edges = self.x_edges();
        let y_edges = self.y_edges();
        Some(Extent::new(
            x_edges[col],
            x_edges[col + 1],
            y_edges[row],
            y_edges[row + 1],
        ))
    }

    #[must_use]
    pub fn cell_index(&self, point: CourtPoint, rule: EdgeRule) -> Option<usize> {
        let row = bin(&self.y_edges(), point.y, rule)?;
        let col = bin(&self.x_edges(), point.x, rule)?;
        Some(row * self.cols + col)
    }
}

/// `count + 1` evenly spaced edges; the last one is exactly `max`.
fn edges(min: f64, max: f64, count: usize) -> Vec<f64> {
    let step = (max - min) / count as f64;
    (0..=count)
        .map(|index| {
            if index == count {
                max
            } else {
                min + index as f64 * step
            }
        })
        .collect()
}

fn bin(edges: &[f64], value: f64, rule: EdgeRule) -> Option<usize> {
    let found = edges
        .windows(2)
        .position(|pair| value >= pair[0] && value < pair[1]);
    match (found, rule) {
        (Some(index), _) => Some(index),
        (None, EdgeRule::ClosedLast) if edges.last() == Some(&value) => {
            Some(edges.len().saturating_sub(2))
        }
        (None, _) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_edge_is_exact() {
        let values = edges(-4.115, 4.115, 3);
        assert_eq!(values.len(), 4);
        assert_eq!(values[3], 4.115);
    }

    #[test]
    fn upper_edge_only_counts_when_closed() {
        let grid = CellGrid::new(Extent::new(0.0, 2.0, 0.0, 2.0), 2, 2).expect("grid");
        let corner = CourtPoint::new(2.0, 2.0);
        assert_eq!(grid.cell_index(corner, EdgeRule::HalfOpen), None);
        assert_eq!(grid.cell_index(corner, EdgeRule::ClosedLast), Some(3));
        assert_eq!(
            grid.cell_index(CourtPoint::new(1.0, 0.5), EdgeRule::HalfOpen),
            Some(1)
        );
    }
}
