//! Control grid: the 4x4 control point lattice of one bicubic patch.

use crate::constants::CONTROL_POINTS;
use crate::data::curve::ControlCurve;
use crate::data::point::Point3;
use crate::error::{BezierError, BezierResult};
use serde::{Deserialize, Serialize};

/// The control points of a bicubic Bezier patch, stored as 4 control curves.
///
/// The 4x4 shape is guaranteed by the type. Untrusted input goes through
/// [`ControlGrid::from_rows`] (or `TryFrom`), which rejects any other shape.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlGrid {
    pub curves: [ControlCurve; CONTROL_POINTS],
}

impl ControlGrid {
    pub fn new(curves: [ControlCurve; CONTROL_POINTS]) -> Self {
        Self { curves }
    }

    /// Build a grid from nested rows, failing unless they are exactly 4x4
    pub fn from_rows(rows: Vec<Vec<Point3>>) -> BezierResult<Self> {
        if rows.len() != CONTROL_POINTS {
            return Err(BezierError::InvalidShape {
                rows: rows.len(),
                columns: rows.first().map_or(0, Vec::len),
            });
        }

        let mut curves = [ControlCurve::default(); CONTROL_POINTS];
        for (curve, row) in curves.iter_mut().zip(rows) {
            let columns = row.len();
            let points: [Point3; CONTROL_POINTS] =
                row.try_into().map_err(|_| BezierError::InvalidShape {
                    rows: CONTROL_POINTS,
                    columns,
                })?;
            *curve = ControlCurve::from(points);
        }

        Ok(Self { curves })
    }

    /// Control curve `i` (row `i` of the lattice)
    pub fn curve(&self, i: usize) -> &ControlCurve {
        &self.curves[i]
    }

    /// Control point at row `i`, column `j`
    pub fn point(&self, i: usize, j: usize) -> Point3 {
        self.curves[i].points[j]
    }

    /// The four corner control points: `[P00, P03, P30, P33]`
    pub fn corners(&self) -> [Point3; 4] {
        let last = CONTROL_POINTS - 1;
        [
            self.point(0, 0),
            self.point(0, last),
            self.point(last, 0),
            self.point(last, last),
        ]
    }

    /// The lattice as nested rows
    pub fn rows(&self) -> Vec<Vec<Point3>> {
        self.curves.iter().map(|c| c.points.to_vec()).collect()
    }
}

impl TryFrom<Vec<Vec<Point3>>> for ControlGrid {
    type Error = BezierError;

    fn try_from(rows: Vec<Vec<Point3>>) -> BezierResult<Self> {
        Self::from_rows(rows)
    }
}
