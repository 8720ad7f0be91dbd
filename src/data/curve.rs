//! Control curve: the 4 control points of one cubic Bezier row or column.

use crate::constants::CONTROL_POINTS;
use crate::data::point::Point3;
use crate::modules::eval::basis::basis_weight;
use crate::modules::eval::curve::evaluate_curve;
use serde::{Deserialize, Serialize};

/// A cubic Bezier control polygon in 3-space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlCurve {
    /// Control points: start point, control1, control2, end point
    pub points: [Point3; CONTROL_POINTS],
}

impl ControlCurve {
    pub fn new(p1: Point3, p2: Point3, p3: Point3, p4: Point3) -> Self {
        Self {
            points: [p1, p2, p3, p4],
        }
    }

    /// First control point, where the curve starts
    pub fn start(&self) -> Point3 {
        self.points[0]
    }

    /// Last control point, where the curve ends
    pub fn end(&self) -> Point3 {
        self.points[CONTROL_POINTS - 1]
    }

    /// Point at sample `sample_index` of `resolution` uniform steps.
    ///
    /// See [`evaluate_curve`] for the out-of-range behaviour.
    pub fn evaluate(&self, sample_index: usize, resolution: usize) -> Point3 {
        evaluate_curve(self, sample_index, resolution)
    }

    /// Point on the curve at parameter t (0 <= t <= 1)
    pub fn point_at(&self, t: f64) -> Point3 {
        self.points
            .iter()
            .enumerate()
            .fold(Point3::zero(), |acc, (i, p)| acc + *p * basis_weight(i, t))
    }

    /// `count` points evenly spaced in t, including both end points
    pub fn sample_points(&self, count: usize) -> Vec<Point3> {
        let steps = count.saturating_sub(1).max(1);
        (0..count).map(|i| self.evaluate(i, steps)).collect()
    }
}

impl From<[Point3; CONTROL_POINTS]> for ControlCurve {
    fn from(points: [Point3; CONTROL_POINTS]) -> Self {
        Self { points }
    }
}
