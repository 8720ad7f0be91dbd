//! Sampled evaluation of a cubic control curve

use crate::data::{ControlCurve, Point3};
use crate::modules::eval::basis::basis_weight;

/// Point on `curve` at `t = sample_index / resolution`.
///
/// `sample_index == resolution` is the last valid sample (t = 1, the end
/// point of the curve). For `sample_index > resolution` or `resolution == 0`
/// the origin is returned instead of failing.
///
/// ```
/// use bezier_mesh::{control_curve, evaluate_curve, pt3};
///
/// let curve = control_curve!([(0, 0, 0), (1, 2, 0), (2, 2, 0), (3, 0, 0)]);
///
/// assert_eq!(evaluate_curve(&curve, 0, 10), pt3!(0, 0, 0));
/// assert_eq!(evaluate_curve(&curve, 10, 10), pt3!(3, 0, 0));
/// assert_eq!(evaluate_curve(&curve, 11, 10), pt3!(0, 0, 0));
/// ```
pub fn evaluate_curve(curve: &ControlCurve, sample_index: usize, resolution: usize) -> Point3 {
    if sample_index > resolution || resolution == 0 {
        return Point3::zero();
    }

    let t = sample_index as f64 / resolution as f64;
    let mut point = Point3::zero();
    for (i, control) in curve.points.iter().enumerate() {
        point += *control * basis_weight(i, t);
    }
    point
}
