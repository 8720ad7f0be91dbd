//! Cubic Bernstein basis
//!
//! B_i(t) = C(3, i) * t^i * (1 - t)^(3 - i), for i in 0..=3:
//!
//! - B_0(t) = (1 - t)^3
//! - B_1(t) = 3t(1 - t)^2
//! - B_2(t) = 3t^2(1 - t)
//! - B_3(t) = t^3

use crate::constants::{BEZIER_DEGREE, BINOMIAL_COEFFICIENTS};

/// Weight of control point `index` at parameter `t`.
///
/// Out-of-range input (`index > 3`, or `t` outside `[0, 1]` including NaN)
/// yields `0.0`, so such a probe contributes nothing to a weighted sum.
///
/// ```
/// use bezier_mesh::basis_weight;
///
/// assert_eq!(basis_weight(0, 0.0), 1.0);
/// assert_eq!(basis_weight(1, 0.5), 0.375);
/// assert_eq!(basis_weight(4, 0.5), 0.0);
/// ```
pub fn basis_weight(index: usize, t: f64) -> f64 {
    if index > BEZIER_DEGREE || !(0.0..=1.0).contains(&t) {
        return 0.0;
    }

    let power = index as i32;
    BINOMIAL_COEFFICIENTS[index] * t.powi(power) * (1.0 - t).powi(BEZIER_DEGREE as i32 - power)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_closed_forms() {
        for k in 0..=20 {
            let t = k as f64 / 20.0;
            let s = 1.0 - t;
            assert_relative_eq!(basis_weight(0, t), s * s * s);
            assert_relative_eq!(basis_weight(1, t), 3.0 * t * s * s);
            assert_relative_eq!(basis_weight(2, t), 3.0 * t * t * s);
            assert_relative_eq!(basis_weight(3, t), t * t * t);
        }
    }

    #[test]
    fn test_partition_of_unity() {
        for k in 0..=100 {
            let t = k as f64 / 100.0;
            let sum: f64 = (0..=3).map(|i| basis_weight(i, t)).sum();
            assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_end_points() {
        assert_eq!(basis_weight(0, 0.0), 1.0);
        assert_eq!(basis_weight(3, 0.0), 0.0);
        assert_eq!(basis_weight(0, 1.0), 0.0);
        assert_eq!(basis_weight(3, 1.0), 1.0);
    }

    #[test]
    fn test_out_of_range_is_zero() {
        assert_eq!(basis_weight(4, 0.5), 0.0);
        assert_eq!(basis_weight(usize::MAX, 0.5), 0.0);
        assert_eq!(basis_weight(0, -0.1), 0.0);
        assert_eq!(basis_weight(3, 1.1), 0.0);
        assert_eq!(basis_weight(1, f64::NAN), 0.0);
        assert_eq!(basis_weight(2, f64::INFINITY), 0.0);
    }
}
