//! Control grid generators for demos and tests
//!
//! - [`dome_grid`]: a 3x3 cell lattice centred on the origin whose four inner
//!   control points are lifted, giving a dome with slightly noisy heights
//! - [`random_grid`]: every control point on a sphere of the given radius

use crate::constants::CONTROL_POINTS;
use crate::data::{ControlCurve, ControlGrid, Point3};
use rand::Rng;
use rand_distr::UnitSphere;

fn grid_from_fn(mut f: impl FnMut(usize, usize) -> Point3) -> ControlGrid {
    let mut curves = [ControlCurve::default(); CONTROL_POINTS];
    for (i, curve) in curves.iter_mut().enumerate() {
        for (j, point) in curve.points.iter_mut().enumerate() {
            *point = f(i, j);
        }
    }
    ControlGrid::new(curves)
}

fn is_inner(index: usize) -> bool {
    index == 1 || index == 2
}

/// Dome-shaped grid spanning `[-extent, 2 * extent]` in x and y.
///
/// Point `(i, j)` sits at `((i - 1) * extent, (j - 1) * extent, h)` with `h`
/// uniform in `[0, extent / 10)`; the four inner points are raised by `extent`.
pub fn dome_grid<R: Rng>(rng: &mut R, extent: f64) -> ControlGrid {
    grid_from_fn(|i, j| {
        let mut point = Point3::new(
            (i as f64 - 1.0) * extent,
            (j as f64 - 1.0) * extent,
            rng.gen::<f64>() * extent / 10.0,
        );
        if is_inner(i) && is_inner(j) {
            point.z += extent;
        }
        point
    })
}

/// Grid whose control points are uniformly distributed on a sphere of `radius`
pub fn random_grid<R: Rng>(rng: &mut R, radius: f64) -> ControlGrid {
    grid_from_fn(|_, _| {
        let direction: [f64; 3] = rng.sample(UnitSphere);
        Point3::from(direction) * radius
    })
}
