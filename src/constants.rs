//! Constants shared across the crate

/// Degree of the Bernstein polynomials used for curves and surfaces
pub const BEZIER_DEGREE: usize = 3;

/// Number of control points per control curve (and control curves per grid)
pub const CONTROL_POINTS: usize = BEZIER_DEGREE + 1;

/// Binomial coefficients C(3, i)
pub const BINOMIAL_COEFFICIENTS: [f64; CONTROL_POINTS] = [1.0, 3.0, 3.0, 1.0];

/// Samples per parametric direction when no resolution is given
pub const DEFAULT_RESOLUTION: usize = 50;

/// Half-width of the dome test grid
pub const DEFAULT_DOME_EXTENT: f64 = 300.0;

/// Radius of the sphere random control points are drawn on
pub const DEFAULT_RANDOM_RADIUS: f64 = 800.0;
