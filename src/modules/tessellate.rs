//! Tessellate a bicubic Bezier patch into a quad mesh
//!
//! The surface is sampled in two passes of curve evaluation:
//!
//! 1. every control curve of the grid is sampled `resolution` times, giving
//!    4 intermediate curves,
//! 2. for each sample position `i`, the `i`-th points of the 4 intermediate
//!    curves form a new control curve, which is again sampled `resolution`
//!    times. Its `j`-th sample is the vertex at row `i`, column `j`.
//!
//! This evaluates `S(u, v) = sum_r sum_c B_r(v) B_c(u) P[r][c]` as two nested
//! 1-D blends. Mesh row `i` follows the column parameter `u` of the grid, so
//! the corners of the mesh are `P[0][0]`, `P[3][0]` (row 0, last column),
//! `P[0][3]` (last row, column 0) and `P[3][3]`.
//!
//! Quad faces connect every unit cell of the resulting `resolution x resolution`
//! sample grid.
//!
//! # Example
//!
//! ```rust
//! use bezier_mesh::{control_curve, control_grid, tessellate};
//!
//! let grid = control_grid!([
//!     control_curve!([(0, 0, 0), (0, 1, 0), (0, 2, 0), (0, 3, 0)]),
//!     control_curve!([(1, 0, 0), (1, 1, 2), (1, 2, 2), (1, 3, 0)]),
//!     control_curve!([(2, 0, 0), (2, 1, 2), (2, 2, 2), (2, 3, 0)]),
//!     control_curve!([(3, 0, 0), (3, 1, 0), (3, 2, 0), (3, 3, 0)])
//! ]);
//!
//! let mesh = tessellate(&grid, 10).unwrap();
//!
//! assert_eq!(mesh.vertices.len(), 100);
//! assert_eq!(mesh.faces.len(), 81);
//! ```

use crate::constants::DEFAULT_RESOLUTION;
use crate::data::{ControlCurve, ControlGrid, Face, Mesh, Point3};
use crate::error::{BezierError, BezierResult};
use log::debug;
use serde::{Deserialize, Serialize};

/// How sample indices map to curve parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sampling {
    /// `t = j / (resolution - 1)`: the last sample lies on the patch boundary,
    /// so the mesh interpolates the corner control points
    #[default]
    Inclusive,
    /// `t = j / resolution`: the last sample stops one step short of the
    /// boundary
    Exclusive,
}

impl Sampling {
    /// Number of parameter steps the samples `0..resolution` are spread over
    fn steps(self, resolution: usize) -> usize {
        match self {
            Sampling::Inclusive => resolution.saturating_sub(1).max(1),
            Sampling::Exclusive => resolution,
        }
    }
}

/// Tessellation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TessellationConfig {
    /// Samples per parametric direction
    pub resolution: usize,
    pub sampling: Sampling,
}

impl Default for TessellationConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            sampling: Sampling::default(),
        }
    }
}

impl TessellationConfig {
    pub fn with_resolution(resolution: usize) -> Self {
        Self {
            resolution,
            ..Self::default()
        }
    }
}

/// Tessellate `grid` into `resolution x resolution` vertices and
/// `(resolution - 1)^2` quad faces, sampling the patch boundary inclusively.
///
/// Fails with [`BezierError::InvalidResolution`] when `resolution` is 0.
pub fn tessellate(grid: &ControlGrid, resolution: usize) -> BezierResult<Mesh> {
    tessellate_with(grid, &TessellationConfig::with_resolution(resolution))
}

/// Tessellate `grid` with explicit settings
pub fn tessellate_with(grid: &ControlGrid, config: &TessellationConfig) -> BezierResult<Mesh> {
    let resolution = config.resolution;
    if resolution == 0 {
        return Err(BezierError::InvalidResolution(resolution));
    }
    debug!(
        "tessellating bicubic patch at resolution {} ({:?} sampling)",
        resolution, config.sampling
    );

    let steps = config.sampling.steps(resolution);

    // Pass 1: sample each control curve of the grid
    let intermediate: [Vec<Point3>; 4] = grid
        .curves
        .map(|curve| (0..resolution).map(|j| curve.evaluate(j, steps)).collect());

    // Pass 2: sample across the intermediate curves, row by row
    let mut vertices = Vec::with_capacity(resolution * resolution);
    for i in 0..resolution {
        let across = ControlCurve::new(
            intermediate[0][i],
            intermediate[1][i],
            intermediate[2][i],
            intermediate[3][i],
        );
        vertices.extend((0..resolution).map(|j| across.evaluate(j, steps)));
    }

    let faces = quad_faces(resolution);
    debug!(
        "tessellation produced {} vertices and {} faces",
        vertices.len(),
        faces.len()
    );

    Ok(Mesh::new(resolution, vertices, faces))
}

/// Quad faces over a row-major `resolution x resolution` sample grid, one per
/// unit cell
pub fn quad_faces(resolution: usize) -> Vec<Face> {
    let cells = resolution.saturating_sub(1);
    let mut faces = Vec::with_capacity(cells * cells);
    for i in 1..resolution {
        for j in 1..resolution {
            faces.push(Face::new(
                (i - 1) * resolution + (j - 1),
                (i - 1) * resolution + j,
                i * resolution + j,
                i * resolution + (j - 1),
            ));
        }
    }
    faces
}
