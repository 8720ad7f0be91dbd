//! Quad mesh produced by tessellating a control grid.

use crate::data::point::Point3;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// One quadrilateral, as indices into [`Mesh::vertices`].
///
/// For the cell whose far corner is sample `(i, j)` the corners are
/// `(i-1, j-1)`, `(i-1, j)`, `(i, j)`, `(i, j-1)` in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Face {
    pub v0: usize,
    pub v1: usize,
    pub v2: usize,
    pub v3: usize,
}

impl Face {
    pub fn new(v0: usize, v1: usize, v2: usize, v3: usize) -> Self {
        Self { v0, v1, v2, v3 }
    }

    pub fn indices(&self) -> [usize; 4] {
        [self.v0, self.v1, self.v2, self.v3]
    }
}

/// Sampled surface points (row-major, `resolution x resolution`) and the
/// quad faces connecting them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub resolution: usize,
    pub vertices: Vec<Point3>,
    pub faces: Vec<Face>,
}

impl Mesh {
    pub fn new(resolution: usize, vertices: Vec<Point3>, faces: Vec<Face>) -> Self {
        Self {
            resolution,
            vertices,
            faces,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Sample at grid row `i`, column `j`
    pub fn vertex(&self, i: usize, j: usize) -> Point3 {
        self.vertices[i * self.resolution + j]
    }

    /// The four corner positions of a face, in winding order
    pub fn face_vertices(&self, face: &Face) -> [Point3; 4] {
        face.indices().map(|index| self.vertices[index])
    }

    /// Split every quad along its `v0-v2` diagonal
    pub fn triangulate(&self) -> Vec<[usize; 3]> {
        self.faces
            .iter()
            .flat_map(|f| [[f.v0, f.v1, f.v2], [f.v0, f.v2, f.v3]])
            .collect()
    }

    /// Unit normal of a face, from the cross product of its diagonals.
    ///
    /// Returns `None` when the quad has collapsed to a line or a point.
    pub fn face_normal(&self, face: &Face) -> Option<Point3> {
        let [p0, p1, p2, p3] = self.face_vertices(face).map(Vector3::from);
        let normal = (p2 - p0).cross(&(p3 - p1));
        normal.try_normalize(f64::EPSILON).map(Point3::from)
    }
}
