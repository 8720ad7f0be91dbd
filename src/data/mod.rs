//! Core data structures: points, control curves and grids, and meshes.

pub mod curve;
pub mod grid;
pub mod macros;
pub mod mesh;
pub mod point;

pub use curve::ControlCurve;
pub use grid::ControlGrid;
pub use mesh::{Face, Mesh};
pub use point::Point3;
