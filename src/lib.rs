// Module definitions
pub mod constants;
pub mod data;
pub mod error;
pub mod modules;

// export the core data structure at crate level
pub use data::curve::ControlCurve;
pub use data::grid::ControlGrid;
pub use data::mesh::{Face, Mesh};
pub use data::point::Point3;
pub use error::{BezierError, BezierResult};

// and the evaluation entry points
pub use modules::eval::basis::basis_weight;
pub use modules::eval::curve::evaluate_curve;
pub use modules::tessellate::{tessellate, tessellate_with, Sampling, TessellationConfig};
