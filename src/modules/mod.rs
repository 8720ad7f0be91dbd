//! Algorithms operating on control grids and meshes.

pub mod eval;
pub mod export;
pub mod generate;
pub mod parse;
pub mod tessellate;
