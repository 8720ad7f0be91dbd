//! Evaluation of Bernstein weights and cubic control curves

pub mod basis;
pub mod curve;
