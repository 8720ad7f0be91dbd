//! Error types for control grid construction and tessellation.

use thiserror::Error;

/// Errors that can occur while building a control grid or tessellating it.
#[derive(Error, Debug)]
pub enum BezierError {
    /// The control points do not form a 4x4 lattice.
    #[error("control grid must be 4x4, got {rows} rows (offending row length {columns})")]
    InvalidShape { rows: usize, columns: usize },

    /// Tessellation needs at least one sample per direction.
    #[error("tessellation resolution must be positive, got {0}")]
    InvalidResolution(usize),

    /// Control points could not be decoded.
    #[error("failed to parse control grid: {0}")]
    ParseError(String),

    /// Writing an exported mesh failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for bezier mesh operations.
pub type BezierResult<T> = std::result::Result<T, BezierError>;
