//! JSON control grids
//!
//! A grid is written as 4 rows of 4 points each:
//!
//! ```json
//! [
//!   [{"x": 0, "y": 0, "z": 0}, {"x": 0, "y": 1, "z": 0}, {"x": 0, "y": 2, "z": 0}, {"x": 0, "y": 3, "z": 0}],
//!   ...
//! ]
//! ```
//!
//! Malformed JSON is reported as [`BezierError::ParseError`], well-formed
//! input of the wrong shape as [`BezierError::InvalidShape`].

use crate::data::{ControlGrid, Point3};
use crate::error::{BezierError, BezierResult};

impl ControlGrid {
    /// Parse a control grid from JSON
    pub fn from_json(json: &str) -> BezierResult<Self> {
        let rows: Vec<Vec<Point3>> =
            serde_json::from_str(json).map_err(|e| BezierError::ParseError(e.to_string()))?;
        Self::from_rows(rows)
    }

    /// Serialize the grid to the JSON layout accepted by [`ControlGrid::from_json`]
    pub fn to_json(&self) -> BezierResult<String> {
        serde_json::to_string(self).map_err(|e| BezierError::ParseError(e.to_string()))
    }
}
