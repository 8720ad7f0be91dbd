//! Parsing module for control grids
//!
//! Now supported format:
//! - JSON:
//!     4 rows of 4 points in the form of `{"x": 0.0, "y": 0.0, "z": 0.0}`.
//!     See the `json` module for more detailed information on the JSON format.

pub mod json;
