//! Wavefront OBJ export for tessellated meshes
//!
//! Every vertex becomes a `v x y z` line and every quad an `f a b c d` line
//! with 1-based vertex indices, in face winding order.
//!
//! # Example
//!
//! ```rust
//! use bezier_mesh::{modules::export::obj::ToObj, Face, Mesh, pt3};
//!
//! let mesh = Mesh::new(
//!     2,
//!     vec![pt3!(0, 0, 0), pt3!(1, 0, 0), pt3!(0, 1, 0), pt3!(1, 1, 0)],
//!     vec![Face::new(0, 1, 3, 2)],
//! );
//!
//! assert_eq!(mesh.to_obj(), "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 1 1 0\nf 1 2 4 3\n");
//! ```

use crate::data::Mesh;
use crate::error::BezierResult;
use std::io::Write;

/// Trait for types that can be written as Wavefront OBJ
pub trait ToObj {
    /// Write OBJ text to `writer`
    fn write_obj<W: Write>(&self, writer: &mut W) -> BezierResult<()>;

    /// Convert to an OBJ string
    fn to_obj(&self) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_obj(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl ToObj for Mesh {
    fn write_obj<W: Write>(&self, writer: &mut W) -> BezierResult<()> {
        for v in &self.vertices {
            writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
        }
        for f in &self.faces {
            writeln!(
                writer,
                "f {} {} {} {}",
                f.v0 + 1,
                f.v1 + 1,
                f.v2 + 1,
                f.v3 + 1
            )?;
        }
        Ok(())
    }
}
