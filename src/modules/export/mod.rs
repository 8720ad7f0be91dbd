//! Export tessellated meshes to various formats
//!
//! This module provides functionality to hand meshes over to other tools
//! for rendering or further processing.
//!
//! # Available Export Formats
//!
//! - [OBJ](obj/index.html) - Export quad meshes as Wavefront OBJ text

pub mod obj;
