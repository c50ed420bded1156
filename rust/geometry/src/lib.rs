// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sitekit Geometry
//!
//! Footprint-to-mesh pipeline for ground-plane sketching: winding
//! normalization, ear-clipping triangulation, flat surface meshes and
//! extruded building solids. Uses nalgebra for the math; every operation is
//! a pure function from a footprint (and height) to a new [`Mesh`].
//!
//! Footprints live on the horizontal (x, z) plane with +y up. The pipeline
//! canonicalizes winding before triangulating, so callers may hand in points
//! in either rotational direction.

pub mod error;
pub mod extrusion;
pub mod footprint;
pub mod mesh;
pub mod surface;
pub mod triangulation;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

pub use error::{Error, Result};
pub use extrusion::extrude_footprint;
pub use footprint::{Footprint, Winding};
pub use mesh::Mesh;
pub use surface::{build_flat_mesh, SURFACE_LIFT};
pub use triangulation::triangulate_footprint;
