// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Flat surface meshes for footprint overlays

use crate::error::{Error, Result};
use crate::footprint::Footprint;
use crate::mesh::Mesh;
use crate::triangulation::triangulate_footprint;
use nalgebra::{Point2, Point3, Vector3};

/// Elevation of flat overlay meshes above the ground plane. Keeps the
/// overlay from z-fighting with the ground surface it sits on.
pub const SURFACE_LIFT: f64 = 0.01;

/// Add a horizontal cap at `elevation` from already-triangulated plane
/// points. One vertex per footprint point, planar (x, z) UVs. `reverse`
/// flips each triangle for downward-facing caps.
pub(crate) fn add_cap(
    mesh: &mut Mesh,
    points: &[Point2<f64>],
    indices: &[usize],
    elevation: f64,
    normal: Vector3<f64>,
    reverse: bool,
) {
    let base_index = mesh.vertex_count() as u32;

    for p in points {
        mesh.add_vertex(
            Point3::new(p.x, elevation, p.y),
            normal,
            Point2::new(p.x, p.y),
        );
    }

    for t in indices.chunks_exact(3) {
        let i0 = base_index + t[0] as u32;
        let i1 = base_index + t[1] as u32;
        let i2 = base_index + t[2] as u32;

        if reverse {
            mesh.add_triangle(i0, i2, i1);
        } else {
            mesh.add_triangle(i0, i1, i2);
        }
    }
}

/// Build the flat overlay mesh for a footprint.
///
/// Normalizes winding, triangulates, and lifts every vertex by
/// [`SURFACE_LIFT`] with a uniform +y normal. This is the 2D
/// representation of any drawn shape; the extrusion builder reuses the
/// same cap re-elevated to the solid's height.
pub fn build_flat_mesh(footprint: &Footprint) -> Result<Mesh> {
    if footprint.len() < 3 {
        return Err(Error::InsufficientPoints {
            found: footprint.len(),
        });
    }

    let normalized = footprint.clone().normalized();
    let plane = normalized.plane_points();
    let indices = triangulate_footprint(&plane)?;

    let mut mesh = Mesh::with_capacity(plane.len(), indices.len());
    add_cap(&mut mesh, &plane, &indices, SURFACE_LIFT, Vector3::y(), false);

    Ok(mesh)
}
