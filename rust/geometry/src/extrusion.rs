// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Extrusion operations - promoting footprints to 3D building solids

use crate::error::{Error, Result};
use crate::footprint::Footprint;
use crate::mesh::Mesh;
use crate::surface::add_cap;
use crate::triangulation::triangulate_footprint;
use nalgebra::{Point2, Point3, Vector3};

/// Vertices closer than this to the base elevation count as "on the
/// ground" for bottom-cap suppression.
const BASE_EPSILON: f32 = 1e-6;

/// Extrude a footprint vertically into a capped, open-bottom solid.
///
/// The solid is a prism over the (winding-normalized) footprint: a
/// triangulated top cap at `y = height` and one wall quad per footprint
/// edge connecting the base ring to the top ring. The bottom cap is
/// suppressed - the solid sits on a ground surface that already renders at
/// that elevation, so an opaque bottom face could only z-fight with it.
///
/// Walls do not share vertices with the cap, so each face shades with its
/// own normal at the seam. Degenerate (zero-length) footprint edges
/// produce no wall quad.
pub fn extrude_footprint(footprint: &Footprint, height: f64) -> Result<Mesh> {
    if height <= 0.0 {
        return Err(Error::InvalidHeight(height));
    }
    if footprint.len() < 3 {
        return Err(Error::InsufficientPoints {
            found: footprint.len(),
        });
    }

    let normalized = footprint.clone().normalized();
    let plane = normalized.plane_points();
    let indices = triangulate_footprint(&plane)?;
    let n = plane.len();

    let mut mesh = Mesh::with_capacity(n * 6, indices.len() * 2 + n * 6);

    // Closed prism first: both caps plus walls. The base cap is stripped
    // below, leaving its vertices in the buffer but no renderable face.
    add_cap(&mut mesh, &plane, &indices, height, Vector3::y(), false);
    add_cap(&mut mesh, &plane, &indices, 0.0, -Vector3::y(), true);

    create_side_walls(&plane, height, &mut mesh);

    suppress_base_cap(&mut mesh, 0.0);

    Ok(mesh)
}

/// Create side walls for the footprint boundary
fn create_side_walls(boundary: &[Point2<f64>], height: f64, mesh: &mut Mesh) {
    let base_index = mesh.vertex_count() as u32;
    let mut quad_count = 0u32;

    for i in 0..boundary.len() {
        let j = (i + 1) % boundary.len();

        let p0 = &boundary[i];
        let p1 = &boundary[j];

        // Outward normal: edge direction rotated 90 degrees in the ground
        // plane. Use try_normalize to handle degenerate edges (duplicate
        // consecutive points).
        let edge = Vector3::new(p1.x - p0.x, 0.0, p1.y - p0.y);
        let normal = match Vector3::new(edge.z, 0.0, -edge.x).try_normalize(1e-10) {
            Some(n) => n,
            None => continue, // Skip degenerate edge
        };

        let edge_len = edge.norm();

        // Bottom vertices
        let v0_bottom = Point3::new(p0.x, 0.0, p0.y);
        let v1_bottom = Point3::new(p1.x, 0.0, p1.y);

        // Top vertices
        let v0_top = Point3::new(p0.x, height, p0.y);
        let v1_top = Point3::new(p1.x, height, p1.y);

        // Add 4 vertices for this quad; u runs along the edge, v up the wall
        let idx = base_index + (quad_count * 4);
        mesh.add_vertex(v0_bottom, normal, Point2::new(0.0, 0.0));
        mesh.add_vertex(v1_bottom, normal, Point2::new(edge_len, 0.0));
        mesh.add_vertex(v1_top, normal, Point2::new(edge_len, height));
        mesh.add_vertex(v0_top, normal, Point2::new(0.0, height));

        // Add 2 triangles for the quad, wound to face outward
        mesh.add_triangle(idx, idx + 2, idx + 1);
        mesh.add_triangle(idx, idx + 3, idx + 2);

        quad_count += 1;
    }
}

/// Drop every triangle whose three vertices all sit at the base elevation.
/// Wall quads always keep two vertices at the top ring, so only the bottom
/// cap matches.
fn suppress_base_cap(mesh: &mut Mesh, base: f64) {
    let base = base as f32;
    let ys: Vec<f32> = mesh.positions.iter().skip(1).step_by(3).copied().collect();

    mesh.retain_triangles(|a, b, c| {
        ![a, b, c]
            .iter()
            .all(|&i| (ys[i as usize] - base).abs() <= BASE_EPSILON)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> Footprint {
        Footprint::from_plane(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    /// Total surface area of the indexed triangles
    fn surface_area(mesh: &Mesh) -> f64 {
        mesh.indices
            .chunks_exact(3)
            .map(|t| {
                let p = |i: u32| {
                    let i = i as usize * 3;
                    Point3::new(
                        mesh.positions[i] as f64,
                        mesh.positions[i + 1] as f64,
                        mesh.positions[i + 2] as f64,
                    )
                };
                let (a, b, c) = (p(t[0]), p(t[1]), p(t[2]));
                (b - a).cross(&(c - a)).norm() * 0.5
            })
            .sum()
    }

    #[test]
    fn test_unit_square_height_two() {
        let footprint = unit_square();
        let mesh = extrude_footprint(&footprint, 2.0).unwrap();

        // 2N cap vertices + 4N wall vertices, (N-2) + 2N triangles
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 10);

        // 2 cap triangles of total area 1, 8 wall triangles covering 4
        // quads of area 2 each
        assert_relative_eq!(surface_area(&mesh), 9.0, epsilon = 1e-5);

        let (min, max) = mesh.bounds();
        assert_relative_eq!(min.y, 0.0);
        assert_relative_eq!(max.y, 2.0);

        // Solid volume: footprint area x height
        assert_relative_eq!(footprint.signed_area() * 2.0, 2.0);
    }

    #[test]
    fn test_vertex_and_triangle_count_formula() {
        let n = 5;
        let pentagon = Footprint::new(
            (0..n)
                .map(|i| {
                    let angle = std::f64::consts::TAU * (i as f64) / (n as f64);
                    Point3::new(angle.cos(), 0.0, angle.sin())
                })
                .collect(),
        );
        let mesh = extrude_footprint(&pentagon, 3.0).unwrap();

        assert_eq!(mesh.vertex_count(), 6 * n);
        assert_eq!(mesh.triangle_count(), (n - 2) + 2 * n);
    }

    #[test]
    fn test_bottom_cap_is_suppressed() {
        let mesh = extrude_footprint(&unit_square(), 1.5).unwrap();

        for t in mesh.indices.chunks_exact(3) {
            let all_at_base = t.iter().all(|&i| mesh.vertex_y(i).abs() <= BASE_EPSILON);
            assert!(!all_at_base, "bottom-cap triangle survived: {:?}", t);
        }
    }

    #[test]
    fn test_wall_normals_face_outward() {
        let mesh = extrude_footprint(&unit_square(), 1.0).unwrap();

        // Skip the 8 cap vertices; every wall vertex normal must point
        // away from the solid's central axis
        for i in 8..mesh.vertex_count() {
            let p = i * 3;
            let normal = Vector3::new(
                mesh.normals[p] as f64,
                mesh.normals[p + 1] as f64,
                mesh.normals[p + 2] as f64,
            );
            let outward = Vector3::new(
                mesh.positions[p] as f64 - 0.5,
                0.0,
                mesh.positions[p + 2] as f64 - 0.5,
            );
            assert!(
                normal.dot(&outward) > 0.0,
                "wall normal {:?} points inward at vertex {}",
                normal,
                i
            );
            assert_relative_eq!(normal.y, 0.0);
        }
    }

    #[test]
    fn test_clockwise_footprint_matches_ccw() {
        let ccw = unit_square();
        let cw = Footprint::from_plane(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);

        let mesh_ccw = extrude_footprint(&ccw, 2.0).unwrap();
        let mesh_cw = extrude_footprint(&cw, 2.0).unwrap();

        assert_eq!(mesh_ccw.vertex_count(), mesh_cw.vertex_count());
        assert_eq!(mesh_ccw.triangle_count(), mesh_cw.triangle_count());
        assert_relative_eq!(surface_area(&mesh_ccw), surface_area(&mesh_cw), epsilon = 1e-5);
    }

    #[test]
    fn test_duplicate_point_skips_degenerate_wall() {
        let footprint = Footprint::from_plane(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 0.0), // duplicate consecutive point
            (1.0, 1.0),
            (0.0, 1.0),
        ]);
        let mesh = extrude_footprint(&footprint, 1.0).unwrap();

        // 5 edges, one degenerate: 4 wall quads survive
        let wall_vertices = mesh.vertex_count() - 2 * footprint.len();
        assert_eq!(wall_vertices, 4 * 4);
        assert!(mesh.triangle_count() > 0);
    }

    #[test]
    fn test_invalid_height() {
        assert!(matches!(
            extrude_footprint(&unit_square(), 0.0),
            Err(Error::InvalidHeight(_))
        ));
        assert!(matches!(
            extrude_footprint(&unit_square(), -2.0),
            Err(Error::InvalidHeight(_))
        ));
    }

    #[test]
    fn test_insufficient_points() {
        let footprint = Footprint::from_plane(&[(0.0, 0.0), (1.0, 0.0)]);
        assert!(matches!(
            extrude_footprint(&footprint, 1.0),
            Err(Error::InsufficientPoints { found: 2 })
        ));
    }
}
