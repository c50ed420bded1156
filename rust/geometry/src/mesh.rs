// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh data structures

use nalgebra::{Point2, Point3, Vector3};

/// Triangle mesh
///
/// Flat buffers ready for upload by the rendering collaborator: positions
/// and normals in (x, y, z) triples, UVs in (u, v) pairs, indices in
/// triangle triples. The pipeline hands meshes over by value and keeps
/// nothing; disposal is entirely the consumer's concern.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mesh {
    /// Vertex positions (x, y, z)
    pub positions: Vec<f32>,
    /// Vertex normals (nx, ny, nz)
    pub normals: Vec<f32>,
    /// Texture coordinates (u, v)
    pub uvs: Vec<f32>,
    /// Triangle indices (i0, i1, i2)
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            uvs: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Create a mesh with capacity
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count * 3),
            normals: Vec::with_capacity(vertex_count * 3),
            uvs: Vec::with_capacity(vertex_count * 2),
            indices: Vec::with_capacity(index_count),
        }
    }

    /// Add a vertex with normal and texture coordinates
    #[inline]
    pub fn add_vertex(&mut self, position: Point3<f64>, normal: Vector3<f64>, uv: Point2<f64>) {
        self.positions.push(position.x as f32);
        self.positions.push(position.y as f32);
        self.positions.push(position.z as f32);

        self.normals.push(normal.x as f32);
        self.normals.push(normal.y as f32);
        self.normals.push(normal.z as f32);

        self.uvs.push(uv.x as f32);
        self.uvs.push(uv.y as f32);
    }

    /// Add a triangle
    #[inline]
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    /// Merge another mesh into this one
    #[inline]
    pub fn merge(&mut self, other: &Mesh) {
        if other.is_empty() {
            return;
        }

        let vertex_offset = (self.positions.len() / 3) as u32;

        self.positions.reserve(other.positions.len());
        self.normals.reserve(other.normals.len());
        self.uvs.reserve(other.uvs.len());
        self.indices.reserve(other.indices.len());

        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);

        self.indices
            .extend(other.indices.iter().map(|&i| i + vertex_offset));
    }

    /// Keep only the triangles for which `keep` returns true.
    ///
    /// The predicate receives the three vertex indices of each triangle.
    /// Vertices are left untouched; unreferenced vertices may remain in the
    /// buffer afterwards.
    pub fn retain_triangles(&mut self, mut keep: impl FnMut(u32, u32, u32) -> bool) {
        let mut retained = Vec::with_capacity(self.indices.len());
        for t in self.indices.chunks_exact(3) {
            if keep(t[0], t[1], t[2]) {
                retained.extend_from_slice(t);
            }
        }
        self.indices = retained;
    }

    /// Y coordinate of the vertex at `index`
    #[inline]
    pub fn vertex_y(&self, index: u32) -> f32 {
        self.positions[index as usize * 3 + 1]
    }

    /// Get vertex count
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get triangle count
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Calculate bounds (min, max)
    #[inline]
    pub fn bounds(&self) -> (Point3<f32>, Point3<f32>) {
        if self.is_empty() {
            return (Point3::origin(), Point3::origin());
        }

        let mut min = Point3::new(f32::MAX, f32::MAX, f32::MAX);
        let mut max = Point3::new(f32::MIN, f32::MIN, f32::MIN);

        self.positions.chunks_exact(3).for_each(|chunk| {
            let (x, y, z) = (chunk[0], chunk[1], chunk[2]);
            min.x = min.x.min(x);
            min.y = min.y.min(y);
            min.z = min.z.min(z);
            max.x = max.x.max(x);
            max.y = max.y.max(y);
            max.z = max.z.max(z);
        });

        (min, max)
    }

    /// Clear the mesh
    #[inline]
    pub fn clear(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.uvs.clear();
        self.indices.clear();
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_creation() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_add_vertex() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(
            Point3::new(1.0, 2.0, 3.0),
            Vector3::new(0.0, 1.0, 0.0),
            Point2::new(0.5, 0.25),
        );
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.positions, vec![1.0, 2.0, 3.0]);
        assert_eq!(mesh.normals, vec![0.0, 1.0, 0.0]);
        assert_eq!(mesh.uvs, vec![0.5, 0.25]);
    }

    #[test]
    fn test_merge_offsets_indices() {
        let mut mesh1 = Mesh::new();
        mesh1.add_vertex(Point3::origin(), Vector3::y(), Point2::origin());
        mesh1.add_triangle(0, 1, 2);

        let mut mesh2 = Mesh::new();
        mesh2.add_vertex(Point3::new(1.0, 1.0, 1.0), Vector3::x(), Point2::origin());
        mesh2.add_triangle(0, 1, 2);

        mesh1.merge(&mesh2);
        assert_eq!(mesh1.vertex_count(), 2);
        assert_eq!(mesh1.triangle_count(), 2);
        assert_eq!(&mesh1.indices[3..], &[1, 2, 3]);
    }

    #[test]
    fn test_retain_triangles() {
        let mut mesh = Mesh::new();
        for y in [0.0, 0.0, 0.0, 1.0] {
            mesh.add_vertex(Point3::new(0.0, y, 0.0), Vector3::y(), Point2::origin());
        }
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(1, 2, 3);

        mesh.retain_triangles(|a, b, c| {
            [a, b, c].iter().any(|&i| mesh_y_above(&[0.0, 0.0, 0.0, 1.0], i))
        });
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.indices, vec![1, 2, 3]);
        // Vertices stay in place
        assert_eq!(mesh.vertex_count(), 4);
    }

    fn mesh_y_above(ys: &[f32], i: u32) -> bool {
        ys[i as usize] > 0.5
    }

    #[test]
    fn test_bounds() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Point3::new(-1.0, 0.0, 2.0), Vector3::y(), Point2::origin());
        mesh.add_vertex(Point3::new(3.0, 5.0, -4.0), Vector3::y(), Point2::origin());

        let (min, max) = mesh.bounds();
        assert_eq!(min, Point3::new(-1.0, 0.0, -4.0));
        assert_eq!(max, Point3::new(3.0, 5.0, 2.0));
    }
}
