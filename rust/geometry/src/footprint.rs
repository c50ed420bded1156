// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Footprint definition and winding normalization

use nalgebra::{Point2, Point3};

/// Rotational direction of a footprint's point order in the (x, z) plane.
///
/// Derived from the shoelace sum, never stored. The canonical orientation
/// for the whole pipeline is [`Winding::CounterClockwise`]; both the
/// triangulator's ear tests and the extrusion builder's outward wall
/// normals assume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
}

/// An ordered, implicitly closed polygon outline on the ground plane.
///
/// Points are 3D but live on the horizontal (x, z) plane; y carries no
/// meaning here and is ignored by area/winding computations. A footprint
/// needs at least 3 points to triangulate. Duplicate-adjacent or collinear
/// points are not filtered and may produce degenerate (zero-area) triangles
/// downstream; input quality is the drawing layer's concern.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    points: Vec<Point3<f64>>,
}

impl Footprint {
    /// Create a footprint from ground-plane points
    pub fn new(points: Vec<Point3<f64>>) -> Self {
        Self { points }
    }

    /// Create a footprint from (x, z) pairs at y = 0
    pub fn from_plane(coords: &[(f64, f64)]) -> Self {
        Self {
            points: coords.iter().map(|&(x, z)| Point3::new(x, 0.0, z)).collect(),
        }
    }

    /// The ordered point list
    #[inline]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Signed area via the shoelace formula over (x, z).
    ///
    /// Positive for the canonical counter-clockwise orientation, negative
    /// for clockwise, zero for degenerate outlines.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }

        let mut sum = 0.0;
        for i in 0..n {
            let p = &self.points[i];
            let q = &self.points[(i + 1) % n];
            sum += p.x * q.z - q.x * p.z;
        }
        sum * 0.5
    }

    /// Derive the winding order from the signed area.
    ///
    /// A zero-area footprint reports counter-clockwise, i.e. it is treated
    /// as already canonical rather than rejected.
    pub fn winding(&self) -> Winding {
        if self.signed_area() < 0.0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    /// Reverse the point order in place if the footprint is clockwise.
    ///
    /// Idempotent; a no-op for footprints already counter-clockwise.
    pub fn normalize(&mut self) {
        if self.winding() == Winding::Clockwise {
            self.points.reverse();
        }
    }

    /// Consuming variant of [`normalize`](Self::normalize)
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Project to 2D (x, z) coordinates for triangulation
    pub fn plane_points(&self) -> Vec<Point2<f64>> {
        self.points.iter().map(|p| Point2::new(p.x, p.z)).collect()
    }
}
