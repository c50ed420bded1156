// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ear-clipping triangulation of simple footprint polygons
//!
//! Operates on the (x, z) ground-plane coordinates produced by
//! [`Footprint::plane_points`](crate::Footprint::plane_points), which must
//! already be in canonical counter-clockwise order (positive shoelace sum).
//! Handles convex and concave outlines; holes and self-intersecting
//! contours are out of scope. For non-simple input the staged fallbacks
//! guarantee termination, not geometric correctness.

use crate::error::{Error, Result};
use nalgebra::Point2;
use smallvec::SmallVec;

/// Tolerance for the barycentric emptiness test. Points whose barycentric
/// coordinates are within this of an edge count as outside, so numerical
/// noise on shared edges does not reject valid ears.
const BARY_EPSILON: f64 = 1e-10;

/// Cross product of the edges (a→b) and (b→c) in the ground plane.
/// Positive for a left turn under the canonical winding.
#[inline]
fn edge_cross(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>) -> f64 {
    (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x)
}

/// Barycentric test for a point strictly inside triangle (a, b, c)
fn point_in_triangle(
    p: &Point2<f64>,
    a: &Point2<f64>,
    b: &Point2<f64>,
    c: &Point2<f64>,
) -> bool {
    let v0 = c - a;
    let v1 = b - a;
    let v2 = p - a;

    let dot00 = v0.dot(&v0);
    let dot01 = v0.dot(&v1);
    let dot02 = v0.dot(&v2);
    let dot11 = v1.dot(&v1);
    let dot12 = v1.dot(&v2);

    let denom = dot00 * dot11 - dot01 * dot01;
    if denom.abs() < f64::EPSILON {
        // Degenerate triangle contains nothing strictly
        return false;
    }

    let u = (dot11 * dot02 - dot01 * dot12) / denom;
    let v = (dot00 * dot12 - dot01 * dot02) / denom;

    u > BARY_EPSILON && v > BARY_EPSILON && u + v < 1.0 - BARY_EPSILON
}

/// Working list of vertex indices; interactively drawn footprints are small
type WorkingList = SmallVec<[usize; 32]>;

/// Neighbors of position `i` in the cyclic working list
#[inline]
fn neighbors(remaining: &WorkingList, i: usize) -> (usize, usize, usize) {
    let len = remaining.len();
    let prev = remaining[(i + len - 1) % len];
    let curr = remaining[i];
    let next = remaining[(i + 1) % len];
    (prev, curr, next)
}

/// Find the first ear in the working list: a convex vertex whose triangle
/// contains no other remaining vertex.
fn find_ear(points: &[Point2<f64>], remaining: &WorkingList) -> Option<usize> {
    for i in 0..remaining.len() {
        let (prev, curr, next) = neighbors(remaining, i);

        // Reflex vertices can never be clipped
        if edge_cross(&points[prev], &points[curr], &points[next]) <= 0.0 {
            continue;
        }

        let empty = remaining.iter().all(|&other| {
            other == prev
                || other == curr
                || other == next
                || !point_in_triangle(&points[other], &points[prev], &points[curr], &points[next])
        });

        if empty {
            return Some(i);
        }
    }
    None
}

/// Find the first convex vertex, ignoring the emptiness test
fn find_convex(points: &[Point2<f64>], remaining: &WorkingList) -> Option<usize> {
    (0..remaining.len()).find(|&i| {
        let (prev, curr, next) = neighbors(remaining, i);
        edge_cross(&points[prev], &points[curr], &points[next]) > 0.0
    })
}

/// Emit the triangle for position `i` and drop its vertex from the list.
///
/// Emission order is (prev, next, curr): the swap of the last two indices
/// flips the triangle so its geometric normal faces +y for canonically
/// wound footprints.
fn clip(remaining: &mut WorkingList, i: usize, indices: &mut Vec<usize>) {
    let (prev, curr, next) = neighbors(remaining, i);
    indices.push(prev);
    indices.push(next);
    indices.push(curr);
    remaining.remove(i);
}

/// Fan-triangulate whatever is left from its first vertex. Last-resort
/// safety net: terminates unconditionally but makes no claim of geometric
/// correctness for the shapes that reach it.
fn fan_remaining(remaining: &WorkingList, indices: &mut Vec<usize>) {
    for i in 1..remaining.len() - 1 {
        indices.push(remaining[0]);
        indices.push(remaining[i + 1]);
        indices.push(remaining[i]);
    }
}

/// Triangulate a simple polygon given in canonical counter-clockwise order.
///
/// Returns a flat triangle index list into `points`, exactly N−2 triangles
/// for a simple N-gon. Triangles are wound so their normals face +y.
///
/// Staged algorithm: ear clipping with scan restart after every clip; a
/// convexity-only pass when floating-point noise hides every ear; a fan
/// from the first remaining vertex as the final safety net. Worst case
/// O(N²), fine for the tens of vertices a drawn footprint has.
pub fn triangulate_footprint(points: &[Point2<f64>]) -> Result<Vec<usize>> {
    let n = points.len();
    if n < 3 {
        return Err(Error::InsufficientPoints { found: n });
    }

    // FAST PATH: single triangle, flipped for +y normals
    if n == 3 {
        return Ok(vec![0, 2, 1]);
    }

    // FAST PATH: quad split at index 0
    if n == 4 {
        return Ok(vec![0, 2, 1, 0, 3, 2]);
    }

    let mut remaining: WorkingList = (0..n).collect();
    let mut indices = Vec::with_capacity((n - 2) * 3);

    // Hard cap on scan passes so pathological (self-intersecting) input
    // cannot loop; each pass below either clips a vertex or returns.
    let max_passes = 2 * n;
    let mut passes = 0;

    while remaining.len() > 3 {
        passes += 1;
        if passes > max_passes {
            fan_remaining(&remaining, &mut indices);
            return Ok(indices);
        }

        if let Some(i) = find_ear(points, &remaining) {
            clip(&mut remaining, i, &mut indices);
            continue;
        }

        // No valid ear: accumulated floating-point error on a
        // near-degenerate outline. Relax the emptiness test.
        if let Some(i) = find_convex(points, &remaining) {
            clip(&mut remaining, i, &mut indices);
            continue;
        }

        // Not even a convex vertex left
        fan_remaining(&remaining, &mut indices);
        return Ok(indices);
    }

    // Final triangle, same flip as everywhere else
    indices.push(remaining[0]);
    indices.push(remaining[2]);
    indices.push(remaining[1]);

    Ok(indices)
}
