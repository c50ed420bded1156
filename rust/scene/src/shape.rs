// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Footprint shapes and their promotion state machine.
//!
//! A shape is either a flat overlay or an extruded building, decided once
//! from its height parameter. The footprint point list is preserved
//! unmodified as metadata so the renderable mesh can always be rebuilt
//! from scratch; there is no incremental update path.

use sitekit_geometry::{build_flat_mesh, extrude_footprint, Footprint, Mesh, Result};

/// Heights at or below this are cosmetic-only: the shape stays flat.
pub const HEIGHT_EPSILON: f64 = 1e-6;

/// The two renderable states of a footprint shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeGeometry {
    /// Rendered as a flat overlay just above the ground plane.
    Flat,
    /// Rendered as an extruded solid of the given height.
    Extruded { height: f64 },
}

impl ShapeGeometry {
    /// Resolve the state from a height parameter.
    pub fn classify(height: f64) -> Self {
        if height > HEIGHT_EPSILON {
            Self::Extruded { height }
        } else {
            Self::Flat
        }
    }

    /// Returns `true` for the extruded state.
    pub fn is_extruded(&self) -> bool {
        matches!(self, Self::Extruded { .. })
    }
}

/// A drawn footprint together with its resolved geometry state.
#[derive(Debug, Clone)]
pub struct Shape {
    footprint: Footprint,
    geometry: ShapeGeometry,
}

impl Shape {
    /// Create a shape, classifying it from `height`.
    pub fn new(footprint: Footprint, height: f64) -> Self {
        Self {
            footprint,
            geometry: ShapeGeometry::classify(height),
        }
    }

    /// The stored footprint, exactly as drawn.
    pub fn footprint(&self) -> &Footprint {
        &self.footprint
    }

    /// The resolved geometry state.
    pub fn geometry(&self) -> ShapeGeometry {
        self.geometry
    }

    /// Effective height: 0 for flat shapes.
    pub fn height(&self) -> f64 {
        match self.geometry {
            ShapeGeometry::Flat => 0.0,
            ShapeGeometry::Extruded { height } => height,
        }
    }

    /// Re-classify with a new height, keeping the footprint.
    pub fn with_height(self, height: f64) -> Self {
        Self {
            footprint: self.footprint,
            geometry: ShapeGeometry::classify(height),
        }
    }

    /// Swap the footprint, keeping the height classification.
    pub fn with_footprint(self, footprint: Footprint) -> Self {
        Self {
            footprint,
            geometry: self.geometry,
        }
    }

    /// Build the renderable mesh for the current state.
    ///
    /// Flat shapes go through the surface builder, extruded ones through
    /// the extrusion builder. Always a full rebuild from the footprint.
    pub fn build(&self) -> Result<Mesh> {
        match self.geometry {
            ShapeGeometry::Flat => build_flat_mesh(&self.footprint),
            ShapeGeometry::Extruded { height } => extrude_footprint(&self.footprint, height),
        }
    }
}
