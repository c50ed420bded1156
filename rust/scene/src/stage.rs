// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shape registry and edit transitions.
//!
//! The [`Stage`] owns every drawn shape and the [`MeshArena`] with their
//! renderable meshes. Edits (height change, footprint change) rebuild the
//! affected mesh from the stored footprint and hand the evicted mesh back
//! to the caller, which is responsible for releasing renderer-side
//! resources before dropping it.

use slotmap::{new_key_type, SlotMap};

use crate::arena::{MeshArena, MeshKey};
use crate::error::{Error, Result};
use crate::shape::Shape;
use sitekit_geometry::{Footprint, Mesh};

new_key_type! {
    /// Key for a shape in the registry.
    pub struct ShapeKey;
}

#[derive(Debug)]
struct ShapeRecord {
    shape: Shape,
    mesh: MeshKey,
}

/// Registry of footprint shapes and owner of their meshes.
#[derive(Debug, Default)]
pub struct Stage {
    shapes: SlotMap<ShapeKey, ShapeRecord>,
    arena: MeshArena,
}

impl Stage {
    /// Creates an empty stage.
    pub fn new() -> Self {
        Self {
            shapes: SlotMap::with_key(),
            arena: MeshArena::new(),
        }
    }

    /// Adds a shape, building its mesh immediately.
    ///
    /// Nothing is stored if the geometry pipeline declines the footprint
    /// (fewer than 3 points).
    pub fn add_shape(&mut self, footprint: Footprint, height: f64) -> Result<ShapeKey> {
        let shape = Shape::new(footprint, height);
        let mesh = shape.build()?;
        let geometry = shape.geometry();
        let mesh_key = self.arena.install(mesh);
        let key = self.shapes.insert(ShapeRecord {
            shape,
            mesh: mesh_key,
        });

        tracing::debug!(?key, ?geometry, "shape added");
        Ok(key)
    }

    /// Changes a shape's height, rebuilding its mesh from scratch.
    ///
    /// Returns the evicted mesh for disposal. Crossing the height epsilon
    /// transitions the shape between its flat and extruded states; either
    /// way the old mesh is replaced, never mutated.
    pub fn set_height(&mut self, key: ShapeKey, height: f64) -> Result<Option<Mesh>> {
        let record = self.shapes.get_mut(key).ok_or(Error::ShapeNotFound(key))?;

        let was_extruded = record.shape.geometry().is_extruded();
        let shape = record.shape.clone().with_height(height);
        let mesh = shape.build()?;

        if was_extruded != shape.geometry().is_extruded() {
            tracing::info!(?key, extruded = shape.geometry().is_extruded(), "shape transitioned");
        }
        tracing::debug!(?key, height, "shape mesh rebuilt");

        let evicted = self.arena.replace(record.mesh, mesh);
        record.shape = shape;
        Ok(evicted)
    }

    /// Replaces a shape's footprint, rebuilding its mesh from scratch.
    ///
    /// The height classification is kept. Returns the evicted mesh for
    /// disposal.
    pub fn set_footprint(&mut self, key: ShapeKey, footprint: Footprint) -> Result<Option<Mesh>> {
        let record = self.shapes.get_mut(key).ok_or(Error::ShapeNotFound(key))?;

        let shape = record.shape.clone().with_footprint(footprint);
        let mesh = shape.build()?;

        tracing::debug!(?key, points = shape.footprint().len(), "shape footprint replaced");

        let evicted = self.arena.replace(record.mesh, mesh);
        record.shape = shape;
        Ok(evicted)
    }

    /// Removes a shape, returning its mesh for disposal.
    pub fn remove_shape(&mut self, key: ShapeKey) -> Option<Mesh> {
        let record = self.shapes.remove(key)?;
        tracing::debug!(?key, "shape removed");
        self.arena.remove(record.mesh)
    }

    /// The shape under `key`, or `None` if the key is stale.
    pub fn shape(&self, key: ShapeKey) -> Option<&Shape> {
        self.shapes.get(key).map(|r| &r.shape)
    }

    /// The current mesh of the shape under `key`.
    pub fn mesh(&self, key: ShapeKey) -> Option<&Mesh> {
        let record = self.shapes.get(key)?;
        self.arena.get(record.mesh)
    }

    /// The arena key of the shape's mesh, for renderer-side bookkeeping.
    pub fn mesh_key(&self, key: ShapeKey) -> Option<MeshKey> {
        self.shapes.get(key).map(|r| r.mesh)
    }

    /// Number of shapes on the stage.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if no shapes exist.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
