// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arena-based mesh storage.
//!
//! The [`MeshArena`] owns every mesh handed over by the geometry pipeline,
//! keyed by stable generational [`MeshKey`]s. The renderer uploads buffers
//! by key; whenever a mesh is replaced or removed the arena returns the
//! evicted value so the caller can release the matching GPU resources
//! before dropping it.

use sitekit_geometry::Mesh;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Key for a mesh owned by the arena.
    pub struct MeshKey;
}

/// Owner of all renderable meshes in a scene.
#[derive(Debug, Default)]
pub struct MeshArena {
    meshes: SlotMap<MeshKey, Mesh>,
}

impl MeshArena {
    /// Creates a new, empty arena.
    pub fn new() -> Self {
        Self {
            meshes: SlotMap::with_key(),
        }
    }

    /// Installs a freshly built mesh and returns its key.
    pub fn install(&mut self, mesh: Mesh) -> MeshKey {
        self.meshes.insert(mesh)
    }

    /// Replaces the mesh under `key`, returning the evicted mesh.
    ///
    /// Returns `None` (and stores nothing) if the key is stale.
    pub fn replace(&mut self, key: MeshKey, mesh: Mesh) -> Option<Mesh> {
        let slot = self.meshes.get_mut(key)?;
        Some(std::mem::replace(slot, mesh))
    }

    /// Removes and returns the mesh under `key`.
    pub fn remove(&mut self, key: MeshKey) -> Option<Mesh> {
        self.meshes.remove(key)
    }

    /// Returns the mesh under `key`, or `None` if the key is stale.
    pub fn get(&self, key: MeshKey) -> Option<&Mesh> {
        self.meshes.get(key)
    }

    /// Returns the number of meshes in the arena.
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Returns `true` if the arena holds no meshes.
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_mesh(triangles: u32) -> Mesh {
        let mut mesh = Mesh::new();
        for i in 0..triangles {
            mesh.add_triangle(i, i + 1, i + 2);
        }
        mesh
    }

    #[test]
    fn install_and_get() {
        let mut arena = MeshArena::new();
        let key = arena.install(dummy_mesh(1));

        assert_eq!(arena.len(), 1);
        assert_eq!(arena.get(key).unwrap().triangle_count(), 1);
    }

    #[test]
    fn replace_returns_evicted_mesh() {
        let mut arena = MeshArena::new();
        let key = arena.install(dummy_mesh(1));

        let evicted = arena.replace(key, dummy_mesh(3)).unwrap();
        assert_eq!(evicted.triangle_count(), 1);
        assert_eq!(arena.get(key).unwrap().triangle_count(), 3);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn remove_invalidates_key() {
        let mut arena = MeshArena::new();
        let key = arena.install(dummy_mesh(2));

        let removed = arena.remove(key).unwrap();
        assert_eq!(removed.triangle_count(), 2);
        assert!(arena.get(key).is_none());
        assert!(arena.replace(key, dummy_mesh(1)).is_none());
        assert!(arena.is_empty());
    }
}
