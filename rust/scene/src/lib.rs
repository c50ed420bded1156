// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sitekit Scene
//!
//! Ownership layer between the pure geometry pipeline and a rendering
//! engine: shapes live in a slot-map registry, their meshes in an arena
//! with stable generational keys. A shape is either a flat overlay or an
//! extruded building, resolved once from its height; every edit is a full
//! rebuild from the stored footprint, and the evicted mesh is handed back
//! so the renderer can release its buffers.

pub mod arena;
pub mod error;
pub mod shape;
pub mod stage;

pub use arena::{MeshArena, MeshKey};
pub use error::{Error, Result};
pub use shape::{Shape, ShapeGeometry, HEIGHT_EPSILON};
pub use stage::{Stage, ShapeKey};
