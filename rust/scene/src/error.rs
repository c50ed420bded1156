// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for scene operations.

use crate::stage::ShapeKey;

/// Result type alias for scene operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while managing shapes.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A referenced shape was not found in the registry.
    #[error("shape not found: {0:?}")]
    ShapeNotFound(ShapeKey),

    /// The geometry pipeline declined to build a mesh.
    #[error(transparent)]
    Geometry(#[from] sitekit_geometry::Error),
}
