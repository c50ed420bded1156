use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building footprint geometry
#[derive(Error, Debug)]
pub enum Error {
    #[error("footprint has {found} points, at least 3 required")]
    InsufficientPoints { found: usize },

    #[error("extrusion height must be positive, got {0}")]
    InvalidHeight(f64),
}
