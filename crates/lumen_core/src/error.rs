//! Errors shared by the asset loaders.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading an external asset.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be opened at all.
    #[error("Resource unavailable: {path}: {source}")]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file opened but reading it failed part way.
    #[error("IO error while reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image decoding error: {0}")]
    Decode(#[from] image::ImageError),
}

impl LoadError {
    /// Returns true if the asset could not be opened.
    pub fn is_resource_unavailable(&self) -> bool {
        matches!(self, LoadError::ResourceUnavailable { .. })
    }
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;
