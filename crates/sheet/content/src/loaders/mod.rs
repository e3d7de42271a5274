//! Content loaders for reading sheet data from files.
//!
//! This module converts the JSON catalog document and the TOML sheet config
//! into `sheet-core` types.

pub mod catalog;
pub mod config;

pub use catalog::{CatalogDocument, CatalogLoader};
pub use config::ConfigLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
