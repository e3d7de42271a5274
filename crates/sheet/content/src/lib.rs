//! Data-driven content for the character sheet.
//!
//! This crate reads the static documents the sheet depends on:
//! - The reference catalog (JSON): paths, callings, abilities, forge and
//!   mundus effects
//! - The sheet configuration (TOML)
//!
//! Content is loaded once and handed to the engine read-only; it never
//! appears in a draft.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogDocument, CatalogLoader, ConfigLoader, LoadResult};
