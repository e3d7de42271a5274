//! Asynchronous abstraction for fetching the reference catalog.
//!
//! A session fetches its catalog exactly once through a [`CatalogSource`].
//! Implementations can read a file, hold an in-memory document for tests, or
//! wrap a network fetch in an embedding front end.
use std::path::PathBuf;

use async_trait::async_trait;
use sheet_content::{CatalogLoader, LoadResult};
use sheet_core::Catalog;

/// Trait for providing the reference catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch and parse the catalog.
    async fn fetch(&self) -> LoadResult<Catalog>;

    /// Human-readable origin of the catalog, used in logs and errors.
    fn describe(&self) -> String;
}

/// Reads a JSON catalog document from disk.
#[derive(Clone, Debug)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch(&self) -> LoadResult<Catalog> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            anyhow::anyhow!("Failed to read file {}: {}", self.path.display(), e)
        })?;
        CatalogLoader::parse(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Catalog document held in memory.
#[derive(Clone, Debug)]
pub struct InlineCatalogSource {
    document: String,
}

impl InlineCatalogSource {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for InlineCatalogSource {
    async fn fetch(&self) -> LoadResult<Catalog> {
        CatalogLoader::parse(&self.document)
    }

    fn describe(&self) -> String {
        "inline document".to_string()
    }
}
