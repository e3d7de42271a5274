//! Unified error types surfaced by the session API.
use thiserror::Error;

use sheet_core::DraftError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("catalog is not loaded yet")]
    NotReady,

    #[error("catalog is unavailable: {reason}")]
    CatalogUnavailable { reason: String },

    #[error("failed to fetch catalog from {source_name}")]
    CatalogFetch {
        source_name: String,
        #[source]
        cause: anyhow::Error,
    },

    #[error("failed to read selections")]
    Selections(#[source] anyhow::Error),

    #[error(transparent)]
    Draft(#[from] DraftError),
}

impl RuntimeError {
    /// True for errors that leave the session permanently without a catalog.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::CatalogUnavailable { .. } | Self::CatalogFetch { .. }
        )
    }
}
