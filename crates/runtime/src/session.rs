//! Sheet session: one catalog, one draft, one event at a time.
//!
//! A [`Session`] starts with its catalog pending. [`Session::load`] performs
//! the single fetch; on failure the session stays without a catalog for good
//! and every later operation reports it. Until a catalog is ready, events are
//! skipped with [`RuntimeError::NotReady`].
use sheet_core::{
    Catalog, CharacterDraft, DerivationEngine, DraftEvent, RecomputeReport, SheetConfig,
    render_markdown,
};

use crate::error::{Result, RuntimeError};
use crate::source::CatalogSource;

/// Lifecycle of the session's catalog.
#[derive(Clone, Debug)]
pub enum CatalogState {
    Pending,
    Ready(Catalog),
    Failed { reason: String },
}

impl CatalogState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Ready(_) => "ready",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Owns the draft and drives the derivation engine for it.
#[derive(Debug)]
pub struct Session {
    config: SheetConfig,
    catalog: CatalogState,
    draft: CharacterDraft,
}

impl Session {
    pub fn new(config: SheetConfig) -> Self {
        let draft = CharacterDraft::new(&config);
        Self {
            config,
            catalog: CatalogState::Pending,
            draft,
        }
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn catalog_state(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.catalog {
            CatalogState::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.catalog, CatalogState::Ready(_))
    }

    pub fn draft(&self) -> &CharacterDraft {
        &self.draft
    }

    /// Fetches the catalog once and runs the first recompute pass.
    ///
    /// Loading twice is a no-op. A failed fetch is final: the error is
    /// returned and later calls report [`RuntimeError::CatalogUnavailable`].
    pub async fn load<S>(&mut self, source: &S) -> Result<RecomputeReport>
    where
        S: CatalogSource + ?Sized,
    {
        match &self.catalog {
            CatalogState::Pending => {}
            CatalogState::Ready(_) => {
                tracing::warn!("catalog already loaded; ignoring second load");
                return Ok(RecomputeReport::default());
            }
            CatalogState::Failed { reason } => {
                return Err(RuntimeError::CatalogUnavailable {
                    reason: reason.clone(),
                });
            }
        }

        let source_name = source.describe();
        match source.fetch().await {
            Ok(catalog) => {
                tracing::info!(
                    source = %source_name,
                    paths = catalog.paths().len(),
                    general_abilities = catalog.general_abilities().len(),
                    calling_abilities = catalog.calling_abilities().len(),
                    "catalog loaded"
                );
                self.catalog = CatalogState::Ready(catalog);
                self.recompute()
            }
            Err(cause) => {
                tracing::error!(source = %source_name, error = %cause, "catalog fetch failed");
                self.catalog = CatalogState::Failed {
                    reason: cause.to_string(),
                };
                Err(RuntimeError::CatalogFetch { source_name, cause })
            }
        }
    }

    /// Applies one input event and recomputes the draft.
    pub fn apply(&mut self, event: DraftEvent) -> Result<RecomputeReport> {
        let catalog = Self::ready_catalog(&self.catalog)?;
        tracing::debug!(?event, "applying event");

        let report = DerivationEngine::new(catalog).apply(&mut self.draft, event)?;
        Self::log_report(&report);
        Ok(report)
    }

    /// Applies events in order, stopping at the first rejected one.
    pub fn apply_all<I>(&mut self, events: I) -> Result<RecomputeReport>
    where
        I: IntoIterator<Item = DraftEvent>,
    {
        let mut combined = RecomputeReport::default();
        for event in events {
            combined.merge(self.apply(event)?);
        }
        Ok(combined)
    }

    /// Runs a recompute pass without changing any selection.
    pub fn recompute(&mut self) -> Result<RecomputeReport> {
        let catalog = Self::ready_catalog(&self.catalog)?;
        let report = DerivationEngine::new(catalog).recompute_all(&mut self.draft);
        Self::log_report(&report);
        Ok(report)
    }

    /// Discards the draft and starts over from defaults.
    pub fn reset(&mut self) -> Result<RecomputeReport> {
        Self::ready_catalog(&self.catalog)?;
        self.draft = CharacterDraft::new(&self.config);
        tracing::info!("draft reset");
        let catalog = Self::ready_catalog(&self.catalog)?;
        Ok(DerivationEngine::new(catalog).recompute_all(&mut self.draft))
    }

    /// Path names offered by the catalog.
    pub fn path_options(&self) -> Result<Vec<String>> {
        let catalog = Self::ready_catalog(&self.catalog)?;
        Ok(catalog.path_names().map(str::to_string).collect())
    }

    /// Renders the export document for the current draft.
    pub fn export(&self) -> Result<String> {
        Self::ready_catalog(&self.catalog)?;
        Ok(render_markdown(&self.draft))
    }

    fn ready_catalog(state: &CatalogState) -> Result<&Catalog> {
        match state {
            CatalogState::Ready(catalog) => Ok(catalog),
            CatalogState::Pending => {
                tracing::warn!("catalog not ready; operation skipped");
                Err(RuntimeError::NotReady)
            }
            CatalogState::Failed { reason } => {
                tracing::warn!(%reason, "catalog unavailable; operation skipped");
                Err(RuntimeError::CatalogUnavailable {
                    reason: reason.clone(),
                })
            }
        }
    }

    fn log_report(report: &RecomputeReport) {
        for change in report.resets() {
            tracing::info!(stage = change.stage().as_str(), ?change, "field reset");
        }
        tracing::debug!(changes = report.changes().len(), "recompute finished");
    }
}
