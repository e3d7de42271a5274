//! Sheet application assembled from configuration, catalog and selections.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sheet_runtime::{FileCatalogSource, RuntimeError, Session, SheetSelections};

use crate::config::CliConfig;

/// What to print once the draft is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Markdown character sheet
    #[default]
    Markdown,
    /// The full draft, derived fields included, as JSON
    Draft,
}

/// A loaded session with the user's selections replayed into it.
#[derive(Debug)]
pub struct SheetApp {
    session: Session,
}

impl SheetApp {
    pub fn builder(config: CliConfig) -> SheetAppBuilder {
        SheetAppBuilder::new(config)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Renders the draft in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Markdown => Ok(self.session.export()?),
            OutputFormat::Draft => serde_json::to_string_pretty(self.session.draft())
                .context("Failed to serialize draft"),
        }
    }

    /// Renders the draft and writes it to `output`, or stdout when unset.
    pub fn write(&self, format: OutputFormat, output: Option<&Path>) -> Result<()> {
        let rendered = self.render(format)?;
        match output {
            Some(path) => {
                std::fs::write(path, rendered)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                tracing::info!(path = %path.display(), "sheet written");
            }
            None => println!("{rendered}"),
        }
        Ok(())
    }
}

/// Builder for [`SheetApp`].
///
/// The catalog path is required, either from the configuration or set here.
/// Selections are optional; without them the export is the blank sheet.
#[derive(Debug)]
pub struct SheetAppBuilder {
    config: CliConfig,
    selections: Option<PathBuf>,
}

impl SheetAppBuilder {
    pub fn new(config: CliConfig) -> Self {
        Self {
            config,
            selections: None,
        }
    }

    pub fn catalog(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.catalog_path = Some(path.into());
        self
    }

    pub fn selections(mut self, path: impl Into<PathBuf>) -> Self {
        self.selections = Some(path.into());
        self
    }

    /// Loads the catalog and replays the selections.
    ///
    /// Selections the rules reject are logged and skipped; a missing or
    /// unreadable catalog fails the build.
    pub async fn build(self) -> Result<SheetApp> {
        let catalog_path = self
            .config
            .catalog_path
            .clone()
            .context("No catalog given; pass --catalog or set DERPS_CATALOG")?;

        let sheet_config = self.config.sheet_config()?;
        tracing::debug!(ability_slots = sheet_config.ability_slots, "sheet config");

        let mut session = Session::new(sheet_config);
        session
            .load(&FileCatalogSource::new(catalog_path))
            .await?;

        if let Some(path) = &self.selections {
            let selections = SheetSelections::load(path)?;
            let events = selections.events();
            tracing::info!(path = %path.display(), events = events.len(), "replaying selections");

            for event in events {
                match session.apply(event.clone()) {
                    Ok(_) => {}
                    Err(RuntimeError::Draft(err)) => {
                        tracing::warn!(code = err.error_code(), ?event, "selection rejected: {}", err);
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        }

        Ok(SheetApp { session })
    }
}
