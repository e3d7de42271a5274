//! CLI configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use anyhow::Result;
use sheet_content::ConfigLoader;
use sheet_core::SheetConfig;

/// Where the sheet inputs come from. Command-line arguments are layered on
/// top of the environment with [`CliConfig::merge`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub catalog_path: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub ability_slots: Option<usize>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `DERPS_CATALOG` - JSON catalog document
    /// - `DERPS_CONFIG` - TOML sheet configuration
    /// - `DERPS_ABILITY_SLOTS` - Ability table size (at least 1)
    pub fn from_env() -> Self {
        Self {
            catalog_path: env::var("DERPS_CATALOG").ok().map(PathBuf::from),
            config_path: env::var("DERPS_CONFIG").ok().map(PathBuf::from),
            ability_slots: read_env::<usize>("DERPS_ABILITY_SLOTS").map(|slots| slots.max(1)),
        }
    }

    /// Overrides every field that `other` sets.
    pub fn merge(mut self, other: CliConfig) -> Self {
        if other.catalog_path.is_some() {
            self.catalog_path = other.catalog_path;
        }
        if other.config_path.is_some() {
            self.config_path = other.config_path;
        }
        if let Some(slots) = other.ability_slots {
            self.ability_slots = Some(slots.max(1));
        }
        self
    }

    /// Sheet configuration: the TOML file if one is set, then the slot
    /// override.
    pub fn sheet_config(&self) -> Result<SheetConfig> {
        let mut config = match &self.config_path {
            Some(path) => ConfigLoader::load(path)?,
            None => SheetConfig::default(),
        };
        if let Some(slots) = self.ability_slots {
            config.ability_slots = slots.max(1);
        }
        Ok(config)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
