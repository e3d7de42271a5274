//! Reference catalog loader.

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use sheet_core::{
    Ability, ArenaStats, Catalog, ForgeEffect, MundusEffect, PathDefinition, Virtue,
};

use crate::loaders::{LoadResult, read_file};

/// Base stats and virtue tie of one path, as stored in the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathEntry {
    #[serde(flatten)]
    pub base: ArenaStats,
    #[serde(default)]
    pub virtue: Option<Virtue>,
}

/// Catalog document structure for JSON files.
///
/// Example:
/// ```json
/// {
///   "paths": { "WARRIOR": { "HP": 6, "SP": 0, "MP": 0, "virtue": "fortitude" } },
///   "callings": { "WARRIOR": ["Berserker", "Sentinel"] },
///   "generalAbilities": [{ "name": "Cleave", "cost": "2 SP", "req": "2F", "exp": "Wide swing", "type": "Active" }],
///   "callingAbilities": [{ "name": "Frenzy", "cost": "3 SP", "req": "Berserker", "exp": "Rage" }],
///   "forgeEffects": [{ "name": "Ember", "proc": "Burns on a 6" }],
///   "mundusEffects": [{ "name": "The Steed", "effect": "+1 HP", "statBonus": { "HP": 1 } }]
/// }
/// ```
///
/// `paths` and `callings` keep document order. `mundusStones` is accepted as
/// another name for `mundusEffects`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    #[serde(default, deserialize_with = "ordered_map")]
    pub paths: Vec<(String, PathEntry)>,
    #[serde(default, deserialize_with = "ordered_map")]
    pub callings: Vec<(String, Vec<String>)>,
    #[serde(default)]
    pub general_abilities: Vec<Ability>,
    #[serde(default)]
    pub calling_abilities: Vec<Ability>,
    #[serde(default)]
    pub forge_effects: Vec<ForgeEffect>,
    #[serde(default, alias = "mundusStones")]
    pub mundus_effects: Vec<MundusEffect>,
}

impl CatalogDocument {
    pub fn into_catalog(self) -> Catalog {
        let mut catalog = Catalog::new();
        for (name, entry) in self.paths {
            let mut path = PathDefinition::new(name, entry.base);
            path.virtue = entry.virtue;
            catalog = catalog.with_path(path);
        }
        for (path, callings) in self.callings {
            catalog = catalog.with_callings(path, callings);
        }
        for ability in self.general_abilities {
            catalog = catalog.with_general_ability(ability);
        }
        for ability in self.calling_abilities {
            catalog = catalog.with_calling_ability(ability);
        }
        for effect in self.forge_effects {
            catalog = catalog.with_forge_effect(effect);
        }
        for effect in self.mundus_effects {
            catalog = catalog.with_mundus_effect(effect);
        }
        catalog
    }
}

/// Loader for the reference catalog from JSON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load the catalog from a JSON file.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load catalog {}: {}", path.display(), e))
    }

    /// Parse a catalog document already in memory.
    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let document: CatalogDocument = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog JSON: {}", e))?;

        Ok(document.into_catalog())
    }
}

/// Deserializes a JSON object into `(key, value)` pairs in document order.
fn ordered_map<'de, D, T>(deserializer: D) -> Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct OrderedVisitor<T>(PhantomData<T>);

    impl<'de, T> Visitor<'de> for OrderedVisitor<T>
    where
        T: Deserialize<'de>,
    {
        type Value = Vec<(String, T)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map keyed by name")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(OrderedVisitor(PhantomData))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DOCUMENT: &str = r#"{
        "paths": {
            "WARRIOR": { "HP": 6, "SP": 0, "MP": 0, "virtue": "fortitude" },
            "ROGUE": { "HP": 5, "SP": 1 },
            "SAGE": { "HP": 4, "MP": 2, "virtue": "judgement" }
        },
        "callings": {
            "WARRIOR": ["Berserker", "Sentinel"],
            "SAGE": []
        },
        "generalAbilities": [
            { "name": "Jab", "cost": "1 SP", "req": "", "exp": "Quick hit" },
            { "name": "Cleave", "cost": "2 SP", "req": "2F", "exp": "Wide swing", "type": "Active" }
        ],
        "callingAbilities": [
            { "name": "Frenzy", "cost": "3 SP", "req": "Berserker", "exp": "Rage" }
        ],
        "forgeEffects": [{ "name": "Ember", "proc": "Burns on a 6" }],
        "mundusStones": [
            { "name": "The Steed", "effect": "+1 HP, +1 SP", "statBonus": { "HP": 1, "SP": 1 } },
            { "name": "The Ritual", "effect": "Heal more" }
        ]
    }"#;

    #[test]
    fn parses_full_document() {
        let catalog = CatalogLoader::parse(DOCUMENT).expect("catalog parses");

        let names: Vec<_> = catalog.path_names().collect();
        assert_eq!(names, ["WARRIOR", "ROGUE", "SAGE"]);

        let rogue = catalog.path("ROGUE").expect("rogue");
        assert_eq!(rogue.base, ArenaStats::new(5, 1, 0));
        assert_eq!(rogue.virtue, None);
        assert_eq!(
            catalog.path("SAGE").and_then(|p| p.virtue),
            Some(Virtue::Judgement)
        );

        assert_eq!(catalog.callings_for("WARRIOR"), ["Berserker", "Sentinel"]);
        assert!(catalog.callings_for("SAGE").is_empty());

        let cleave = catalog.ability("Cleave").expect("cleave");
        assert_eq!(cleave.requirement, "2F");
        assert_eq!(cleave.kind.as_deref(), Some("Active"));
        assert_eq!(catalog.calling_abilities().len(), 1);

        assert_eq!(
            catalog.forge_effect("Ember").map(|e| e.proc_text.as_str()),
            Some("Burns on a 6")
        );
        let steed = catalog.mundus_effect("The Steed").expect("steed");
        assert_eq!(steed.stat_bonus, Some(ArenaStats::new(1, 1, 0)));
        assert_eq!(
            catalog.mundus_effect("The Ritual").and_then(|m| m.stat_bonus),
            None
        );
    }

    #[test]
    fn missing_sections_are_empty() {
        let catalog = CatalogLoader::parse("{}").expect("empty catalog parses");
        assert!(catalog.paths().is_empty());
        assert!(catalog.general_abilities().is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = CatalogLoader::parse("{ \"paths\": [").expect_err("truncated");
        assert!(err.to_string().contains("Failed to parse catalog JSON"));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(DOCUMENT.as_bytes()).expect("write catalog");

        let catalog = CatalogLoader::load(file.path()).expect("catalog loads");
        assert_eq!(catalog.paths().len(), 3);
    }
}
