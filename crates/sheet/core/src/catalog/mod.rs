//! Immutable reference catalog consumed by the derivation engine.
//!
//! The catalog is loaded once per session and only read afterwards. All
//! lookups are linear scans by name: the data set is a few dozen entries.
//! Calling names compare case-insensitively; stone and forge names compare
//! exactly.

mod types;

pub use types::{Ability, CallingList, ForgeEffect, MundusEffect, PathDefinition};

/// Reference data for paths, callings, abilities and item effects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    paths: Vec<PathDefinition>,
    callings: Vec<CallingList>,
    general_abilities: Vec<Ability>,
    calling_abilities: Vec<Ability>,
    forge_effects: Vec<ForgeEffect>,
    mundus_effects: Vec<MundusEffect>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_path(mut self, path: PathDefinition) -> Self {
        self.paths.push(path);
        self
    }

    #[must_use]
    pub fn with_callings<I, S>(mut self, path: impl Into<String>, callings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.callings.push(CallingList {
            path: path.into(),
            callings: callings.into_iter().map(Into::into).collect(),
        });
        self
    }

    #[must_use]
    pub fn with_general_ability(mut self, ability: Ability) -> Self {
        self.general_abilities.push(ability);
        self
    }

    #[must_use]
    pub fn with_calling_ability(mut self, ability: Ability) -> Self {
        self.calling_abilities.push(ability);
        self
    }

    #[must_use]
    pub fn with_forge_effect(mut self, effect: ForgeEffect) -> Self {
        self.forge_effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_mundus_effect(mut self, effect: MundusEffect) -> Self {
        self.mundus_effects.push(effect);
        self
    }

    pub fn paths(&self) -> &[PathDefinition] {
        &self.paths
    }

    pub fn general_abilities(&self) -> &[Ability] {
        &self.general_abilities
    }

    pub fn calling_abilities(&self) -> &[Ability] {
        &self.calling_abilities
    }

    pub fn forge_effects(&self) -> &[ForgeEffect] {
        &self.forge_effects
    }

    pub fn mundus_effects(&self) -> &[MundusEffect] {
        &self.mundus_effects
    }

    /// Path names in catalog order, for the path choice list.
    pub fn path_names(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(|path| path.name.as_str())
    }

    pub fn path(&self, name: &str) -> Option<&PathDefinition> {
        self.paths.iter().find(|path| path.name == name)
    }

    /// Callings listed under `path`, empty when the path has none.
    pub fn callings_for(&self, path: &str) -> &[String] {
        self.callings
            .iter()
            .find(|list| list.path == path)
            .map(|list| list.callings.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `calling` is listed under `path` (case-insensitive).
    pub fn is_calling_of(&self, path: &str, calling: &str) -> bool {
        self.callings_for(path)
            .iter()
            .any(|candidate| eq_ignore_case(candidate, calling))
    }

    /// Finds an ability by exact name, calling abilities first.
    pub fn ability(&self, name: &str) -> Option<&Ability> {
        self.calling_abilities
            .iter()
            .chain(self.general_abilities.iter())
            .find(|ability| ability.name == name)
    }

    pub fn forge_effect(&self, name: &str) -> Option<&ForgeEffect> {
        self.forge_effects.iter().find(|effect| effect.name == name)
    }

    pub fn mundus_effect(&self, name: &str) -> Option<&MundusEffect> {
        self.mundus_effects.iter().find(|effect| effect.name == name)
    }
}

/// Case-insensitive comparison using full Unicode lowercasing.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::ArenaStats;

    fn catalog() -> Catalog {
        Catalog::new()
            .with_path(PathDefinition::new("WARRIOR", ArenaStats::new(6, 0, 0)))
            .with_callings("WARRIOR", ["Berserker", "Sentinel"])
            .with_general_ability(Ability::new("Strike", "1 SP", "", "Hit hard"))
            .with_calling_ability(Ability::new("Strike", "2 SP", "Berserker", "Hit harder"))
            .with_forge_effect(ForgeEffect::new("Ember", "Burns on hit"))
            .with_mundus_effect(MundusEffect::new("The Lord", "+1 HP"))
    }

    #[test]
    fn calling_membership_ignores_case() {
        let catalog = catalog();
        assert!(catalog.is_calling_of("WARRIOR", "berserker"));
        assert!(catalog.is_calling_of("WARRIOR", "SENTINEL"));
        assert!(!catalog.is_calling_of("WARRIOR", "Archer"));
        assert!(!catalog.is_calling_of("MAGE", "Berserker"));
    }

    #[test]
    fn ability_lookup_prefers_calling_list() {
        let catalog = catalog();
        let ability = catalog.ability("Strike").expect("ability present");
        assert_eq!(ability.cost, "2 SP");
    }

    #[test]
    fn effect_lookups_are_exact() {
        let catalog = catalog();
        assert!(catalog.forge_effect("Ember").is_some());
        assert!(catalog.forge_effect("ember").is_none());
        assert!(catalog.mundus_effect("The Lord").is_some());
        assert!(catalog.mundus_effect("the lord").is_none());
    }

    #[test]
    fn unknown_path_has_no_callings() {
        assert!(catalog().callings_for("ROGUE").is_empty());
    }
}
