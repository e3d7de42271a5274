//! Arena stats and item effect texts.

use crate::catalog::Catalog;
use crate::draft::{ArenaStats, CharacterDraft};

/// Final HP/SP/MP: path base plus paragon and mundus stone bonuses.
///
/// Without a known path the base is zero.
pub fn arena_stats(draft: &CharacterDraft, catalog: &Catalog) -> ArenaStats {
    let base = draft
        .path
        .as_deref()
        .and_then(|name| catalog.path(name))
        .map(|path| path.base)
        .unwrap_or(ArenaStats::ZERO);

    let stone = draft
        .mundus
        .name
        .as_deref()
        .and_then(|name| catalog.mundus_effect(name))
        .and_then(|effect| effect.stat_bonus)
        .unwrap_or(ArenaStats::ZERO);

    base + draft.paragon.bonus() + stone
}

/// Passive effect text of a mundus stone, empty when unknown.
pub fn mundus_text(catalog: &Catalog, name: Option<&str>) -> String {
    name.and_then(|name| catalog.mundus_effect(name))
        .map(|effect| effect.effect.clone())
        .unwrap_or_default()
}

/// Proc text of a forge effect, empty when unknown.
pub fn forge_text(catalog: &Catalog, name: Option<&str>) -> String {
    name.and_then(|name| catalog.forge_effect(name))
        .map(|effect| effect.proc_text.clone())
        .unwrap_or_default()
}
