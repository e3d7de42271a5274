//! Ability option filtering and ability detail lookup.

use crate::catalog::{Ability, Catalog, eq_ignore_case};
use crate::draft::{AbilityDetails, CharacterDraft, NO_SELECTION};

use super::requirement::requirement_satisfied;

/// Abilities selectable in `slot` (1-based) of a `total_slots` table.
///
/// The last slot offers calling abilities when a calling is selected: those
/// with no requirement or whose requirement names the calling. Every other
/// slot offers the general abilities whose requirement the current virtue
/// allocation satisfies. Catalog order is kept.
pub fn filter_abilities<'c>(
    catalog: &'c Catalog,
    slot: usize,
    total_slots: usize,
    draft: &CharacterDraft,
) -> Vec<&'c Ability> {
    if slot == total_slots {
        if let Some(calling) = draft.calling.as_deref() {
            return catalog
                .calling_abilities()
                .iter()
                .filter(|ability| {
                    let requirement = ability.requirement.trim();
                    requirement.is_empty() || eq_ignore_case(requirement, calling)
                })
                .collect();
        }
    }

    catalog
        .general_abilities()
        .iter()
        .filter(|ability| requirement_satisfied(&ability.requirement, &draft.virtues))
        .collect()
}

/// Details shown next to an ability choice; empty when nothing matches.
pub fn ability_details(catalog: &Catalog, name: Option<&str>) -> AbilityDetails {
    let Some(ability) = name
        .filter(|name| *name != NO_SELECTION)
        .and_then(|name| catalog.ability(name))
    else {
        return AbilityDetails::default();
    };

    let explanation = match ability.kind.as_deref().map(str::trim) {
        Some(kind) if !kind.is_empty() => format!("[{kind}] {}", ability.explanation),
        _ => ability.explanation.clone(),
    };

    AbilityDetails {
        explanation,
        cost: ability.cost.clone(),
        requirement: ability.requirement.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::VirtueAllocation;

    fn catalog() -> Catalog {
        Catalog::new()
            .with_general_ability(Ability::new("Jab", "1 SP", "", "Quick hit"))
            .with_general_ability(Ability::new("Guard", "1 SP", "ANY", "Block").with_kind("Active"))
            .with_general_ability(Ability::new("Cleave", "2 SP", "2F, 1C", "Wide swing"))
            .with_general_ability(Ability::new("Hex", "2 MP", "1J", "Curse"))
            .with_general_ability(Ability::new("Oddity", "1 MP", "1Q", "Never shown"))
            .with_calling_ability(Ability::new("Frenzy", "3 SP", "Berserker", "Rage"))
            .with_calling_ability(Ability::new("Rally", "1 SP", "", "Inspire"))
            .with_calling_ability(Ability::new("Bulwark", "2 SP", "Sentinel", "Hold"))
    }

    fn names(abilities: &[&Ability]) -> Vec<String> {
        abilities.iter().map(|a| a.name.clone()).collect()
    }

    #[test]
    fn zero_virtues_see_only_open_abilities() {
        let catalog = catalog();
        let draft = CharacterDraft::with_slots(3);
        let options = filter_abilities(&catalog, 1, 3, &draft);
        assert_eq!(names(&options), ["Jab", "Guard"]);
    }

    #[test]
    fn skill_check_gates_general_abilities() {
        let catalog = catalog();
        let mut draft = CharacterDraft::with_slots(3);

        draft.virtues = VirtueAllocation::new(2, 1, 0);
        assert!(names(&filter_abilities(&catalog, 1, 3, &draft)).contains(&"Cleave".into()));

        draft.virtues = VirtueAllocation::new(1, 1, 0);
        assert!(!names(&filter_abilities(&catalog, 1, 3, &draft)).contains(&"Cleave".into()));
    }

    #[test]
    fn unknown_stat_letter_never_matches() {
        let catalog = catalog();
        let mut draft = CharacterDraft::with_slots(3);
        draft.virtues = VirtueAllocation::new(9, 9, 9);
        assert!(!names(&filter_abilities(&catalog, 2, 3, &draft)).contains(&"Oddity".into()));
    }

    #[test]
    fn last_slot_offers_calling_abilities() {
        let catalog = catalog();
        let mut draft = CharacterDraft::with_slots(3);
        draft.calling = Some("berserker".into());

        assert_eq!(
            names(&filter_abilities(&catalog, 3, 3, &draft)),
            ["Frenzy", "Rally"]
        );
        // Earlier slots stay on the general list.
        assert_eq!(
            names(&filter_abilities(&catalog, 2, 3, &draft)),
            ["Jab", "Guard"]
        );
    }

    #[test]
    fn last_slot_without_calling_uses_general_list() {
        let catalog = catalog();
        let draft = CharacterDraft::with_slots(3);
        assert_eq!(
            names(&filter_abilities(&catalog, 3, 3, &draft)),
            ["Jab", "Guard"]
        );
    }

    #[test]
    fn details_prefix_the_type_tag() {
        let details = ability_details(&catalog(), Some("Guard"));
        assert_eq!(details.explanation, "[Active] Block");
        assert_eq!(details.cost, "1 SP");
        assert_eq!(details.requirement, "ANY");

        let details = ability_details(&catalog(), Some("Jab"));
        assert_eq!(details.explanation, "Quick hit");
    }

    #[test]
    fn missing_or_placeholder_clears_details() {
        assert!(ability_details(&catalog(), Some("Nope")).is_empty());
        assert!(ability_details(&catalog(), Some("N/A")).is_empty());
        assert!(ability_details(&catalog(), None).is_empty());
    }
}
