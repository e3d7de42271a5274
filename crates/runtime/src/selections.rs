//! Saved form selections, replayed as a sequence of draft events.
//!
//! A selections document records what the user picked, not what was derived.
//! Replaying it through a session reproduces the sheet, including any resets
//! the rules force along the way.
use std::path::Path;

use serde::{Deserialize, Serialize};
use sheet_core::{DraftEvent, ParagonBonus, Virtue, VirtueAllocation, VirtueGives};

use crate::error::{Result, RuntimeError};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForgeSelections {
    pub item_type: Option<String>,
    pub name: Option<String>,
    pub effect: Option<String>,
    pub holy_number: Option<u8>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MundusSelections {
    pub name: Option<String>,
    pub overseer: Option<String>,
    pub date: Option<String>,
}

/// Everything a user can enter on the form. Absent fields keep the draft's
/// current value.
///
/// ```json
/// {
///   "name": "rogan",
///   "path": "WARRIOR",
///   "paragon": "+1 HP",
///   "prior": true,
///   "virtues": { "fortitude": 2, "cunning": 1 },
///   "abilities": ["Cleave", "Jab", "N/A"],
///   "forge": { "itemType": "Sword", "effect": "Ember", "holyNumber": 12 },
///   "mundus": { "name": "The Steed" }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SheetSelections {
    pub name: Option<String>,
    pub quote: Option<String>,
    pub writ: Option<String>,
    pub path: Option<String>,
    pub calling: Option<String>,
    pub paragon: Option<ParagonBonus>,
    pub prior: Option<bool>,
    pub paladin: Option<bool>,
    pub league: Option<u8>,
    pub virtues: Option<VirtueAllocation>,
    pub gives: Option<VirtueGives>,
    pub ability_slots: Option<usize>,
    pub abilities: Vec<String>,
    pub forge: ForgeSelections,
    pub mundus: MundusSelections,
}

impl SheetSelections {
    /// Parses a JSON selections document.
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            RuntimeError::Selections(anyhow::anyhow!("Failed to parse selections JSON: {}", e))
        })
    }

    /// Reads and parses a JSON selections file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RuntimeError::Selections(anyhow::anyhow!(
                "Failed to read file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&content)
    }

    /// Events in form order: identity, path and calling, bonuses, virtues,
    /// abilities, then forge and mundus.
    ///
    /// Virtue points are entered after every budget input so the allocation
    /// is clamped against the final bounds.
    pub fn events(&self) -> Vec<DraftEvent> {
        let mut events = Vec::new();

        if let Some(name) = &self.name {
            events.push(DraftEvent::SetName(name.clone()));
        }
        if let Some(quote) = &self.quote {
            events.push(DraftEvent::SetQuote(quote.clone()));
        }
        if let Some(writ) = &self.writ {
            events.push(DraftEvent::SetWrit(writ.clone()));
        }
        if let Some(path) = &self.path {
            events.push(DraftEvent::SelectPath(path.clone()));
        }
        if let Some(calling) = &self.calling {
            events.push(DraftEvent::SelectCalling(calling.clone()));
        }
        if let Some(paragon) = self.paragon {
            events.push(DraftEvent::SelectParagon(paragon));
        }
        if let Some(prior) = self.prior {
            events.push(DraftEvent::SetPrior(prior));
        }
        if let Some(paladin) = self.paladin {
            events.push(DraftEvent::SetPaladin(paladin));
        }
        if let Some(league) = self.league {
            events.push(DraftEvent::SetLeague(league));
        }

        if let Some(virtues) = self.virtues {
            for virtue in [Virtue::Fortitude, Virtue::Cunning, Virtue::Judgement] {
                events.push(DraftEvent::SetVirtue {
                    virtue,
                    points: virtues.get(virtue),
                });
            }
        }
        if let Some(gives) = self.gives {
            for virtue in [Virtue::Fortitude, Virtue::Cunning, Virtue::Judgement] {
                events.push(DraftEvent::SetGives {
                    virtue,
                    gives: gives.get(virtue),
                });
            }
        }

        if let Some(slots) = self.ability_slots {
            events.push(DraftEvent::SetAbilitySlots(slots));
        }
        events.extend(
            self.abilities
                .iter()
                .enumerate()
                .map(|(index, name)| DraftEvent::SelectAbility {
                    slot: index + 1,
                    name: name.clone(),
                }),
        );

        if let Some(item_type) = &self.forge.item_type {
            events.push(DraftEvent::SetForgeItemType(item_type.clone()));
        }
        if let Some(name) = &self.forge.name {
            events.push(DraftEvent::SetForgeName(name.clone()));
        }
        if let Some(effect) = &self.forge.effect {
            events.push(DraftEvent::SelectForgeEffect(effect.clone()));
        }
        if let Some(holy) = self.forge.holy_number {
            events.push(DraftEvent::SetHolyNumber(Some(holy)));
        }

        if let Some(name) = &self.mundus.name {
            events.push(DraftEvent::SelectMundus(name.clone()));
        }
        if let Some(overseer) = &self.mundus.overseer {
            events.push(DraftEvent::SetOverseer(overseer.clone()));
        }
        if let Some(date) = &self.mundus.date {
            events.push(DraftEvent::SetDate(date.clone()));
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_has_no_events() {
        let selections = SheetSelections::parse("{}").expect("parses");
        assert!(selections.events().is_empty());
    }

    #[test]
    fn events_follow_form_order() {
        let selections = SheetSelections::parse(
            r#"{
                "name": "rogan",
                "path": "WARRIOR",
                "paragon": "+1 HP",
                "prior": true,
                "virtues": { "fortitude": 2, "cunning": 1 },
                "abilities": ["Cleave"],
                "mundus": { "name": "The Steed" }
            }"#,
        )
        .expect("parses");

        assert_eq!(
            selections.events(),
            vec![
                DraftEvent::SetName("rogan".into()),
                DraftEvent::SelectPath("WARRIOR".into()),
                DraftEvent::SelectParagon(ParagonBonus::Hp),
                DraftEvent::SetPrior(true),
                DraftEvent::SetVirtue {
                    virtue: Virtue::Fortitude,
                    points: 2
                },
                DraftEvent::SetVirtue {
                    virtue: Virtue::Cunning,
                    points: 1
                },
                DraftEvent::SetVirtue {
                    virtue: Virtue::Judgement,
                    points: 0
                },
                DraftEvent::SelectAbility {
                    slot: 1,
                    name: "Cleave".into()
                },
                DraftEvent::SelectMundus("The Steed".into()),
            ]
        );
    }

    #[test]
    fn slot_count_precedes_ability_choices() {
        let selections = SheetSelections {
            ability_slots: Some(4),
            abilities: vec!["Jab".into(); 4],
            ..Default::default()
        };
        let events = selections.events();
        assert_eq!(events[0], DraftEvent::SetAbilitySlots(4));
        assert_eq!(
            events[4],
            DraftEvent::SelectAbility {
                slot: 4,
                name: "Jab".into()
            }
        );
    }

    #[test]
    fn unknown_paragon_is_rejected() {
        let err = SheetSelections::parse(r#"{ "paragon": "+2 HP" }"#).expect_err("bad paragon");
        assert!(matches!(err, RuntimeError::Selections(_)));
    }
}
