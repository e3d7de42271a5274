//! The mutable character draft.
//!
//! A draft holds two kinds of fields:
//! - **Selections**: everything the user types or picks (path, calling,
//!   virtue allocations, ability choices, free text).
//! - **Derived fields** ([`DerivedFields`], ability details, effect texts):
//!   written only by the derivation engine.
//!
//! The draft is passed by reference into every engine operation; the engine
//! keeps no state of its own.

mod stats;
mod virtue;

pub use stats::{ArenaStat, ArenaStats, ParagonBonus};
pub use virtue::{Virtue, VirtueAllocation, VirtueBounds, VirtueGives};

use crate::config::SheetConfig;

/// Placeholder label for an empty choice.
pub const NO_SELECTION: &str = "N/A";

/// Placeholder label for an empty calling choice.
pub const NO_CALLING: &str = "NO CALLING";

/// Explanation, cost and requirement shown next to a chosen ability.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityDetails {
    pub explanation: String,
    pub cost: String,
    pub requirement: String,
}

impl AbilityDetails {
    pub fn is_empty(&self) -> bool {
        self.explanation.is_empty() && self.cost.is_empty() && self.requirement.is_empty()
    }
}

/// One row of the arsenal table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilitySlot {
    /// Chosen ability name; `None` renders as [`NO_SELECTION`].
    pub selection: Option<String>,
    pub details: AbilityDetails,
}

impl AbilitySlot {
    pub fn clear(&mut self) {
        self.selection = None;
        self.details = AbilityDetails::default();
    }
}

/// Forge of Hope item row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForgeItem {
    pub item_type: String,
    pub custom_name: String,
    pub effect: Option<String>,
    pub holy_number: Option<u8>,
    /// A/D proc text of the selected effect.
    pub proc_text: String,
}

/// Mundus stone row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MundusStone {
    pub name: Option<String>,
    pub passive_effect: String,
    pub overseer: String,
    pub date: String,
}

/// Values and option sets computed by the derivation engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedFields {
    pub virtue_points: u32,
    pub virtue_bounds: VirtueBounds,
    pub arena: ArenaStats,
    pub calling_options: Vec<String>,
    /// Option names per ability slot, index 0 is slot 1.
    pub ability_options: Vec<Vec<String>>,
}

/// Character sheet draft, one per session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterDraft {
    pub name: String,
    pub quote: String,
    pub writ: String,
    pub path: Option<String>,
    pub calling: Option<String>,
    pub paragon: ParagonBonus,
    pub prior: bool,
    pub paladin: bool,
    /// League participation passive, 0..=2.
    pub league: u8,
    pub virtues: VirtueAllocation,
    pub gives: VirtueGives,
    pub abilities: Vec<AbilitySlot>,
    pub forge: ForgeItem,
    pub mundus: MundusStone,
    pub derived: DerivedFields,
}

impl CharacterDraft {
    pub fn new(config: &SheetConfig) -> Self {
        Self::with_slots(config.ability_slots)
    }

    /// Creates an empty draft with `slots` ability rows (at least one).
    pub fn with_slots(slots: usize) -> Self {
        let slots = slots.max(1);
        Self {
            name: String::new(),
            quote: String::new(),
            writ: String::new(),
            path: None,
            calling: None,
            paragon: ParagonBonus::None,
            prior: false,
            paladin: false,
            league: 0,
            virtues: VirtueAllocation::ZERO,
            gives: VirtueGives::default(),
            abilities: vec![AbilitySlot::default(); slots],
            forge: ForgeItem::default(),
            mundus: MundusStone::default(),
            derived: DerivedFields {
                ability_options: vec![Vec::new(); slots],
                ..DerivedFields::default()
            },
        }
    }

    pub fn slot_count(&self) -> usize {
        self.abilities.len()
    }

    /// Slot by 1-based index.
    pub fn slot(&self, index: usize) -> Option<&AbilitySlot> {
        index.checked_sub(1).and_then(|i| self.abilities.get(i))
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut AbilitySlot> {
        index.checked_sub(1).and_then(|i| self.abilities.get_mut(i))
    }

    /// Grows or shrinks the arsenal table, keeping existing rows.
    pub fn resize_slots(&mut self, slots: usize) {
        let slots = slots.max(1);
        self.abilities.resize_with(slots, AbilitySlot::default);
        self.derived.ability_options.resize_with(slots, Vec::new);
    }
}

impl Default for CharacterDraft {
    fn default() -> Self {
        Self::new(&SheetConfig::default())
    }
}

/// Maps a raw choice label to a selection: blank and `"N/A"` mean nothing.
pub fn normalize_choice(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == NO_SELECTION {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Like [`normalize_choice`], also treating `"NO CALLING"` as empty.
pub fn normalize_calling(raw: &str) -> Option<String> {
    normalize_choice(raw).filter(|calling| !crate::catalog::eq_ignore_case(calling, NO_CALLING))
}
