//! User input events and their application to a draft.
//!
//! Every event mutates exactly the field it names, fills in any lookup that
//! belongs to the field (ability details, stone and forge texts), and then
//! runs one full recompute pass.

use crate::draft::{
    CharacterDraft, ParagonBonus, Virtue, normalize_calling, normalize_choice,
};
use crate::error::DraftError;

use super::{DerivationEngine, RecomputeReport, ability_details, forge_text, mundus_text};

/// A single change made by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "event", content = "value", rename_all = "snake_case")
)]
pub enum DraftEvent {
    SetName(String),
    SetQuote(String),
    SetWrit(String),
    SelectPath(String),
    SelectCalling(String),
    SelectParagon(ParagonBonus),
    SetPrior(bool),
    SetPaladin(bool),
    SetLeague(u8),
    SetVirtue { virtue: Virtue, points: u32 },
    SetGives { virtue: Virtue, gives: bool },
    /// Chooses an ability for a 1-based slot; `"N/A"` clears it.
    SelectAbility { slot: usize, name: String },
    SetAbilitySlots(usize),
    SetForgeItemType(String),
    SetForgeName(String),
    SelectForgeEffect(String),
    SetHolyNumber(Option<u8>),
    SelectMundus(String),
    SetOverseer(String),
    SetDate(String),
    /// Discards the draft, keeping the slot count.
    Reset,
}

impl DerivationEngine<'_> {
    /// Applies one event and recomputes the draft.
    ///
    /// Rejected events leave the draft untouched.
    pub fn apply(
        &self,
        draft: &mut CharacterDraft,
        event: DraftEvent,
    ) -> Result<RecomputeReport, DraftError> {
        match event {
            DraftEvent::SetName(name) => draft.name = name,
            DraftEvent::SetQuote(quote) => draft.quote = quote,
            DraftEvent::SetWrit(writ) => draft.writ = writ,
            DraftEvent::SelectPath(path) => draft.path = normalize_choice(&path),
            DraftEvent::SelectCalling(calling) => draft.calling = normalize_calling(&calling),
            DraftEvent::SelectParagon(paragon) => draft.paragon = paragon,
            DraftEvent::SetPrior(prior) => draft.prior = prior,
            DraftEvent::SetPaladin(paladin) => draft.paladin = paladin,
            DraftEvent::SetLeague(league) => draft.league = league,
            DraftEvent::SetVirtue { virtue, points } => {
                let points = draft.derived.virtue_bounds.clamp(virtue, points);
                *draft.virtues.get_mut(virtue) = points;
            }
            DraftEvent::SetGives { virtue, gives } => draft.gives.set(virtue, gives),
            DraftEvent::SelectAbility { slot, name } => {
                let total = draft.slot_count();
                let row = draft
                    .slot_mut(slot)
                    .ok_or(DraftError::SlotOutOfRange { slot, total })?;
                row.selection = normalize_choice(&name);
                row.details = ability_details(self.catalog, row.selection.as_deref());
            }
            DraftEvent::SetAbilitySlots(slots) => {
                if slots == 0 {
                    return Err(DraftError::NoAbilitySlots);
                }
                draft.resize_slots(slots);
            }
            DraftEvent::SetForgeItemType(item_type) => draft.forge.item_type = item_type,
            DraftEvent::SetForgeName(name) => draft.forge.custom_name = name,
            DraftEvent::SelectForgeEffect(effect) => {
                draft.forge.effect = normalize_choice(&effect);
                draft.forge.proc_text = forge_text(self.catalog, draft.forge.effect.as_deref());
            }
            DraftEvent::SetHolyNumber(holy) => draft.forge.holy_number = holy,
            DraftEvent::SelectMundus(name) => {
                draft.mundus.name = normalize_choice(&name);
                draft.mundus.passive_effect =
                    mundus_text(self.catalog, draft.mundus.name.as_deref());
            }
            DraftEvent::SetOverseer(overseer) => draft.mundus.overseer = overseer,
            DraftEvent::SetDate(date) => draft.mundus.date = date,
            DraftEvent::Reset => *draft = CharacterDraft::with_slots(draft.slot_count()),
        }
        Ok(self.recompute_all(draft))
    }
}
