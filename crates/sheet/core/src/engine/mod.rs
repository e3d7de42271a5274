//! Derivation engine: recomputes every dependent field of a draft.
//!
//! The [`DerivationEngine`] borrows the catalog and operates on a draft passed
//! in by reference. [`DerivationEngine::recompute_all`] runs the stages in a
//! fixed order:
//!
//! ```text
//! Path → Calling → VirtuePoints → Allocations → Abilities → Effects → ArenaStats → FieldRanges
//! ```
//!
//! Each stage only reads fields written by earlier stages or by the user, so
//! one pass reaches a fixed point: running it again on the result changes
//! nothing. Every value the pass changes is listed in the returned
//! [`RecomputeReport`], resets included, so callers can surface them.

mod abilities;
mod arena;
mod events;
mod report;
mod requirement;
mod virtue;

pub use abilities::{ability_details, filter_abilities};
pub use arena::{arena_stats, forge_text, mundus_text};
pub use events::DraftEvent;
pub use report::{FieldChange, RecomputeReport, RecomputeStage};
pub use requirement::{ANY_REQUIREMENT, SkillCheck, SkillTerm, requirement_satisfied};
pub use virtue::{allocation_maximums, clamp_allocations, virtue_minimums, virtue_points};

use strum::IntoEnumIterator;

use crate::catalog::{Ability, Catalog, eq_ignore_case};
use crate::config::SheetConfig;
use crate::draft::{AbilityDetails, ArenaStats, CharacterDraft, VirtueAllocation};

/// Stateless rules engine over a borrowed catalog.
#[derive(Clone, Copy, Debug)]
pub struct DerivationEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> DerivationEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Runs every stage in order and reports what changed.
    pub fn recompute_all(&self, draft: &mut CharacterDraft) -> RecomputeReport {
        let mut report = RecomputeReport::default();
        for stage in RecomputeStage::iter() {
            self.run_stage(stage, draft, &mut report);
        }
        report
    }

    fn run_stage(
        &self,
        stage: RecomputeStage,
        draft: &mut CharacterDraft,
        report: &mut RecomputeReport,
    ) {
        match stage {
            RecomputeStage::Path => {
                if let Some(previous) = self.validate_path(draft) {
                    report.push(FieldChange::PathCleared { previous });
                }
            }
            RecomputeStage::Calling => {
                let before = draft.derived.calling_options.clone();
                if let Some(previous) = self.refresh_calling(draft) {
                    report.push(FieldChange::CallingCleared { previous });
                }
                if draft.derived.calling_options != before {
                    report.push(FieldChange::CallingOptions);
                }
            }
            RecomputeStage::VirtuePoints => {
                let from = draft.derived.virtue_points;
                let minimum_before = draft.derived.virtue_bounds.minimum;
                let virtues_before = draft.virtues;
                let to = self.compute_virtue_points(draft);
                if from != to {
                    report.push(FieldChange::VirtuePoints { from, to });
                }
                if draft.derived.virtue_bounds.minimum != minimum_before {
                    report.push(FieldChange::VirtueBounds);
                }
                if draft.virtues != virtues_before {
                    report.push(FieldChange::Allocations {
                        from: virtues_before,
                        to: draft.virtues,
                    });
                }
            }
            RecomputeStage::Allocations => {
                let from = draft.virtues;
                let maximum_before = draft.derived.virtue_bounds.maximum;
                let total = draft.derived.virtue_points;
                let to = self.clamp_virtue_allocations(draft, total);
                if from != to {
                    report.push(FieldChange::Allocations { from, to });
                }
                if draft.derived.virtue_bounds.maximum != maximum_before {
                    report.push(FieldChange::VirtueBounds);
                }
            }
            RecomputeStage::Abilities => {
                let before = draft.derived.ability_options.clone();
                let resets = self.recalc_ability_slots(draft);
                for (index, options) in draft.derived.ability_options.iter().enumerate() {
                    if before.get(index) != Some(options) {
                        report.push(FieldChange::AbilityOptions { slot: index + 1 });
                    }
                }
                report.extend(
                    resets
                        .into_iter()
                        .map(|(slot, previous)| FieldChange::AbilityReset { slot, previous }),
                );
            }
            RecomputeStage::Effects => {
                let mundus = mundus_text(self.catalog, draft.mundus.name.as_deref());
                if draft.mundus.passive_effect != mundus {
                    draft.mundus.passive_effect = mundus;
                    report.push(FieldChange::MundusText);
                }
                let forge = forge_text(self.catalog, draft.forge.effect.as_deref());
                if draft.forge.proc_text != forge {
                    draft.forge.proc_text = forge;
                    report.push(FieldChange::ForgeText);
                }
            }
            RecomputeStage::ArenaStats => {
                let from = draft.derived.arena;
                let to = self.compute_arena_stats(draft);
                if from != to {
                    draft.derived.arena = to;
                    report.push(FieldChange::ArenaStats { from, to });
                }
            }
            RecomputeStage::FieldRanges => {
                let league = draft.league.min(SheetConfig::MAX_LEAGUE_PASSIVE);
                if league != draft.league {
                    report.push(FieldChange::LeagueClamped {
                        from: draft.league,
                        to: league,
                    });
                    draft.league = league;
                }
                if let Some(holy) = draft.forge.holy_number {
                    let clamped =
                        holy.clamp(SheetConfig::MIN_HOLY_NUMBER, SheetConfig::MAX_HOLY_NUMBER);
                    if clamped != holy {
                        report.push(FieldChange::HolyNumberClamped {
                            from: holy,
                            to: clamped,
                        });
                        draft.forge.holy_number = Some(clamped);
                    }
                }
            }
        }
    }

    /// Clears a path the catalog does not know. Returns the cleared name.
    pub fn validate_path(&self, draft: &mut CharacterDraft) -> Option<String> {
        let known = draft
            .path
            .as_deref()
            .is_none_or(|name| self.catalog.path(name).is_some());
        if known { None } else { draft.path.take() }
    }

    /// Rebuilds the calling option list for the selected path and clears a
    /// calling that is not on it. Returns the cleared name.
    pub fn refresh_calling(&self, draft: &mut CharacterDraft) -> Option<String> {
        let options = draft
            .path
            .as_deref()
            .map(|path| self.catalog.callings_for(path).to_vec())
            .unwrap_or_default();

        let listed = draft.calling.as_deref().is_none_or(|calling| {
            options
                .iter()
                .any(|candidate| eq_ignore_case(candidate, calling))
        });
        draft.derived.calling_options = options;

        if listed { None } else { draft.calling.take() }
    }

    /// Computes the virtue point total and the per-virtue minimums.
    ///
    /// The virtue tied to the selected path gets a minimum of
    /// [`SheetConfig::PATH_VIRTUE_MINIMUM`] and is raised to it; the other two
    /// minimums are zero.
    pub fn compute_virtue_points(&self, draft: &mut CharacterDraft) -> u32 {
        let total = virtue_points(draft, self.catalog);
        let minimum = virtue_minimums(draft, self.catalog);

        draft.derived.virtue_points = total;
        draft.derived.virtue_bounds.minimum = minimum;
        draft.virtues = VirtueAllocation::new(
            draft.virtues.fortitude.max(minimum.fortitude),
            draft.virtues.cunning.max(minimum.cunning),
            draft.virtues.judgement.max(minimum.judgement),
        );
        total
    }

    /// Brings the allocation within `total` and recomputes the maximums.
    pub fn clamp_virtue_allocations(
        &self,
        draft: &mut CharacterDraft,
        total: u32,
    ) -> VirtueAllocation {
        let minimum = draft.derived.virtue_bounds.minimum;
        draft.virtues = clamp_allocations(draft.virtues, minimum, total);
        draft.derived.virtue_bounds.maximum = allocation_maximums(&draft.virtues, total);
        draft.virtues
    }

    /// Abilities selectable in `slot` (1-based) of a `total_slots` table.
    pub fn filter_abilities(
        &self,
        slot: usize,
        total_slots: usize,
        draft: &CharacterDraft,
    ) -> Vec<&'a Ability> {
        filter_abilities(self.catalog, slot, total_slots, draft)
    }

    /// Explanation, cost and requirement for an ability name.
    pub fn ability_details(&self, name: &str) -> AbilityDetails {
        ability_details(self.catalog, Some(name))
    }

    /// Refreshes every slot's option list and resets selections that fell
    /// off it. Returns `(slot, previous name)` for each reset.
    ///
    /// A selection that is still offered keeps its details untouched.
    pub fn recalc_ability_slots(&self, draft: &mut CharacterDraft) -> Vec<(usize, String)> {
        let total = draft.slot_count();
        draft.derived.ability_options.resize_with(total, Vec::new);

        let mut resets = Vec::new();
        for slot in 1..=total {
            let options: Vec<String> = self
                .filter_abilities(slot, total, draft)
                .into_iter()
                .map(|ability| ability.name.clone())
                .collect();

            let index = slot - 1;
            let row = &mut draft.abilities[index];
            let offered = row
                .selection
                .as_deref()
                .is_none_or(|name| options.iter().any(|option| option == name));
            if !offered && let Some(previous) = row.selection.clone() {
                row.clear();
                resets.push((slot, previous));
            }
            draft.derived.ability_options[index] = options;
        }
        resets
    }

    /// Path base stats plus paragon and mundus stone bonuses.
    pub fn compute_arena_stats(&self, draft: &CharacterDraft) -> ArenaStats {
        arena_stats(draft, self.catalog)
    }

    pub fn mundus_text(&self, name: &str) -> String {
        mundus_text(self.catalog, Some(name))
    }

    pub fn forge_text(&self, name: &str) -> String {
        forge_text(self.catalog, Some(name))
    }
}
