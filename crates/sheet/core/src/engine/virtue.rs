//! Virtue point budget and allocation clamping.

use strum::IntoEnumIterator;

use crate::catalog::Catalog;
use crate::config::SheetConfig;
use crate::draft::{CharacterDraft, Virtue, VirtueAllocation};

/// Total virtue points earned by the current selections.
///
/// A real path grants [`SheetConfig::REAL_PATH_POINTS`], the prior and paladin
/// checkboxes one each, and a calling listed under the selected path one more.
pub fn virtue_points(draft: &CharacterDraft, catalog: &Catalog) -> u32 {
    let path = draft
        .path
        .as_deref()
        .filter(|name| catalog.path(name).is_some());

    let mut total = 0;
    if path.is_some() {
        total += SheetConfig::REAL_PATH_POINTS;
    }
    if draft.prior {
        total += SheetConfig::PRIOR_POINTS;
    }
    if draft.paladin {
        total += SheetConfig::PALADIN_POINTS;
    }
    if let (Some(path), Some(calling)) = (path, draft.calling.as_deref()) {
        if catalog.is_calling_of(path, calling) {
            total += SheetConfig::CALLING_POINTS;
        }
    }
    total
}

/// Minimum allocation per virtue for the selected path.
pub fn virtue_minimums(draft: &CharacterDraft, catalog: &Catalog) -> VirtueAllocation {
    let mut minimum = VirtueAllocation::ZERO;
    let tied = draft
        .path
        .as_deref()
        .and_then(|name| catalog.path(name))
        .and_then(|path| path.virtue);
    if let Some(virtue) = tied {
        *minimum.get_mut(virtue) = SheetConfig::PATH_VIRTUE_MINIMUM;
    }
    minimum
}

/// Brings `current` within budget.
///
/// Values below their minimum are raised first. While the sum exceeds `total`
/// points are removed one at a time from the first virtue in priority order
/// (fortitude, cunning, judgement) that is still above its minimum.
pub fn clamp_allocations(
    current: VirtueAllocation,
    minimum: VirtueAllocation,
    total: u32,
) -> VirtueAllocation {
    let mut clamped = current;
    for virtue in Virtue::iter() {
        let floor = minimum.get(virtue);
        let value = clamped.get_mut(virtue);
        *value = (*value).max(floor);
    }

    let mut excess = clamped.total().saturating_sub(total);
    for virtue in Virtue::iter() {
        if excess == 0 {
            break;
        }
        let room = clamped.get(virtue).saturating_sub(minimum.get(virtue));
        let taken = room.min(excess);
        *clamped.get_mut(virtue) -= taken;
        excess -= taken;
    }
    clamped
}

/// Upper bound per virtue: `total - sum(other two)`, floored at zero.
pub fn allocation_maximums(current: &VirtueAllocation, total: u32) -> VirtueAllocation {
    let mut maximum = VirtueAllocation::ZERO;
    for virtue in Virtue::iter() {
        *maximum.get_mut(virtue) = total.saturating_sub(current.others(virtue));
    }
    maximum
}
