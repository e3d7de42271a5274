//! Recompute stages and the change report produced by one pass.

use crate::draft::{ArenaStats, VirtueAllocation};

/// Pipeline stages in execution order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter, strum::Display,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecomputeStage {
    Path,
    Calling,
    VirtuePoints,
    Allocations,
    Abilities,
    Effects,
    ArenaStats,
    FieldRanges,
}

impl RecomputeStage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Calling => "calling",
            Self::VirtuePoints => "virtue_points",
            Self::Allocations => "allocations",
            Self::Abilities => "abilities",
            Self::Effects => "effects",
            Self::ArenaStats => "arena_stats",
            Self::FieldRanges => "field_ranges",
        }
    }
}

/// One value changed by a recompute pass.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldChange {
    /// Selected path is not in the catalog.
    PathCleared { previous: String },
    CallingOptions,
    /// Selected calling is not listed under the path.
    CallingCleared { previous: String },
    VirtuePoints { from: u32, to: u32 },
    VirtueBounds,
    Allocations {
        from: VirtueAllocation,
        to: VirtueAllocation,
    },
    AbilityOptions { slot: usize },
    /// Selection fell off the slot's option list.
    AbilityReset { slot: usize, previous: String },
    MundusText,
    ForgeText,
    ArenaStats { from: ArenaStats, to: ArenaStats },
    LeagueClamped { from: u8, to: u8 },
    HolyNumberClamped { from: u8, to: u8 },
}

impl FieldChange {
    pub const fn stage(&self) -> RecomputeStage {
        match self {
            Self::PathCleared { .. } => RecomputeStage::Path,
            Self::CallingOptions | Self::CallingCleared { .. } => RecomputeStage::Calling,
            Self::VirtuePoints { .. } => RecomputeStage::VirtuePoints,
            Self::VirtueBounds | Self::Allocations { .. } => RecomputeStage::Allocations,
            Self::AbilityOptions { .. } | Self::AbilityReset { .. } => RecomputeStage::Abilities,
            Self::MundusText | Self::ForgeText => RecomputeStage::Effects,
            Self::ArenaStats { .. } => RecomputeStage::ArenaStats,
            Self::LeagueClamped { .. } | Self::HolyNumberClamped { .. } => {
                RecomputeStage::FieldRanges
            }
        }
    }

    /// Whether this change discarded something the user chose or typed.
    pub const fn is_reset(&self) -> bool {
        matches!(
            self,
            Self::PathCleared { .. }
                | Self::CallingCleared { .. }
                | Self::Allocations { .. }
                | Self::AbilityReset { .. }
                | Self::LeagueClamped { .. }
                | Self::HolyNumberClamped { .. }
        )
    }
}

/// Everything one recompute pass changed, in stage order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecomputeReport {
    changes: Vec<FieldChange>,
}

impl RecomputeReport {
    pub fn changes(&self) -> &[FieldChange] {
        &self.changes
    }

    /// True when the pass left the draft untouched.
    pub fn is_noop(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn resets(&self) -> impl Iterator<Item = &FieldChange> {
        self.changes.iter().filter(|change| change.is_reset())
    }

    pub fn touched(&self, stage: RecomputeStage) -> bool {
        self.changes.iter().any(|change| change.stage() == stage)
    }

    pub(crate) fn push(&mut self, change: FieldChange) {
        self.changes.push(change);
    }

    pub(crate) fn extend(&mut self, changes: impl IntoIterator<Item = FieldChange>) {
        self.changes.extend(changes);
    }

    /// Appends the changes of a later pass.
    pub fn merge(&mut self, other: RecomputeReport) {
        self.changes.extend(other.changes);
    }
}
