//! Error types for sheet-core.
//!
//! Derivation itself never fails: missing lookups degrade to empty fields and
//! malformed requirements simply do not match. Errors only arise when an
//! input event addresses something the draft does not have.

/// Rejected draft input event.
///
/// These are validation errors: the event is dropped and the draft is left
/// untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DraftError {
    #[error("ability slot {slot} is out of range (sheet has {total} slots)")]
    SlotOutOfRange { slot: usize, total: usize },

    #[error("a sheet needs at least one ability slot")]
    NoAbilitySlots,
}

impl DraftError {
    /// Stable identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::SlotOutOfRange { .. } => "SLOT_OUT_OF_RANGE",
            Self::NoAbilitySlots => "NO_ABILITY_SLOTS",
        }
    }
}
