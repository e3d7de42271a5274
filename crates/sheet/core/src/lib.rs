//! Derivation rules for the D.E.R.P. character sheet.
//!
//! `sheet-core` defines the reference catalog model, the mutable
//! [`CharacterDraft`] and the [`DerivationEngine`] that recomputes every
//! dependent field (virtue budget, allocation bounds, ability option sets,
//! arena stats, effect texts) from the user's selections. It performs no I/O:
//! loaders live in `sheet-content` and session handling in `sheet-runtime`.
//!
//! All mutation of a draft flows through [`DerivationEngine::apply`], which
//! applies one [`DraftEvent`] and runs [`DerivationEngine::recompute_all`].
pub mod catalog;
pub mod config;
pub mod draft;
pub mod engine;
pub mod error;
pub mod export;

pub use catalog::{Ability, CallingList, Catalog, ForgeEffect, MundusEffect, PathDefinition};
pub use config::SheetConfig;
pub use draft::{
    AbilityDetails, AbilitySlot, ArenaStat, ArenaStats, CharacterDraft, DerivedFields, ForgeItem,
    MundusStone, NO_CALLING, NO_SELECTION, ParagonBonus, Virtue, VirtueAllocation, VirtueBounds,
    VirtueGives,
};
pub use engine::{DerivationEngine, DraftEvent, FieldChange, RecomputeReport, RecomputeStage};
pub use error::DraftError;
pub use export::render_markdown;
