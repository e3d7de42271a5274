//! Session orchestration for the character sheet.
//!
//! This crate wires the catalog source abstraction and the derivation engine
//! into a single-user [`Session`]. Consumers fetch the catalog once through a
//! [`CatalogSource`], then feed [`DraftEvent`](sheet_core::DraftEvent)s and
//! read back the draft or its export.
//!
//! Modules are organized by responsibility:
//! - [`session`] owns the catalog lifecycle and the draft
//! - [`source`] abstracts where the catalog comes from
//! - [`selections`] replays saved form input as events
pub mod error;
pub mod selections;
pub mod session;
pub mod source;

pub use error::{Result, RuntimeError};
pub use selections::{ForgeSelections, MundusSelections, SheetSelections};
pub use session::{CatalogState, Session};
pub use source::{CatalogSource, FileCatalogSource, InlineCatalogSource};
