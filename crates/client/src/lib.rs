//! Command-line front end for the character sheet.
//!
//! # Architecture
//!
//! ```text
//! derps-sheet (binary)
//!   ├─→ CliConfig   (environment, then command-line overrides)
//!   ├─→ Session     (catalog lifecycle, derivation engine)
//!   └─→ SheetApp    (selections replay, export)
//! ```
//!
//! stdout carries only the rendered sheet; logs go to stderr.
pub mod app;
pub mod config;

pub use app::{OutputFormat, SheetApp, SheetAppBuilder};
pub use config::CliConfig;
