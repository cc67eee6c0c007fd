#![deny(unsafe_code)]

//! Ownership reconciliation.
//!
//! Ownership tables arrive as pasted text or CSV exports with loosely
//! formatted names. They are parsed into an [`OwnershipDictionary`] keyed by
//! canonical name, enriched with synthetic `dst-<TEAM>` entries for team
//! defenses, and merged onto player records.

pub mod alias;
pub mod canonical;
pub mod dictionary;
pub mod reconcile;
pub mod rows;
pub mod text;

pub use alias::{alias_defenses, defense_key, with_defense_aliases};
pub use canonical::{is_defense_style, ownership_key, strip_defense_markers};
pub use dictionary::OwnershipDictionary;
pub use reconcile::{Reconciliation, apply_ownership};
pub use rows::parse_ownership_rows;
pub use text::{parse_ownership_line, parse_pasted_ownership};
