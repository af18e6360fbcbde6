//! Input rules applied by the menu before calling the catalog.
//!
//! # Responsibility
//! - Parse and validate raw menu lines into typed values.
//! - Keep every rule a pure function so the menu loop owns all I/O.
//!
//! # Invariants
//! - Values accepted here satisfy the record constraints the store relies on.
//! - Rejections carry the message shown to the user before re-prompting.

pub mod fields;
pub mod menu;
