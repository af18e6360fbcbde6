//! Catalog domain model.
//!
//! # Responsibility
//! - Define the canonical book record held by the catalog store.
//!
//! # Invariants
//! - Every record is identified by a caller-chosen `BookId`.
//! - Identity never changes after insertion; updates replace fields only.

pub mod book;
