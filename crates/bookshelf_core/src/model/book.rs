//! Book domain model.
//!
//! # Responsibility
//! - Define the record shape shared by store, service and menu layers.
//! - Provide in-place field replacement used by catalog updates.
//!
//! # Invariants
//! - `id` is stable for the record lifetime and unique within one catalog.
//! - Field constraints (trimmed, non-empty, year bound) are enforced by
//!   `crate::input` before a record is built, not by this type.

use serde::{Deserialize, Serialize};

/// Stable identifier for one catalog record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Unsigned so negative ids cannot reach the store.
pub type BookId = u32;

/// Canonical catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Caller-provided unique id.
    pub id: BookId,
    /// Trimmed, non-empty title.
    pub title: String,
    /// Trimmed, non-empty author name.
    pub author: String,
    /// Publication year; may be negative, never later than the current year.
    pub publication_year: i32,
}

impl Book {
    /// Builds a record from already-validated field values.
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: i32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            publication_year,
        }
    }

    /// Overwrites title, author and year while keeping `id` untouched.
    pub fn replace_fields(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: i32,
    ) {
        self.title = title.into();
        self.author = author.into();
        self.publication_year = publication_year;
    }
}
