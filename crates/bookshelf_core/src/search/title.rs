//! Case-insensitive substring search over book titles.
//!
//! # Responsibility
//! - Normalize query text (trim + case fold).
//! - Return every matching record in catalog order with a match count.
//!
//! # Invariants
//! - Blank queries are rejected with `CatalogError::EmptyQuery`.
//! - Zero matches is a valid result, not an error.
//! - Records are cloned into the result; the catalog is never mutated.

use crate::model::book::Book;
use crate::repo::book_repo::{CatalogError, CatalogResult};

/// User-provided title query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleQuery {
    /// Raw query text as entered.
    pub text: String,
}

impl TitleQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Returns the trimmed, case-folded needle, or `None` for blank input.
    pub fn needle(&self) -> Option<String> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }
}

/// Search result envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleMatches {
    /// Matching records in catalog order.
    pub items: Vec<Book>,
    /// Number of matching records.
    pub total: usize,
}

impl TitleMatches {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Scans `books` front to back and collects titles containing the query.
pub fn match_titles(books: &[Book], query: &TitleQuery) -> CatalogResult<TitleMatches> {
    let needle = query.needle().ok_or(CatalogError::EmptyQuery)?;

    let items = books
        .iter()
        .filter(|book| book.title.to_lowercase().contains(needle.as_str()))
        .cloned()
        .collect::<Vec<_>>();

    Ok(TitleMatches {
        total: items.len(),
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::{match_titles, TitleQuery};
    use crate::model::book::Book;
    use crate::repo::book_repo::CatalogError;

    #[test]
    fn needle_is_trimmed_and_folded() {
        assert_eq!(
            TitleQuery::new("  Rust Book ").needle().as_deref(),
            Some("rust book")
        );
        assert_eq!(TitleQuery::new(" \t ").needle(), None);
    }

    #[test]
    fn blank_query_is_rejected() {
        let books = vec![Book::new(1, "Dune", "Herbert", 1965)];
        let err = match_titles(&books, &TitleQuery::new("   ")).unwrap_err();
        assert_eq!(err, CatalogError::EmptyQuery);
    }

    #[test]
    fn zero_hits_is_a_valid_result() {
        let books = vec![Book::new(1, "Dune", "Herbert", 1965)];
        let matches = match_titles(&books, &TitleQuery::new("foundation")).unwrap();
        assert!(matches.is_empty());
        assert!(matches.items.is_empty());
    }
}
