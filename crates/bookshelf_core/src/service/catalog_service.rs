//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide add/list/update/delete/search entry points for the menu layer.
//! - Emit one metadata-only log event per operation.
//! - Own the catalog lifecycle from construction to explicit shutdown.
//!
//! # Invariants
//! - Service APIs never bypass store uniqueness/traversal contracts.
//! - Titles and authors are never written to logs; ids and counts are.

use crate::model::book::{Book, BookId};
use crate::repo::book_repo::{BookRepository, CatalogError, CatalogResult};
use crate::search::title::{TitleMatches, TitleQuery};
use log::{error, info, warn};

/// Catalog service facade over store implementations.
pub struct CatalogService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> CatalogService<R> {
    /// Creates a service owning the provided store.
    pub fn new(repo: R) -> Self {
        info!(
            "event=catalog_open module=catalog status=ok books={}",
            repo.len()
        );
        Self { repo }
    }

    /// Appends a new record built from pre-validated fields.
    pub fn add_book(
        &mut self,
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: i32,
    ) -> CatalogResult<()> {
        let result = self
            .repo
            .add_book(Book::new(id, title, author, publication_year));
        log_outcome("book_add", Some(id), &result);
        result
    }

    /// Lists every record in insertion order.
    pub fn list_books(&self) -> CatalogResult<&[Book]> {
        let result = self.repo.list_books();
        match &result {
            Ok(books) => info!(
                "event=book_list module=catalog status=ok count={}",
                books.len()
            ),
            Err(err) => log_error("book_list", None, err),
        }
        result
    }

    /// Replaces title, author and year of an existing record.
    pub fn update_book(
        &mut self,
        id: BookId,
        title: &str,
        author: &str,
        publication_year: i32,
    ) -> CatalogResult<()> {
        let result = self.repo.update_book(id, title, author, publication_year);
        log_outcome("book_update", Some(id), &result);
        result
    }

    /// Removes one record by id and returns it.
    pub fn delete_book(&mut self, id: BookId) -> CatalogResult<Book> {
        let result = self.repo.delete_book(id);
        log_outcome("book_delete", Some(id), &result);
        result
    }

    /// Searches titles for a case-insensitive substring.
    pub fn search_titles(&self, text: impl Into<String>) -> CatalogResult<TitleMatches> {
        let query = TitleQuery::new(text);
        let result = self.repo.search_by_title(&query);
        match &result {
            Ok(matches) => info!(
                "event=book_search module=catalog status=ok query_len={} hits={}",
                query.text.trim().chars().count(),
                matches.total
            ),
            Err(err) => log_error("book_search", None, err),
        }
        result
    }

    /// Whether a record with `id` exists.
    pub fn contains(&self, id: BookId) -> bool {
        self.repo.contains(id)
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.repo.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    /// Releases every record and consumes the service.
    ///
    /// Returns the number of records released.
    pub fn shutdown(mut self) -> usize {
        let released = self.repo.release_all();
        info!(
            "event=catalog_close module=catalog status=ok released={}",
            released
        );
        released
    }
}

fn log_outcome<T>(event: &str, id: Option<BookId>, result: &CatalogResult<T>) {
    match result {
        Ok(_) => info!(
            "event={} module=catalog status=ok id={}",
            event,
            display_id(id)
        ),
        Err(err) => log_error(event, id, err),
    }
}

fn log_error(event: &str, id: Option<BookId>, err: &CatalogError) {
    match err {
        CatalogError::AllocationFailure(_) => error!(
            "event={} module=catalog status=error id={} error_code={}",
            event,
            display_id(id),
            error_code(err)
        ),
        _ => warn!(
            "event={} module=catalog status=error id={} error_code={}",
            event,
            display_id(id),
            error_code(err)
        ),
    }
}

fn display_id(id: Option<BookId>) -> String {
    id.map(|value| value.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Stable machine-readable code for one catalog error.
pub fn error_code(err: &CatalogError) -> &'static str {
    match err {
        CatalogError::AlreadyExists(_) => "already_exists",
        CatalogError::NotFound(_) => "not_found",
        CatalogError::EmptyCatalog => "empty_catalog",
        CatalogError::EmptyQuery => "empty_query",
        CatalogError::AllocationFailure(_) => "allocation_failure",
    }
}
