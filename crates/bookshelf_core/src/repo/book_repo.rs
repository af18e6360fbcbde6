//! Catalog store contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the ordered sequence of book records for the process lifetime.
//! - Enforce id uniqueness and expose add/list/update/delete/search.
//!
//! # Invariants
//! - No two records share the same `id`.
//! - Insertion order is preserved across every operation; deletes keep the
//!   relative order of the remaining records.
//! - A failed operation leaves the catalog unchanged.
//! - Field values are stored as given; validation belongs to `crate::input`.

use crate::model::book::{Book, BookId};
use crate::search::title::{match_titles, TitleMatches, TitleQuery};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error kinds reported by catalog operations.
///
/// None of these are fatal; callers report them and continue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// `add` was called with an id already present.
    AlreadyExists(BookId),
    /// `update`/`delete` target id is not present.
    NotFound(BookId),
    /// Operation needs at least one record and the catalog has none.
    EmptyCatalog,
    /// Title search query is blank after trimming.
    EmptyQuery,
    /// Storage for a new record could not be reserved.
    AllocationFailure(BookId),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyExists(id) => write!(f, "book id {id} already exists"),
            Self::NotFound(id) => write!(f, "book id {id} not found"),
            Self::EmptyCatalog => write!(f, "catalog has no books"),
            Self::EmptyQuery => write!(f, "search query cannot be empty"),
            Self::AllocationFailure(id) => {
                write!(f, "cannot allocate storage for book id {id}")
            }
        }
    }
}

impl Error for CatalogError {}

/// Store interface for catalog operations.
pub trait BookRepository {
    /// Appends one record; rejects duplicate ids.
    fn add_book(&mut self, book: Book) -> CatalogResult<()>;
    /// Returns all records in insertion order.
    fn list_books(&self) -> CatalogResult<&[Book]>;
    /// Replaces title, author and year of the record with `id`.
    fn update_book(
        &mut self,
        id: BookId,
        title: &str,
        author: &str,
        publication_year: i32,
    ) -> CatalogResult<()>;
    /// Removes the record with `id` and returns it.
    fn delete_book(&mut self, id: BookId) -> CatalogResult<Book>;
    /// Case-insensitive substring search over titles.
    fn search_by_title(&self, query: &TitleQuery) -> CatalogResult<TitleMatches>;
    /// Whether a record with `id` is present.
    fn contains(&self, id: BookId) -> bool;
    /// Number of records currently held.
    fn len(&self) -> usize;
    /// Drops every record and returns how many were released.
    fn release_all(&mut self) -> usize;

    /// Whether the catalog holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Vec-backed catalog store with linear scans.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: Vec<Book>,
}

impl InMemoryBookRepository {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    fn position_of(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }
}

impl BookRepository for InMemoryBookRepository {
    fn add_book(&mut self, book: Book) -> CatalogResult<()> {
        if self.contains(book.id) {
            return Err(CatalogError::AlreadyExists(book.id));
        }

        self.books
            .try_reserve(1)
            .map_err(|_| CatalogError::AllocationFailure(book.id))?;
        self.books.push(book);
        Ok(())
    }

    fn list_books(&self) -> CatalogResult<&[Book]> {
        if self.books.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        Ok(&self.books)
    }

    fn update_book(
        &mut self,
        id: BookId,
        title: &str,
        author: &str,
        publication_year: i32,
    ) -> CatalogResult<()> {
        let book = self
            .books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        book.replace_fields(title, author, publication_year);
        Ok(())
    }

    fn delete_book(&mut self, id: BookId) -> CatalogResult<Book> {
        if self.books.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let index = self.position_of(id).ok_or(CatalogError::NotFound(id))?;
        // `remove` shifts the tail left, keeping relative order.
        Ok(self.books.remove(index))
    }

    fn search_by_title(&self, query: &TitleQuery) -> CatalogResult<TitleMatches> {
        if self.books.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        match_titles(&self.books, query)
    }

    fn contains(&self, id: BookId) -> bool {
        self.position_of(id).is_some()
    }

    fn len(&self) -> usize {
        self.books.len()
    }

    fn release_all(&mut self) -> usize {
        let released = self.books.len();
        self.books = Vec::new();
        released
    }
}
