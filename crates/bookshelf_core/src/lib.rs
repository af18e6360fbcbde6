//! Core domain logic for the Bookshelf catalog.
//! This crate is the single source of truth for catalog invariants.

pub mod input;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use input::fields::{
    current_year, normalize_text_field, parse_book_id, parse_publication_year, BookIdError,
    PublicationYearError, TextField, TextFieldError, MAX_TEXT_FIELD_CHARS,
};
pub use input::menu::{parse_menu_choice, MenuChoiceError, MenuCommand};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::book::{Book, BookId};
pub use repo::book_repo::{BookRepository, CatalogError, CatalogResult, InMemoryBookRepository};
pub use search::title::{match_titles, TitleMatches, TitleQuery};
pub use service::catalog_service::{error_code, CatalogService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
