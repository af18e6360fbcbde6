//! Book field parsing and validation.
//!
//! # Invariants
//! - Ids are non-negative and fit `BookId`.
//! - Title/author values are trimmed, non-empty and at most
//!   `MAX_TEXT_FIELD_CHARS` characters.
//! - Years are never later than the current calendar year; there is no lower
//!   bound.

use crate::model::book::BookId;
use chrono::Datelike;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Longest title/author kept; longer input is truncated.
pub const MAX_TEXT_FIELD_CHARS: usize = 99;

static INTEGER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+$").expect("valid integer regex"));

/// Which text field is being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Title,
    Author,
}

impl TextField {
    /// Prompt shown before reading this field.
    pub fn prompt(self) -> &'static str {
        match self {
            Self::Title => "Please input Book title: ",
            Self::Author => "Please input Author name: ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookIdError {
    /// Not a single integer token.
    NotAnInteger,
    Negative,
    /// Larger than `BookId::MAX`.
    TooLarge,
}

impl Display for BookIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnInteger => write!(
                f,
                "Invalid input. Please enter a valid positive integer for Book ID."
            ),
            Self::Negative => write!(
                f,
                "Invalid input: Please enter a positive number for Book ID."
            ),
            Self::TooLarge => write!(
                f,
                "Invalid input: Book ID cannot be greater than {}.",
                BookId::MAX
            ),
        }
    }
}

impl Error for BookIdError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFieldError {
    /// Blank after trimming.
    Empty,
}

impl Display for TextFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Input cannot be empty."),
        }
    }
}

impl Error for TextFieldError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicationYearError {
    /// Not a single integer token, or outside the `i32` range.
    NotAnInteger,
    InFuture { year: i32, current_year: i32 },
}

impl Display for PublicationYearError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnInteger => write!(f, "Invalid input. Please enter year in YYYY format."),
            Self::InFuture { .. } => write!(f, "Invalid year. Please enter year in YYYY format."),
        }
    }
}

impl Error for PublicationYearError {}

/// Parses one raw line into a book id.
pub fn parse_book_id(raw: &str) -> Result<BookId, BookIdError> {
    let value = parse_integer_token(raw).ok_or(BookIdError::NotAnInteger)?;
    if value < 0 {
        return Err(BookIdError::Negative);
    }
    BookId::try_from(value).map_err(|_| BookIdError::TooLarge)
}

/// Trims a title/author line and caps its length.
pub fn normalize_text_field(raw: &str) -> Result<String, TextFieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TextFieldError::Empty);
    }
    // Truncation can expose trailing whitespace from the middle of the input.
    let capped = trimmed
        .chars()
        .take(MAX_TEXT_FIELD_CHARS)
        .collect::<String>();
    Ok(capped.trim_end().to_string())
}

/// Parses one raw line into a publication year no later than `current_year`.
pub fn parse_publication_year(raw: &str, current_year: i32) -> Result<i32, PublicationYearError> {
    let value = parse_integer_token(raw).ok_or(PublicationYearError::NotAnInteger)?;
    let year = i32::try_from(value).map_err(|_| PublicationYearError::NotAnInteger)?;
    if year > current_year {
        return Err(PublicationYearError::InFuture { year, current_year });
    }
    Ok(year)
}

/// Current calendar year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn parse_integer_token(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if !INTEGER_RE.is_match(trimmed) {
        return None;
    }
    trimmed.parse::<i64>().ok()
}
