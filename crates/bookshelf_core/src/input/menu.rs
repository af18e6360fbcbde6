//! Menu command parsing.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static SINGLE_DIGIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d$").expect("valid single digit regex"));

/// Closed set of menu operations, numbered 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Add,
    List,
    Update,
    Delete,
    Search,
    Exit,
}

impl MenuCommand {
    /// All commands in menu order.
    pub const ALL: [MenuCommand; 6] = [
        Self::Add,
        Self::List,
        Self::Update,
        Self::Delete,
        Self::Search,
        Self::Exit,
    ];

    /// Menu number shown to the user.
    pub fn number(self) -> u8 {
        match self {
            Self::Add => 1,
            Self::List => 2,
            Self::Update => 3,
            Self::Delete => 4,
            Self::Search => 5,
            Self::Exit => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "addBook",
            Self::List => "viewBooks",
            Self::Update => "updateBook",
            Self::Delete => "deleteBook",
            Self::Search => "searchBooks",
            Self::Exit => "exit program",
        }
    }

    fn from_number(value: u8) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|command| command.number() == value)
    }
}

/// Rejection reasons for a menu line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoiceError {
    /// Input is not exactly one digit.
    WrongFormat,
    /// A digit outside 1..=6.
    OutOfRange(u8),
}

impl Display for MenuChoiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongFormat => write!(f, "Wrong number was inputted."),
            Self::OutOfRange(_) => write!(f, "Invalid menu number."),
        }
    }
}

impl Error for MenuChoiceError {}

/// Parses one raw menu line into a command.
pub fn parse_menu_choice(raw: &str) -> Result<MenuCommand, MenuChoiceError> {
    let trimmed = raw.trim();
    if !SINGLE_DIGIT_RE.is_match(trimmed) {
        return Err(MenuChoiceError::WrongFormat);
    }

    let value = trimmed
        .parse::<u8>()
        .map_err(|_| MenuChoiceError::WrongFormat)?;
    MenuCommand::from_number(value).ok_or(MenuChoiceError::OutOfRange(value))
}
