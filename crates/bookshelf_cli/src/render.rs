//! Fixed-width table output for book listings.

use bookshelf_core::Book;
use std::io::{self, Write};

const RULE_WIDTH: usize = 97;

/// Writes the header, one row per book and the closing rule.
pub fn write_book_table(out: &mut impl Write, books: &[Book]) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "{:<10}{:<40}{:<30}{:<20}",
        "Book ID", "Title", "Author", "Publication Year"
    )?;
    writeln!(out, "{rule}")?;
    for book in books {
        writeln!(
            out,
            "{:<10}{:<40}{:<30}{:<10}",
            book.id, book.title, book.author, book.publication_year
        )?;
    }
    writeln!(out, "{rule}")
}
