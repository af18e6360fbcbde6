//! Interactive menu loop.
//!
//! # Responsibility
//! - Prompt for a command and its fields, re-prompting on invalid input.
//! - Dispatch into the catalog service and print the outcome.
//!
//! # Invariants
//! - No catalog error ends the loop; only the exit command or end of input
//!   does.
//! - The catalog is released exactly once, when the loop ends.

use crate::render::write_book_table;
use bookshelf_core::{
    normalize_text_field, parse_book_id, parse_menu_choice, parse_publication_year,
    BookRepository, CatalogError, CatalogService, MenuCommand, TextField,
};
use std::fmt::Display;
use std::io::{self, BufRead, Write};

const MENU_PROMPT: &str = "Please input a number for operation (only one digit): ";
const ID_PROMPT: &str = "Please input Book ID: ";
const YEAR_PROMPT: &str = "Please input year book was published: ";
const SEARCH_PROMPT: &str = "Please input search query: ";

enum Flow {
    Continue,
    Exit,
}

/// Values collected for add/update.
struct BookFields {
    title: String,
    author: String,
    publication_year: i32,
}

/// One interactive session over a catalog and a pair of output streams.
pub struct MenuSession<S, R, W, E>
where
    S: BookRepository,
    R: BufRead,
    W: Write,
    E: Write,
{
    catalog: CatalogService<S>,
    input: R,
    out: W,
    err: E,
    current_year: i32,
}

impl<S, R, W, E> MenuSession<S, R, W, E>
where
    S: BookRepository,
    R: BufRead,
    W: Write,
    E: Write,
{
    pub fn new(catalog: CatalogService<S>, input: R, out: W, err: E, current_year: i32) -> Self {
        Self {
            catalog,
            input,
            out,
            err,
            current_year,
        }
    }

    /// Runs until the exit command or end of input, then releases the
    /// catalog. Returns the number of records released.
    pub fn run(mut self) -> io::Result<usize> {
        loop {
            self.write_menu()?;
            let Some(command) = self.prompt(MENU_PROMPT, parse_menu_choice)? else {
                break;
            };
            match self.dispatch(command)? {
                Flow::Continue => {}
                Flow::Exit => break,
            }
        }

        let Self {
            catalog, mut out, ..
        } = self;
        let released = catalog.shutdown();
        if released == 0 {
            writeln!(out, "List is already empty")?;
        }
        writeln!(out, "Thank you for using. Have a good day!")?;
        out.flush()?;
        Ok(released)
    }

    fn write_menu(&mut self) -> io::Result<()> {
        for command in MenuCommand::ALL {
            writeln!(self.out, "{}. {}", command.number(), command.label())?;
        }
        Ok(())
    }

    /// End of input inside a command also yields `Flow::Exit`.
    fn dispatch(&mut self, command: MenuCommand) -> io::Result<Flow> {
        match command {
            MenuCommand::Add => self.add(),
            MenuCommand::List => self.list(),
            MenuCommand::Update => self.update(),
            MenuCommand::Delete => self.delete(),
            MenuCommand::Search => self.search(),
            MenuCommand::Exit => Ok(Flow::Exit),
        }
    }

    fn add(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt(ID_PROMPT, parse_book_id)? else {
            return Ok(Flow::Exit);
        };
        let Some(fields) = self.prompt_fields()? else {
            return Ok(Flow::Exit);
        };

        let title = fields.title.clone();
        match self
            .catalog
            .add_book(id, fields.title, fields.author, fields.publication_year)
        {
            Ok(()) => writeln!(self.out, "Successfully added a Book.")?,
            Err(err @ CatalogError::AllocationFailure(_)) => writeln!(
                self.err,
                "{}",
                catalog_message(MenuCommand::Add, Some(&title), &err)
            )?,
            Err(err) => self.report(MenuCommand::Add, &err)?,
        }
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> io::Result<Flow> {
        match self.catalog.list_books() {
            Ok(books) => write_book_table(&mut self.out, books)?,
            Err(err) => writeln!(
                self.out,
                "{}",
                catalog_message(MenuCommand::List, None, &err)
            )?,
        }
        Ok(Flow::Continue)
    }

    fn update(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt(ID_PROMPT, parse_book_id)? else {
            return Ok(Flow::Exit);
        };
        if !self.catalog.contains(id) {
            self.report(MenuCommand::Update, &CatalogError::NotFound(id))?;
            return Ok(Flow::Continue);
        }

        writeln!(self.out, "Book found: ID: {id}.")?;
        let Some(fields) = self.prompt_fields()? else {
            return Ok(Flow::Exit);
        };
        match self.catalog.update_book(
            id,
            &fields.title,
            &fields.author,
            fields.publication_year,
        ) {
            Ok(()) => writeln!(self.out, "Successfully updated a Book.")?,
            Err(err) => self.report(MenuCommand::Update, &err)?,
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt(ID_PROMPT, parse_book_id)? else {
            return Ok(Flow::Exit);
        };
        match self.catalog.delete_book(id) {
            Ok(_) => writeln!(self.out, "Book ID - {id} is deleted")?,
            Err(err) => self.report(MenuCommand::Delete, &err)?,
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> io::Result<Flow> {
        write!(self.out, "{SEARCH_PROMPT}")?;
        self.out.flush()?;
        let Some(query) = self.read_line()? else {
            return Ok(Flow::Exit);
        };

        match self.catalog.search_titles(query) {
            Ok(matches) if matches.is_empty() => writeln!(self.out, "\nNo books found.\n")?,
            Ok(matches) => {
                write_book_table(&mut self.out, &matches.items)?;
                writeln!(self.out, "{} book(s) matched.\n", matches.total)?;
            }
            Err(err) => writeln!(
                self.out,
                "{}",
                catalog_message(MenuCommand::Search, None, &err)
            )?,
        }
        Ok(Flow::Continue)
    }

    fn prompt_fields(&mut self) -> io::Result<Option<BookFields>> {
        let Some(title) = self.prompt(TextField::Title.prompt(), normalize_text_field)? else {
            return Ok(None);
        };
        let Some(author) = self.prompt(TextField::Author.prompt(), normalize_text_field)? else {
            return Ok(None);
        };
        let current_year = self.current_year;
        let Some(publication_year) =
            self.prompt(YEAR_PROMPT, |raw| parse_publication_year(raw, current_year))?
        else {
            return Ok(None);
        };

        Ok(Some(BookFields {
            title,
            author,
            publication_year,
        }))
    }

    /// Re-prompts until `parse` accepts a line; `None` on end of input.
    fn prompt<T, Rejection: Display>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, Rejection>,
    ) -> io::Result<Option<T>> {
        loop {
            write!(self.out, "{prompt}")?;
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.out, "{err}")?,
            }
        }
    }

    /// Reads one line; bytes that are not UTF-8 become U+FFFD instead of
    /// ending the session.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn report(&mut self, command: MenuCommand, err: &CatalogError) -> io::Result<()> {
        writeln!(self.out, "{}", catalog_message(command, None, err))
    }
}

/// User-facing text for one catalog error raised by `command`.
///
/// `title` is only used by the allocation failure message.
fn catalog_message(command: MenuCommand, title: Option<&str>, err: &CatalogError) -> String {
    match (command, err) {
        (_, CatalogError::AlreadyExists(existing)) => {
            format!("Error: Book ID {existing} already exists.")
        }
        (MenuCommand::Delete, CatalogError::NotFound(missing)) => {
            format!("Book ID - {missing} does not exist in the catalog")
        }
        (_, CatalogError::NotFound(missing)) => format!("Book ID {missing} not found."),
        (MenuCommand::Delete, CatalogError::EmptyCatalog) => {
            "No data available for deletion.".to_string()
        }
        (MenuCommand::Search, CatalogError::EmptyCatalog) => "No Books to search.".to_string(),
        (_, CatalogError::EmptyCatalog) => {
            "Error: There are currently no books in the catalog.".to_string()
        }
        (_, CatalogError::EmptyQuery) => "Search query cannot be empty.".to_string(),
        (_, CatalogError::AllocationFailure(id)) => format!(
            "Cannot create book '{}' (ID:{id}). Memory exhausted.",
            title.unwrap_or_default()
        ),
    }
}
