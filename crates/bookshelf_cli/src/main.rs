//! Bookshelf interactive entry point.
//!
//! # Responsibility
//! - Resolve configuration and start file logging.
//! - Construct the catalog, hand it to the menu loop, release it on exit.

mod config;
mod menu;
mod render;

use anyhow::{Context, Result};
use bookshelf_core::{
    core_version, current_year, init_logging, CatalogService, InMemoryBookRepository,
};
use clap::Parser;
use config::CliArgs;
use log::info;
use menu::MenuSession;
use std::io;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    if let Some(logging) = args.logging_config()? {
        // A broken log directory should not block the catalog itself.
        if let Err(err) = init_logging(&logging.level, &logging.dir) {
            eprintln!("warning: file logging disabled: {err}");
        }
    }
    info!(
        "event=cli_start module=cli status=ok core_version={}",
        core_version()
    );

    let catalog = CatalogService::new(InMemoryBookRepository::new());
    let stdin = io::stdin();
    let session = MenuSession::new(
        catalog,
        stdin.lock(),
        io::stdout().lock(),
        io::stderr().lock(),
        current_year(),
    );
    let released = session.run().context("interactive menu failed")?;

    info!(
        "event=cli_exit module=cli status=ok released={}",
        released
    );
    Ok(())
}
