//! Command-line configuration.
//!
//! # Responsibility
//! - Parse process arguments into typed settings.
//! - Resolve logging defaults (level by build mode, directory under temp).

use anyhow::{Context, Result};
use bookshelf_core::default_log_level;
use clap::Parser;
use std::path::PathBuf;

/// Interactive in-memory book catalog.
#[derive(Debug, Parser)]
#[command(name = "bookshelf", version)]
pub struct CliArgs {
    /// Log level: trace, debug, info, warn or error.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Directory for rolling log files. Relative paths resolve against the
    /// working directory.
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Disable file logging.
    #[arg(long, conflicts_with_all = ["log_level", "log_dir"])]
    pub no_log: bool,
}

/// Resolved logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub dir: PathBuf,
}

impl CliArgs {
    /// Returns `None` when logging is disabled.
    pub fn logging_config(&self) -> Result<Option<LoggingConfig>> {
        if self.no_log {
            return Ok(None);
        }

        let level = self
            .log_level
            .clone()
            .unwrap_or_else(|| default_log_level().to_string());
        let dir = match &self.log_dir {
            Some(dir) => std::path::absolute(dir)
                .with_context(|| format!("cannot resolve log directory `{}`", dir.display()))?,
            None => default_log_dir(),
        };

        Ok(Some(LoggingConfig { level, dir }))
    }
}

fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join("bookshelf").join("logs")
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn defaults_enable_logging_under_temp_dir() {
        let args = CliArgs::try_parse_from(["bookshelf"]).unwrap();
        let config = args.logging_config().unwrap().unwrap();
        assert!(config.dir.is_absolute());
        assert!(config.dir.ends_with("bookshelf/logs"));
        assert_eq!(config.level, bookshelf_core::default_log_level());
    }

    #[test]
    fn explicit_flags_are_used() {
        let args = CliArgs::try_parse_from([
            "bookshelf",
            "--log-level",
            "warn",
            "--log-dir",
            "/var/tmp/shelf",
        ])
        .unwrap();
        let config = args.logging_config().unwrap().unwrap();
        assert_eq!(config.level, "warn");
        assert_eq!(config.dir, PathBuf::from("/var/tmp/shelf"));
    }

    #[test]
    fn relative_log_dir_resolves_against_working_directory() {
        let args = CliArgs::try_parse_from(["bookshelf", "--log-dir", "shelf-logs"]).unwrap();
        let config = args.logging_config().unwrap().unwrap();
        let expected = std::env::current_dir().unwrap().join("shelf-logs");
        assert!(config.dir.is_absolute());
        assert_eq!(config.dir, expected);
    }

    #[test]
    fn no_log_disables_logging_and_conflicts_with_log_flags() {
        let args = CliArgs::try_parse_from(["bookshelf", "--no-log"]).unwrap();
        assert!(args.logging_config().unwrap().is_none());

        assert!(CliArgs::try_parse_from(["bookshelf", "--no-log", "--log-level", "info"]).is_err());
    }
}
