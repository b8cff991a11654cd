//! File logging.
//!
//! The terminal belongs to the UI, so log output goes to a file. Logging is
//! off unless a file is configured.

use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;

use simplelog::{LevelFilter, WriteLogger};

use crate::cli::Cli;
use crate::error::{TuiError, TuiResult};
use chatsearch_core::storage::config::Config;

/// Parse a level name, falling back to `Info`.
pub fn parse_level(name: &str) -> LevelFilter {
    LevelFilter::from_str(name.trim()).unwrap_or(LevelFilter::Info)
}

/// Log file from the command line, else from the config.
pub fn log_file(cli: &Cli, config: &Config) -> Option<PathBuf> {
    cli.log_file.clone().or_else(|| config.log_file.clone())
}

pub fn init_logging(cli: &Cli, config: &Config) -> TuiResult<()> {
    let Some(path) = log_file(cli, config) else {
        return Ok(());
    };

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        parse_level(&config.effective_log_level())
    };

    let file = File::create(&path)
        .map_err(|e| TuiError::Logger(format!("{}: {}", path.display(), e)))?;
    WriteLogger::init(level, simplelog::Config::default(), file)
        .map_err(|e| TuiError::Logger(e.to_string()))?;

    log::info!("logging at {} to {}", level, path.display());
    Ok(())
}
