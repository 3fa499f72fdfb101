//! Command-line interface for clog, using Clap.

pub mod commands;

use crate::config::Config;
use crate::level::{Level, Verbosity};
use crate::policy::SinkMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// clog - Colored console and file logging from the command line.
#[derive(Debug, Parser)]
#[command(
    name = "clog",
    version,
    about = "Colored console and file logging from the command line"
)]
pub struct Cli {
    /// Config file (defaults to <config dir>/clog/clog.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Override the configured verbosity
    #[arg(short, long, global = true)]
    pub verbosity: Option<Verbosity>,
    /// Override the configured sink mode (none, console, file, both)
    #[arg(short, long, global = true)]
    pub mode: Option<SinkMode>,
    /// Override the configured log file path
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<String>,
    /// Disable console colors
    #[arg(long, global = true)]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log a message to stderr and/or the log file.
    Log {
        level: Level,
        message: Vec<String>,
    },
    /// Like `log`, but console output goes to stdout.
    Print {
        level: Level,
        message: Vec<String>,
    },
    /// Log a hex (or binary) dump of the given text's bytes.
    Hex {
        /// Separate bytes as `0xHH` tokens
        #[arg(long)]
        wide: bool,
        /// Dump bits instead of hex digits
        #[arg(long, conflicts_with = "wide")]
        binary: bool,
        #[arg(short, long, default_value = "debug")]
        level: Level,
        text: Vec<String>,
    },
    /// Show every level in every symbol style.
    Demo,
    /// Show which levels a verbosity lets through.
    Levels {
        /// Defaults to the configured verbosity
        verbosity: Option<Verbosity>,
    },
}

impl Cli {
    /// Loads the config file and folds the command-line overrides into it.
    ///
    /// # Errors
    /// Config read or parse failures.
    pub fn load_config(&self) -> Result<Config, crate::Error> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(verbosity) = self.verbosity {
            config.general.verbosity = verbosity.to_string();
        }
        if let Some(mode) = self.mode {
            config.general.mode = mode.to_string();
        }
        if let Some(file) = &self.file {
            config.file.path = Some(file.clone());
            // A file given alone adds the file sink instead of being ignored.
            if self.mode.is_none() && matches!(config.parse_mode(), Ok(SinkMode::Console)) {
                config.general.mode = SinkMode::Both.to_string();
            }
        }
        if self.no_color {
            config.console.colors = false;
        }
        Ok(config)
    }
}

pub use commands::{cmd_demo, cmd_hex, cmd_levels, cmd_log};
