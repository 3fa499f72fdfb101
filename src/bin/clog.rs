//! `clog` binary: one-shot logging from shell scripts, plus a symbol-style demo and
//! a gating table.
//!
//! Usage:
//!   clog log <level> <message>           Log to stderr and/or the log file
//!   clog print <level> <message>         Same, console output on stdout
//!   clog hex [--wide|--binary] <text>    Dump the text's bytes
//!   clog demo                            Every level in every symbol style
//!   clog levels [verbosity]              Which levels a verbosity lets through

use clap::Parser;
use clog::cli::{Cli, Command, cmd_demo, cmd_hex, cmd_levels, cmd_log};
use clog::{Logger, internal};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config drives sinks, verbosity, and decoration, so it must load before any logger exists
    let config = match cli.load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    internal::init_with_config(&config);

    let logger = match Logger::from_config(&config) {
        Ok(logger) => logger,
        Err(e) => {
            internal::error("CLI", &format!("Invalid config: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let code = match &cli.command {
        Command::Log { level, message } => cmd_log(*level, message, false, &logger),
        Command::Print { level, message } => cmd_log(*level, message, true, &logger),
        Command::Hex {
            wide,
            binary,
            level,
            text,
        } => cmd_hex(*level, text, *wide, *binary, &logger),
        Command::Demo => cmd_demo(&logger),
        Command::Levels { verbosity } => cmd_levels(*verbosity, &logger),
    };

    if let Err(e) = logger.close() {
        internal::error("CLI", &e.to_string());
        return ExitCode::FAILURE;
    }
    code
}
