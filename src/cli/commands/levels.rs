//! Prints the gating table for one verbosity.

use crate::level::{Level, Verbosity};
use crate::logger::Logger;
use std::process::ExitCode;

/// Handles `clog levels [verbosity]`.
#[must_use]
pub fn cmd_levels(verbosity: Option<Verbosity>, logger: &Logger) -> ExitCode {
    let verbosity = verbosity.unwrap_or_else(|| logger.verbosity());
    println!("verbosity: {verbosity} (rank {})", verbosity.rank());
    for level in Level::all() {
        let state = if verbosity.admits(level) {
            "emitted"
        } else {
            "suppressed"
        };
        println!("  {:<9} rank {}  {state}", level.as_str(), level.rank());
    }
    ExitCode::SUCCESS
}
