//! Hex/binary dump command.

use crate::fmt::{HexStyle, format_bin, format_hex};
use crate::internal;
use crate::level::Level;
use crate::logger::Logger;
use crate::output::{LogRecord, SourceLocation};
use std::process::ExitCode;

/// Handles `clog hex [--wide|--binary] [--level L] <text>`.
#[must_use]
pub fn cmd_hex(
    level: Level,
    text: &[String],
    wide: bool,
    binary: bool,
    logger: &Logger,
) -> ExitCode {
    let input = text.join(" ");
    let dump = if binary {
        format_bin(input.as_bytes())
    } else if wide {
        format_hex(input.as_bytes(), HexStyle::Wide)
    } else {
        format_hex(input.as_bytes(), HexStyle::Compact)
    };

    match logger.emit(&LogRecord::new(level, dump, SourceLocation::default())) {
        Ok(()) => ExitCode::SUCCESS,
        // already reported by the logger
        Err(crate::Error::FileOpen { .. }) => ExitCode::FAILURE,
        Err(e) => {
            internal::error("CLI", &e.to_string());
            ExitCode::FAILURE
        }
    }
}
