//! The most common CLI operation: emit a single line from a shell script.

use crate::internal;
use crate::level::Level;
use crate::logger::Logger;
use crate::output::{LogRecord, SourceLocation};
use std::process::ExitCode;

/// Handles `clog log` and `clog print`; `stdout` selects the print-style stream.
#[must_use]
pub fn cmd_log(level: Level, message: &[String], stdout: bool, logger: &Logger) -> ExitCode {
    if message.is_empty() {
        internal::warn("CLI", "Usage: clog log <level> <message>");
        return ExitCode::FAILURE;
    }

    // A shell caller has no source location to trace.
    let mut record = LogRecord::new(level, message.join(" "), SourceLocation::default());
    if stdout {
        record = record.to_stdout();
    }

    match logger.emit(&record) {
        Ok(()) => ExitCode::SUCCESS,
        // already reported by the logger
        Err(crate::Error::FileOpen { .. }) => ExitCode::FAILURE,
        Err(e) => {
            internal::error("CLI", &e.to_string());
            ExitCode::FAILURE
        }
    }
}
