//! Renders every level in every symbol style, so users can pick one for their terminal.

use crate::fmt::SymbolStyle;
use crate::level::{Level, Verbosity};
use crate::logger::Logger;
use crate::output::{LogRecord, SourceLocation};
use crate::policy::SinkMode;
use std::process::ExitCode;

/// Handles `clog demo`. Console only, regardless of the configured mode.
#[must_use]
pub fn cmd_demo(logger: &Logger) -> ExitCode {
    for style in SymbolStyle::all() {
        let demo = Logger::builder()
            .policy(logger.policy().clone())
            .verbosity(Verbosity::All)
            .mode(SinkMode::Console)
            .symbols(style)
            .build();

        show(&demo, Level::Header, format!("symbol style: {style}"));
        for level in Level::all() {
            show(&demo, level, format!("{level} message"));
        }
    }
    ExitCode::SUCCESS
}

fn show(logger: &Logger, level: Level, msg: String) {
    let record = LogRecord::new(level, msg, SourceLocation::default()).to_stdout();
    let _ = logger.emit(&record);
}
