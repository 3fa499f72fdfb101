//! The `Logger` owns the policy and the sinks it selects. It is built once, shared by
//! reference, and opened/closed explicitly or lazily on first write.

mod builder;
mod from_config;

pub use builder::{ConsoleBuilder, FileBuilder, LoggerBuilder};

use crate::fmt::{HexStyle, format_bin, format_hex};
use crate::internal;
use crate::level::{Level, Verbosity};
use crate::output::{LogRecord, Output, SourceLocation};
use crate::policy::{Policy, Sink};
use std::path::{Path, PathBuf};

/// Immutable after build; safe to share across threads.
pub struct Logger {
    policy: Policy,
    outputs: Vec<Box<dyn Output>>,
    file_path: Option<PathBuf>,
}

impl Default for Logger {
    #[track_caller]
    fn default() -> Self {
        LoggerBuilder::new().build()
    }
}

impl Logger {
    /// The default file path is derived from the calling source file.
    #[must_use]
    #[track_caller]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    #[must_use]
    pub const fn policy(&self) -> &Policy {
        &self.policy
    }

    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        self.policy.verbosity
    }

    /// Whether a call at `level` would reach any sink. Macros check this before formatting.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        self.policy.should_emit(level) && !self.outputs.is_empty()
    }

    /// Path of the file sink, when the mode selects one.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    #[must_use]
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// Opens every sink now instead of on first write.
    ///
    /// # Errors
    /// The first sink that fails to open, typically `Error::FileOpen`.
    pub fn open(&self) -> Result<(), crate::Error> {
        for output in &self.outputs {
            output.open()?;
        }
        Ok(())
    }

    /// Flushes and releases every sink. Later writes reopen lazily.
    ///
    /// # Errors
    /// The first flush failure; remaining sinks are still closed.
    pub fn close(&self) -> Result<(), crate::Error> {
        let mut first = None;
        for output in &self.outputs {
            if let Err(e) = output.close() {
                first.get_or_insert(e);
            }
        }
        first.map_or(Ok(()), Err)
    }

    /// # Errors
    /// The first I/O error across all sinks.
    pub fn flush(&self) -> Result<(), crate::Error> {
        for output in &self.outputs {
            output.flush()?;
        }
        Ok(())
    }

    /// Core dispatch: gate by verbosity, decorate once, write to every selected sink.
    ///
    /// A file sink that fails to open lazily is reported once, on the console sink when
    /// there is one. The returned `Error::FileOpen` needs no further reporting.
    ///
    /// # Errors
    /// The first write error; other sinks are still written.
    pub fn emit(&self, record: &LogRecord) -> Result<(), crate::Error> {
        if !self.policy.should_emit(record.level) {
            return Ok(());
        }

        let sinks = self.policy.resolve_sinks();
        let line = self.policy.decorate(record);
        let mut first = None;

        for output in &self.outputs {
            if !sinks.contains(output.sink()) {
                continue;
            }
            if let Err(e) = output.write(&line, record) {
                if matches!(e, crate::Error::FileOpen { .. }) {
                    self.report(&e);
                }
                first.get_or_insert(e);
            }
        }

        first.map_or(Ok(()), Err)
    }

    /// Shown on the console sink, or through the diagnostic logger when there is none.
    fn report(&self, err: &crate::Error) {
        let record = LogRecord::new(Level::Error, err.to_string(), SourceLocation::default());
        let line = self.policy.decorate(&record);
        let mut shown = false;
        for output in &self.outputs {
            if output.sink() == Sink::Console {
                shown |= output.write(&line, &record).is_ok();
            }
        }
        if !shown {
            internal::error("FILE", &record.message);
        }
    }

    /// Logs `msg` at `level` with an explicit source location.
    pub fn log_at(&self, level: Level, location: SourceLocation, msg: &str) {
        if self.policy.should_emit(level) {
            let _ = self.emit(&LogRecord::new(level, msg, location));
        }
    }

    /// Traces as `file:line` only; the `clog_*!` macros also record the function name.
    #[track_caller]
    pub fn log(&self, level: Level, msg: &str) {
        self.log_at(level, SourceLocation::caller(), msg);
    }

    /// Like `log`, without the trailing newline.
    #[track_caller]
    pub fn log_inline(&self, level: Level, msg: &str) {
        if self.policy.should_emit(level) {
            let _ = self.emit(&LogRecord::new(level, msg, SourceLocation::caller()).inline());
        }
    }

    /// Print-style call: same decoration and gating, but the console line goes to stdout.
    #[track_caller]
    pub fn print(&self, level: Level, msg: &str) {
        if self.policy.should_emit(level) {
            let _ = self.emit(&LogRecord::new(level, msg, SourceLocation::caller()).to_stdout());
        }
    }

    /// Appends `": <err>"` to the message, like `perror`.
    #[track_caller]
    pub fn perror(&self, level: Level, msg: &str, err: &dyn std::error::Error) {
        if self.policy.should_emit(level) {
            self.log_at(level, SourceLocation::caller(), &format!("{msg}: {err}"));
        }
    }

    /// Logs `label` followed by a hex dump of `bytes`.
    #[track_caller]
    pub fn hex(&self, level: Level, label: &str, bytes: &[u8], style: HexStyle) {
        if self.policy.should_emit(level) {
            let dump = format_hex(bytes, style);
            self.log_at(level, SourceLocation::caller(), &format!("{label}{dump}"));
        }
    }

    /// Logs `label` followed by a binary dump of `bytes`.
    #[track_caller]
    pub fn bin(&self, level: Level, label: &str, bytes: &[u8]) {
        if self.policy.should_emit(level) {
            let dump = format_bin(bytes);
            self.log_at(level, SourceLocation::caller(), &format!("{label}{dump}"));
        }
    }

    /// Traced as `file:line`. Use `clog_trace!` for `file:function:line`.
    #[track_caller]
    pub fn trace(&self, msg: &str) {
        self.log(Level::Trace, msg);
    }

    /// Traced as `file:line`. Use `clog_debug!` for `file:function:line`.
    #[track_caller]
    pub fn debug(&self, msg: &str) {
        self.log(Level::Debug, msg);
    }

    #[track_caller]
    pub fn extra(&self, msg: &str) {
        self.log(Level::Extra, msg);
    }

    #[track_caller]
    pub fn info(&self, msg: &str) {
        self.log(Level::Info, msg);
    }

    #[track_caller]
    pub fn header(&self, msg: &str) {
        self.log(Level::Header, msg);
    }

    #[track_caller]
    pub fn success(&self, msg: &str) {
        self.log(Level::Success, msg);
    }

    #[track_caller]
    pub fn money(&self, msg: &str) {
        self.log(Level::Money, msg);
    }

    #[track_caller]
    pub fn input(&self, msg: &str) {
        self.log(Level::Input, msg);
    }

    #[track_caller]
    pub fn warning(&self, msg: &str) {
        self.log(Level::Warning, msg);
    }

    #[track_caller]
    pub fn error(&self, msg: &str) {
        self.log(Level::Error, msg);
    }

    #[track_caller]
    pub fn critical(&self, msg: &str) {
        self.log(Level::Critical, msg);
    }

    #[track_caller]
    pub fn fatal(&self, msg: &str) {
        self.log(Level::Fatal, msg);
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
