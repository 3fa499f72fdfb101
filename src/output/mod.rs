//! Sinks a decorated line can be written to. The console and file backends are
//! built in; the `Output` trait lets callers add their own.

mod file;
mod terminal;

pub use file::FileOutput;
pub use terminal::{Capture, ConsoleTarget, TerminalOutput};

use crate::level::Level;
use crate::policy::{DecoratedLine, Sink};
use chrono::{DateTime, Utc};
use std::fmt;

/// Where a call was made from. Rendered as the trace decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub file: &'static str,
    /// Empty when the caller's function is unknown (plain method calls, not macros).
    pub function: &'static str,
    pub line: u32,
}

impl SourceLocation {
    #[must_use]
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }

    /// File and line of the nearest caller without `#[track_caller]`. The function is
    /// unknown here; `here!()` fills it in at macro call sites.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let location = std::panic::Location::caller();
        Self::new(location.file(), "", location.line())
    }

    /// Empty for records with no source, such as lines from the command line.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        self.file.is_empty()
    }

    /// `file<sep>function<sep>line`, leaving out an unknown function.
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        if self.function.is_empty() {
            format!("{}{separator}{}", self.file, self.line)
        } else {
            format!(
                "{}{separator}{}{separator}{}",
                self.file, self.function, self.line
            )
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(":"))
    }
}

/// Console stream a record is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stream {
    /// Log-style calls.
    #[default]
    Stderr,
    /// Print-style calls.
    Stdout,
}

/// Everything known about one call. Lives only as long as the call.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
    pub location: SourceLocation,
    pub timestamp: DateTime<Utc>,
    pub stream: Stream,
    /// `false` for inline writes that leave the line open.
    pub newline: bool,
}

impl LogRecord {
    /// Timestamped now, bound for stderr, newline-terminated.
    #[must_use]
    pub fn new(level: Level, message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            level,
            message: message.into(),
            location,
            timestamp: Utc::now(),
            stream: Stream::Stderr,
            newline: true,
        }
    }

    #[must_use]
    pub const fn to_stdout(mut self) -> Self {
        self.stream = Stream::Stdout;
        self
    }

    #[must_use]
    pub const fn inline(mut self) -> Self {
        self.newline = false;
        self
    }

    #[must_use]
    pub const fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// `Send + Sync` so one `Logger` can be shared across threads. Implementations must
/// write each line with a single call under their own lock.
pub trait Output: Send + Sync {
    /// Which sink this backend stands for. Backends whose sink the policy does not
    /// select are never constructed into a `Logger`.
    fn sink(&self) -> Sink;

    /// Writes one decorated line.
    ///
    /// # Errors
    /// I/O errors from the underlying stream, or `Error::FileOpen` when a lazily
    /// opened destination cannot be opened.
    fn write(&self, line: &DecoratedLine, record: &LogRecord) -> Result<(), crate::Error>;

    /// Acquires the destination ahead of the first write.
    ///
    /// # Errors
    /// Returns the open failure.
    fn open(&self) -> Result<(), crate::Error> {
        Ok(())
    }

    /// Releases the destination. A later write may acquire it again.
    ///
    /// # Errors
    /// I/O errors from the final flush.
    fn close(&self) -> Result<(), crate::Error> {
        self.flush()
    }

    /// # Errors
    /// I/O errors from the underlying stream.
    fn flush(&self) -> Result<(), crate::Error>;
}
