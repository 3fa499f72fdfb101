//! Console sink: stderr for log-style calls, stdout for print-style calls.

use super::{LogRecord, Output, Stream};
use crate::policy::{DecoratedLine, Sink};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// In-memory stand-ins for stderr and stdout. Clones share the same buffers.
#[derive(Debug, Clone, Default)]
pub struct Capture {
    stderr: Arc<Mutex<Vec<u8>>>,
    stdout: Arc<Mutex<Vec<u8>>>,
}

impl Capture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written to the stderr buffer so far.
    #[must_use]
    pub fn stderr(&self) -> String {
        Self::read(&self.stderr)
    }

    /// Everything written to the stdout buffer so far.
    #[must_use]
    pub fn stdout(&self) -> String {
        Self::read(&self.stdout)
    }

    pub fn clear(&self) {
        self.stderr
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.stdout
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn read(buffer: &Mutex<Vec<u8>>) -> String {
        let bytes = buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    fn append(&self, stream: Stream, text: &str) {
        let buffer = match stream {
            Stream::Stderr => &self.stderr,
            Stream::Stdout => &self.stdout,
        };
        buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(text.as_bytes());
    }
}

/// Where console lines actually go.
#[derive(Debug, Clone, Default)]
pub enum ConsoleTarget {
    /// The process's stderr and stdout.
    #[default]
    Std,
    Capture(Capture),
}

#[derive(Debug, Clone)]
pub struct TerminalOutput {
    /// Piped output and CI environments can't render ANSI escape codes.
    colors_enabled: bool,
    target: ConsoleTarget,
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalOutput {
    /// Colored, writing to the real console.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            colors_enabled: true,
            target: ConsoleTarget::Std,
        }
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    #[must_use]
    pub fn target(mut self, target: ConsoleTarget) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub const fn colors_enabled(&self) -> bool {
        self.colors_enabled
    }
}

impl Output for TerminalOutput {
    fn sink(&self) -> Sink {
        Sink::Console
    }

    fn write(&self, line: &DecoratedLine, record: &LogRecord) -> Result<(), crate::Error> {
        let mut text = line.render(self.colors_enabled);
        if record.newline {
            text.push('\n');
        }

        match &self.target {
            ConsoleTarget::Capture(capture) => capture.append(record.stream, &text),
            ConsoleTarget::Std => match record.stream {
                Stream::Stderr => {
                    let mut handle = io::stderr().lock();
                    handle.write_all(text.as_bytes())?;
                }
                Stream::Stdout => {
                    let mut handle = io::stdout().lock();
                    handle.write_all(text.as_bytes())?;
                    // stdout is line buffered; an open line would otherwise sit there
                    if !record.newline {
                        handle.flush()?;
                    }
                }
            },
        }

        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        if matches!(self.target, ConsoleTarget::Std) {
            io::stdout().flush()?;
            io::stderr().flush()?;
        }
        Ok(())
    }
}
