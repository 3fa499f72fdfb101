//! Stepwise construction of a `Logger`, with sub-builders for the console and file sinks.

use super::Logger;
use crate::fmt::{Color, SymbolSet, SymbolStyle};
use crate::level::{Level, Verbosity};
use crate::output::{Capture, ConsoleTarget, FileOutput, Output, TerminalOutput};
use crate::policy::{Policy, SinkMode};
use std::path::{Path, PathBuf};

pub struct LoggerBuilder {
    pub(super) policy: Policy,
    /// `None` until set; inferred from the configured sinks at build time.
    mode: Option<SinkMode>,
    console_configured: bool,
    console_target: ConsoleTarget,
    file_path: Option<PathBuf>,
    default_file: PathBuf,
    outputs: Vec<Box<dyn Output>>,
}

impl Default for LoggerBuilder {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    #[must_use]
    #[track_caller]
    pub fn new() -> Self {
        let caller = std::panic::Location::caller().file();
        Self {
            policy: Policy::default(),
            mode: None,
            console_configured: false,
            console_target: ConsoleTarget::Std,
            file_path: None,
            default_file: default_file_for(caller),
            outputs: Vec::new(),
        }
    }

    /// Replaces every policy field at once. An explicit `mode` call still wins.
    #[must_use]
    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub const fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.policy.verbosity = verbosity;
        self
    }

    /// Without this the mode follows the sinks configured: both, file only, or console.
    #[must_use]
    pub const fn mode(mut self, mode: SinkMode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn symbols(mut self, style: SymbolStyle) -> Self {
        self.policy.symbols = SymbolSet::new(style);
        self
    }

    /// Overrides one level's symbol on top of the style.
    #[must_use]
    pub fn symbol(mut self, level: Level, symbol: impl Into<String>) -> Self {
        self.policy.symbols.set(level, symbol);
        self
    }

    #[must_use]
    pub fn level_color(mut self, level: Level, color: Color) -> Self {
        self.policy.colors.insert(level, color);
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.policy.timestamp_format = Some(format.into());
        self
    }

    #[must_use]
    pub fn no_timestamp(mut self) -> Self {
        self.policy.timestamp_format = None;
        self
    }

    #[must_use]
    pub const fn utc(mut self, utc: bool) -> Self {
        self.policy.utc = utc;
        self
    }

    #[must_use]
    pub const fn tracing(mut self, enabled: bool) -> Self {
        self.policy.tracing = enabled;
        self
    }

    /// Replaces the default trace-worthy set.
    #[must_use]
    pub fn trace_levels(mut self, levels: impl IntoIterator<Item = Level>) -> Self {
        self.policy.trace_levels = Some(levels.into_iter().collect());
        self
    }

    #[must_use]
    pub fn header_separator(mut self, separator: impl Into<String>) -> Self {
        self.policy.header_separator = separator.into();
        self
    }

    #[must_use]
    pub fn tracing_separator(mut self, separator: impl Into<String>) -> Self {
        self.policy.tracing_separator = separator.into();
        self
    }

    #[must_use]
    pub const fn console(self) -> ConsoleBuilder {
        ConsoleBuilder { parent: self }
    }

    #[must_use]
    pub const fn file(self) -> FileBuilder {
        FileBuilder { parent: self }
    }

    /// Adds a custom backend. It is dropped at build time if its sink is not selected.
    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.outputs.push(Box::new(output));
        self
    }

    /// Only the sinks the mode selects are constructed.
    #[must_use]
    pub fn build(self) -> Logger {
        let mut policy = self.policy;
        let inferred = match (self.console_configured, self.file_path.is_some()) {
            (true, true) => SinkMode::Both,
            (false, true) => SinkMode::File,
            _ => policy.mode,
        };
        policy.mode = self.mode.unwrap_or(inferred);

        let sinks = policy.resolve_sinks();
        let mut outputs: Vec<Box<dyn Output>> = Vec::new();
        let mut file_path = None;

        if sinks.contains(crate::policy::Sink::Console) {
            outputs.push(Box::new(
                TerminalOutput::new()
                    .colors(policy.console_color)
                    .target(self.console_target),
            ));
        }
        if sinks.contains(crate::policy::Sink::File) {
            let path = self.file_path.unwrap_or(self.default_file);
            file_path = Some(path.clone());
            outputs.push(Box::new(FileOutput::new(path)));
        }
        outputs.extend(
            self.outputs
                .into_iter()
                .filter(|output| sinks.contains(output.sink())),
        );

        Logger {
            policy,
            outputs,
            file_path,
        }
    }
}

/// `src/main.rs` logs to `main.log` in the working directory.
fn default_file_for(source_file: &str) -> PathBuf {
    let stem = Path::new(source_file)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("clog");
    PathBuf::from(format!("{stem}.log"))
}

pub struct ConsoleBuilder {
    parent: LoggerBuilder,
}

impl ConsoleBuilder {
    /// Piped output and color-incapable terminals break on ANSI escape codes.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.parent.policy.console_color = enabled;
        self
    }

    /// Sends console lines to in-memory buffers instead of the process streams.
    #[must_use]
    pub fn capture(mut self, capture: &Capture) -> Self {
        self.parent.console_target = ConsoleTarget::Capture(capture.clone());
        self
    }

    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.console_configured = true;
        self.parent
    }
}

pub struct FileBuilder {
    parent: LoggerBuilder,
}

impl FileBuilder {
    /// `~` is expanded to the home directory.
    #[must_use]
    pub fn path(mut self, path: impl AsRef<str>) -> Self {
        let expanded = shellexpand::tilde(path.as_ref());
        self.parent.file_path = Some(PathBuf::from(expanded.into_owned()));
        self
    }

    /// Keeps the path derived from the calling source file.
    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        if self.parent.file_path.is_none() {
            self.parent.file_path = Some(self.parent.default_file.clone());
        }
        self.parent
    }
}
