//! The logging policy: given a call's level and the configured policy, decides whether
//! anything is written, to which sinks, and with which decoration.
//!
//! Everything here is a pure function of the `Policy` value, so the whole gating table
//! can be tested without touching a stream.

use crate::fmt::{Color, SymbolSet, SymbolStyle, colorize, timestamp};
use crate::level::{Level, Verbosity};
use crate::output::LogRecord;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// Which sinks receive output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SinkMode {
    None,
    #[default]
    Console,
    File,
    Both,
}

impl SinkMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Console => "console",
            Self::File => "file",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for SinkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SinkMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "none" | "off" => Ok(Self::None),
            "console" | "terminal" => Ok(Self::Console),
            "file" => Ok(Self::File),
            "both" | "consoleandfile" | "all" => Ok(Self::Both),
            _ => Err(crate::Error::InvalidMode(s.to_string())),
        }
    }
}

/// A single output destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sink {
    Console,
    File,
}

/// The sinks selected by a `SinkMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SinkSet {
    console: bool,
    file: bool,
}

impl SinkSet {
    #[must_use]
    pub const fn contains(self, sink: Sink) -> bool {
        match sink {
            Sink::Console => self.console,
            Sink::File => self.file,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        !self.console && !self.file
    }

    pub fn iter(self) -> impl Iterator<Item = Sink> {
        [Sink::Console, Sink::File]
            .into_iter()
            .filter(move |sink| self.contains(*sink))
    }
}

impl From<SinkMode> for SinkSet {
    fn from(mode: SinkMode) -> Self {
        match mode {
            SinkMode::None => Self::default(),
            SinkMode::Console => Self {
                console: true,
                file: false,
            },
            SinkMode::File => Self {
                console: false,
                file: true,
            },
            SinkMode::Both => Self {
                console: true,
                file: true,
            },
        }
    }
}

/// Typed logging configuration. Fixed once a `Logger` is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    pub verbosity: Verbosity,
    pub mode: SinkMode,
    /// Wrap console lines in the level's color. File lines are never colored.
    pub console_color: bool,
    pub symbols: SymbolSet,
    /// Per-level color overrides on top of `Color::for_level`.
    pub colors: HashMap<Level, Color>,
    /// strftime format; `None` disables the timestamp and its separator.
    pub timestamp_format: Option<String>,
    pub utc: bool,
    pub tracing: bool,
    /// Levels that get source decoration; `None` means `Level::is_trace_worthy`.
    pub trace_levels: Option<HashSet<Level>>,
    pub header_separator: String,
    pub tracing_separator: String,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            mode: SinkMode::default(),
            console_color: true,
            symbols: SymbolSet::new(SymbolStyle::Default),
            colors: HashMap::new(),
            timestamp_format: Some(timestamp::DEFAULT_FORMAT.to_string()),
            utc: false,
            tracing: true,
            trace_levels: None,
            header_separator: " | ".to_string(),
            tracing_separator: ":".to_string(),
        }
    }
}

impl Policy {
    /// Whether a call at `level` passes the verbosity threshold.
    #[must_use]
    pub const fn should_emit(&self, level: Level) -> bool {
        self.verbosity.admits(level)
    }

    #[must_use]
    pub fn resolve_sinks(&self) -> SinkSet {
        SinkSet::from(self.mode)
    }

    #[must_use]
    pub fn color(&self, level: Level) -> Color {
        self.colors
            .get(&level)
            .copied()
            .unwrap_or_else(|| Color::for_level(level))
    }

    /// Whether `level` carries `file:function:line` decoration.
    #[must_use]
    pub fn traces(&self, level: Level) -> bool {
        self.tracing
            && self
                .trace_levels
                .as_ref()
                .map_or_else(|| level.is_trace_worthy(), |set| set.contains(&level))
    }

    /// Builds the decoration for one record. Coloring is left to the sink. A record
    /// without a source location gets no trace.
    #[must_use]
    pub fn decorate(&self, record: &LogRecord) -> DecoratedLine {
        let timestamp = self
            .timestamp_format
            .as_deref()
            .map(|format| timestamp::render(record.timestamp, format, self.utc));

        let trace = (self.traces(record.level) && !record.location.is_unknown())
            .then(|| record.location.join(&self.tracing_separator));

        DecoratedLine {
            timestamp,
            header_separator: self.header_separator.clone(),
            symbol: self.symbols.get(record.level).to_string(),
            trace,
            tracing_separator: self.tracing_separator.clone(),
            message: record.message.clone(),
            color: self.color(record.level),
        }
    }
}

/// A record with its decoration resolved, ready to render for a particular sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratedLine {
    pub timestamp: Option<String>,
    pub header_separator: String,
    pub symbol: String,
    /// Source location already joined with the tracing separator.
    pub trace: Option<String>,
    pub tracing_separator: String,
    pub message: String,
    pub color: Color,
}

impl DecoratedLine {
    /// `[ts sep][symbol ][trace sep ]message`, with everything after the header
    /// wrapped in the level color when `colored`. No trailing newline.
    #[must_use]
    pub fn render(&self, colored: bool) -> String {
        let mut out = String::new();
        if let Some(ts) = &self.timestamp {
            out.push_str(ts);
            out.push_str(&self.header_separator);
        }

        let mut body = String::with_capacity(self.message.len() + 32);
        if !self.symbol.is_empty() {
            body.push_str(&self.symbol);
            body.push(' ');
        }
        if let Some(trace) = &self.trace {
            body.push_str(trace);
            body.push_str(&self.tracing_separator);
            body.push(' ');
        }
        body.push_str(&self.message);

        if colored {
            out.push_str(&colorize(&body, self.color));
        } else {
            out.push_str(&body);
        }
        out
    }
}
