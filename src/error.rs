//! Unified error type for all clog operations.

use std::path::PathBuf;

/// Error type for clog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error while writing to a sink.
    Io(std::io::Error),
    /// The file sink could not be opened.
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Cyclic include detected in config sources.
    CyclicInclude(PathBuf),
    /// Unknown call level string.
    InvalidLevel(String),
    /// Unknown verbosity string.
    InvalidVerbosity(String),
    /// Unknown sink mode string.
    InvalidMode(String),
    /// Unknown symbol style string.
    InvalidSymbolStyle(String),
    /// Color override that is not `#RRGGBB`.
    InvalidColor(String),
    /// strftime format chrono cannot render.
    InvalidTimestampFormat(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::FileOpen { path, source } => {
                write!(f, "cannot open log file {}: {source}", path.display())
            }
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::CyclicInclude(p) => write!(f, "cyclic include: {}", p.display()),
            Self::InvalidLevel(s) => write!(f, "invalid level: {s}"),
            Self::InvalidVerbosity(s) => write!(f, "invalid verbosity: {s}"),
            Self::InvalidMode(s) => write!(f, "invalid sink mode: {s}"),
            Self::InvalidSymbolStyle(s) => write!(f, "invalid symbol style: {s}"),
            Self::InvalidColor(s) => write!(f, "invalid color: {s}"),
            Self::InvalidTimestampFormat(s) => write!(f, "invalid timestamp format: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::FileOpen { source: e, .. } => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
