//! Severity levels of individual calls and the verbosity threshold that gates them.

use std::fmt;
use std::str::FromStr;

/// The level a single call is made at. Also selects the default color and symbol.
///
/// Declaration order is least to most severe; use [`Level::rank`] for gating, since
/// several levels share one rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// High-volume instrumentation, only visible at `Verbosity::All`.
    Trace,
    /// Development diagnostics.
    Debug,
    /// Chatty detail above debug but below normal operation.
    Extra,
    /// Normal operational milestones.
    #[default]
    Info,
    /// Section headers in human-facing output.
    Header,
    /// A completed operation worth celebrating.
    Success,
    /// Amounts, prices, balances.
    Money,
    /// Prompts and echoed user input.
    Input,
    /// Non-fatal anomalies.
    Warning,
    /// Failures of a single operation.
    Error,
    /// Failures that leave the program degraded.
    Critical,
    /// Failures the program cannot continue after.
    Fatal,
}

impl Level {
    /// Lowercase because config files and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Extra => "extra",
            Self::Info => "info",
            Self::Header => "header",
            Self::Success => "success",
            Self::Money => "money",
            Self::Input => "input",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
            Self::Fatal => "fatal",
        }
    }

    /// Severity rank, 1 being the most severe. A call is emitted when its rank is
    /// not greater than the configured [`Verbosity::rank`].
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Fatal | Self::Critical => 1,
            Self::Error => 2,
            Self::Warning => 3,
            Self::Info | Self::Header | Self::Success | Self::Money | Self::Input => 4,
            Self::Extra => 5,
            Self::Debug => 6,
            Self::Trace => 7,
        }
    }

    /// Levels that carry `file:function:line` decoration unless the policy overrides the set.
    #[must_use]
    pub const fn is_trace_worthy(self) -> bool {
        matches!(
            self,
            Self::Trace | Self::Debug | Self::Error | Self::Critical | Self::Fatal
        )
    }

    /// Used by help output, the demo command, and tests.
    #[must_use]
    pub const fn all() -> [Self; 12] {
        [
            Self::Trace,
            Self::Debug,
            Self::Extra,
            Self::Info,
            Self::Header,
            Self::Success,
            Self::Money,
            Self::Input,
            Self::Warning,
            Self::Error,
            Self::Critical,
            Self::Fatal,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "extra" => Ok(Self::Extra),
            "info" => Ok(Self::Info),
            "header" => Ok(Self::Header),
            "success" | "ok" => Ok(Self::Success),
            "money" => Ok(Self::Money),
            "input" => Ok(Self::Input),
            "warning" | "warn" => Ok(Self::Warning),
            "error" | "err" => Ok(Self::Error),
            "critical" | "crit" => Ok(Self::Critical),
            "fatal" => Ok(Self::Fatal),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// The configured threshold. Each step admits everything the previous one did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Verbosity {
    /// Nothing is emitted.
    None,
    /// Fatal and Critical only.
    Critical,
    /// Adds Error.
    Error,
    /// Adds Warning.
    Warning,
    /// Adds Info, Header, Success, Money and Input.
    #[default]
    Info,
    /// Adds Extra.
    Extra,
    /// Adds Debug.
    Debug,
    /// Adds Trace.
    All,
}

impl Verbosity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Critical => "critical",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Extra => "extra",
            Self::Debug => "debug",
            Self::All => "all",
        }
    }

    /// 0 admits nothing; 7 admits every level.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Critical => 1,
            Self::Error => 2,
            Self::Warning => 3,
            Self::Info => 4,
            Self::Extra => 5,
            Self::Debug => 6,
            Self::All => 7,
        }
    }

    /// Whether a call at `level` passes this threshold.
    #[must_use]
    pub const fn admits(self, level: Level) -> bool {
        level.rank() <= self.rank()
    }

    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::None,
            Self::Critical,
            Self::Error,
            Self::Warning,
            Self::Info,
            Self::Extra,
            Self::Debug,
            Self::All,
        ]
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVerbosityError(String);

impl fmt::Display for ParseVerbosityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown verbosity: '{}'", self.0)
    }
}

impl std::error::Error for ParseVerbosityError {}

impl FromStr for Verbosity {
    type Err = ParseVerbosityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "critical" | "crit" => Ok(Self::Critical),
            "error" | "err" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            "extra" => Ok(Self::Extra),
            "debug" => Ok(Self::Debug),
            "all" | "trace" => Ok(Self::All),
            _ => Err(ParseVerbosityError(s.to_string())),
        }
    }
}
