//! Configuration struct definitions.

use serde::Deserialize;

/// Threshold, sinks, and the crate's own diagnostics.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// none, critical, error, warning, info, extra, debug, all.
    pub verbosity: String,
    /// none, console, file, both.
    pub mode: String,
    /// Verbosity of clog's own diagnostics on stderr.
    pub diagnostics: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            verbosity: "info".to_string(),
            mode: "console".to_string(),
            diagnostics: "warning".to_string(),
        }
    }
}

/// Console sink configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Enable ANSI colors.
    pub colors: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { colors: true }
    }
}

/// File sink configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    /// Log file path; `~` is expanded. Unset means `<calling source stem>.log`.
    pub path: Option<String>,
}

/// Line decoration configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Symbol style (none, words, letters, onechar, threechar, emoji, default).
    pub symbols: String,
    /// Disable to drop the timestamp and header separator.
    pub timestamps: bool,
    /// strftime format.
    pub timestamp_format: String,
    /// Render timestamps in UTC instead of local time.
    pub utc: bool,
    pub header_separator: String,
    /// Source `file:function:line` decoration.
    pub tracing: bool,
    pub tracing_separator: String,
    /// Levels that get source decoration; unset keeps the defaults.
    pub trace_levels: Option<Vec<String>>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            symbols: "default".to_string(),
            timestamps: true,
            timestamp_format: crate::fmt::timestamp::DEFAULT_FORMAT.to_string(),
            utc: false,
            header_separator: " | ".to_string(),
            tracing: true,
            tracing_separator: ":".to_string(),
            trace_levels: None,
        }
    }
}
