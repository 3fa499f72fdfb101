//! TOML configuration loading, `source = "..."` include resolution, and conversion into
//! a typed [`Policy`].
//!
//! Separated from struct definitions so that the loading logic (file I/O, cycle detection,
//! merge strategy) stays independent of the serde schema.

mod structs;

pub use structs::{ConsoleConfig, FileConfig, FormatConfig, GeneralConfig};

use crate::fmt::{Color, SymbolSet, SymbolStyle, timestamp};
use crate::internal;
use crate::level::{Level, Verbosity};
use crate::policy::{Policy, SinkMode};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// An empty file must still produce a working logger, so every field has a default.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub console: ConsoleConfig,
    pub file: FileConfig,
    pub format: FormatConfig,
    /// Per-level symbol overrides, keyed by level name.
    pub symbols: HashMap<String, String>,
    /// Per-level `#RRGGBB` color overrides, keyed by level name.
    pub colors: HashMap<String, String>,
}

/// Scans raw TOML for `source = "..."` directives before deserialization, since serde
/// cannot handle them. Returns the extracted paths and the remaining TOML content.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("source") && trimmed.contains('=') {
            if let Some(path) = trimmed
                .split('=')
                .nth(1)
                .map(|s| s.trim().trim_matches('"').trim_matches('\''))
                && !path.is_empty()
            {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

impl Config {
    /// Loads the user's config with all includes resolved; a missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let config_path = Self::get_config_path()?;
        let config = Self::load_with_sources(&config_path, &mut HashSet::new())?;
        internal::info(
            "CONFIG",
            &format!("Config loaded from {}", config_path.display()),
        );
        Ok(config)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or contains cyclic includes.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        Self::load_with_sources(path, &mut HashSet::new())
    }

    /// Parses a config from a string. `source` lines are ignored.
    ///
    /// # Errors
    /// TOML syntax or type errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        let (_, toml_content) = extract_sources(content);
        Ok(toml::from_str(&toml_content)?)
    }

    fn load_with_sources(path: &Path, seen: &mut HashSet<PathBuf>) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if !seen.insert(canonical.clone()) {
            internal::warn(
                "CONFIG",
                &format!("Cyclic include detected: {}", canonical.display()),
            );
            return Err(crate::Error::CyclicInclude(canonical));
        }

        let content = fs::read_to_string(path)?;
        let (sources, toml_content) = extract_sources(&content);
        let mut config: Self = toml::from_str(&toml_content)?;

        for source_path in sources {
            internal::debug("CONFIG", &format!("Processing source: {source_path}"));
            let expanded = shellexpand::tilde(&source_path);
            let source_file = Path::new(expanded.as_ref());
            if source_file.exists() {
                let source_config = Self::load_with_sources(source_file, seen)?;
                config.merge(source_config);
            } else {
                internal::warn("CONFIG", &format!("Source file not found: {source_path}"));
            }
        }

        Ok(config)
    }

    /// Folds an included config's maps into `self`; keys already present win.
    pub fn merge(&mut self, other: Self) {
        for (k, v) in other.symbols {
            self.symbols.entry(k).or_insert(v);
        }
        for (k, v) in other.colors {
            self.colors.entry(k).or_insert(v);
        }
    }

    /// `<config dir>/clog/clog.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("clog").join("clog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// # Errors
    /// `Error::InvalidVerbosity` for an unknown string.
    pub fn parse_verbosity(&self) -> Result<Verbosity, crate::Error> {
        self.general
            .verbosity
            .parse()
            .map_err(|_| crate::Error::InvalidVerbosity(self.general.verbosity.clone()))
    }

    /// Lenient: an unknown string falls back to `Warning` so diagnostics never block startup.
    #[must_use]
    pub fn parse_diagnostics(&self) -> Verbosity {
        self.general.diagnostics.parse().unwrap_or(Verbosity::Warning)
    }

    /// # Errors
    /// `Error::InvalidMode` for an unknown string.
    pub fn parse_mode(&self) -> Result<SinkMode, crate::Error> {
        self.general.mode.parse()
    }

    /// # Errors
    /// `Error::InvalidSymbolStyle` for an unknown string.
    pub fn parse_symbol_style(&self) -> Result<SymbolStyle, crate::Error> {
        self.format
            .symbols
            .parse()
            .map_err(|_| crate::Error::InvalidSymbolStyle(self.format.symbols.clone()))
    }

    fn parse_level_key(key: &str) -> Result<Level, crate::Error> {
        key.parse()
            .map_err(|_| crate::Error::InvalidLevel(key.to_string()))
    }

    /// Validates every string field and produces the typed policy.
    ///
    /// # Errors
    /// The first invalid verbosity, mode, symbol style, level key, color, or timestamp format.
    pub fn to_policy(&self) -> Result<Policy, crate::Error> {
        let mut symbols = SymbolSet::new(self.parse_symbol_style()?);
        for (key, symbol) in &self.symbols {
            symbols.set(Self::parse_level_key(key)?, symbol.clone());
        }

        let mut colors = HashMap::new();
        for (key, hex) in &self.colors {
            let color = Color::parse_hex(hex)
                .ok_or_else(|| crate::Error::InvalidColor(format!("{key} = {hex}")))?;
            colors.insert(Self::parse_level_key(key)?, color);
        }

        let timestamp_format = if self.format.timestamps {
            if !timestamp::is_valid_format(&self.format.timestamp_format) {
                return Err(crate::Error::InvalidTimestampFormat(
                    self.format.timestamp_format.clone(),
                ));
            }
            Some(self.format.timestamp_format.clone())
        } else {
            None
        };

        let trace_levels = self
            .format
            .trace_levels
            .as_ref()
            .map(|names| {
                names
                    .iter()
                    .map(|name| Self::parse_level_key(name))
                    .collect::<Result<HashSet<_>, _>>()
            })
            .transpose()?;

        Ok(Policy {
            verbosity: self.parse_verbosity()?,
            mode: self.parse_mode()?,
            console_color: self.console.colors,
            symbols,
            colors,
            timestamp_format,
            utc: self.format.utc,
            tracing: self.format.tracing,
            trace_levels,
            header_separator: self.format.header_separator.clone(),
            tracing_separator: self.format.tracing_separator.clone(),
        })
    }
}
