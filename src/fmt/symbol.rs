//! Per-level symbols. Not every terminal renders emoji or box-drawing glyphs, so
//! the style is a choice and every entry can be overridden.

use crate::level::Level;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Built-in symbol tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SymbolStyle {
    /// No symbol at all; lines start with the message.
    None,
    /// Full uppercase level names (`WARNING`).
    Words,
    /// A single letter per level.
    Letters,
    /// One ASCII punctuation character.
    OneChar,
    /// Bracketed ASCII (`[!]`), safe everywhere.
    ThreeChar,
    Emoji,
    /// Unicode glyphs that render in most modern terminals.
    #[default]
    Default,
}

impl SymbolStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Words => "words",
            Self::Letters => "letters",
            Self::OneChar => "onechar",
            Self::ThreeChar => "threechar",
            Self::Emoji => "emoji",
            Self::Default => "default",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::None,
            Self::Words,
            Self::Letters,
            Self::OneChar,
            Self::ThreeChar,
            Self::Emoji,
            Self::Default,
        ]
    }

    /// The built-in symbol for `level` in this style.
    #[must_use]
    pub const fn symbol(self, level: Level) -> &'static str {
        match self {
            Self::None => "",
            Self::Words => match level {
                Level::Trace => "TRACE",
                Level::Debug => "DEBUG",
                Level::Extra => "EXTRA",
                Level::Info => "INFO",
                Level::Header => "HEADER",
                Level::Success => "SUCCESS",
                Level::Money => "MONEY",
                Level::Input => "INPUT",
                Level::Warning => "WARNING",
                Level::Error => "ERROR",
                Level::Critical => "CRITICAL",
                Level::Fatal => "FATAL",
            },
            Self::Letters => match level {
                Level::Trace => "T",
                Level::Debug => "D",
                Level::Extra => "X",
                Level::Info => "I",
                Level::Header => "H",
                Level::Success => "S",
                Level::Money => "M",
                Level::Input => "N",
                Level::Warning => "W",
                Level::Error => "E",
                Level::Critical => "C",
                Level::Fatal => "F",
            },
            Self::OneChar => match level {
                Level::Trace => "~",
                Level::Debug => "?",
                Level::Extra => "+",
                Level::Info => "i",
                Level::Header => "=",
                Level::Success => "*",
                Level::Money => "$",
                Level::Input => ">",
                Level::Warning => "!",
                Level::Error => "x",
                Level::Critical => "X",
                Level::Fatal => "#",
            },
            Self::ThreeChar => match level {
                Level::Trace => "[~]",
                Level::Debug => "[?]",
                Level::Extra => "[+]",
                Level::Info => "[i]",
                Level::Header => "[=]",
                Level::Success => "[*]",
                Level::Money => "[$]",
                Level::Input => "[>]",
                Level::Warning => "[!]",
                Level::Error => "[x]",
                Level::Critical => "[X]",
                Level::Fatal => "[#]",
            },
            Self::Emoji => match level {
                Level::Trace => "\u{1f50d}",
                Level::Debug => "\u{1f41b}",
                Level::Extra => "\u{2795}",
                Level::Info => "\u{2139}\u{fe0f}",
                Level::Header => "\u{1f4cc}",
                Level::Success => "\u{2705}",
                Level::Money => "\u{1f4b0}",
                Level::Input => "\u{2328}\u{fe0f}",
                Level::Warning => "\u{26a0}\u{fe0f}",
                Level::Error => "\u{274c}",
                Level::Critical => "\u{1f525}",
                Level::Fatal => "\u{1f480}",
            },
            Self::Default => match level {
                Level::Trace => "\u{00b7}",
                Level::Debug => "\u{2022}",
                Level::Extra => "+",
                Level::Info => "\u{2139}",
                Level::Header => "\u{00bb}",
                Level::Success => "\u{2714}",
                Level::Money => "$",
                Level::Input => "\u{203a}",
                Level::Warning => "\u{26a0}",
                Level::Error => "\u{2716}",
                Level::Critical => "\u{203c}",
                Level::Fatal => "\u{2620}",
            },
        }
    }
}

impl fmt::Display for SymbolStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSymbolStyleError(String);

impl fmt::Display for ParseSymbolStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown symbol style: '{}'", self.0)
    }
}

impl std::error::Error for ParseSymbolStyleError {}

impl FromStr for SymbolStyle {
    type Err = ParseSymbolStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "none" => Ok(Self::None),
            "words" => Ok(Self::Words),
            "letters" => Ok(Self::Letters),
            "onechar" | "1char" => Ok(Self::OneChar),
            "threechar" | "3char" => Ok(Self::ThreeChar),
            "emoji" => Ok(Self::Emoji),
            "default" => Ok(Self::Default),
            _ => Err(ParseSymbolStyleError(s.to_string())),
        }
    }
}

/// A style plus explicit per-level overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolSet {
    style: SymbolStyle,
    overrides: HashMap<Level, String>,
}

impl SymbolSet {
    #[must_use]
    pub fn new(style: SymbolStyle) -> Self {
        Self {
            style,
            overrides: HashMap::new(),
        }
    }

    /// Overrides win over the style table.
    #[must_use]
    pub fn get(&self, level: Level) -> &str {
        self.overrides
            .get(&level)
            .map_or_else(|| self.style.symbol(level), String::as_str)
    }

    pub fn set(&mut self, level: Level, symbol: impl Into<String>) {
        self.overrides.insert(level, symbol.into());
    }

    #[must_use]
    pub const fn style(&self) -> SymbolStyle {
        self.style
    }
}

impl From<SymbolStyle> for SymbolSet {
    fn from(style: SymbolStyle) -> Self {
        Self::new(style)
    }
}
