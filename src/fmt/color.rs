//! 24-bit ANSI colors for console decoration.

use crate::level::Level;
use std::fmt;

/// A dedicated type prevents mixing up raw u8 triples and documents color intent at the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` (leading `#` optional). Returns `None` on malformed input so
    /// config validation can report the offending value.
    #[must_use]
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self { r, g, b })
    }

    /// Lenient variant of [`Color::parse_hex`]: a typo in config falls back to white
    /// instead of breaking rendering.
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        Self::parse_hex(hex).unwrap_or_else(Self::white)
    }

    /// The `\x1b[38;2;R;G;Bm` foreground escape.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// Terminates any active SGR styling.
    pub const RESET: &'static str = "\x1b[0m";

    /// Default palette entry for each level.
    #[must_use]
    pub const fn for_level(level: Level) -> Self {
        match level {
            Level::Trace => Self::grey(),
            Level::Debug => Self::purple(),
            Level::Extra => Self::blue(),
            Level::Info => Self::cyan(),
            Level::Header => Self::pink(),
            Level::Success => Self::green(),
            Level::Money => Self::gold(),
            Level::Input => Self::orange(),
            Level::Warning => Self::yellow(),
            Level::Error => Self::red(),
            Level::Critical => Self::crimson(),
            Level::Fatal => Self::magenta(),
        }
    }

    #[must_use]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    #[must_use]
    pub const fn grey() -> Self {
        Self::new(128, 128, 128)
    }

    #[must_use]
    pub const fn green() -> Self {
        Self::new(80, 250, 123)
    }

    #[must_use]
    pub const fn yellow() -> Self {
        Self::new(241, 250, 140)
    }

    #[must_use]
    pub const fn gold() -> Self {
        Self::new(255, 215, 0)
    }

    #[must_use]
    pub const fn cyan() -> Self {
        Self::new(139, 233, 253)
    }

    #[must_use]
    pub const fn red() -> Self {
        Self::new(255, 85, 85)
    }

    #[must_use]
    pub const fn crimson() -> Self {
        Self::new(220, 20, 60)
    }

    #[must_use]
    pub const fn magenta() -> Self {
        Self::new(255, 0, 255)
    }

    #[must_use]
    pub const fn purple() -> Self {
        Self::new(189, 147, 249)
    }

    #[must_use]
    pub const fn pink() -> Self {
        Self::new(255, 121, 198)
    }

    #[must_use]
    pub const fn orange() -> Self {
        Self::new(255, 184, 108)
    }

    #[must_use]
    pub const fn blue() -> Self {
        Self::new(98, 114, 164)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Wraps `text` in the color's escape and a reset.
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    let fg = color.fg_ansi();
    let reset = Color::RESET;
    format!("{fg}{text}{reset}")
}
