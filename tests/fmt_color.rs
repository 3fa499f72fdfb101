//! Color parsing and ANSI escapes.

use clog::fmt::{Color, colorize};
use clog::Level;

#[test]
fn parse_hex_valid_colors() {
    assert_eq!(Color::parse_hex("#ff00aa"), Some(Color::new(255, 0, 170)));
    assert_eq!(Color::parse_hex("01a2ff"), Some(Color::new(1, 162, 255)));
}

#[test]
fn parse_hex_rejects_malformed() {
    assert_eq!(Color::parse_hex("#fff"), None);
    assert_eq!(Color::parse_hex("zz00aa"), None);
}

#[test]
fn from_hex_falls_back_to_white() {
    assert_eq!(Color::from_hex("nope"), Color::white());
}

#[test]
fn ansi_sequence_matches_rgb() {
    assert_eq!(Color::new(10, 20, 30).fg_ansi(), "\x1b[38;2;10;20;30m");
}

#[test]
fn colorize_wraps_with_reset() {
    assert_eq!(colorize("hi", Color::new(1, 2, 3)), "\x1b[38;2;1;2;3mhi\x1b[0m");
}

#[test]
fn error_levels_have_distinct_colors() {
    let colors = [
        Color::for_level(Level::Error),
        Color::for_level(Level::Critical),
        Color::for_level(Level::Fatal),
        Color::for_level(Level::Warning),
    ];
    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn display_is_hex() {
    assert_eq!(Color::new(255, 0, 16).to_string(), "#ff0010");
}
