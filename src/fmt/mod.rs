//! Pieces of line decoration: colors, symbols, timestamps, and byte dumps.

mod color;
pub mod hex;
mod symbol;
pub mod timestamp;

pub use color::{Color, colorize};
pub use hex::{HexStyle, format_bin, format_hex};
pub use symbol::{ParseSymbolStyleError, SymbolSet, SymbolStyle};
