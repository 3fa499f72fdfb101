//! Hex and binary dumps of byte buffers for inline logging.

use std::fmt::Write;

/// How bytes are laid out in a hex dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexStyle {
    /// `deadbeef`
    #[default]
    Compact,
    /// `0xde 0xad 0xbe 0xef`
    Wide,
}

/// Lowercase two-digit hex per byte. Compact output is exactly `2 * bytes.len()`
/// characters; wide output is `bytes.len()` tokens of `0xHH` joined by single spaces.
#[must_use]
pub fn format_hex(bytes: &[u8], style: HexStyle) -> String {
    let per_byte = match style {
        HexStyle::Compact => 2,
        HexStyle::Wide => 5,
    };
    let mut out = String::with_capacity(bytes.len() * per_byte);

    for (i, byte) in bytes.iter().enumerate() {
        match style {
            HexStyle::Compact => {
                let _ = write!(out, "{byte:02x}");
            }
            HexStyle::Wide => {
                if i > 0 {
                    out.push(' ');
                }
                let _ = write!(out, "0x{byte:02x}");
            }
        }
    }

    out
}

/// Eight binary digits per byte, most significant bit first, bytes joined by single spaces.
#[must_use]
pub fn format_bin(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 9);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{byte:08b}");
    }
    out
}
