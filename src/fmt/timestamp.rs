//! strftime rendering for line headers.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};
use std::fmt::Write;

/// Matches the file sink layout most log tooling expects.
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// chrono only reports a bad specifier while rendering, which would panic in `to_string`,
/// so formats are checked up front.
#[must_use]
pub fn is_valid_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Renders `at` with `format`, in UTC or local time. An unrenderable format yields
/// RFC 3339 instead of failing the log call.
#[must_use]
pub fn render(at: DateTime<Utc>, format: &str, utc: bool) -> String {
    let mut out = String::new();
    let written = if utc {
        write!(out, "{}", at.format(format))
    } else {
        write!(out, "{}", at.with_timezone(&Local).format(format))
    };

    if written.is_err() {
        out.clear();
        if utc {
            out.push_str(&at.to_rfc3339());
        } else {
            out.push_str(&at.with_timezone(&Local).to_rfc3339());
        }
    }
    out
}
