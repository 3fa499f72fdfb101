//! Call-site macros. They capture `file!()`, `line!()` and the enclosing function name
//! for the trace decoration, and skip formatting entirely when the level is gated out.
//!
//! ```
//! use clog::{Logger, Verbosity, clog_info, clog_warning};
//!
//! let logger = Logger::builder().verbosity(Verbosity::Warning).build();
//! clog_warning!(logger, "disk low: {}%", 93);
//! clog_info!(logger, "never formatted");
//! ```

/// Name of the enclosing function, without its module path.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __clog_here() {}
        fn __clog_type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::macros::trim_function_name(__clog_type_name_of(__clog_here))
    }};
}

/// The current `SourceLocation`.
#[macro_export]
macro_rules! here {
    () => {
        $crate::output::SourceLocation::new(::std::file!(), $crate::function_name!(), ::std::line!())
    };
}

/// Strips the marker item, closure frames, and module path from a `type_name` result.
#[doc(hidden)]
#[must_use]
pub fn trim_function_name(raw: &'static str) -> &'static str {
    let mut name = raw.strip_suffix("::__clog_here").unwrap_or(raw);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name.rsplit("::").next().unwrap_or(name)
}

/// `clog_log!(logger, level, "fmt", args...)`
#[macro_export]
macro_rules! clog_log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let __clog_logger = &$logger;
        let __clog_level = $level;
        if __clog_logger.enabled(__clog_level) {
            __clog_logger.log_at(__clog_level, $crate::here!(), &::std::format!($($arg)+));
        }
    }};
}

/// Like `clog_log!` without the trailing newline.
#[macro_export]
macro_rules! clog_inline {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let __clog_logger = &$logger;
        let __clog_level = $level;
        if __clog_logger.enabled(__clog_level) {
            let __clog_record = $crate::output::LogRecord::new(
                __clog_level,
                ::std::format!($($arg)+),
                $crate::here!(),
            )
            .inline();
            let _ = __clog_logger.emit(&__clog_record);
        }
    }};
}

/// Print-style: console output goes to stdout instead of stderr.
#[macro_export]
macro_rules! clog_print {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let __clog_logger = &$logger;
        let __clog_level = $level;
        if __clog_logger.enabled(__clog_level) {
            let __clog_record = $crate::output::LogRecord::new(
                __clog_level,
                ::std::format!($($arg)+),
                $crate::here!(),
            )
            .to_stdout();
            let _ = __clog_logger.emit(&__clog_record);
        }
    }};
}

/// `clog_perror!(logger, level, err, "fmt", args...)` appends `": <err>"`.
#[macro_export]
macro_rules! clog_perror {
    ($logger:expr, $level:expr, $err:expr, $($arg:tt)+) => {{
        let __clog_logger = &$logger;
        let __clog_level = $level;
        if __clog_logger.enabled(__clog_level) {
            __clog_logger.log_at(
                __clog_level,
                $crate::here!(),
                &::std::format!("{}: {}", ::std::format!($($arg)+), $err),
            );
        }
    }};
}

/// `clog_hex!(logger, level, label, bytes)` compact, or with a trailing `HexStyle`.
#[macro_export]
macro_rules! clog_hex {
    ($logger:expr, $level:expr, $label:expr, $bytes:expr) => {
        $crate::clog_hex!($logger, $level, $label, $bytes, $crate::fmt::HexStyle::Compact)
    };
    ($logger:expr, $level:expr, $label:expr, $bytes:expr, $style:expr) => {{
        let __clog_logger = &$logger;
        let __clog_level = $level;
        if __clog_logger.enabled(__clog_level) {
            let __clog_dump = $crate::fmt::format_hex(&$bytes[..], $style);
            __clog_logger.log_at(
                __clog_level,
                $crate::here!(),
                &::std::format!("{}{}", $label, __clog_dump),
            );
        }
    }};
}

#[macro_export]
macro_rules! clog_trace {
    ($logger:expr, $($arg:tt)+) => { $crate::clog_log!($logger, $crate::Level::Trace, $($arg)+) };
}

#[macro_export]
macro_rules! clog_debug {
    ($logger:expr, $($arg:tt)+) => { $crate::clog_log!($logger, $crate::Level::Debug, $($arg)+) };
}

#[macro_export]
macro_rules! clog_extra {
    ($logger:expr, $($arg:tt)+) => { $crate::clog_log!($logger, $crate::Level::Extra, $($arg)+) };
}

#[macro_export]
macro_rules! clog_info {
    ($logger:expr, $($arg:tt)+) => { $crate::clog_log!($logger, $crate::Level::Info, $($arg)+) };
}

#[macro_export]
macro_rules! clog_header {
    ($logger:expr, $($arg:tt)+) => { $crate::clog_log!($logger, $crate::Level::Header, $($arg)+) };
}

#[macro_export]
macro_rules! clog_success {
    ($logger:expr, $($arg:tt)+) => { $crate::clog_log!($logger, $crate::Level::Success, $($arg)+) };
}

#[macro_export]
macro_rules! clog_money {
    ($logger:expr, $($arg:tt)+) => { $crate::clog_log!($logger, $crate::Level::Money, $($arg)+) };
}

#[macro_export]
macro_rules! clog_input {
    ($logger:expr, $($arg:tt)+) => { $crate::clog_log!($logger, $crate::Level::Input, $($arg)+) };
}

#[macro_export]
macro_rules! clog_warning {
    ($logger:expr, $($arg:tt)+) => { $crate::clog_log!($logger, $crate::Level::Warning, $($arg)+) };
}

#[macro_export]
macro_rules! clog_error {
    ($logger:expr, $($arg:tt)+) => { $crate::clog_log!($logger, $crate::Level::Error, $($arg)+) };
}

#[macro_export]
macro_rules! clog_critical {
    ($logger:expr, $($arg:tt)+) => { $crate::clog_log!($logger, $crate::Level::Critical, $($arg)+) };
}

#[macro_export]
macro_rules! clog_fatal {
    ($logger:expr, $($arg:tt)+) => { $crate::clog_log!($logger, $crate::Level::Fatal, $($arg)+) };
}
