//! `clog` - colored console and file logging.
//!
//! Every call is resolved against a fixed [`Policy`]:
//! - the verbosity threshold decides whether it is emitted at all,
//! - the sink mode decides whether it reaches the console, a file, both, or neither,
//! - the decoration settings add timestamp, symbol, source trace and (console only) color.
//!
//! # Example
//!
//! ```
//! use clog::{Logger, Verbosity, SinkMode, clog_warning};
//!
//! let logger = Logger::builder()
//!     .verbosity(Verbosity::Warning)
//!     .mode(SinkMode::Console)
//!     .console()
//!         .colors(false)
//!         .done()
//!     .build();
//!
//! clog_warning!(logger, "disk low");
//! logger.info("suppressed: Info is below Warning");
//! ```
//!
//! # Features
//!
//! - `cli` (default): builds the `clog` command-line binary

pub mod config;
pub mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod macros;
pub mod output;
pub mod policy;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use error::Error;
pub use fmt::{Color, HexStyle, SymbolSet, SymbolStyle, format_bin, format_hex};
pub use level::{Level, Verbosity};
pub use logger::{Logger, LoggerBuilder};
pub use output::{
    Capture, ConsoleTarget, FileOutput, LogRecord, Output, SourceLocation, Stream, TerminalOutput,
};
pub use policy::{DecoratedLine, Policy, Sink, SinkMode, SinkSet};
