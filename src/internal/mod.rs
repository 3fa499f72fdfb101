//! Clog's own diagnostic logger, so config problems and sink failures are reported
//! through the same formatting pipeline as everything else.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if the CLI and
//! library callers race to call `init`.

use crate::config::Config;
use crate::level::Level;
use crate::logger::Logger;
use crate::output::SourceLocation;
use crate::policy::SinkMode;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Fallback initializer that loads config itself.
pub fn init() {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| {
        let config = Config::load().unwrap_or_default();
        build_internal_logger(&config)
    });
    if !was_init {
        debug("INTERNAL", "Internal logger ready");
    }
}

/// Preferred initializer; reuses an already-loaded config.
pub fn init_with_config(config: &Config) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| build_internal_logger(config));
    if !was_init {
        debug(
            "INTERNAL",
            &format!(
                "Verbosity: {}, mode: {}",
                config.general.verbosity, config.general.mode
            ),
        );
        debug("INTERNAL", "Internal logger ready");
    }
}

/// Console only, never traced: diagnostics about the file sink must not go to the file sink.
fn build_internal_logger(config: &Config) -> Logger {
    let mut builder = Logger::builder()
        .verbosity(config.parse_diagnostics())
        .mode(SinkMode::Console)
        .tracing(false)
        .no_timestamp();
    if let Ok(style) = config.parse_symbol_style() {
        builder = builder.symbols(style);
    }
    builder.console().colors(config.console.colors).done().build()
}

/// Pre-init calls silently vanish rather than crashing.
fn log(level: Level, scope: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        logger.log_at(level, SourceLocation::default(), &format!("{scope}: {msg}"));
    }
}

pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warning, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
