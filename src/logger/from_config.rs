//! Logger construction from clog config files.

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::internal;

impl Logger {
    /// Builds a logger from the default config file, falling back to defaults when it is
    /// missing. The default log file is derived from the calling source file.
    ///
    /// # Errors
    /// Config parse failures and invalid field values.
    #[track_caller]
    pub fn from_default_config() -> Result<Self, crate::Error> {
        let builder = LoggerBuilder::new();
        let config = Config::load()?;
        Self::configure(builder, &config)
    }

    /// Builds a logger from an already-loaded config.
    ///
    /// # Errors
    /// Invalid verbosity, mode, symbol style, color, or timestamp format strings.
    #[track_caller]
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        Self::configure(LoggerBuilder::new(), config)
    }

    fn configure(builder: LoggerBuilder, config: &Config) -> Result<Self, crate::Error> {
        internal::debug("LOGGER", "Building logger from config");
        let policy = config.to_policy()?;
        internal::debug(
            "LOGGER",
            &format!(
                "Verbosity: {}, mode: {}, colors: {}",
                policy.verbosity,
                policy.mode,
                if policy.console_color {
                    "enabled"
                } else {
                    "disabled"
                }
            ),
        );

        let mode = policy.mode;
        let mut builder = builder.policy(policy).mode(mode);
        if let Some(path) = &config.file.path {
            internal::debug("LOGGER", &format!("File: {path}"));
            builder = builder.file().path(path).done();
        }

        let logger = builder.build();
        if logger.output_count() == 0 {
            internal::warn("LOGGER", "No sinks selected");
        }
        internal::debug("LOGGER", "Logger ready");
        Ok(logger)
    }
}
