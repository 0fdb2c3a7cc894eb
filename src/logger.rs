//! Logging setup for the library.
//!
//! Installs a [`fern`] dispatcher behind the `log` facade, configured from
//! [`LoggingConfig`](crate::config::LoggingConfig). Initialization is
//! idempotent so embedding applications and tests can call it freely.

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;

use crate::config::LoggingConfig;
use crate::constants::LOG_TIMESTAMP_FORMAT;

static INIT: OnceCell<()> = OnceCell::new();

/// Initialize the global logger from configuration.
///
/// Does nothing when logging is disabled or a logger is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    if INIT.get().is_some() {
        return Ok(());
    }

    let level: log::LevelFilter = config
        .level
        .parse()
        .with_context(|| format!("Invalid log level '{}'", config.level))?;

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                chrono::Local::now().format(LOG_TIMESTAMP_FORMAT),
                record.target(),
                record.level(),
                message
            ));
        })
        .level(level);

    dispatch = match &config.file {
        Some(path) => dispatch.chain(
            fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?,
        ),
        None => dispatch.chain(std::io::stderr()),
    };

    dispatch.apply().context("Failed to install logger")?;
    let _ = INIT.set(());

    Ok(())
}
