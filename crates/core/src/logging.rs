//! Tracing subscriber setup
//!
//! Library code only emits `tracing` events. The host process calls [`init`]
//! once at startup to print them.

use tracing_subscriber::EnvFilter;

use crate::config::CoreConfig;

/// Logging setup errors
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The filter directive in the config could not be parsed
    #[error("Invalid log filter '{filter}': {source}")]
    InvalidFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    /// A global subscriber is already installed
    #[error("Logging already initialized")]
    AlreadyInitialized,
}

/// Build the filter for `config`
///
/// `RUST_LOG` wins when set, then `config.log_filter`, then `debug`/`info`
/// depending on `config.debug`.
pub fn env_filter(config: &CoreConfig) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let directive = match &config.log_filter {
        Some(filter) => filter.as_str(),
        None if config.debug => "debug",
        None => "info",
    };

    EnvFilter::try_new(directive).map_err(|source| LoggingError::InvalidFilter {
        filter: directive.to_string(),
        source,
    })
}

/// Install the global fmt subscriber
pub fn init(config: &CoreConfig) -> Result<(), LoggingError> {
    let filter = env_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)?;

    tracing::debug!("Logging initialized (config version {})", config.version);
    Ok(())
}
