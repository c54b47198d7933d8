//! Tracing subscriber bootstrap for binaries and tests embedding the crate.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The fallback filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    /// A global subscriber is already installed.
    #[error("logging already initialised: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Installs a formatted subscriber filtered by `RUST_LOG`.
///
/// When `RUST_LOG` is unset or invalid, `default_filter` is used instead,
/// for example the `[logging] level` value of the configuration.
///
/// # Errors
///
/// Returns [`LoggingError::Filter`] when `default_filter` is needed and does
/// not parse, or [`LoggingError::Install`] when a subscriber is already set.
pub fn init(default_filter: &str) -> Result<(), LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)?,
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;
    Ok(())
}
