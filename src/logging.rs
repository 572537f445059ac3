//! Logging backend bootstrap.
//!
//! Installs the global `tracing` subscriber consumed by
//! [`TracingSink`](crate::sink::TracingSink):
//! - console output via the fmt layer
//! - level filtering via the `RUST_LOG` environment variable (defaults to
//!   `info`)
//!
//! Processes that already manage their own subscriber can skip this module
//! entirely; the sink works against whatever subscriber is installed.

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Errors that can occur during logging initialization.
#[derive(Debug, Error)]
pub enum InitError {
    /// A global subscriber was already installed.
    #[error("failed to install tracing subscriber: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Initialize the global tracing subscriber.
///
/// Call once at process start, before the first log line. Level filtering
/// follows `RUST_LOG` and defaults to `info` when the variable is unset or
/// unparsable.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn init() -> Result<(), InitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    Ok(())
}
