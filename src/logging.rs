//! Logging setup
//!
//! Installs a global tracing subscriber writing to stderr, so log lines
//! never mix with the report on stdout.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding an `EnvFilter` directive, e.g. `extscan=debug`.
pub const LOG_ENV_VAR: &str = "EXTSCAN_LOG";

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// A global subscriber was already installed.
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing_subscriber::util::TryInitError),
}

/// Map the number of `-v` flags to a default filter directive.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing on stderr.
///
/// `EXTSCAN_LOG` takes precedence over `verbosity`.
pub fn init(verbosity: u8) -> Result<(), LoggingError> {
    let env_filter = build_env_filter(verbosity);
    let stderr_layer = fmt::layer()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()?;
    Ok(())
}

fn build_env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)))
}
