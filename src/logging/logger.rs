// file: src/logging/logger.rs
// version: 1.0.0
// guid: 0c7b4e91-5f2a-4d83-b6e0-a9d1c3f8e527

//! Logger initialization and configuration

use crate::{AgentError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Pick the filter directive for the given flags.
///
/// The default is `warn` because stdout carries the prompts and the JSON
/// payload; `RUST_LOG` overrides the default but not `--verbose`/`--quiet`.
pub fn filter_directive(verbose: bool, quiet: bool) -> String {
    if quiet {
        "error".to_string()
    } else if verbose {
        "debug".to_string()
    } else {
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| "warn".to_string())
    }
}

/// Initialize the logging system; everything goes to stderr
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    let filter = EnvFilter::try_new(filter_directive(verbose, quiet))
        .map_err(|e| AgentError::Logging(format!("Invalid log filter: {}", e)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| AgentError::Logging(format!("Failed to initialize logger: {}", e)))?;

    Ok(())
}

/// Run `f` inside a named span
pub fn with_operation_span<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let span = tracing::info_span!("operation", name = operation);
    let _enter = span.enter();
    f()
}
