//! Shared components for CLI commands
//!
//! Logging setup and input reading used by both the validate and the
//! signature commands.

use crate::error::{PreflightError, Result};
use std::path::Path;
use tracing::debug;

/// Set up structured logging to stderr at the given level
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("invoice_preflight={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Read the file into memory and derive its display name.
///
/// The engine works on fully materialized text; decoding happened at
/// acquisition time, so anything unreadable as UTF-8 is an I/O failure
/// here, not a validation outcome.
pub fn read_input(path: &Path) -> Result<(String, String)> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| PreflightError::io(format!("Failed to read '{}'", path.display()), e))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    debug!(file_name = %file_name, bytes = text.len(), "input file read");

    Ok((text, file_name))
}
