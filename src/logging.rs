// src/logging.rs
// =============================================================================
// Sets up `tracing` output.
//
// Logs go to stderr so they never mix with a report written to stdout.
// RUST_LOG always wins; otherwise only warnings are shown, or debug output
// for our own crate when --verbose is passed.
// =============================================================================

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "info,link_harvester=debug";

pub fn init_logging(verbose: bool) -> Result<()> {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    tracing::debug!(verbose, "logging initialized");
    Ok(())
}
