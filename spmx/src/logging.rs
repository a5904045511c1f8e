//! Logging initialization
//!
//! Events go to stderr so that interactive prompts and reports on stdout
//! stay clean.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "SPMX_LOG";

/// Install the global tracing subscriber
///
/// The filter is read from `SPMX_LOG`, then `RUST_LOG`, falling back to
/// `warn`. `verbose` raises the fallback to `debug`.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let fallback = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new(fallback))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()?;

    Ok(())
}
