//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Maps a `-v` count to a default filter directive.
pub const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds the filter: `RUST_LOG` when set, otherwise the `-v` level.
pub fn filter_for(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)))
}

/// Installs a stderr subscriber so stdout stays clean for results.
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
pub fn init(verbosity: u8) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}
