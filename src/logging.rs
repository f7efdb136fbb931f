//! Logging init for the command-line front end: structured output on stderr.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info,asset_path_resolver=debug",
        _ => "debug,asset_path_resolver=trace",
    }
}

/// Install a stderr subscriber. `RUST_LOG` wins over the verbosity-derived default.
///
/// Calling this more than once is harmless: later calls leave the first subscriber in place.
pub fn init_logging(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(verbosity, "logging initialized");
    }
}
