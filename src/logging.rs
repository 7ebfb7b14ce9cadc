//! Logging init: structured logs on stderr, level picked by `-v` count.

use tracing_subscriber::EnvFilter;

/// Maps the number of `-v` flags to a filter directive for this crate.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber.
///
/// Does nothing if a subscriber is already installed, so it is safe to call
/// more than once (tests do).
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::new(format!(
        "{}={}",
        env!("CARGO_CRATE_NAME"),
        level_for(verbosity)
    ));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
