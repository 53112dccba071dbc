//! Log setup.
//!
//! Logs go to stderr so stdout stays reserved for results. `RUST_LOG`
//! overrides the level picked from the command line.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Map `-q` / `-v` counts to a level. Warnings are shown by default.
pub fn level_from_flags(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }

    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
