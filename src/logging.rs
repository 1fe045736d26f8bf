//! Tracing setup.
//!
//! `RUST_LOG` takes precedence when set. Otherwise argstone logs at `info`,
//! raised to `debug` with `-v` and `trace` with `-vv`. Logs go to stderr so
//! the `link` command's stdout stays clean.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter directive for a verbosity level.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "argstone=info,tower_http=info",
        1 => "argstone=debug,tower_http=debug",
        _ => "argstone=trace,tower_http=trace",
    }
}

/// Install the global subscriber.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
