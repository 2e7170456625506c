//! Tracing subscriber setup
//!
//! Logs go to stderr so that stdout carries only the run report.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Level used when neither `--verbose` nor `RUST_LOG` is given.
const DEFAULT_LEVEL: &str = "warn";

/// Install the global subscriber.
///
/// `verbose` forces `debug`; otherwise `RUST_LOG` is honored.
pub fn init(verbose: bool) -> Result<(), TryInitError> {
    let filter_layer = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
}
