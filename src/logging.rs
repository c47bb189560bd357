// SPDX-License-Identifier: PMPL-1.0-or-later

//! Diagnostic logging to stderr.
//!
//! Views go to stdout; log events go to stderr so piping a listing never
//! mixes the two. `RUST_LOG` wins when set, otherwise the level comes from
//! the `-v` count.

use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::prelude::*;

pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

pub fn env_filter(verbose: u8) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::builder()
            .with_default_directive(level_for_verbosity(verbose).into())
            .parse_lossy("")
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn setup_logging(verbose: u8) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .compact()
        .with_target(false);
    let _ = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter(verbose))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for_verbosity(0), LevelFilter::WARN);
        assert_eq!(level_for_verbosity(1), LevelFilter::INFO);
        assert_eq!(level_for_verbosity(2), LevelFilter::DEBUG);
        assert_eq!(level_for_verbosity(9), LevelFilter::TRACE);
    }
}
