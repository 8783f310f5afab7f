//! Tracing subscriber setup for the pairz binary.
//!
//! Diagnostics go to stderr, separate from the list output on stdout.
//!
//! # Priority (highest to lowest)
//!
//! 1. `PAIRZ_LOG` env var (e.g. `pairz=debug`)
//! 2. `RUST_LOG` env var
//! 3. `--verbose` flag → `pairz=debug`
//! 4. Default: `warn`

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PAIRZ_LOG";

pub fn init_subscriber(verbose: bool) {
    let filter = build_env_filter(verbose);

    // A second init (e.g. from tests) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn build_env_filter(verbose: bool) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return filter;
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    if verbose {
        EnvFilter::new("pairz=debug,warn")
    } else {
        EnvFilter::new("warn")
    }
}
