//! Logging bootstrap built on `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Default directives used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,astrelis_design=debug";

/// Install the global fmt subscriber.
///
/// Honours `RUST_LOG`, falling back to [`DEFAULT_FILTER`]. Panics if a global
/// subscriber is already installed; use [`try_init`] where that can happen.
pub fn init() {
    tracing_subscriber::fmt().with_env_filter(env_filter()).init();
}

/// Install the global fmt subscriber unless one is already present.
///
/// Returns `false` when another subscriber won the race, which is the common
/// case in test binaries.
pub fn try_init() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_test_writer()
        .try_init()
        .is_ok()
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
