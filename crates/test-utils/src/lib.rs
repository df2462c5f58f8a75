//! Shared fixtures for `gapfill` tests: tree/file builders and a
//! once-only tracing setup.

pub mod builders;

use std::fmt::Display;
use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt};

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness.
///
/// Output is captured per test and only shown for failures (or with
/// `--nocapture`). `RUST_LOG` picks the filter; default is `info`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        // Another test binary helper may have installed one already.
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Display names of `nodes`, for compact `assert_eq!`s.
pub fn names<T: Display>(nodes: &[T]) -> Vec<String> {
    nodes.iter().map(ToString::to_string).collect()
}
