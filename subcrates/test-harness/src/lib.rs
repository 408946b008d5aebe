//! Test tooling for `untab`: a small mocha-style suite runner that implements
//! [`untab::LifecycleHooks`], so suite-scoped untab settings can be tested the way a
//! test runner with before/after-each hooks would apply them.

pub mod error;
pub mod prelude;
pub mod suite;

use tracing_subscriber::EnvFilter;

/// Installs a `tracing` subscriber that writes through the test harness' captured output.
///
/// The filter is read from `RUST_LOG` and defaults to `untab=trace`.
/// Calling this more than once (e.g. from several tests) is fine.
pub fn init_test_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("untab=trace"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
