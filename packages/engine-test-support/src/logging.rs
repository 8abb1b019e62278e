//! Logging for integration test binaries.
//!
//! Integration tests link the engine as a normal dependency, so its
//! `#[cfg(test)]` bootstrap is not compiled in. Each binary calls [`init`]
//! from its own `#[ctor]` instead.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Install a test-writer subscriber once per process.
///
/// `TEST_LOG` wins over `RUST_LOG`; with neither set only warnings show.
pub fn init() {
    INSTALLED.get_or_init(|| {
        let filter = EnvFilter::try_from_env("TEST_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // Another harness may already own the global subscriber.
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .with_target(false)
            .try_init();
    });
}
