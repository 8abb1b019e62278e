#![cfg(test)]

//! Unit-test logging, installed by the `#[ctor]` hook in `lib.rs`.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Route engine spans and events to the captured test output.
///
/// The filter comes from `TEST_LOG`, then `RUST_LOG`, then `warn`:
///
/// ```bash
/// TEST_LOG=scoring_engine=debug cargo test -p scoring-engine
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = ["TEST_LOG", "RUST_LOG"]
            .into_iter()
            .find_map(|var| std::env::var(var).ok())
            .map_or_else(|| EnvFilter::new("warn"), EnvFilter::new);

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
