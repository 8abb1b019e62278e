use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::env;
use crate::errors::domain::DomainError;

/// Install the global subscriber: JSON lines unless `SCORING_LOG_FORMAT=pretty`,
/// filtered by `SCORING_LOG` / `RUST_LOG` (default `info`).
pub fn init_tracing() -> Result<(), DomainError> {
    let env_filter = EnvFilter::try_new(env::log_filter())
        .unwrap_or_else(|_| EnvFilter::new(env::DEFAULT_LOG_FILTER));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .with_writer(std::io::stderr);

    let registry = tracing_subscriber::registry().with(env_filter);
    let installed = if env::log_json()? {
        registry.with(fmt_layer.json()).try_init()
    } else {
        registry.with(fmt_layer).try_init()
    };
    installed.map_err(|e| DomainError::validation_other(format!("tracing already installed: {e}")))
}
