//! Runtime settings read from the environment.
//!
//! Environment variables must be set by the runtime environment; every
//! setting has a default so the engine runs with none of them present.

use std::env;

use crate::errors::domain::DomainError;

/// Default tracing filter when `SCORING_LOG` / `RUST_LOG` are unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Tracing filter directive: `SCORING_LOG`, then `RUST_LOG`, then `info`.
pub fn log_filter() -> String {
    env::var("SCORING_LOG")
        .or_else(|_| env::var("RUST_LOG"))
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Whether log lines are emitted as JSON (`SCORING_LOG_FORMAT=json`, the
/// default) or as human-readable text (`SCORING_LOG_FORMAT=pretty`).
pub fn log_json() -> Result<bool, DomainError> {
    match env::var("SCORING_LOG_FORMAT") {
        Err(_) => Ok(true),
        Ok(v) => parse_log_format(&v),
    }
}

fn parse_log_format(value: &str) -> Result<bool, DomainError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "json" => Ok(true),
        "pretty" | "text" => Ok(false),
        other => Err(DomainError::validation_other(format!(
            "SCORING_LOG_FORMAT must be 'json' or 'pretty', got '{other}'"
        ))),
    }
}
