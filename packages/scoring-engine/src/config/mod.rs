//! Configuration: per-match playing conditions and environment settings.

pub mod env;
pub mod match_rules;

pub use match_rules::MatchRules;
