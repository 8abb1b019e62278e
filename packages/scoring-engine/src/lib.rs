#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;
pub mod telemetry;


// Re-exports for public API
pub use config::MatchRules;
pub use domain::session::ScoringSession;
pub use errors::{DomainError, ErrorCode};

// Prelude for callers driving a match end to end
pub mod prelude {
    pub use super::config::MatchRules;
    pub use super::domain::{
        Delivery, DeliveryInput, DismissalKind, End, ExtraType, IncomingBatter, InningsSnapshot,
        LoggedDelivery, Match, MatchFormat, MatchResult, MatchSnapshot, MatchTransition, Team,
        Toss, TossDecision,
    };
    pub use super::errors::{DomainError, ErrorCode};
    pub use super::ScoringSession;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
