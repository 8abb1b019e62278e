//! Domain layer: pure scoring logic types and helpers.

pub mod delivery;
pub mod delivery_log;
pub mod figures;
pub mod fixtures;
pub mod innings;
pub mod lifecycle;
pub mod match_state;
pub mod over_counter;
pub mod over_summary;
pub mod replay;
pub mod result;
pub mod rules;
pub mod run_rate;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod strike;
pub mod teams;
pub mod transitions;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_overs;
#[cfg(test)]
mod tests_result;
#[cfg(test)]
mod tests_scenarios;
#[cfg(test)]
mod tests_session;
#[cfg(test)]
mod tests_strike;

// Re-exports for ergonomics
pub use delivery::{Delivery, DeliveryInput, DismissalKind, ExtraType, Wicket};
pub use delivery_log::{dedup, DeliveryKey, DeliveryLog, LoggedDelivery};
pub use figures::{BattingFigure, BowlingFigure, FallOfWicket, Partnership};
pub use innings::{apply, apply_delivery, DeliveryOutcome, Extras, InningsSetup, InningsState};
pub use lifecycle::{CompletionReason, InningsStatus, Target};
pub use match_state::{Match, MatchStatus, Toss, TossDecision};
pub use over_counter::{advance, BallCount, OverProgress};
pub use over_summary::OverSummary;
pub use replay::{replay_innings, InningsProgress};
pub use result::{evaluate_result, InningsScore, Margin, MatchResult, ResultKind};
pub use rules::MatchFormat;
pub use run_rate::{current_run_rate, required_run_rate, ChaseEquation, RequiredRate};
pub use session::ScoringSession;
pub use snapshot::{InningsSnapshot, MatchSnapshot};
pub use state::{InningsId, InningsNumber, MatchId, PlayerId, TeamId};
pub use strike::{rotate, Crease, End, IncomingBatter};
pub use teams::{Player, PlayerRole, Team};
pub use transitions::{derive_match_transitions, MatchTransition};
