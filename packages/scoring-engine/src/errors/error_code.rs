//! Error codes for the scoring engine.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and are the strings a scorer UI
//! or service layer shows next to the failure detail.

use core::fmt;

/// Centralized error codes for the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Crease and bowler
    /// Delivery has no striker
    MissingStriker,
    /// Delivery has no non-striker
    MissingNonStriker,
    /// Delivery has no bowler
    MissingBowler,
    /// Striker and non-striker are the same player
    StrikerIsNonStriker,
    /// Bowler is one of the batters
    BowlerIsBatter,
    /// Delivery names batters that are not at the crease
    CreaseMismatch,

    // Runs and extras
    /// Runs off the bat outside the allowed set
    InvalidRuns,
    /// Extra runs inconsistent with the extra type
    InvalidExtraRuns,

    // Dismissals
    /// Wicket without a dismissal kind
    MissingDismissalKind,
    /// Dismissal kind on a non-wicket delivery
    UnexpectedDismissalKind,
    /// Dismissal kind impossible off this delivery
    DismissalNotAllowed,
    /// Caught/run out/stumped without a fielder
    MissingFielder,
    /// Fielder supplied for a dismissal that has none
    UnexpectedFielder,
    /// Dismissed player is not one of the two batters
    DismissedNotAtCrease,
    /// Run-out without the dismissed batter named
    MissingDismissedPlayer,
    /// Wicket fell but no incoming batter was supplied
    MissingIncomingBatter,
    /// Run-out without a designated vacated end
    MissingVacatedEnd,

    // Innings and match lifecycle
    /// Delivery against a completed innings
    InningsCompleted,
    /// Delivery against an innings that has not started
    InningsNotStarted,
    /// Delivery is not the next slot of the innings
    OutOfOrder,
    /// Delivery belongs to another innings
    InningsMismatch,
    /// Operation not valid in the current match phase
    PhaseMismatch,
    /// Team short name longer than four characters
    InvalidShortName,
    /// Toss winner is not one of the two teams
    InvalidToss,
    /// Overs outside what the format allows
    InvalidOvers,
    /// General validation error
    ValidationError,

    // Not found
    /// Team not found
    TeamNotFound,
    /// Innings not found
    InningsNotFound,
    /// Delivery not found
    DeliveryNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// The same delivery identity was already recorded
    DuplicateDelivery,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingStriker => "MISSING_STRIKER",
            Self::MissingNonStriker => "MISSING_NON_STRIKER",
            Self::MissingBowler => "MISSING_BOWLER",
            Self::StrikerIsNonStriker => "STRIKER_IS_NON_STRIKER",
            Self::BowlerIsBatter => "BOWLER_IS_BATTER",
            Self::CreaseMismatch => "CREASE_MISMATCH",

            Self::InvalidRuns => "INVALID_RUNS",
            Self::InvalidExtraRuns => "INVALID_EXTRA_RUNS",

            Self::MissingDismissalKind => "MISSING_DISMISSAL_KIND",
            Self::UnexpectedDismissalKind => "UNEXPECTED_DISMISSAL_KIND",
            Self::DismissalNotAllowed => "DISMISSAL_NOT_ALLOWED",
            Self::MissingFielder => "MISSING_FIELDER",
            Self::UnexpectedFielder => "UNEXPECTED_FIELDER",
            Self::DismissedNotAtCrease => "DISMISSED_NOT_AT_CREASE",
            Self::MissingDismissedPlayer => "MISSING_DISMISSED_PLAYER",
            Self::MissingIncomingBatter => "MISSING_INCOMING_BATTER",
            Self::MissingVacatedEnd => "MISSING_VACATED_END",

            Self::InningsCompleted => "INNINGS_COMPLETED",
            Self::InningsNotStarted => "INNINGS_NOT_STARTED",
            Self::OutOfOrder => "OUT_OF_ORDER",
            Self::InningsMismatch => "INNINGS_MISMATCH",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::InvalidShortName => "INVALID_SHORT_NAME",
            Self::InvalidToss => "INVALID_TOSS",
            Self::InvalidOvers => "INVALID_OVERS",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::TeamNotFound => "TEAM_NOT_FOUND",
            Self::InningsNotFound => "INNINGS_NOT_FOUND",
            Self::DeliveryNotFound => "DELIVERY_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DuplicateDelivery => "DUPLICATE_DELIVERY",
            Self::Conflict => "CONFLICT",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
