//! Domain-level error type used across the scoring engine.
//!
//! This error type is transport- and storage-agnostic. Callers that sit behind
//! an HTTP or UI layer map it through [`DomainError::code`] to a stable
//! [`ErrorCode`] string.

use thiserror::Error;

use crate::errors::error_code::ErrorCode;

/// Caller-correctable validation failures.
///
/// Every variant is detected before any state is mutated; a rejected delivery
/// leaves the innings exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    MissingStriker,
    MissingNonStriker,
    MissingBowler,
    StrikerIsNonStriker,
    BowlerIsBatter,
    /// Runs off the bat outside {0,1,2,3,4,6}.
    InvalidRuns,
    /// Extra runs inconsistent with the extra type.
    InvalidExtraRuns,
    MissingDismissalKind,
    UnexpectedDismissalKind,
    /// Dismissal that cannot happen off this kind of delivery (e.g. bowled off a wide).
    DismissalNotAllowed,
    MissingFielder,
    UnexpectedFielder,
    DismissedNotAtCrease,
    /// Run-out without the dismissed batter being named.
    MissingDismissedPlayer,
    MissingIncomingBatter,
    /// Run-out without the vacated end being designated.
    MissingVacatedEnd,
    /// Delivery names a striker/non-striker pair different from the one at the crease.
    CreaseMismatch,
    InningsCompleted,
    InningsNotStarted,
    /// Delivery is not the next (over, ball) slot of the innings.
    OutOfOrder,
    InningsMismatch,
    InvalidShortName,
    InvalidToss,
    InvalidOvers,
    PhaseMismatch,
    Other(String),
}

/// Domain-level conflict kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// The same delivery identity was submitted twice.
    DuplicateDelivery,
    Other(String),
}

/// Domain-level not found entities.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Team,
    Innings,
    Delivery,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Input validation or scoring rule violation
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Semantic conflict
    #[error("conflict {0:?}: {1}")]
    Conflict(ConflictKind, String),
    /// Missing entity in domain terms
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    /// Validation failure that has no dedicated kind.
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }

    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    /// Returns the validation kind if this is a validation error.
    pub fn validation_kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(kind),
            _ => None,
        }
    }

    /// Stable error code for display layers.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::MissingStriker => ErrorCode::MissingStriker,
                ValidationKind::MissingNonStriker => ErrorCode::MissingNonStriker,
                ValidationKind::MissingBowler => ErrorCode::MissingBowler,
                ValidationKind::StrikerIsNonStriker => ErrorCode::StrikerIsNonStriker,
                ValidationKind::BowlerIsBatter => ErrorCode::BowlerIsBatter,
                ValidationKind::InvalidRuns => ErrorCode::InvalidRuns,
                ValidationKind::InvalidExtraRuns => ErrorCode::InvalidExtraRuns,
                ValidationKind::MissingDismissalKind => ErrorCode::MissingDismissalKind,
                ValidationKind::UnexpectedDismissalKind => ErrorCode::UnexpectedDismissalKind,
                ValidationKind::DismissalNotAllowed => ErrorCode::DismissalNotAllowed,
                ValidationKind::MissingFielder => ErrorCode::MissingFielder,
                ValidationKind::UnexpectedFielder => ErrorCode::UnexpectedFielder,
                ValidationKind::DismissedNotAtCrease => ErrorCode::DismissedNotAtCrease,
                ValidationKind::MissingDismissedPlayer => ErrorCode::MissingDismissedPlayer,
                ValidationKind::MissingIncomingBatter => ErrorCode::MissingIncomingBatter,
                ValidationKind::MissingVacatedEnd => ErrorCode::MissingVacatedEnd,
                ValidationKind::CreaseMismatch => ErrorCode::CreaseMismatch,
                ValidationKind::InningsCompleted => ErrorCode::InningsCompleted,
                ValidationKind::InningsNotStarted => ErrorCode::InningsNotStarted,
                ValidationKind::OutOfOrder => ErrorCode::OutOfOrder,
                ValidationKind::InningsMismatch => ErrorCode::InningsMismatch,
                ValidationKind::InvalidShortName => ErrorCode::InvalidShortName,
                ValidationKind::InvalidToss => ErrorCode::InvalidToss,
                ValidationKind::InvalidOvers => ErrorCode::InvalidOvers,
                ValidationKind::PhaseMismatch => ErrorCode::PhaseMismatch,
                ValidationKind::Other(_) => ErrorCode::ValidationError,
            },
            DomainError::Conflict(kind, _) => match kind {
                ConflictKind::DuplicateDelivery => ErrorCode::DuplicateDelivery,
                ConflictKind::Other(_) => ErrorCode::Conflict,
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Team => ErrorCode::TeamNotFound,
                NotFoundKind::Innings => ErrorCode::InningsNotFound,
                NotFoundKind::Delivery => ErrorCode::DeliveryNotFound,
                NotFoundKind::Other(_) => ErrorCode::NotFound,
            },
        }
    }
}
