//! Identifier aliases shared by every layer of the engine.
//!
//! All ids are plain integers assigned by external team/match management.

use crate::errors::domain::{DomainError, NotFoundKind};

pub type PlayerId = i64;
pub type TeamId = i64;
pub type InningsId = i64;
pub type MatchId = i64;

/// Innings ordinal within a limited-overs match (1 or 2).
pub type InningsNumber = u8;

/// The other team of a two-team fixture.
///
/// Shared by toss resolution, innings setup and result evaluation so that
/// "who is the opponent" has a single definition.
pub fn other_team(teams: [TeamId; 2], team: TeamId) -> Result<TeamId, DomainError> {
    match teams {
        [a, b] if a == team => Ok(b),
        [a, b] if b == team => Ok(a),
        _ => Err(DomainError::not_found(
            NotFoundKind::Team,
            format!("Team {team} is not part of this match"),
        )),
    }
}
