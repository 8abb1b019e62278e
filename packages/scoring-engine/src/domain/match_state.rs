//! Match-level state: teams, toss, which side bats first, and the result.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::info;

use crate::config::MatchRules;
use crate::domain::result::MatchResult;
use crate::domain::state::{other_team, InningsNumber, MatchId, TeamId};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TossDecision {
    Bat,
    Bowl,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Live,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toss {
    pub winner_id: TeamId,
    pub decision: TossDecision,
}

impl Toss {
    /// Toss winner if they chose to bat, otherwise their opponents.
    pub fn batting_first(&self, teams: [TeamId; 2]) -> Result<TeamId, DomainError> {
        if !teams.contains(&self.winner_id) {
            return Err(DomainError::validation(
                ValidationKind::InvalidToss,
                format!("Toss winner {} is not playing this match", self.winner_id),
            ));
        }
        match self.decision {
            TossDecision::Bat => Ok(self.winner_id),
            TossDecision::Bowl => other_team(teams, self.winner_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub teams: [TeamId; 2],
    pub rules: MatchRules,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub scheduled_at: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toss: Option<Toss>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batting_first_id: Option<TeamId>,
    /// 0 before the first innings starts.
    pub current_innings: InningsNumber,
    pub status: MatchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<MatchResult>,
}

impl Match {
    pub fn new(id: MatchId, teams: [TeamId; 2], rules: MatchRules) -> Result<Self, DomainError> {
        if teams[0] == teams[1] {
            return Err(DomainError::validation_other(format!(
                "Team {} cannot play itself",
                teams[0]
            )));
        }
        Ok(Self {
            id,
            teams,
            rules,
            venue: None,
            scheduled_at: None,
            toss: None,
            batting_first_id: None,
            current_innings: 0,
            status: MatchStatus::Scheduled,
            result: None,
        })
    }

    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = Some(venue.into());
        self
    }

    pub fn scheduled(mut self, at: OffsetDateTime) -> Self {
        self.scheduled_at = Some(at);
        self
    }

    /// Record the toss and fix the batting order. Only before play starts.
    pub fn record_toss(&mut self, toss: Toss) -> Result<TeamId, DomainError> {
        if self.status != MatchStatus::Scheduled {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                format!("Toss for match {} after play started", self.id),
            ));
        }
        let batting_first = toss.batting_first(self.teams)?;
        self.toss = Some(toss);
        self.batting_first_id = Some(batting_first);
        info!(
            match_id = self.id,
            toss_winner = toss.winner_id,
            decision = ?toss.decision,
            batting_first,
            "Toss recorded"
        );
        Ok(batting_first)
    }

    /// Batting and bowling sides for innings `number`.
    pub fn sides(&self, number: InningsNumber) -> Result<(TeamId, TeamId), DomainError> {
        let first = self.batting_first_id.ok_or_else(|| {
            DomainError::validation(
                ValidationKind::PhaseMismatch,
                format!("Match {} has no toss yet", self.id),
            )
        })?;
        let second = other_team(self.teams, first)?;
        match number {
            1 => Ok((first, second)),
            2 => Ok((second, first)),
            n => Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                format!("Limited-overs matches have two innings, not {n}"),
            )),
        }
    }

    pub fn begin_innings(&mut self, number: InningsNumber) {
        self.current_innings = number;
        self.status = MatchStatus::Live;
    }

    pub fn finish(&mut self, result: MatchResult) {
        info!(
            match_id = self.id,
            winner_id = ?result.winner_id,
            text = %result.text,
            "Match completed"
        );
        self.status = MatchStatus::Completed;
        self.result = Some(result);
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }
}
