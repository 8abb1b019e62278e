//! Match result: who won, by how much, and the sentence a scoreboard prints.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::MatchRules;
use crate::domain::innings::InningsState;
use crate::domain::state::TeamId;
use crate::domain::teams::Team;
use crate::errors::domain::{DomainError, NotFoundKind};

/// The part of an innings the result depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InningsScore {
    pub batting_team_id: TeamId,
    pub runs: u32,
    pub wickets: u8,
}

impl From<&InningsState> for InningsScore {
    fn from(state: &InningsState) -> Self {
        Self {
            batting_team_id: state.batting_team_id,
            runs: state.total_runs,
            wickets: state.total_wickets,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum Margin {
    Runs(u32),
    Wickets(u8),
}

impl Margin {
    pub fn value(self) -> u32 {
        match self {
            Margin::Runs(n) => n,
            Margin::Wickets(n) => u32::from(n),
        }
    }
}

impl fmt::Display for Margin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (n, unit) = match self {
            Margin::Runs(n) => (*n, "run"),
            Margin::Wickets(n) => (u32::from(*n), "wicket"),
        };
        let plural = if n == 1 { "" } else { "s" };
        write!(f, "{n} {unit}{plural}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Won,
    Tied,
    Withdrawn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub kind: ResultKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_id: Option<TeamId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    pub text: String,
}

impl MatchResult {
    pub fn withdrawn() -> Self {
        Self {
            kind: ResultKind::Withdrawn,
            winner_id: None,
            margin: None,
            text: "Match withdrawn".to_string(),
        }
    }

    pub fn tied() -> Self {
        Self {
            kind: ResultKind::Tied,
            winner_id: None,
            margin: None,
            text: "Match tied".to_string(),
        }
    }

    fn won(winner: &Team, margin: Margin) -> Self {
        Self {
            kind: ResultKind::Won,
            winner_id: Some(winner.id),
            margin: Some(margin),
            text: format!("{} won by {margin}", winner.display_name()),
        }
    }
}

/// Classify a match from its innings.
///
/// Checked in order: a side that did not bat, a successful chase, a
/// successful defence, a tie. A winning chase is reported by at least one
/// wicket even when the last pair fell on the winning run.
pub fn evaluate_result(
    first: Option<&InningsScore>,
    second: Option<&InningsScore>,
    teams: &[Team],
    rules: &MatchRules,
) -> Result<MatchResult, DomainError> {
    let (Some(first), Some(second)) = (first, second) else {
        return Ok(MatchResult::withdrawn());
    };

    let result = if second.runs > first.runs {
        let left = rules.max_wickets().saturating_sub(second.wickets).max(1);
        MatchResult::won(team(teams, second.batting_team_id)?, Margin::Wickets(left))
    } else if first.runs > second.runs {
        MatchResult::won(
            team(teams, first.batting_team_id)?,
            Margin::Runs(first.runs - second.runs),
        )
    } else {
        MatchResult::tied()
    };
    Ok(result)
}

fn team(teams: &[Team], id: TeamId) -> Result<&Team, DomainError> {
    teams.iter().find(|t| t.id == id).ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Team, format!("Team {id} not found"))
    })
}
