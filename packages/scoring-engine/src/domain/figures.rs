//! Per-player figures, fall of wickets and partnerships.
//!
//! All of these are derived from the delivery log and never authoritative on
//! their own; replaying the log rebuilds them exactly.

use serde::{Deserialize, Serialize};

use crate::domain::delivery::DismissalKind;
use crate::domain::over_counter::BallCount;
use crate::domain::state::PlayerId;

/// Strike rate: runs per hundred balls, 0 when no balls faced.
pub fn strike_rate(runs: u32, balls: u32) -> f64 {
    if balls == 0 {
        return 0.0;
    }
    f64::from(runs) * 100.0 / f64::from(balls)
}

/// Economy: runs conceded per six legal balls, 0 when none bowled.
pub fn economy(runs: u32, legal_balls: u32) -> f64 {
    if legal_balls == 0 {
        return 0.0;
    }
    f64::from(runs) * 6.0 / f64::from(legal_balls)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingFigure {
    pub player_id: PlayerId,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismissal: Option<DismissalKind>,
}

impl BattingFigure {
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            runs: 0,
            balls: 0,
            fours: 0,
            sixes: 0,
            dismissal: None,
        }
    }

    pub fn is_out(&self) -> bool {
        self.dismissal.is_some()
    }

    pub fn strike_rate(&self) -> f64 {
        strike_rate(self.runs, self.balls)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BowlingFigure {
    pub player_id: PlayerId,
    pub legal_balls: u32,
    pub runs_conceded: u32,
    pub wickets: u32,
    pub maidens: u32,
    pub wides: u32,
    pub no_balls: u32,
}

impl BowlingFigure {
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            legal_balls: 0,
            runs_conceded: 0,
            wickets: 0,
            maidens: 0,
            wides: 0,
            no_balls: 0,
        }
    }

    /// Overs bowled in over.ball notation.
    pub fn overs(&self) -> BallCount {
        BallCount::from_legal_balls(self.legal_balls)
    }

    pub fn economy(&self) -> f64 {
        economy(self.runs_conceded, self.legal_balls)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallOfWicket {
    pub wicket_number: u8,
    pub score: u32,
    pub overs: BallCount,
    pub player_id: PlayerId,
}

/// Runs and legal balls added while one pair was together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partnership {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batters: Option<(PlayerId, PlayerId)>,
    pub runs: u32,
    pub balls: u32,
}

impl Partnership {
    pub fn is_empty(&self) -> bool {
        self.runs == 0 && self.balls == 0
    }
}

/// Find a figure by player, appending a fresh one in order of appearance.
pub(crate) fn figure_mut<'a, T>(
    figures: &'a mut Vec<T>,
    player: PlayerId,
    id_of: impl Fn(&T) -> PlayerId,
    make: impl FnOnce(PlayerId) -> T,
) -> &'a mut T {
    let pos = match figures.iter().position(|f| id_of(f) == player) {
        Some(pos) => pos,
        None => {
            figures.push(make(player));
            figures.len() - 1
        }
    };
    &mut figures[pos]
}
