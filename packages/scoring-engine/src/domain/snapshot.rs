//! Public snapshot API for observing an innings or a match without exposing
//! the accumulator's internals.

use serde::{Deserialize, Serialize};

use crate::domain::figures::{BattingFigure, BowlingFigure, FallOfWicket, Partnership};
use crate::domain::innings::{Extras, InningsState};
use crate::domain::lifecycle::{CompletionReason, InningsStatus};
use crate::domain::match_state::{Match, MatchStatus, Toss};
use crate::domain::over_counter::BallCount;
use crate::domain::over_summary::OverSummary;
use crate::domain::replay::InningsProgress;
use crate::domain::result::{Margin, MatchResult};
use crate::domain::run_rate::{current_run_rate, required_run_rate, ChaseEquation, RequiredRate};
use crate::domain::state::{InningsId, InningsNumber, MatchId, PlayerId, TeamId};

/// Extras with their total.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtrasSnapshot {
    pub total: u32,
    #[serde(flatten)]
    pub breakdown: Extras,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingStat {
    pub player_id: PlayerId,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub strike_rate: f64,
    pub is_out: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismissal: Option<String>,
}

impl From<&BattingFigure> for BattingStat {
    fn from(f: &BattingFigure) -> Self {
        Self {
            player_id: f.player_id,
            runs: f.runs,
            balls: f.balls,
            fours: f.fours,
            sixes: f.sixes,
            strike_rate: round2(f.strike_rate()),
            is_out: f.is_out(),
            dismissal: f.dismissal.map(|k| k.label().to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BowlingStat {
    pub player_id: PlayerId,
    pub overs: BallCount,
    pub maidens: u32,
    pub runs: u32,
    pub wickets: u32,
    pub economy: f64,
    pub wides: u32,
    pub no_balls: u32,
}

impl From<&BowlingFigure> for BowlingStat {
    fn from(f: &BowlingFigure) -> Self {
        Self {
            player_id: f.player_id,
            overs: f.overs(),
            maidens: f.maidens,
            runs: f.runs_conceded,
            wickets: f.wickets,
            economy: round2(f.economy()),
            wides: f.wides,
            no_balls: f.no_balls,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InningsSnapshot {
    pub innings_id: InningsId,
    pub number: InningsNumber,
    pub batting_team_id: TeamId,
    pub bowling_team_id: TeamId,
    pub status: InningsStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion: Option<CompletionReason>,
    pub total_runs: u32,
    pub total_wickets: u8,
    pub total_overs: BallCount,
    pub extras: ExtrasSnapshot,
    pub current_run_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_run_rate: Option<RequiredRate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub striker_id: Option<PlayerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_striker_id: Option<PlayerId>,
    pub batting_stats: Vec<BattingStat>,
    pub bowling_stats: Vec<BowlingStat>,
    pub fall_of_wickets: Vec<FallOfWicket>,
    pub partnerships: Vec<Partnership>,
    pub overs: Vec<OverSummary>,
}

impl InningsSnapshot {
    pub fn of(state: &InningsState) -> Self {
        let chasing = state.target.filter(|_| state.status != InningsStatus::NotStarted);
        let required_run_rate = chasing.map(|t| {
            if state.is_completed() {
                RequiredRate::NotApplicable
            } else {
                match required_run_rate(t.runs, state.total_runs, state.count, t.overs) {
                    RequiredRate::Rate(r) => RequiredRate::Rate(round2(r)),
                    na => na,
                }
            }
        });
        let equation = chasing
            .filter(|_| !state.is_completed())
            .map(|t| ChaseEquation::new(t.runs, state.total_runs, state.count, t.overs).to_string());

        Self {
            innings_id: state.id,
            number: state.number,
            batting_team_id: state.batting_team_id,
            bowling_team_id: state.bowling_team_id,
            status: state.status,
            completion: state.completion,
            total_runs: state.total_runs,
            total_wickets: state.total_wickets,
            total_overs: state.count,
            extras: ExtrasSnapshot {
                total: state.extras.total(),
                breakdown: state.extras,
            },
            current_run_rate: round2(current_run_rate(state.total_runs, state.count)),
            target: state.target.map(|t| t.runs),
            required_run_rate,
            equation,
            striker_id: None,
            non_striker_id: None,
            batting_stats: state.batting.iter().map(BattingStat::from).collect(),
            bowling_stats: state.bowling.iter().map(BowlingStat::from).collect(),
            fall_of_wickets: state.fall_of_wickets.clone(),
            partnerships: state.partnerships.clone(),
            overs: state.overs.clone(),
        }
    }

    /// Snapshot including who is at the crease.
    pub fn of_progress(progress: &InningsProgress) -> Self {
        let mut snapshot = Self::of(&progress.state);
        if !progress.state.is_completed() {
            snapshot.striker_id = progress.crease.map(|c| c.striker);
            snapshot.non_striker_id = progress.crease.map(|c| c.non_striker);
        }
        snapshot
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSnapshot {
    pub match_id: MatchId,
    pub status: MatchStatus,
    pub current_innings: InningsNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toss: Option<Toss>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batting_first_id: Option<TeamId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_id: Option<TeamId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    pub innings: Vec<InningsSnapshot>,
}

impl MatchSnapshot {
    pub fn of(m: &Match, innings: &[InningsProgress]) -> Self {
        let result: Option<&MatchResult> = m.result.as_ref();
        Self {
            match_id: m.id,
            status: m.status,
            current_innings: m.current_innings,
            toss: m.toss,
            batting_first_id: m.batting_first_id,
            result_text: result.map(|r| r.text.clone()),
            winner_id: result.and_then(|r| r.winner_id),
            margin: result.and_then(|r| r.margin),
            innings: innings.iter().map(InningsSnapshot::of_progress).collect(),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
