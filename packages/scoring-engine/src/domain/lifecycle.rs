//! Innings lifecycle: `NotStarted -> InProgress -> Completed`.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::MatchRules;
use crate::domain::innings::InningsState;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InningsStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// Why an innings ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionReason {
    TargetReached,
    AllOut,
    OversExhausted,
}

/// Chase parameters fixed when the first innings completes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub runs: u32,
    pub overs: u32,
    /// `runs / overs` at the start of the chase.
    pub required_run_rate: f64,
}

impl Target {
    pub fn new(runs: u32, overs: u32) -> Self {
        let required_run_rate = if overs == 0 {
            0.0
        } else {
            f64::from(runs) / f64::from(overs)
        };
        Self {
            runs,
            overs,
            required_run_rate,
        }
    }
}

/// Explicit "start innings" transition.
pub fn start(state: &mut InningsState) -> Result<(), DomainError> {
    match state.status {
        InningsStatus::NotStarted => {
            state.status = InningsStatus::InProgress;
            info!(
                innings_id = state.id,
                number = state.number,
                batting_team_id = state.batting_team_id,
                "Innings started"
            );
            Ok(())
        }
        InningsStatus::InProgress => Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("Innings {} is already in progress", state.number),
        )),
        InningsStatus::Completed => Err(DomainError::validation(
            ValidationKind::InningsCompleted,
            format!("Innings {} is completed", state.number),
        )),
    }
}

/// Reject deliveries against a completed innings.
///
/// A not-started innings accepts a delivery; the first delivery starts it.
pub fn ensure_accepting(state: &InningsState) -> Result<(), DomainError> {
    if state.status == InningsStatus::Completed {
        return Err(DomainError::validation(
            ValidationKind::InningsCompleted,
            format!(
                "Innings {} is completed ({:?}); no further deliveries",
                state.number, state.completion
            ),
        ));
    }
    Ok(())
}

/// Terminal condition reached by the current totals, if any.
///
/// A chase that reaches its target ends at that ball even if it also lost its
/// last wicket or used its last legal ball.
pub fn completion_reason(state: &InningsState, rules: &MatchRules) -> Option<CompletionReason> {
    if let Some(target) = state.target {
        if state.total_runs >= target.runs {
            return Some(CompletionReason::TargetReached);
        }
    }
    if state.total_wickets >= rules.max_wickets() {
        return Some(CompletionReason::AllOut);
    }
    if state.count.legal_balls() >= rules.total_legal_balls() {
        return Some(CompletionReason::OversExhausted);
    }
    None
}

pub fn complete(state: &mut InningsState, reason: CompletionReason) {
    state.status = InningsStatus::Completed;
    state.completion = Some(reason);
    if !state.partnership.is_empty() {
        state.partnerships.push(state.partnership.clone());
    }
    info!(
        innings_id = state.id,
        number = state.number,
        runs = state.total_runs,
        wickets = state.total_wickets,
        overs = %state.count,
        ?reason,
        "Innings completed"
    );
}

/// Target for the second innings: first-innings runs + 1 over the match overs.
pub fn target_from(first: &InningsState, rules: &MatchRules) -> Result<Target, DomainError> {
    if first.status != InningsStatus::Completed {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("Innings {} has not completed; no target yet", first.number),
        ));
    }
    let target = Target::new(first.total_runs + 1, rules.overs);
    info!(
        runs = target.runs,
        overs = target.overs,
        required_run_rate = target.required_run_rate,
        "Target set"
    );
    Ok(target)
}
