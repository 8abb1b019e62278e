use crate::domain::lifecycle::{CompletionReason, InningsStatus};
use crate::domain::match_state::MatchStatus;
use crate::domain::state::{InningsNumber, TeamId};

/// The parts of a match that transitions are derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchLifecycleView {
    pub status: MatchStatus,
    pub current_innings: InningsNumber,
    pub innings_status: Option<InningsStatus>,
    pub completion: Option<CompletionReason>,
    pub wickets: u8,
    pub completed_overs: u32,
    pub target_runs: Option<u32>,
    pub winner_id: Option<TeamId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchTransition {
    /// Edge-triggered: an innings moved to InProgress.
    InningsStarted { number: InningsNumber },

    /// Edge-triggered: the wicket count went up.
    WicketFell { number: InningsNumber, wickets: u8 },

    /// Edge-triggered: the sixth legal ball of an over was bowled.
    OverCompleted { number: InningsNumber, overs: u32 },

    /// Edge-triggered: an innings moved to Completed.
    InningsCompleted {
        number: InningsNumber,
        reason: CompletionReason,
    },

    /// Edge-triggered: the chase target became known.
    TargetSet { runs: u32 },

    /// Edge-triggered: the match moved to Completed.
    MatchCompleted { winner_id: Option<TeamId> },
}

/// Derive match transitions from before/after lifecycle state.
pub fn derive_match_transitions(
    before: &MatchLifecycleView,
    after: &MatchLifecycleView,
) -> Vec<MatchTransition> {
    let mut transitions = Vec::new();
    let number = after.current_innings;
    let same_innings = before.current_innings == after.current_innings;

    // 1. Innings start (new innings, or NotStarted -> InProgress)
    if after.innings_status == Some(InningsStatus::InProgress)
        && (!same_innings || before.innings_status == Some(InningsStatus::NotStarted))
    {
        transitions.push(MatchTransition::InningsStarted { number });
    }

    // 2. Wicket
    if same_innings && after.wickets > before.wickets {
        transitions.push(MatchTransition::WicketFell {
            number,
            wickets: after.wickets,
        });
    }

    // 3. Over
    if same_innings && after.completed_overs > before.completed_overs {
        transitions.push(MatchTransition::OverCompleted {
            number,
            overs: after.completed_overs,
        });
    }

    // 4. Innings end
    if after.innings_status == Some(InningsStatus::Completed)
        && (!same_innings || before.innings_status != Some(InningsStatus::Completed))
    {
        if let Some(reason) = after.completion {
            transitions.push(MatchTransition::InningsCompleted { number, reason });
        }
    }

    // 5. Target
    if before.target_runs.is_none() {
        if let Some(runs) = after.target_runs {
            transitions.push(MatchTransition::TargetSet { runs });
        }
    }

    // 6. Match end
    if before.status != MatchStatus::Completed && after.status == MatchStatus::Completed {
        transitions.push(MatchTransition::MatchCompleted {
            winner_id: after.winner_id,
        });
    }

    transitions
}
