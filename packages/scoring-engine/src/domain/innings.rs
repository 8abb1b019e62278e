//! Innings accumulator: folds deliveries into running totals.
//!
//! [`apply_delivery`] validates the delivery against the innings before
//! touching anything, then applies it in one infallible pass. A rejected
//! delivery therefore never leaves a half-updated innings behind.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::MatchRules;
use crate::domain::delivery::{Delivery, ExtraType};
use crate::domain::figures::{
    figure_mut, BattingFigure, BowlingFigure, FallOfWicket, Partnership,
};
use crate::domain::lifecycle::{self, CompletionReason, InningsStatus, Target};
use crate::domain::over_counter::{advance, BallCount, OverProgress};
use crate::domain::over_summary::OverSummary;
use crate::domain::state::{InningsId, InningsNumber, MatchId, PlayerId, TeamId};
use crate::errors::domain::{DomainError, ValidationKind};

/// Fixed facts of an innings, known before the first ball.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InningsSetup {
    pub id: InningsId,
    pub match_id: MatchId,
    pub number: InningsNumber,
    pub batting_team_id: TeamId,
    pub bowling_team_id: TeamId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,
}

/// Extras conceded, by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extras {
    pub wides: u32,
    pub no_balls: u32,
    pub byes: u32,
    pub leg_byes: u32,
}

impl Extras {
    pub fn total(&self) -> u32 {
        self.wides + self.no_balls + self.byes + self.leg_byes
    }
}

/// Running state of one innings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InningsState {
    pub id: InningsId,
    pub match_id: MatchId,
    pub number: InningsNumber,
    pub batting_team_id: TeamId,
    pub bowling_team_id: TeamId,
    pub status: InningsStatus,
    pub completion: Option<CompletionReason>,
    pub total_runs: u32,
    pub total_wickets: u8,
    pub count: BallCount,
    pub extras: Extras,
    pub target: Option<Target>,
    /// Batters in order of appearance.
    pub batting: Vec<BattingFigure>,
    /// Bowlers in order of appearance.
    pub bowling: Vec<BowlingFigure>,
    pub fall_of_wickets: Vec<FallOfWicket>,
    /// Current, not yet broken partnership.
    pub partnership: Partnership,
    /// Completed partnerships, in order.
    pub partnerships: Vec<Partnership>,
    pub overs: Vec<OverSummary>,
    /// Number of deliveries applied, legal or not.
    pub deliveries: u32,
}

/// What a single delivery did to the innings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeliveryOutcome {
    pub progress: OverProgress,
    pub wicket_fell: bool,
    /// Set when this delivery ended the innings.
    pub completed: Option<CompletionReason>,
}

impl InningsState {
    pub fn new(setup: InningsSetup) -> Self {
        Self {
            id: setup.id,
            match_id: setup.match_id,
            number: setup.number,
            batting_team_id: setup.batting_team_id,
            bowling_team_id: setup.bowling_team_id,
            status: InningsStatus::NotStarted,
            completion: None,
            total_runs: 0,
            total_wickets: 0,
            count: BallCount::default(),
            extras: Extras::default(),
            target: setup.target,
            batting: Vec::new(),
            bowling: Vec::new(),
            fall_of_wickets: Vec::new(),
            partnership: Partnership::default(),
            partnerships: Vec::new(),
            overs: Vec::new(),
            deliveries: 0,
        }
    }

    pub fn setup(&self) -> InningsSetup {
        InningsSetup {
            id: self.id,
            match_id: self.match_id,
            number: self.number,
            batting_team_id: self.batting_team_id,
            bowling_team_id: self.bowling_team_id,
            target: self.target,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == InningsStatus::Completed
    }

    pub fn batter(&self, player: PlayerId) -> Option<&BattingFigure> {
        self.batting.iter().find(|f| f.player_id == player)
    }

    pub fn bowler(&self, player: PlayerId) -> Option<&BowlingFigure> {
        self.bowling.iter().find(|f| f.player_id == player)
    }

    /// The over currently being bowled, if one is open.
    pub fn current_over(&self) -> Option<&OverSummary> {
        self.overs.last().filter(|o| !o.is_complete())
    }
}

/// Pure form of the fold: `state'` = `state` + `delivery`.
pub fn apply(
    state: &InningsState,
    delivery: &Delivery,
    rules: &MatchRules,
) -> Result<InningsState, DomainError> {
    let mut next = state.clone();
    apply_delivery(&mut next, delivery, rules)?;
    Ok(next)
}

/// Check that `delivery` may be appended to `state`, without mutating it.
pub fn validate_against(state: &InningsState, delivery: &Delivery) -> Result<(), DomainError> {
    if delivery.innings_id != state.id {
        return Err(DomainError::validation(
            ValidationKind::InningsMismatch,
            format!(
                "Delivery is for innings {}, not {}",
                delivery.innings_id, state.id
            ),
        ));
    }

    lifecycle::ensure_accepting(state)?;

    let expected_ball = state.count.next_ball_number();
    if delivery.over_number != state.count.over || delivery.ball_number != expected_ball {
        return Err(DomainError::validation(
            ValidationKind::OutOfOrder,
            format!(
                "Expected delivery at over {} ball {}, got over {} ball {}",
                state.count.over, expected_ball, delivery.over_number, delivery.ball_number
            ),
        ));
    }

    for batter in [delivery.striker, delivery.non_striker] {
        if state.batter(batter).is_some_and(BattingFigure::is_out) {
            return Err(DomainError::validation(
                ValidationKind::CreaseMismatch,
                format!("Player {batter} is already out"),
            ));
        }
    }

    Ok(())
}

/// Fold one delivery into the innings.
pub fn apply_delivery(
    state: &mut InningsState,
    delivery: &Delivery,
    rules: &MatchRules,
) -> Result<DeliveryOutcome, DomainError> {
    validate_against(state, delivery)?;

    if state.status == InningsStatus::NotStarted {
        lifecycle::start(state)?;
    }

    let progress = advance(state.count, delivery);
    let legal = delivery.is_legal();
    let runs = delivery.total_runs();

    state.total_runs += runs;
    match delivery.extra {
        ExtraType::None => {}
        ExtraType::Wide => state.extras.wides += u32::from(delivery.extra_runs),
        ExtraType::NoBall => state.extras.no_balls += u32::from(delivery.extra_runs),
        ExtraType::Bye => state.extras.byes += u32::from(delivery.extra_runs),
        ExtraType::LegBye => state.extras.leg_byes += u32::from(delivery.extra_runs),
    }

    {
        let striker = figure_mut(
            &mut state.batting,
            delivery.striker,
            |f| f.player_id,
            BattingFigure::new,
        );
        if delivery.faced_by_striker() {
            striker.balls += 1;
        }
        striker.runs += u32::from(delivery.runs);
        match delivery.runs {
            4 => striker.fours += 1,
            6 => striker.sixes += 1,
            _ => {}
        }
    }
    figure_mut(
        &mut state.batting,
        delivery.non_striker,
        |f| f.player_id,
        BattingFigure::new,
    );

    {
        let bowler = figure_mut(
            &mut state.bowling,
            delivery.bowler,
            |f| f.player_id,
            BowlingFigure::new,
        );
        if legal {
            bowler.legal_balls += 1;
        }
        bowler.runs_conceded += delivery.bowler_runs();
        match delivery.extra {
            ExtraType::Wide => bowler.wides += 1,
            ExtraType::NoBall => bowler.no_balls += 1,
            _ => {}
        }
        if delivery.bowler_wicket() {
            bowler.wickets += 1;
        }
    }

    record_over(state, delivery);

    if state.partnership.batters.is_none() {
        state.partnership.batters = Some((delivery.striker, delivery.non_striker));
    }
    state.partnership.runs += runs;
    if legal {
        state.partnership.balls += 1;
    }

    state.count = progress.into();
    state.deliveries += 1;

    if let Some(wicket) = delivery.wicket {
        state.total_wickets += 1;
        if let Some(fig) = state
            .batting
            .iter_mut()
            .find(|f| f.player_id == wicket.player_out)
        {
            fig.dismissal = Some(wicket.kind);
        }
        state.fall_of_wickets.push(FallOfWicket {
            wicket_number: state.total_wickets,
            score: state.total_runs,
            overs: state.count,
            player_id: wicket.player_out,
        });
        let completed = std::mem::take(&mut state.partnership);
        state.partnerships.push(completed);
        info!(
            innings_id = state.id,
            wicket = state.total_wickets,
            score = state.total_runs,
            overs = %state.count,
            player_out = wicket.player_out,
            kind = wicket.kind.label(),
            "Wicket"
        );
    }

    check_invariants(state, rules);

    let completed = lifecycle::completion_reason(state, rules);
    if let Some(reason) = completed {
        lifecycle::complete(state, reason);
    }

    debug!(
        innings_id = state.id,
        over = delivery.over_number,
        ball = delivery.ball_number,
        runs,
        total = state.total_runs,
        "Delivery applied"
    );

    Ok(DeliveryOutcome {
        progress,
        wicket_fell: delivery.is_wicket(),
        completed,
    })
}

fn record_over(state: &mut InningsState, delivery: &Delivery) {
    let needs_new = state.overs.last().map_or(true, OverSummary::is_complete);
    if needs_new {
        state
            .overs
            .push(OverSummary::new(delivery.over_number, delivery.bowler));
    }
    let Some(over) = state.overs.last_mut() else {
        return;
    };
    over.record(delivery);

    if over.is_maiden() {
        let bowler = over.bowler;
        figure_mut(&mut state.bowling, bowler, |f| f.player_id, BowlingFigure::new).maidens += 1;
    }
}

/// Hard invariants; validated input can never break them.
fn check_invariants(state: &InningsState, rules: &MatchRules) {
    assert!(
        state.total_wickets <= rules.max_wickets(),
        "Invariant violated: {} wickets in innings {}",
        state.total_wickets,
        state.id
    );
    assert!(
        state.count.legal_balls() <= rules.total_legal_balls(),
        "Invariant violated: {} beyond {} overs in innings {}",
        state.count,
        rules.overs,
        state.id
    );
}
