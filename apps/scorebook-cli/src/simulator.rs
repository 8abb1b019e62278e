//! In-memory match simulator.
//!
//! Generates random but valid deliveries and feeds every one of them through
//! a [`ScoringSession`], so a simulated match exercises exactly the same
//! validation and accumulation as a scored one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scoring_engine::domain::fixtures::DeliveryFixture;
use scoring_engine::domain::{End, InningsProgress, MatchId, PlayerId, TeamId};
use scoring_engine::prelude::*;

/// Squads are numbered `team * 100 + 1..=11`; the last five bowl.
const SQUAD: PlayerId = 11;
const FIRST_BOWLER: PlayerId = 7;
const BOWLERS: u32 = 5;

/// What the bowler and batters did on one ball, before it becomes a delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ball {
    Bat(u8),
    Wide(u8),
    NoBall(u8),
    Bye(u8),
    LegBye(u8),
    Out(DismissalKind),
    RunOut { non_striker_out: bool, vacated: End },
}

/// Result of simulating one match.
#[derive(Debug, Clone)]
pub struct SimulatedMatch {
    pub session: ScoringSession,
    pub seed: u64,
    /// Deliveries recorded across both innings, extras included.
    pub deliveries: usize,
}

pub struct Simulator {
    rng: StdRng,
    seed: u64,
    match_id: MatchId,
    rules: MatchRules,
}

impl Simulator {
    pub fn new(seed: u64, match_id: MatchId, rules: MatchRules) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            match_id,
            rules,
        }
    }

    /// Play a whole match: toss, both innings, result.
    pub fn simulate_match(mut self) -> Result<SimulatedMatch, SimulatorError> {
        let teams = vec![
            Team::new(1, "Home XI", Some("HOME".into()))?,
            Team::new(2, "Away XI", Some("AWAY".into()))?,
        ];
        let game = Match::new(self.match_id, [1, 2], self.rules)?;
        let mut session = ScoringSession::new(game, teams)?;

        let toss = Toss {
            winner_id: if self.rng.random_bool(0.5) { 1 } else { 2 },
            decision: if self.rng.random_bool(0.5) {
                TossDecision::Bat
            } else {
                TossDecision::Bowl
            },
        };
        session.record_toss(toss)?;

        let mut deliveries = 0;
        for innings_id in 1..=2 {
            session.start_innings(innings_id)?;
            deliveries += self.play_innings(&mut session)?;
            if session.game().is_completed() {
                break;
            }
        }

        if !session.game().is_completed() {
            return Err(SimulatorError::InvalidState(format!(
                "match {} did not finish after two innings",
                self.match_id
            )));
        }

        Ok(SimulatedMatch {
            session,
            seed: self.seed,
            deliveries,
        })
    }

    fn play_innings(&mut self, session: &mut ScoringSession) -> Result<usize, SimulatorError> {
        let mut bowled = 0;
        loop {
            let progress = session
                .current()
                .ok_or_else(|| SimulatorError::InvalidState("no innings in progress".into()))?;
            if progress.state.is_completed() {
                return Ok(bowled);
            }
            let ball = self.next_ball();
            let entry = self.delivery_for(progress, ball)?;
            session.record_delivery(entry)?;
            bowled += 1;
        }
    }

    fn next_ball(&mut self) -> Ball {
        let roll = self.rng.random_range(0..100u32);
        match roll {
            0..=33 => Ball::Bat(0),
            34..=61 => Ball::Bat(1),
            62..=69 => Ball::Bat(2),
            70 => Ball::Bat(3),
            71..=80 => Ball::Bat(4),
            81..=84 => Ball::Bat(6),
            85..=87 => Ball::Wide(1),
            88 => Ball::NoBall(self.rng.random_range(0..=1u8)),
            89 => Ball::Bye(1),
            90..=91 => Ball::LegBye(1),
            92..=93 => Ball::Out(DismissalKind::Bowled),
            94..=96 => Ball::Out(DismissalKind::Caught),
            97..=98 => Ball::Out(DismissalKind::Lbw),
            _ => Ball::RunOut {
                non_striker_out: self.rng.random_bool(0.3),
                vacated: if self.rng.random_bool(0.5) {
                    End::Striker
                } else {
                    End::NonStriker
                },
            },
        }
    }

    /// The delivery `ball` becomes at the live crease and count.
    fn delivery_for(
        &mut self,
        progress: &InningsProgress,
        ball: Ball,
    ) -> Result<LoggedDelivery, SimulatorError> {
        let state = &progress.state;
        let batting = squad_base(state.batting_team_id);
        let fielding = squad_base(state.bowling_team_id);
        let (striker, non_striker) = progress
            .crease
            .map(|c| (c.striker, c.non_striker))
            .unwrap_or((batting + 1, batting + 2));
        let count = state.count;
        let bowler = fielding + FIRST_BOWLER + PlayerId::from(count.over % BOWLERS);
        let fielder = fielding + self.rng.random_range(1..=SQUAD);

        let base = DeliveryFixture::at(count.over, count.next_ball_number())
            .innings(state.id)
            .batters(striker, non_striker)
            .bowler(bowler);

        let mut vacated_end = None;
        let fixture = match ball {
            Ball::Bat(runs) => base.runs(runs),
            Ball::Wide(extras) => base.extra(ExtraType::Wide, extras),
            Ball::NoBall(runs) => base.extra(ExtraType::NoBall, 1).runs(runs),
            Ball::Bye(extras) => base.extra(ExtraType::Bye, extras),
            Ball::LegBye(extras) => base.extra(ExtraType::LegBye, extras),
            Ball::Out(kind) => {
                let fielder = kind.requires_fielder().then_some(fielder);
                base.wicket(kind, None, fielder)
            }
            Ball::RunOut {
                non_striker_out,
                vacated,
            } => {
                vacated_end = Some(vacated);
                let out = if non_striker_out { non_striker } else { striker };
                base.runs(1)
                    .wicket(DismissalKind::RunOut, Some(out), Some(fielder))
            }
        };
        let delivery = Delivery::try_from(fixture.input())?;

        let wickets = state.total_wickets;
        let entry = if delivery.is_wicket() && wickets + 1 < self.rules.max_wickets() {
            let incoming = IncomingBatter {
                player_id: batting + 3 + PlayerId::from(wickets),
                vacated_end,
            };
            LoggedDelivery::with_incoming(delivery, incoming)
        } else {
            LoggedDelivery::new(delivery)
        };
        Ok(entry)
    }
}

fn squad_base(team: TeamId) -> PlayerId {
    team * 100
}

/// Errors that can occur during simulation.
#[derive(Debug)]
pub enum SimulatorError {
    /// The engine rejected a generated delivery or transition
    Domain(DomainError),
    /// The simulated match ended up somewhere it cannot continue from
    InvalidState(String),
}

impl std::fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulatorError::Domain(err) => write!(f, "Domain error: {err}"),
            SimulatorError::InvalidState(msg) => write!(f, "Invalid state: {msg}"),
        }
    }
}

impl std::error::Error for SimulatorError {}

impl From<DomainError> for SimulatorError {
    fn from(err: DomainError) -> Self {
        SimulatorError::Domain(err)
    }
}
