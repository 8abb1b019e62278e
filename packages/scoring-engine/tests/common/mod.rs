#![allow(dead_code)]

// tests/common/mod.rs
use scoring_engine::domain::fixtures::DeliveryFixture;
use scoring_engine::domain::PlayerId;
use scoring_engine::prelude::*;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    engine_test_support::logging::init();
}

pub const HOME: i64 = 10;
pub const AWAY: i64 = 20;

pub fn teams() -> Vec<Team> {
    vec![
        Team::new(HOME, "Mumbai Strikers", Some("MUM".into())).unwrap(),
        Team::new(AWAY, "Delhi Chargers", Some("DEL".into())).unwrap(),
    ]
}

/// Session with the toss recorded: `HOME` won it and chose to bat.
pub fn session(rules: MatchRules) -> ScoringSession {
    let game = Match::new(1, [HOME, AWAY], rules).unwrap();
    let mut session = ScoringSession::new(game, teams()).unwrap();
    session
        .record_toss(Toss {
            winner_id: HOME,
            decision: TossDecision::Bat,
        })
        .unwrap();
    session
}

/// Player ids for the side batting in innings `number`: openers are
/// `base + 1` and `base + 2`, the rest follow in order.
fn batting_base(number: u8) -> PlayerId {
    if number == 1 {
        100
    } else {
        200
    }
}

fn bowler(number: u8, over: u32) -> PlayerId {
    let fielding = if number == 1 { 200 } else { 100 };
    fielding + 7 + PlayerId::from(over % 4)
}

/// Fixture for the next delivery of the current innings, at the live crease
/// and count. `shape` fills in what happened on the ball.
pub fn next_ball(
    session: &ScoringSession,
    shape: impl FnOnce(DeliveryFixture) -> DeliveryFixture,
) -> LoggedDelivery {
    let progress = session.current().unwrap();
    let number = progress.state.number;
    let base = batting_base(number);
    let (striker, non_striker) = progress
        .crease
        .map(|c| (c.striker, c.non_striker))
        .unwrap_or((base + 1, base + 2));
    let count = progress.state.count;

    let fixture = DeliveryFixture::at(count.over, count.next_ball_number())
        .innings(progress.state.id)
        .batters(striker, non_striker)
        .bowler(bowler(number, count.over));
    let delivery = shape(fixture).build();

    let wickets = progress.state.total_wickets;
    match delivery.wicket {
        Some(_) if wickets < 9 => {
            let incoming = IncomingBatter::new(base + 3 + PlayerId::from(wickets));
            LoggedDelivery::with_incoming(delivery, incoming)
        }
        _ => LoggedDelivery::new(delivery),
    }
}

/// Bowl one delivery, panicking if the engine rejects it.
pub fn bowl(
    session: &mut ScoringSession,
    shape: impl FnOnce(DeliveryFixture) -> DeliveryFixture,
) -> Vec<MatchTransition> {
    let entry = next_ball(session, shape);
    session.record_delivery(entry).unwrap()
}

/// Bowl `n` balls with the same runs off the bat.
pub fn bowl_runs(session: &mut ScoringSession, runs: u8, n: usize) {
    for _ in 0..n {
        bowl(session, |f| f.runs(runs));
    }
}
