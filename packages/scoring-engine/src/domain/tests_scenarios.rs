//! End-to-end match scenarios, ball by ball through a scoring session.

use std::iter::repeat;

use crate::config::MatchRules;
use crate::domain::delivery::DismissalKind;
use crate::domain::lifecycle::CompletionReason;
use crate::domain::match_state::{Match, MatchStatus, Toss, TossDecision};
use crate::domain::over_counter::BallCount;
use crate::domain::replay::InningsProgress;
use crate::domain::result::ResultKind;
use crate::domain::rules::MatchFormat;
use crate::domain::session::ScoringSession;
use crate::domain::teams::Team;
use crate::domain::test_gens::{delivery_for, first_innings_setup, BallEvent, OPENERS};

const DOT: BallEvent = BallEvent::Bat(0);
const SINGLE: BallEvent = BallEvent::Bat(1);
const FOUR: BallEvent = BallEvent::Bat(4);
const SIX: BallEvent = BallEvent::Bat(6);
const OUT: BallEvent = BallEvent::Out(DismissalKind::Bowled);

fn t20_session() -> ScoringSession {
    let game = Match::new(1, [10, 20], MatchRules::for_format(MatchFormat::T20)).unwrap();
    let teams = vec![
        Team::new(10, "Team A", None).unwrap(),
        Team::new(20, "Team B", None).unwrap(),
    ];
    let mut session = ScoringSession::new(game, teams).unwrap();
    session
        .record_toss(Toss {
            winner_id: 10,
            decision: TossDecision::Bat,
        })
        .unwrap();
    session
}

fn balls(plan: &[(BallEvent, usize)]) -> Vec<BallEvent> {
    plan.iter()
        .flat_map(|(event, n)| repeat(*event).take(*n))
        .collect()
}

fn bowl(session: &mut ScoringSession, events: &[BallEvent]) {
    for event in events {
        let entry = delivery_for(session.current().unwrap(), *event);
        session.record_delivery(entry).unwrap();
    }
}

fn play(first: &[(BallEvent, usize)], second: &[(BallEvent, usize)]) -> ScoringSession {
    let mut session = t20_session();
    session.start_innings(1).unwrap();
    bowl(&mut session, &balls(first));
    assert!(session.current().unwrap().state.is_completed());
    session.start_innings(2).unwrap();
    bowl(&mut session, &balls(second));
    session
}

#[test]
fn scenario_a_chase_won_by_wickets() {
    let session = play(
        &[(OUT, 6), (FOUR, 36), (SINGLE, 6), (DOT, 72)],
        &[(OUT, 4), (DOT, 73), (FOUR, 37), (SINGLE, 3)],
    );

    let first = &session.innings(1).unwrap().state;
    assert_eq!((first.total_runs, first.total_wickets), (150, 6));
    assert_eq!(first.count, BallCount::new(20, 0));
    assert_eq!(first.completion, Some(CompletionReason::OversExhausted));

    let second = &session.innings(2).unwrap().state;
    assert_eq!(second.target.map(|t| t.runs), Some(151));
    assert_eq!((second.total_runs, second.total_wickets), (151, 4));
    assert_eq!(second.count.to_string(), "19.3");
    assert_eq!(second.completion, Some(CompletionReason::TargetReached));

    let result = session.game().result.clone().unwrap();
    assert_eq!(result.text, "Team B won by 6 wickets");
    assert_eq!(result.winner_id, Some(20));
    assert_eq!(session.game().status, MatchStatus::Completed);
}

#[test]
fn scenario_b_defence_won_by_runs() {
    let session = play(
        &[(SIX, 30), (DOT, 78), (OUT, 10)],
        &[(SIX, 25), (DOT, 85), (OUT, 10)],
    );

    let first = &session.innings(1).unwrap().state;
    assert_eq!((first.total_runs, first.total_wickets), (180, 10));
    assert_eq!(first.count.to_string(), "19.4");
    assert_eq!(first.completion, Some(CompletionReason::AllOut));

    let second = &session.innings(2).unwrap().state;
    assert_eq!((second.total_runs, second.total_wickets), (150, 10));
    assert_eq!(second.count.to_string(), "20.0");

    let result = session.game().result.clone().unwrap();
    assert_eq!(result.text, "Team A won by 30 runs");
    assert_eq!(result.winner_id, Some(10));
}

#[test]
fn scenario_c_tie() {
    let session = play(
        &[(OUT, 5), (SIX, 33), (SINGLE, 2), (DOT, 80)],
        &[(OUT, 8), (SIX, 33), (SINGLE, 2), (DOT, 77)],
    );

    let first = &session.innings(1).unwrap().state;
    let second = &session.innings(2).unwrap().state;
    assert_eq!((first.total_runs, first.total_wickets), (200, 5));
    assert_eq!((second.total_runs, second.total_wickets), (200, 8));

    let result = session.game().result.clone().unwrap();
    assert_eq!(result.kind, ResultKind::Tied);
    assert_eq!(result.text, "Match tied");
    assert_eq!(result.winner_id, None);
}

#[test]
fn scenario_d_single_off_the_last_ball_keeps_strike() {
    let rules = MatchRules::for_format(MatchFormat::T20);
    let mut progress = InningsProgress::new(first_innings_setup());
    for _ in 0..5 {
        let entry = delivery_for(&progress, DOT);
        progress.record(entry, &rules).unwrap();
    }
    assert_eq!(progress.state.count.to_string(), "0.5");

    let entry = delivery_for(&progress, SINGLE);
    assert_eq!(entry.delivery.ball_number, 6);
    let outcome = progress.record(entry, &rules).unwrap();

    assert!(outcome.progress.completed_over);
    assert_eq!(progress.state.count.to_string(), "1.0");
    assert_eq!(progress.crease, Some(OPENERS));
}
