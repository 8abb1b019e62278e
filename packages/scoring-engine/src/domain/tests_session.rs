//! Scoring session: transitions, duplicates, undo and abandonment.

use crate::config::MatchRules;
use crate::domain::delivery::DismissalKind;
use crate::domain::lifecycle::CompletionReason;
use crate::domain::match_state::{Match, MatchStatus, Toss, TossDecision};
use crate::domain::replay::{replay_innings, InningsProgress};
use crate::domain::result::ResultKind;
use crate::domain::rules::MatchFormat;
use crate::domain::session::ScoringSession;
use crate::domain::strike::{Crease, IncomingBatter};
use crate::domain::teams::Team;
use crate::domain::test_gens::{delivery_for, first_innings_setup, BallEvent};
use crate::domain::transitions::MatchTransition;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};

const DOT: BallEvent = BallEvent::Bat(0);
const SINGLE: BallEvent = BallEvent::Bat(1);
const FOUR: BallEvent = BallEvent::Bat(4);
const SIX: BallEvent = BallEvent::Bat(6);
const OUT: BallEvent = BallEvent::Out(DismissalKind::Bowled);

/// One over a side keeps the flows short.
fn one_over_session(toss: bool) -> ScoringSession {
    let rules = MatchRules::curtailed(MatchFormat::T10, 1).unwrap();
    let game = Match::new(7, [10, 20], rules).unwrap();
    let teams = vec![
        Team::new(10, "Team A", None).unwrap(),
        Team::new(20, "Team B", None).unwrap(),
    ];
    let mut session = ScoringSession::new(game, teams).unwrap();
    if toss {
        session
            .record_toss(Toss {
                winner_id: 10,
                decision: TossDecision::Bat,
            })
            .unwrap();
    }
    session
}

fn ball(session: &mut ScoringSession, event: BallEvent) -> Vec<MatchTransition> {
    let entry = delivery_for(session.current().unwrap(), event);
    session.record_delivery(entry).unwrap()
}

#[test]
fn session_requires_both_teams() {
    let rules = MatchRules::for_format(MatchFormat::T20);
    let game = Match::new(1, [10, 20], rules).unwrap();
    let err = ScoringSession::new(game, vec![Team::new(10, "Team A", None).unwrap()]).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Team, _)));
}

#[test]
fn innings_needs_a_toss_and_deliveries_need_an_innings() {
    let mut session = one_over_session(false);
    let err = session.start_innings(1).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::PhaseMismatch));

    let mut session = one_over_session(true);
    let entry = delivery_for(&InningsProgress::new(first_innings_setup()), DOT);
    let err = session.record_delivery(entry).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::InningsNotStarted));
}

#[test]
fn transitions_follow_the_match() {
    let mut session = one_over_session(true);

    assert_eq!(
        session.start_innings(1).unwrap(),
        vec![MatchTransition::InningsStarted { number: 1 }]
    );
    assert_eq!(session.game().status, MatchStatus::Live);

    assert_eq!(
        ball(&mut session, OUT),
        vec![MatchTransition::WicketFell {
            number: 1,
            wickets: 1
        }]
    );
    for _ in 0..4 {
        assert!(ball(&mut session, DOT).is_empty());
    }
    assert_eq!(
        ball(&mut session, FOUR),
        vec![
            MatchTransition::OverCompleted {
                number: 1,
                overs: 1
            },
            MatchTransition::InningsCompleted {
                number: 1,
                reason: CompletionReason::OversExhausted
            },
            MatchTransition::TargetSet { runs: 5 },
        ]
    );

    let err = session.record_delivery(delivery_for(session.current().unwrap(), DOT));
    assert_eq!(
        err.unwrap_err().validation_kind(),
        Some(&ValidationKind::InningsCompleted)
    );

    assert_eq!(
        session.start_innings(2).unwrap(),
        vec![MatchTransition::InningsStarted { number: 2 }]
    );
    assert_eq!(session.current().unwrap().state.batting_team_id, 20);
    assert_eq!(
        ball(&mut session, SIX),
        vec![
            MatchTransition::InningsCompleted {
                number: 2,
                reason: CompletionReason::TargetReached
            },
            MatchTransition::MatchCompleted {
                winner_id: Some(20)
            },
        ]
    );

    let snapshot = session.snapshot();
    assert_eq!(snapshot.status, MatchStatus::Completed);
    assert_eq!(snapshot.current_innings, 2);
    assert_eq!(snapshot.result_text.as_deref(), Some("Team B won by 10 wickets"));
    assert_eq!(snapshot.winner_id, Some(20));
    assert_eq!(snapshot.innings.len(), 2);
}

#[test]
fn second_innings_waits_for_the_first() {
    let mut session = one_over_session(true);
    session.start_innings(1).unwrap();
    ball(&mut session, DOT);
    let err = session.start_innings(2).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::PhaseMismatch));
}

#[test]
fn duplicate_submission_is_a_conflict() {
    let mut session = one_over_session(true);
    session.start_innings(1).unwrap();

    let mut entry = delivery_for(session.current().unwrap(), FOUR);
    entry.delivery.sequence = Some(0);
    session.record_delivery(entry.clone()).unwrap();
    let before = session.current().unwrap().clone();

    let err = session.record_delivery(entry).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::DuplicateDelivery, _)
    ));
    assert_eq!(session.current().unwrap(), &before);
    assert_eq!(before.state.total_runs, 4);
}

#[test]
fn undo_refolds_the_remaining_log() {
    let mut session = one_over_session(true);
    session.start_innings(1).unwrap();
    ball(&mut session, SINGLE);
    ball(&mut session, OUT);
    ball(&mut session, FOUR);
    assert_eq!(session.current().unwrap().crease, Some(Crease::new(3, 1).unwrap()));

    let removed = session.undo_last().unwrap();
    assert_eq!(removed.delivery.runs, 4);

    let current = session.current().unwrap();
    let replayed = replay_innings(
        current.state.setup(),
        current.log.entries(),
        session.rules(),
    )
    .unwrap();
    assert_eq!(current.state, replayed.state);
    assert_eq!(current.state.total_runs, 1);
    assert_eq!(current.crease, Some(Crease::new(3, 1).unwrap()));

    let removed = session.undo_last().unwrap();
    assert!(removed.delivery.is_wicket());
    let current = session.current().unwrap();
    assert_eq!(current.state.total_wickets, 0);
    assert_eq!(current.crease, Some(Crease::new(2, 1).unwrap()));
    assert!(current.state.fall_of_wickets.is_empty());
}

#[test]
fn undo_without_deliveries_is_not_found() {
    let mut session = one_over_session(true);
    session.start_innings(1).unwrap();
    let err = session.undo_last().unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Delivery, _)));
}

#[test]
fn incoming_batter_must_be_available() {
    let mut session = one_over_session(true);
    session.start_innings(1).unwrap();
    ball(&mut session, OUT);
    assert_eq!(session.current().unwrap().crease, Some(Crease::new(3, 2).unwrap()));
    let before = session.current().unwrap().clone();

    // Opener 1 was bowled and cannot come back in.
    let mut entry = delivery_for(session.current().unwrap(), OUT);
    entry.incoming = Some(IncomingBatter::new(1));
    let err = session.record_delivery(entry).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::CreaseMismatch, _)
    ));
    assert_eq!(session.current().unwrap(), &before);

    let mut entry = delivery_for(session.current().unwrap(), OUT);
    entry.incoming = Some(IncomingBatter::new(entry.delivery.bowler));
    let err = session.record_delivery(entry).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::CreaseMismatch, _)
    ));
    assert_eq!(session.current().unwrap(), &before);

    ball(&mut session, OUT);
    let current = session.current().unwrap();
    assert_eq!(current.state.total_wickets, 2);
    assert_eq!(current.crease, Some(Crease::new(4, 2).unwrap()));
}

#[test]
fn undoing_the_winning_ball_reopens_the_match() {
    let mut session = one_over_session(true);
    session.start_innings(1).unwrap();
    for _ in 0..6 {
        ball(&mut session, DOT);
    }
    assert_eq!(session.target().map(|t| t.runs), Some(1));
    session.start_innings(2).unwrap();
    ball(&mut session, FOUR);
    assert!(session.game().is_completed());

    session.undo_last().unwrap();
    assert_eq!(session.game().status, MatchStatus::Live);
    assert!(session.game().result.is_none());
    assert!(!session.current().unwrap().state.is_completed());

    ball(&mut session, DOT);
    assert_eq!(session.current().unwrap().state.count.to_string(), "0.1");
}

#[test]
fn abandoning_before_the_reply_is_withdrawn() {
    let mut session = one_over_session(true);
    session.start_innings(1).unwrap();
    for _ in 0..6 {
        ball(&mut session, SINGLE);
    }
    let result = session.abandon().unwrap();
    assert_eq!(result.kind, ResultKind::Withdrawn);
    assert_eq!(session.game().status, MatchStatus::Completed);

    let err = session.start_innings(2).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::PhaseMismatch));
    assert!(session.abandon().is_err());
}
