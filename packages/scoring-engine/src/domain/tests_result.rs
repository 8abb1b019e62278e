//! Result evaluation and wording.

use crate::config::MatchRules;
use crate::domain::result::{evaluate_result, InningsScore, Margin, ResultKind};
use crate::domain::rules::MatchFormat;
use crate::domain::teams::Team;

fn teams() -> Vec<Team> {
    vec![
        Team::new(10, "Team A", None).unwrap(),
        Team::new(20, "Team B", None).unwrap(),
    ]
}

fn score(team: i64, runs: u32, wickets: u8) -> InningsScore {
    InningsScore {
        batting_team_id: team,
        runs,
        wickets,
    }
}

fn t20() -> MatchRules {
    MatchRules::for_format(MatchFormat::T20)
}

#[test]
fn chase_wins_by_wickets_in_hand() {
    let r = evaluate_result(
        Some(&score(10, 150, 6)),
        Some(&score(20, 151, 4)),
        &teams(),
        &t20(),
    )
    .unwrap();
    assert_eq!(r.kind, ResultKind::Won);
    assert_eq!(r.winner_id, Some(20));
    assert_eq!(r.margin, Some(Margin::Wickets(6)));
    assert_eq!(r.text, "Team B won by 6 wickets");
}

#[test]
fn wicket_margin_is_at_least_one() {
    let r = evaluate_result(
        Some(&score(10, 150, 6)),
        Some(&score(20, 151, 10)),
        &teams(),
        &t20(),
    )
    .unwrap();
    assert_eq!(r.margin, Some(Margin::Wickets(1)));
    assert_eq!(r.text, "Team B won by 1 wicket");
}

#[test]
fn defence_wins_by_runs() {
    let r = evaluate_result(
        Some(&score(10, 180, 10)),
        Some(&score(20, 179, 7)),
        &teams(),
        &t20(),
    )
    .unwrap();
    assert_eq!(r.winner_id, Some(10));
    assert_eq!(r.text, "Team A won by 1 run");
}

#[test]
fn short_name_is_preferred() {
    let teams = vec![
        Team::new(10, "Mumbai Indians", Some("MI".into())).unwrap(),
        Team::new(20, "Chennai Super Kings", Some("CSK".into())).unwrap(),
    ];
    let r = evaluate_result(
        Some(&score(20, 200, 5)),
        Some(&score(10, 170, 9)),
        &teams,
        &t20(),
    )
    .unwrap();
    assert_eq!(r.text, "CSK won by 30 runs");
}

#[test]
fn equal_totals_tie_regardless_of_wickets() {
    let r = evaluate_result(
        Some(&score(10, 200, 5)),
        Some(&score(20, 200, 8)),
        &teams(),
        &t20(),
    )
    .unwrap();
    assert_eq!(r.kind, ResultKind::Tied);
    assert_eq!(r.winner_id, None);
    assert_eq!(r.text, "Match tied");
}

#[test]
fn either_side_missing_is_withdrawn() {
    for (first, second) in [
        (None, Some(score(20, 10, 0))),
        (Some(score(10, 10, 0)), None),
        (None, None),
    ] {
        let r = evaluate_result(first.as_ref(), second.as_ref(), &teams(), &t20()).unwrap();
        assert_eq!(r.kind, ResultKind::Withdrawn);
        assert_eq!(r.text, "Match withdrawn");
        assert_eq!(r.winner_id, None);
    }
}
