//! Property tests for over counting, wicket cap and strike parity.
//!
//! Properties tested:
//! - Over notation never decreases and never shows `.6`
//! - Legal balls equal the deliveries that are neither wides nor no-balls
//! - Wickets never exceed ten and the tenth ends the innings
//! - Odd runs swap strike, even runs keep it (no over end)

use proptest::prelude::*;

use crate::config::MatchRules;
use crate::domain::fixtures::DeliveryFixture;
use crate::domain::lifecycle::{CompletionReason, InningsStatus};
use crate::domain::over_counter::{advance, BallCount};
use crate::domain::rules::MatchFormat;
use crate::domain::strike::{rotate, Crease};
use crate::domain::test_gens::{ball_events, bat_runs, first_innings_setup, play_innings};
use crate::domain::test_prelude;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: over notation is monotonic and stays in 0..=5 balls
    #[test]
    fn prop_over_notation_monotonic(events in ball_events(160)) {
        let rules = MatchRules::for_format(MatchFormat::T20);
        let progress = play_innings(first_innings_setup(), &rules, &events);

        let mut count = BallCount::default();
        let mut last = 0.0_f64;
        for entry in progress.log.entries() {
            let p = advance(count, &entry.delivery);
            prop_assert!(p.ball_in_over < 6);
            prop_assert!(p.overs_decimal >= last);
            let tenths = ((p.overs_decimal - f64::from(p.over)) * 10.0).round();
            prop_assert!((0.0..=5.0).contains(&tenths));
            last = p.overs_decimal;
            count = p.into();
        }
        prop_assert_eq!(count, progress.state.count);
    }

    /// Property: wides and no-balls are excluded from the legal-ball count
    #[test]
    fn prop_legal_balls_exclude_wides_and_no_balls(events in ball_events(160)) {
        let rules = MatchRules::for_format(MatchFormat::T20);
        let progress = play_innings(first_innings_setup(), &rules, &events);

        let legal = progress
            .log
            .entries()
            .iter()
            .filter(|e| e.delivery.is_legal())
            .count() as u32;
        prop_assert_eq!(progress.state.count.legal_balls(), legal);
        let bowled: u32 = progress.state.bowling.iter().map(|b| b.legal_balls).sum();
        prop_assert_eq!(bowled, legal);
        prop_assert!(legal <= rules.total_legal_balls());
    }

    /// Property: wickets are capped at ten and the tenth completes the innings
    #[test]
    fn prop_wicket_cap(events in ball_events(200)) {
        let rules = MatchRules::for_format(MatchFormat::Odi);
        let progress = play_innings(first_innings_setup(), &rules, &events);
        let s = &progress.state;

        prop_assert!(s.total_wickets <= 10);
        prop_assert_eq!(s.fall_of_wickets.len(), usize::from(s.total_wickets));
        if s.total_wickets == 10 {
            prop_assert_eq!(s.status, InningsStatus::Completed);
            prop_assert_eq!(s.completion, Some(CompletionReason::AllOut));
        }
    }

    /// Property: runs total equals bat runs plus extras
    #[test]
    fn prop_total_is_bat_runs_plus_extras(events in ball_events(160)) {
        let rules = MatchRules::for_format(MatchFormat::T20);
        let progress = play_innings(first_innings_setup(), &rules, &events);
        let s = &progress.state;

        let bat: u32 = s.batting.iter().map(|b| b.runs).sum();
        prop_assert_eq!(s.total_runs, bat + s.extras.total());
        let partnerships: u32 = s.partnerships.iter().map(|p| p.runs).sum::<u32>()
            + if s.is_completed() { 0 } else { s.partnership.runs };
        prop_assert_eq!(partnerships, s.total_runs);
    }

    /// Property: strike parity on a legal ball that does not end the over
    #[test]
    fn prop_strike_parity(runs in bat_runs(), ball in 1u8..=5) {
        let crease = Crease::new(DeliveryFixture::STRIKER, DeliveryFixture::NON_STRIKER).unwrap();
        let d = DeliveryFixture::at(0, ball).runs(runs).build();
        let next = rotate(crease, &d, false, None).unwrap();
        if runs % 2 == 1 {
            prop_assert_eq!(next, crease.swapped());
        } else {
            prop_assert_eq!(next, crease);
        }
    }
}
