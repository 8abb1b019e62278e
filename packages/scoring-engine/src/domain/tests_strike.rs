//! Strike rotation: parity, over end, wickets.

use crate::domain::delivery::{DismissalKind, ExtraType};
use crate::domain::fixtures::DeliveryFixture;
use crate::domain::strike::{rotate, Crease, End, IncomingBatter};
use crate::errors::domain::ValidationKind;

const S: i64 = DeliveryFixture::STRIKER;
const N: i64 = DeliveryFixture::NON_STRIKER;

fn crease() -> Crease {
    Crease::new(S, N).unwrap()
}

fn swapped() -> Crease {
    Crease::new(N, S).unwrap()
}

#[test]
fn odd_runs_swap_even_runs_do_not() {
    for (runs, expected) in [(0, crease()), (1, swapped()), (2, crease()), (3, swapped()), (4, crease()), (6, crease())] {
        let d = DeliveryFixture::at(0, 1).runs(runs).build();
        assert_eq!(rotate(crease(), &d, false, None).unwrap(), expected, "runs {runs}");
    }
}

#[test]
fn penalty_run_is_not_run() {
    let cases = [
        (DeliveryFixture::at(0, 1).extra(ExtraType::Wide, 1), crease()),
        (DeliveryFixture::at(0, 1).extra(ExtraType::Wide, 2), swapped()),
        (DeliveryFixture::at(0, 1).extra(ExtraType::Wide, 5), crease()),
        (DeliveryFixture::at(0, 1).extra(ExtraType::NoBall, 1), crease()),
        (DeliveryFixture::at(0, 1).extra(ExtraType::NoBall, 1).runs(1), swapped()),
        (DeliveryFixture::at(0, 1).extra(ExtraType::NoBall, 2), swapped()),
    ];
    for (fixture, expected) in cases {
        let d = fixture.build();
        assert_eq!(rotate(crease(), &d, false, None).unwrap(), expected, "{d:?}");
    }
}

#[test]
fn byes_and_leg_byes_are_run() {
    for extra in [ExtraType::Bye, ExtraType::LegBye] {
        let d = DeliveryFixture::at(0, 1).extra(extra, 1).build();
        assert_eq!(rotate(crease(), &d, false, None).unwrap(), swapped());
        let d = DeliveryFixture::at(0, 1).extra(extra, 4).build();
        assert_eq!(rotate(crease(), &d, false, None).unwrap(), crease());
    }
}

#[test]
fn over_end_swaps_after_parity() {
    let dot = DeliveryFixture::at(0, 6).build();
    assert_eq!(rotate(crease(), &dot, true, None).unwrap(), swapped());

    let single = DeliveryFixture::at(0, 6).runs(1).build();
    assert_eq!(rotate(crease(), &single, true, None).unwrap(), crease());
}

#[test]
fn incoming_batter_takes_strikers_end_by_default() {
    let d = DeliveryFixture::at(0, 3)
        .wicket(DismissalKind::Caught, None, Some(30))
        .build();
    let next = rotate(crease(), &d, false, Some(IncomingBatter::new(3))).unwrap();
    assert_eq!(next, Crease::new(3, N).unwrap());
}

#[test]
fn wicket_on_last_ball_skips_over_swap() {
    let d = DeliveryFixture::at(4, 6)
        .wicket(DismissalKind::Bowled, None, None)
        .build();
    let next = rotate(crease(), &d, true, Some(IncomingBatter::new(3))).unwrap();
    assert_eq!(next, Crease::new(3, N).unwrap());

    // The scorer can still put the new batter at the other end.
    let next = rotate(crease(), &d, true, Some(IncomingBatter::at(3, End::NonStriker))).unwrap();
    assert_eq!(next, Crease::new(N, 3).unwrap());
}

#[test]
fn run_out_needs_the_vacated_end() {
    let d = DeliveryFixture::at(0, 2)
        .runs(1)
        .wicket(DismissalKind::RunOut, Some(N), Some(30))
        .build();

    let err = rotate(crease(), &d, false, Some(IncomingBatter::new(3))).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::MissingVacatedEnd));

    let next = rotate(crease(), &d, false, Some(IncomingBatter::at(3, End::Striker))).unwrap();
    assert_eq!(next, Crease::new(3, S).unwrap());

    let next = rotate(crease(), &d, false, Some(IncomingBatter::at(3, End::NonStriker))).unwrap();
    assert_eq!(next, Crease::new(S, 3).unwrap());
}

#[test]
fn wicket_requires_a_fresh_incoming_batter() {
    let d = DeliveryFixture::at(0, 1)
        .wicket(DismissalKind::Lbw, None, None)
        .build();

    let err = rotate(crease(), &d, false, None).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::MissingIncomingBatter));

    let err = rotate(crease(), &d, false, Some(IncomingBatter::new(N))).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::CreaseMismatch));
}

#[test]
fn delivery_must_match_the_crease() {
    let d = DeliveryFixture::at(0, 1).batters(N, S).build();
    let err = rotate(crease(), &d, false, None).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::CreaseMismatch));
}

#[test]
fn crease_rejects_same_player_twice() {
    let err = Crease::new(4, 4).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::StrikerIsNonStriker));
}
