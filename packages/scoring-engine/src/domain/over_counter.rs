//! Over/ball counting in cricket notation.
//!
//! `12.4` means twelve completed overs plus four legal balls of the thirteenth.
//! It is notation, not a decimal: there is no `.6`, the sixth legal ball rolls
//! the count straight to the next whole over.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::delivery::Delivery;
use crate::domain::rules::BALLS_PER_OVER;
use crate::errors::domain::DomainError;

/// Legal-ball position within an innings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BallCount {
    /// Completed overs.
    pub over: u32,
    /// Legal balls bowled in the current over (0..=5).
    pub ball_in_over: u8,
}

/// Result of advancing the counter by one delivery.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverProgress {
    pub over: u32,
    pub ball_in_over: u8,
    /// `over + ball_in_over / 10`, for display only.
    pub overs_decimal: f64,
    /// True when this delivery was the sixth legal ball of its over.
    pub completed_over: bool,
}

impl BallCount {
    pub const fn new(over: u32, ball_in_over: u8) -> Self {
        Self { over, ball_in_over }
    }

    pub fn from_legal_balls(balls: u32) -> Self {
        let per_over = u32::from(BALLS_PER_OVER);
        Self {
            over: balls / per_over,
            ball_in_over: (balls % per_over) as u8,
        }
    }

    pub fn legal_balls(self) -> u32 {
        self.over * u32::from(BALLS_PER_OVER) + u32::from(self.ball_in_over)
    }

    pub fn overs_decimal(self) -> f64 {
        f64::from(self.over) + f64::from(self.ball_in_over) / 10.0
    }

    /// Overs as a true fraction (`12.4` is `12 + 4/6`), the divisor for rates.
    pub fn true_overs(self) -> f64 {
        f64::from(self.over) + f64::from(self.ball_in_over) / f64::from(BALLS_PER_OVER)
    }

    /// 1-based slot the next legal ball will occupy.
    pub fn next_ball_number(self) -> u8 {
        self.ball_in_over + 1
    }
}

impl fmt::Display for BallCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.over, self.ball_in_over)
    }
}

/// Advance the counter past `delivery`.
///
/// Wides and no-balls leave the count untouched.
pub fn advance(current: BallCount, delivery: &Delivery) -> OverProgress {
    if !delivery.is_legal() {
        return OverProgress {
            over: current.over,
            ball_in_over: current.ball_in_over,
            overs_decimal: current.overs_decimal(),
            completed_over: false,
        };
    }

    let ball_in_over = (current.ball_in_over + 1) % BALLS_PER_OVER;
    let completed_over = ball_in_over == 0;
    let over = if completed_over {
        current.over + 1
    } else {
        current.over
    };
    let next = BallCount::new(over, ball_in_over);

    OverProgress {
        over,
        ball_in_over,
        overs_decimal: next.overs_decimal(),
        completed_over,
    }
}

impl FromStr for BallCount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::validation_other(format!("Invalid over notation: {s}"));
        let (over, ball) = match s.trim().split_once('.') {
            Some((over, ball)) => (over, ball),
            None => (s.trim(), "0"),
        };
        let over: u32 = over.parse().map_err(|_| invalid())?;
        let ball_in_over: u8 = ball.parse().map_err(|_| invalid())?;
        if ball_in_over >= BALLS_PER_OVER {
            return Err(invalid());
        }
        Ok(BallCount::new(over, ball_in_over))
    }
}

// Serialized in over.ball notation ("12.4"), the form scorecards print.
impl Serialize for BallCount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BallCount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl From<OverProgress> for BallCount {
    fn from(p: OverProgress) -> Self {
        BallCount::new(p.over, p.ball_in_over)
    }
}
