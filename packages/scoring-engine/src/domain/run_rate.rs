//! Current and required run rates.
//!
//! Rates divide by true overs (`12.4` is `12 + 4/6`), never by the over.ball
//! notation read as a decimal.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::over_counter::BallCount;
use crate::domain::rules::BALLS_PER_OVER;

/// Runs per over so far; 0 before the first legal ball.
pub fn current_run_rate(runs: u32, count: BallCount) -> f64 {
    let overs = count.true_overs();
    if overs <= 0.0 {
        return 0.0;
    }
    f64::from(runs) / overs
}

/// Required run rate, or `NotApplicable` once no overs remain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RequiredRate {
    Rate(f64),
    NotApplicable,
}

impl RequiredRate {
    pub fn value(self) -> Option<f64> {
        match self {
            RequiredRate::Rate(r) => Some(r),
            RequiredRate::NotApplicable => None,
        }
    }
}

impl fmt::Display for RequiredRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredRate::Rate(r) => write!(f, "{r:.2}"),
            RequiredRate::NotApplicable => f.write_str("N/A"),
        }
    }
}

// A number on the wire, or the string "N/A".
impl Serialize for RequiredRate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            RequiredRate::Rate(r) => serializer.serialize_f64(*r),
            RequiredRate::NotApplicable => serializer.serialize_str("N/A"),
        }
    }
}

impl<'de> Deserialize<'de> for RequiredRate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Rate(f64),
            Text(String),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Rate(r) => Ok(RequiredRate::Rate(r)),
            Wire::Text(s) if s.eq_ignore_ascii_case("n/a") => Ok(RequiredRate::NotApplicable),
            Wire::Text(s) => Err(serde::de::Error::custom(format!(
                "expected a number or \"N/A\", got {s:?}"
            ))),
        }
    }
}

/// Runs still needed per remaining over: `(target - runs) / (overs - true overs)`.
pub fn required_run_rate(target: u32, runs: u32, count: BallCount, overs: u32) -> RequiredRate {
    let remaining = f64::from(overs) - count.true_overs();
    if remaining <= 0.0 {
        return RequiredRate::NotApplicable;
    }
    let needed = target.saturating_sub(runs);
    RequiredRate::Rate(f64::from(needed) / remaining)
}

/// Runs and legal balls left in a chase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChaseEquation {
    pub runs_needed: u32,
    pub balls_remaining: u32,
}

impl ChaseEquation {
    pub fn new(target: u32, runs: u32, count: BallCount, overs: u32) -> Self {
        let total_balls = overs * u32::from(BALLS_PER_OVER);
        Self {
            runs_needed: target.saturating_sub(runs),
            balls_remaining: total_balls.saturating_sub(count.legal_balls()),
        }
    }
}

impl fmt::Display for ChaseEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let runs = if self.runs_needed == 1 { "run" } else { "runs" };
        let balls = if self.balls_remaining == 1 { "ball" } else { "balls" };
        write!(
            f,
            "Need {} {runs} from {} {balls}",
            self.runs_needed, self.balls_remaining
        )
    }
}
