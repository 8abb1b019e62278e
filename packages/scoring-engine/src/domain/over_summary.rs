//! Ball-by-ball summary of each over, as shown under a live scorecard
//! (`1 4 Wd 0 W 6`).

use serde::{Deserialize, Serialize};

use crate::domain::delivery::{Delivery, ExtraType};
use crate::domain::rules::BALLS_PER_OVER;
use crate::domain::state::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverSummary {
    /// 0-based over number.
    pub over_number: u32,
    pub bowler: PlayerId,
    pub balls: Vec<String>,
    /// Runs added to the team total during the over.
    pub runs: u32,
    /// Runs charged to the bowler during the over.
    pub bowler_runs: u32,
    pub legal_balls: u8,
    pub wickets: u8,
    /// False once a second bowler finished someone else's over.
    pub single_bowler: bool,
}

impl OverSummary {
    pub fn new(over_number: u32, bowler: PlayerId) -> Self {
        Self {
            over_number,
            bowler,
            balls: Vec::with_capacity(BALLS_PER_OVER as usize),
            runs: 0,
            bowler_runs: 0,
            legal_balls: 0,
            wickets: 0,
            single_bowler: true,
        }
    }

    pub fn record(&mut self, delivery: &Delivery) {
        self.balls.push(ball_symbol(delivery));
        self.runs += delivery.total_runs();
        self.bowler_runs += delivery.bowler_runs();
        if delivery.is_legal() {
            self.legal_balls += 1;
        }
        if delivery.is_wicket() {
            self.wickets += 1;
        }
        if delivery.bowler != self.bowler {
            self.single_bowler = false;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.legal_balls >= BALLS_PER_OVER
    }

    /// A completed over, bowled by one bowler, with nothing charged to them.
    pub fn is_maiden(&self) -> bool {
        self.is_complete() && self.single_bowler && self.bowler_runs == 0
    }

    pub fn display(&self) -> String {
        self.balls.join(" ")
    }
}

/// Scorecard symbol for one delivery.
pub fn ball_symbol(delivery: &Delivery) -> String {
    if delivery.is_wicket() {
        return match delivery.total_runs() {
            0 => "W".to_string(),
            n => format!("{n}W"),
        };
    }
    let total = delivery.total_runs();
    match delivery.extra {
        ExtraType::None => delivery.runs.to_string(),
        ExtraType::Wide if total == 1 => "Wd".to_string(),
        ExtraType::Wide => format!("{total}Wd"),
        ExtraType::NoBall if total == 1 => "Nb".to_string(),
        ExtraType::NoBall => format!("{total}Nb"),
        ExtraType::Bye => format!("{total}B"),
        ExtraType::LegBye => format!("{total}Lb"),
    }
}
