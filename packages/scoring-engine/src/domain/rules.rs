use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

pub const BALLS_PER_OVER: u8 = 6;
pub const MAX_WICKETS: u8 = 10;
pub const MAX_SHORT_NAME_LEN: usize = 4;

/// Runs a batter can be credited with off the bat on one delivery.
pub const BAT_RUNS: [u8; 6] = [0, 1, 2, 3, 4, 6];

/// Limited-overs match formats and their canonical over counts.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum MatchFormat {
    T10,
    T20,
    #[serde(rename = "ODI")]
    Odi,
    Test,
    #[serde(rename = "The Hundred")]
    TheHundred,
}

impl MatchFormat {
    pub const ALL: [MatchFormat; 5] = [
        MatchFormat::T10,
        MatchFormat::T20,
        MatchFormat::Odi,
        MatchFormat::Test,
        MatchFormat::TheHundred,
    ];

    /// Overs per innings for this format.
    pub const fn overs(self) -> u32 {
        match self {
            MatchFormat::T10 => 10,
            MatchFormat::T20 => 20,
            MatchFormat::Odi => 50,
            MatchFormat::Test => 90,
            MatchFormat::TheHundred => 100,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MatchFormat::T10 => "T10",
            MatchFormat::T20 => "T20",
            MatchFormat::Odi => "ODI",
            MatchFormat::Test => "Test",
            MatchFormat::TheHundred => "The Hundred",
        }
    }
}

impl fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MatchFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "t10" => Ok(MatchFormat::T10),
            "t20" => Ok(MatchFormat::T20),
            "odi" => Ok(MatchFormat::Odi),
            "test" => Ok(MatchFormat::Test),
            "the hundred" | "hundred" => Ok(MatchFormat::TheHundred),
            _ => Err(DomainError::validation(
                ValidationKind::Other("UNKNOWN_FORMAT".into()),
                format!("Unknown match format: {s}"),
            )),
        }
    }
}

pub fn is_valid_bat_runs(runs: u8) -> bool {
    BAT_RUNS.contains(&runs)
}
