//! Per-match playing conditions consumed by the innings lifecycle.

use serde::{Deserialize, Serialize};

use crate::domain::rules::{MatchFormat, BALLS_PER_OVER, MAX_WICKETS};
use crate::errors::domain::{DomainError, ValidationKind};

/// Overs per innings for a match: the format's canonical count, or fewer for
/// a curtailed (e.g. rain-shortened) match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRules {
    pub format: MatchFormat,
    pub overs: u32,
}

impl MatchRules {
    pub const fn for_format(format: MatchFormat) -> Self {
        Self {
            format,
            overs: format.overs(),
        }
    }

    /// Reduced-overs conditions; `overs` must be in `1..=format.overs()`.
    pub fn curtailed(format: MatchFormat, overs: u32) -> Result<Self, DomainError> {
        if overs == 0 || overs > format.overs() {
            return Err(DomainError::validation(
                ValidationKind::InvalidOvers,
                format!(
                    "{format} innings can be curtailed to 1..={} overs, got {overs}",
                    format.overs()
                ),
            ));
        }
        Ok(Self { format, overs })
    }

    pub fn is_curtailed(&self) -> bool {
        self.overs < self.format.overs()
    }

    pub fn total_legal_balls(&self) -> u32 {
        self.overs * u32::from(BALLS_PER_OVER)
    }

    pub const fn max_wickets(&self) -> u8 {
        MAX_WICKETS
    }
}

impl From<MatchFormat> for MatchRules {
    fn from(format: MatchFormat) -> Self {
        Self::for_format(format)
    }
}
