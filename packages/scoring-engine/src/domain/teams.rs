//! Reference data owned by team management: teams and players.
//!
//! The engine never mutates these; it only reads names for result text and
//! ids for validation.

use serde::{Deserialize, Serialize};

use crate::domain::rules::MAX_SHORT_NAME_LEN;
use crate::domain::state::{PlayerId, TeamId};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl Team {
    /// Build a team, rejecting short names longer than four characters.
    pub fn new(
        id: TeamId,
        name: impl Into<String>,
        short_name: Option<String>,
    ) -> Result<Self, DomainError> {
        let team = Self {
            id,
            name: name.into(),
            short_name,
            logo: None,
        };
        team.validate()?;
        Ok(team)
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(short) = &self.short_name {
            if short.chars().count() > MAX_SHORT_NAME_LEN {
                return Err(DomainError::validation(
                    ValidationKind::InvalidShortName,
                    format!(
                        "Short name '{short}' exceeds {MAX_SHORT_NAME_LEN} characters"
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Name used in result text: short name when present, else the full name.
    pub fn display_name(&self) -> &str {
        match self.short_name.as_deref() {
            Some(short) if !short.trim().is_empty() => short,
            _ => &self.name,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerRole {
    Batsman,
    Bowler,
    AllRounder,
    WicketKeeper,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub team_id: TeamId,
    pub name: String,
    pub role: PlayerRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batting_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bowling_style: Option<String>,
}
