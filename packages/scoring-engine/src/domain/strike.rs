//! Strike rotation: which of the two not-out batters faces the next ball.

use serde::{Deserialize, Serialize};

use crate::domain::delivery::{Delivery, DismissalKind};
use crate::domain::state::PlayerId;
use crate::errors::domain::{DomainError, ValidationKind};

/// The two batters at the crease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crease {
    pub striker: PlayerId,
    pub non_striker: PlayerId,
}

impl Crease {
    pub fn new(striker: PlayerId, non_striker: PlayerId) -> Result<Self, DomainError> {
        if striker == non_striker {
            return Err(DomainError::validation(
                ValidationKind::StrikerIsNonStriker,
                format!("Player {striker} cannot open at both ends"),
            ));
        }
        Ok(Self {
            striker,
            non_striker,
        })
    }

    #[inline]
    pub fn swapped(self) -> Self {
        Self {
            striker: self.non_striker,
            non_striker: self.striker,
        }
    }

    #[inline]
    pub fn contains(self, player: PlayerId) -> bool {
        self.striker == player || self.non_striker == player
    }
}

/// End taken by the incoming batter, relative to the next delivery:
/// `Striker` means the new batter faces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum End {
    Striker,
    NonStriker,
}

/// Replacement for a dismissed batter, chosen by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingBatter {
    pub player_id: PlayerId,
    /// Required for run-outs; defaults to the striker's end otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vacated_end: Option<End>,
}

impl IncomingBatter {
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            vacated_end: None,
        }
    }

    pub fn at(player_id: PlayerId, end: End) -> Self {
        Self {
            player_id,
            vacated_end: Some(end),
        }
    }
}

/// Crease after `delivery`.
///
/// Order of application:
/// 1. odd runs run between the wickets swap ends;
/// 2. a wicket replaces the dismissed batter at the vacated end;
/// 3. the end of an over swaps ends, unless a wicket fell on that ball.
pub fn rotate(
    crease: Crease,
    delivery: &Delivery,
    ball_completes_over: bool,
    incoming: Option<IncomingBatter>,
) -> Result<Crease, DomainError> {
    if delivery.striker != crease.striker || delivery.non_striker != crease.non_striker {
        return Err(DomainError::validation(
            ValidationKind::CreaseMismatch,
            format!(
                "Delivery names {}/{} but the crease is {}/{}",
                delivery.striker, delivery.non_striker, crease.striker, crease.non_striker
            ),
        ));
    }

    let mut next = crease;
    if delivery.runs_run() % 2 == 1 {
        next = next.swapped();
    }

    if let Some(wicket) = delivery.wicket {
        let incoming = incoming.ok_or_else(|| {
            DomainError::validation(
                ValidationKind::MissingIncomingBatter,
                format!("Player {} is out; an incoming batter is required", wicket.player_out),
            )
        })?;
        if crease.contains(incoming.player_id) {
            return Err(DomainError::validation(
                ValidationKind::CreaseMismatch,
                format!("Player {} is already at the crease", incoming.player_id),
            ));
        }

        let vacated = match (wicket.kind, incoming.vacated_end) {
            (_, Some(end)) => end,
            (DismissalKind::RunOut, None) => {
                return Err(DomainError::validation(
                    ValidationKind::MissingVacatedEnd,
                    "Run-out requires the end the incoming batter takes",
                ))
            }
            (_, None) => End::Striker,
        };

        let survivor = if wicket.player_out == crease.striker {
            crease.non_striker
        } else {
            crease.striker
        };

        return Ok(match vacated {
            End::Striker => Crease {
                striker: incoming.player_id,
                non_striker: survivor,
            },
            End::NonStriker => Crease {
                striker: survivor,
                non_striker: incoming.player_id,
            },
        });
    }

    if ball_completes_over {
        next = next.swapped();
    }
    Ok(next)
}
