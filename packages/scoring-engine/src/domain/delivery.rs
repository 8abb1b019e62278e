//! The atomic scoring event: one ball bowled.
//!
//! Deliveries arrive as loosely-typed [`DeliveryInput`] records (every id
//! optional, flags separate from the data they guard) and are validated once,
//! at the boundary, into a [`Delivery`]. Everything downstream works with the
//! validated form only, so a missing bowler or a caught-without-fielder can
//! never reach the accumulator.

use serde::{Deserialize, Serialize};

use crate::domain::rules::{is_valid_bat_runs, BALLS_PER_OVER};
use crate::domain::state::{InningsId, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtraType {
    #[default]
    None,
    Wide,
    #[serde(alias = "no_ball")]
    NoBall,
    Bye,
    #[serde(alias = "leg_bye")]
    LegBye,
}

impl ExtraType {
    /// Wides and no-balls never complete one of the six balls of an over.
    pub const fn is_legal(self) -> bool {
        !matches!(self, ExtraType::Wide | ExtraType::NoBall)
    }

    /// Extras charged to the bowler's analysis (byes and leg-byes are not).
    pub const fn charged_to_bowler(self) -> bool {
        matches!(self, ExtraType::Wide | ExtraType::NoBall)
    }

    /// Dismissals that can happen off this kind of delivery.
    pub fn allows(self, kind: DismissalKind) -> bool {
        match self {
            ExtraType::None => true,
            ExtraType::Wide => matches!(
                kind,
                DismissalKind::Stumped | DismissalKind::RunOut | DismissalKind::HitWicket
            ),
            ExtraType::NoBall | ExtraType::Bye | ExtraType::LegBye => {
                kind == DismissalKind::RunOut
            }
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissalKind {
    Bowled,
    Caught,
    Lbw,
    RunOut,
    Stumped,
    HitWicket,
}

impl DismissalKind {
    pub const fn requires_fielder(self) -> bool {
        matches!(
            self,
            DismissalKind::Caught | DismissalKind::RunOut | DismissalKind::Stumped
        )
    }

    /// Run-outs are credited to the fielding side, not the bowler.
    pub const fn credited_to_bowler(self) -> bool {
        !matches!(self, DismissalKind::RunOut)
    }

    pub const fn label(self) -> &'static str {
        match self {
            DismissalKind::Bowled => "bowled",
            DismissalKind::Caught => "caught",
            DismissalKind::Lbw => "lbw",
            DismissalKind::RunOut => "run out",
            DismissalKind::Stumped => "stumped",
            DismissalKind::HitWicket => "hit wicket",
        }
    }
}

/// Wicket details of a validated delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wicket {
    pub kind: DismissalKind,
    pub player_out: PlayerId,
    pub fielder: Option<PlayerId>,
}

/// Wire shape of a delivery as submitted by a scorer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryInput {
    pub innings_id: InningsId,
    pub over_number: u32,
    pub ball_number: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u32>,
    #[serde(default)]
    pub batsman_id: Option<PlayerId>,
    #[serde(default)]
    pub non_striker_id: Option<PlayerId>,
    #[serde(default)]
    pub bowler_id: Option<PlayerId>,
    #[serde(default)]
    pub runs: u8,
    #[serde(default)]
    pub extras: u8,
    #[serde(default)]
    pub extra_type: ExtraType,
    #[serde(default)]
    pub is_wicket: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wicket_type: Option<DismissalKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismissed_player_id: Option<PlayerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fielder_id: Option<PlayerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
}

/// A validated, immutable delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DeliveryInput", into = "DeliveryInput")]
pub struct Delivery {
    pub innings_id: InningsId,
    /// 0-based over the delivery was bowled in.
    pub over_number: u32,
    /// 1-based legal-ball slot the delivery was bowled at. A wide or no-ball
    /// carries the slot it failed to complete.
    pub ball_number: u8,
    pub sequence: Option<u32>,
    pub striker: PlayerId,
    pub non_striker: PlayerId,
    pub bowler: PlayerId,
    /// Runs off the bat.
    pub runs: u8,
    pub extra: ExtraType,
    pub extra_runs: u8,
    pub wicket: Option<Wicket>,
    pub commentary: Option<String>,
}

impl Delivery {
    pub fn is_legal(&self) -> bool {
        self.extra.is_legal()
    }

    /// Runs added to the team total.
    pub fn total_runs(&self) -> u32 {
        u32::from(self.runs) + u32::from(self.extra_runs)
    }

    /// Runs the batters physically ran (or hit), used for strike parity.
    ///
    /// The one-run penalty of a wide or no-ball is not run.
    pub fn runs_run(&self) -> u32 {
        match self.extra {
            ExtraType::Wide | ExtraType::NoBall => {
                u32::from(self.runs) + u32::from(self.extra_runs.saturating_sub(1))
            }
            ExtraType::None | ExtraType::Bye | ExtraType::LegBye => self.total_runs(),
        }
    }

    /// Runs charged against the bowler's analysis.
    pub fn bowler_runs(&self) -> u32 {
        if self.extra.charged_to_bowler() {
            self.total_runs()
        } else {
            u32::from(self.runs)
        }
    }

    /// Every delivery except a wide counts as a ball faced by the striker.
    pub fn faced_by_striker(&self) -> bool {
        self.extra != ExtraType::Wide
    }

    pub fn is_wicket(&self) -> bool {
        self.wicket.is_some()
    }

    pub fn bowler_wicket(&self) -> bool {
        self.wicket
            .map(|w| w.kind.credited_to_bowler())
            .unwrap_or(false)
    }
}

impl TryFrom<DeliveryInput> for Delivery {
    type Error = DomainError;

    fn try_from(input: DeliveryInput) -> Result<Self, Self::Error> {
        let striker = input.batsman_id.ok_or_else(|| {
            DomainError::validation(ValidationKind::MissingStriker, "Striker is required")
        })?;
        let non_striker = input.non_striker_id.ok_or_else(|| {
            DomainError::validation(
                ValidationKind::MissingNonStriker,
                "Non-striker is required",
            )
        })?;
        let bowler = input.bowler_id.ok_or_else(|| {
            DomainError::validation(ValidationKind::MissingBowler, "Bowler is required")
        })?;

        if striker == non_striker {
            return Err(DomainError::validation(
                ValidationKind::StrikerIsNonStriker,
                format!("Player {striker} cannot be both striker and non-striker"),
            ));
        }
        if bowler == striker || bowler == non_striker {
            return Err(DomainError::validation(
                ValidationKind::BowlerIsBatter,
                format!("Bowler {bowler} is one of the batters"),
            ));
        }

        if input.ball_number == 0 || input.ball_number > BALLS_PER_OVER {
            return Err(DomainError::validation(
                ValidationKind::OutOfOrder,
                format!("Ball number {} outside 1..=6", input.ball_number),
            ));
        }

        validate_runs(input.runs, input.extra_type, input.extras)?;
        let wicket = validate_wicket(&input, striker, non_striker)?;

        Ok(Delivery {
            innings_id: input.innings_id,
            over_number: input.over_number,
            ball_number: input.ball_number,
            sequence: input.sequence,
            striker,
            non_striker,
            bowler,
            runs: input.runs,
            extra: input.extra_type,
            extra_runs: input.extras,
            wicket,
            commentary: input.commentary,
        })
    }
}

impl From<Delivery> for DeliveryInput {
    fn from(d: Delivery) -> Self {
        DeliveryInput {
            innings_id: d.innings_id,
            over_number: d.over_number,
            ball_number: d.ball_number,
            sequence: d.sequence,
            batsman_id: Some(d.striker),
            non_striker_id: Some(d.non_striker),
            bowler_id: Some(d.bowler),
            runs: d.runs,
            extras: d.extra_runs,
            extra_type: d.extra,
            is_wicket: d.wicket.is_some(),
            wicket_type: d.wicket.map(|w| w.kind),
            dismissed_player_id: d.wicket.map(|w| w.player_out),
            fielder_id: d.wicket.and_then(|w| w.fielder),
            commentary: d.commentary,
        }
    }
}

fn validate_runs(runs: u8, extra: ExtraType, extras: u8) -> Result<(), DomainError> {
    if !is_valid_bat_runs(runs) {
        return Err(DomainError::validation(
            ValidationKind::InvalidRuns,
            format!("Runs off the bat must be one of 0,1,2,3,4,6 (got {runs})"),
        ));
    }

    match extra {
        ExtraType::None if extras != 0 => Err(DomainError::validation(
            ValidationKind::InvalidExtraRuns,
            "Extra runs recorded without an extra type",
        )),
        ExtraType::Wide | ExtraType::Bye | ExtraType::LegBye if runs != 0 => {
            Err(DomainError::validation(
                ValidationKind::InvalidRuns,
                format!("No runs off the bat on a {extra:?}"),
            ))
        }
        ExtraType::Wide | ExtraType::NoBall | ExtraType::Bye | ExtraType::LegBye
            if extras == 0 =>
        {
            Err(DomainError::validation(
                ValidationKind::InvalidExtraRuns,
                format!("A {extra:?} carries at least one extra run"),
            ))
        }
        _ => Ok(()),
    }
}

fn validate_wicket(
    input: &DeliveryInput,
    striker: PlayerId,
    non_striker: PlayerId,
) -> Result<Option<Wicket>, DomainError> {
    if !input.is_wicket {
        if input.wicket_type.is_some() || input.dismissed_player_id.is_some() {
            return Err(DomainError::validation(
                ValidationKind::UnexpectedDismissalKind,
                "Dismissal details on a delivery that is not a wicket",
            ));
        }
        if input.fielder_id.is_some() {
            return Err(DomainError::validation(
                ValidationKind::UnexpectedFielder,
                "Fielder on a delivery that is not a wicket",
            ));
        }
        return Ok(None);
    }

    let kind = input.wicket_type.ok_or_else(|| {
        DomainError::validation(
            ValidationKind::MissingDismissalKind,
            "Wicket requires a dismissal kind",
        )
    })?;

    if !input.extra_type.allows(kind) {
        return Err(DomainError::validation(
            ValidationKind::DismissalNotAllowed,
            format!(
                "Cannot be {} off a {:?}",
                kind.label(),
                input.extra_type
            ),
        ));
    }

    match (kind.requires_fielder(), input.fielder_id) {
        (true, None) => {
            return Err(DomainError::validation(
                ValidationKind::MissingFielder,
                format!("Dismissal '{}' requires a fielder", kind.label()),
            ))
        }
        (false, Some(_)) => {
            return Err(DomainError::validation(
                ValidationKind::UnexpectedFielder,
                format!("Dismissal '{}' has no fielder", kind.label()),
            ))
        }
        _ => {}
    }

    let player_out = match (kind, input.dismissed_player_id) {
        (DismissalKind::RunOut, None) => {
            return Err(DomainError::validation(
                ValidationKind::MissingDismissedPlayer,
                "Run-out requires the dismissed batter",
            ))
        }
        (DismissalKind::RunOut, Some(pid)) if pid == striker || pid == non_striker => pid,
        (_, None) => striker,
        (_, Some(pid)) if pid == striker => pid,
        (_, Some(pid)) => {
            return Err(DomainError::validation(
                ValidationKind::DismissedNotAtCrease,
                format!(
                    "Player {pid} cannot be dismissed {} (striker is {striker})",
                    kind.label()
                ),
            ))
        }
    };

    Ok(Some(Wicket {
        kind,
        player_out,
        fielder: input.fielder_id,
    }))
}
