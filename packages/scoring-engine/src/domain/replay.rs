//! One innings as a log plus the state folded from it.
//!
//! The log is the source of truth. [`replay_innings`] rebuilds the state from
//! an empty innings, which is how a scorer recovers after a crash and how the
//! last delivery is undone.

use tracing::{debug, info};

use crate::config::MatchRules;
use crate::domain::delivery::Delivery;
use crate::domain::delivery_log::{DeliveryLog, LoggedDelivery};
use crate::domain::figures::BattingFigure;
use crate::domain::innings::{apply_delivery, DeliveryOutcome, InningsSetup, InningsState};
use crate::domain::lifecycle::{self, InningsStatus};
use crate::domain::over_counter::advance;
use crate::domain::strike::{rotate, Crease, IncomingBatter};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

#[derive(Debug, Clone, PartialEq)]
pub struct InningsProgress {
    pub state: InningsState,
    /// Batters facing the next delivery; `None` before the first ball and
    /// after a last wicket with nobody left to come in.
    pub crease: Option<Crease>,
    pub log: DeliveryLog,
}

impl InningsProgress {
    pub fn new(setup: InningsSetup) -> Self {
        Self {
            state: InningsState::new(setup),
            crease: None,
            log: DeliveryLog::new(),
        }
    }

    /// Explicit start, before any delivery.
    pub fn start(&mut self) -> Result<(), DomainError> {
        lifecycle::start(&mut self.state)
    }

    /// Validate, fold, rotate strike and log one delivery, all or nothing.
    pub fn record(
        &mut self,
        entry: LoggedDelivery,
        rules: &MatchRules,
    ) -> Result<DeliveryOutcome, DomainError> {
        let entry = self.log.prepare(entry)?;
        let delivery = &entry.delivery;

        let crease = match self.crease {
            Some(crease) => crease,
            None if self.log.is_empty() => Crease::new(delivery.striker, delivery.non_striker)?,
            None => {
                return Err(DomainError::validation(
                    ValidationKind::MissingIncomingBatter,
                    format!("Innings {} has no batters at the crease", self.state.id),
                ))
            }
        };

        if let (Some(_), Some(incoming)) = (delivery.wicket, entry.incoming) {
            check_incoming(&self.state, delivery, incoming)?;
        }

        let completes_over = advance(self.state.count, delivery).completed_over;
        let mut next = self.state.clone();
        let outcome = apply_delivery(&mut next, delivery, rules)?;

        // The last wicket of an innings needs no replacement.
        let next_crease = match (outcome.completed, delivery.wicket, entry.incoming) {
            (Some(_), Some(_), None) => {
                if delivery.striker != crease.striker || delivery.non_striker != crease.non_striker
                {
                    return Err(DomainError::validation(
                        ValidationKind::CreaseMismatch,
                        format!(
                            "Delivery names {}/{} but the crease is {}/{}",
                            delivery.striker,
                            delivery.non_striker,
                            crease.striker,
                            crease.non_striker
                        ),
                    ));
                }
                None
            }
            _ => Some(rotate(crease, delivery, completes_over, entry.incoming)?),
        };

        self.log.push(entry)?;
        self.state = next;
        self.crease = next_crease;
        Ok(outcome)
    }

    /// Drop the last delivery and re-fold the rest.
    pub fn undo_last(&mut self, rules: &MatchRules) -> Result<LoggedDelivery, DomainError> {
        let mut entries: Vec<LoggedDelivery> = self.log.entries().to_vec();
        let removed = entries.pop().ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Delivery,
                format!("Innings {} has no delivery to undo", self.state.id),
            )
        })?;

        let mut rebuilt = replay_innings(self.state.setup(), &entries, rules)?;
        if rebuilt.state.status == InningsStatus::NotStarted {
            rebuilt.start()?;
        }
        *self = rebuilt;
        info!(
            innings_id = self.state.id,
            over = removed.delivery.over_number,
            ball = removed.delivery.ball_number,
            "Delivery undone"
        );
        Ok(removed)
    }
}

/// A replacement batter must not have batted and got out already, and
/// cannot be the player bowling the delivery.
fn check_incoming(
    state: &InningsState,
    delivery: &Delivery,
    incoming: IncomingBatter,
) -> Result<(), DomainError> {
    let player = incoming.player_id;
    if state.batter(player).is_some_and(BattingFigure::is_out) {
        return Err(DomainError::validation(
            ValidationKind::CreaseMismatch,
            format!("Player {player} is already out and cannot come in"),
        ));
    }
    if player == delivery.bowler {
        return Err(DomainError::validation(
            ValidationKind::CreaseMismatch,
            format!("Player {player} is bowling and cannot come in"),
        ));
    }
    Ok(())
}

/// Fold a whole log from an empty innings.
///
/// Folding the same log twice yields identical state.
pub fn replay_innings(
    setup: InningsSetup,
    entries: &[LoggedDelivery],
    rules: &MatchRules,
) -> Result<InningsProgress, DomainError> {
    let mut progress = InningsProgress::new(setup);
    for entry in entries {
        progress.record(entry.clone(), rules)?;
    }
    debug!(
        innings_id = setup.id,
        deliveries = entries.len(),
        runs = progress.state.total_runs,
        wickets = progress.state.total_wickets,
        "Innings replayed"
    );
    Ok(progress)
}
