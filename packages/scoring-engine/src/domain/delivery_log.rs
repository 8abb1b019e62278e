//! Append-only delivery log with duplicate detection.
//!
//! Ball records may arrive more than once (a scorer retrying a submission).
//! Each carries an identity `(innings, over, ball, sequence)`; `sequence` is
//! the 0-based position of the delivery within its innings, so a wide and the
//! legal ball re-bowled after it share `(over, ball)` but never a key.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::delivery::Delivery;
use crate::domain::state::InningsId;
use crate::domain::strike::IncomingBatter;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeliveryKey {
    pub innings_id: InningsId,
    pub over: u32,
    pub ball: u8,
    pub sequence: u32,
}

impl DeliveryKey {
    /// Identity of a delivery; `None` when it carries no sequence.
    pub fn of(delivery: &Delivery) -> Option<Self> {
        delivery.sequence.map(|sequence| Self {
            innings_id: delivery.innings_id,
            over: delivery.over_number,
            ball: delivery.ball_number,
            sequence,
        })
    }
}

/// A delivery plus the scorer's choice of incoming batter when it took a wicket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedDelivery {
    pub delivery: Delivery,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incoming: Option<IncomingBatter>,
}

impl LoggedDelivery {
    pub fn new(delivery: Delivery) -> Self {
        Self {
            delivery,
            incoming: None,
        }
    }

    pub fn with_incoming(delivery: Delivery, incoming: IncomingBatter) -> Self {
        Self {
            delivery,
            incoming: Some(incoming),
        }
    }

    pub fn key(&self) -> Option<DeliveryKey> {
        DeliveryKey::of(&self.delivery)
    }
}

/// Deliveries of one innings in the order they were accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeliveryLog {
    entries: Vec<LoggedDelivery>,
}

impl DeliveryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LoggedDelivery] {
        &self.entries
    }

    pub fn last(&self) -> Option<&LoggedDelivery> {
        self.entries.last()
    }

    pub fn contains(&self, key: &DeliveryKey) -> bool {
        self.entries.iter().any(|e| e.key().as_ref() == Some(key))
    }

    /// Next sequence number to be assigned.
    pub fn next_sequence(&self) -> u32 {
        self.entries.len() as u32
    }

    /// Stamp `entry` with the next sequence if it has none, and check it.
    ///
    /// Rejects a key already in the log with `Conflict(DuplicateDelivery)`
    /// and any other sequence than the next one with `OutOfOrder`. Does not
    /// append; see [`DeliveryLog::push`].
    pub fn prepare(&self, mut entry: LoggedDelivery) -> Result<LoggedDelivery, DomainError> {
        let sequence = *entry
            .delivery
            .sequence
            .get_or_insert_with(|| self.next_sequence());

        if let Some(key) = entry.key() {
            if self.contains(&key) {
                return Err(DomainError::conflict(
                    ConflictKind::DuplicateDelivery,
                    format!(
                        "Delivery {}.{} (sequence {}) of innings {} already recorded",
                        key.over, key.ball, key.sequence, key.innings_id
                    ),
                ));
            }
        }
        if sequence != self.next_sequence() {
            return Err(DomainError::validation(
                ValidationKind::OutOfOrder,
                format!(
                    "Expected sequence {}, got {sequence}",
                    self.next_sequence()
                ),
            ));
        }
        Ok(entry)
    }

    /// Append a delivery that has already been folded into the innings.
    pub fn push(&mut self, entry: LoggedDelivery) -> Result<(), DomainError> {
        let entry = self.prepare(entry)?;
        self.entries.push(entry);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<LoggedDelivery> {
        self.entries.pop()
    }
}

impl From<DeliveryLog> for Vec<LoggedDelivery> {
    fn from(log: DeliveryLog) -> Self {
        log.entries
    }
}

/// Drop repeats from an at-least-once stream, keeping the first occurrence.
///
/// Entries without a sequence have no identity and are always kept.
pub fn dedup(entries: impl IntoIterator<Item = LoggedDelivery>) -> Vec<LoggedDelivery> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| match entry.key() {
            Some(key) if !seen.insert(key) => {
                warn!(
                    innings_id = key.innings_id,
                    over = key.over,
                    ball = key.ball,
                    sequence = key.sequence,
                    "Duplicate delivery dropped"
                );
                false
            }
            _ => true,
        })
        .collect()
}
