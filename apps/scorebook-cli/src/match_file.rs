//! Match files: everything needed to rebuild a match from its delivery logs.
//!
//! ```json
//! {
//!   "matchId": 1,
//!   "format": "T20",
//!   "overs": 18,
//!   "teams": [{"id": 10, "name": "Mumbai Strikers", "shortName": "MUM"}, ...],
//!   "toss": {"winnerId": 10, "decision": "bat"},
//!   "innings": [{"inningsId": 1, "deliveries": [{"delivery": {...}, "incoming": {...}}]}]
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use scoring_engine::domain::{dedup, InningsId, LoggedDelivery, MatchFormat, MatchId};
use scoring_engine::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchFile {
    pub match_id: MatchId,
    pub format: MatchFormat,
    /// Reduced overs per innings for a curtailed match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    pub teams: [Team; 2],
    pub toss: Toss,
    #[serde(default)]
    pub innings: Vec<InningsFile>,
    /// Close the match after the recorded deliveries even if unfinished.
    #[serde(default)]
    pub abandoned: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InningsFile {
    pub innings_id: InningsId,
    #[serde(default)]
    pub deliveries: Vec<LoggedDelivery>,
}

impl MatchFile {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let reader = BufReader::new(File::open(path)?);
        let file: MatchFile = serde_json::from_reader(reader)?;
        debug!(match_id = file.match_id, innings = file.innings.len(), "Match file loaded");
        Ok(file)
    }

    pub fn rules(&self) -> Result<MatchRules, DomainError> {
        match self.overs {
            Some(overs) => MatchRules::curtailed(self.format, overs),
            None => Ok(MatchRules::for_format(self.format)),
        }
    }

    /// Rebuild the match by feeding every logged delivery through a session.
    ///
    /// Repeated submissions in a log are dropped before replay.
    pub fn replay(&self) -> Result<ScoringSession, DomainError> {
        let ids = [self.teams[0].id, self.teams[1].id];
        let mut game = Match::new(self.match_id, ids, self.rules()?)?;
        if let Some(venue) = &self.venue {
            game = game.with_venue(venue.clone());
        }

        let mut session = ScoringSession::new(game, self.teams.to_vec())?;
        session.record_toss(self.toss)?;

        for innings in &self.innings {
            session.start_innings(innings.innings_id)?;
            for entry in dedup(innings.deliveries.iter().cloned()) {
                session.record_delivery(entry)?;
            }
        }

        if self.abandoned && !session.game().is_completed() {
            session.abandon()?;
        }
        info!(
            match_id = self.match_id,
            status = ?session.game().status,
            "Match replayed"
        );
        Ok(session)
    }
}
