//! Single-writer scoring of one match.
//!
//! A [`ScoringSession`] owns the match, both innings and their delivery logs.
//! Every mutating call is synchronous and atomic: it either applies fully and
//! reports the transitions it caused, or fails and changes nothing. Callers
//! serving several clients serialize calls per match.

use tracing::{info, warn};

use crate::config::MatchRules;
use crate::domain::delivery_log::LoggedDelivery;
use crate::domain::innings::InningsSetup;
use crate::domain::lifecycle::{self, Target};
use crate::domain::match_state::{Match, MatchStatus, Toss};
use crate::domain::replay::InningsProgress;
use crate::domain::result::{evaluate_result, InningsScore, MatchResult};
use crate::domain::snapshot::MatchSnapshot;
use crate::domain::state::{InningsId, InningsNumber, TeamId};
use crate::domain::teams::Team;
use crate::domain::transitions::{derive_match_transitions, MatchLifecycleView, MatchTransition};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

#[derive(Debug, Clone)]
pub struct ScoringSession {
    game: Match,
    teams: Vec<Team>,
    innings: Vec<InningsProgress>,
    target: Option<Target>,
}

impl ScoringSession {
    /// Both of the match's teams must be present in `teams`.
    pub fn new(game: Match, teams: Vec<Team>) -> Result<Self, DomainError> {
        for id in game.teams {
            let team = teams.iter().find(|t| t.id == id).ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Team, format!("Team {id} not found"))
            })?;
            team.validate()?;
        }
        Ok(Self {
            game,
            teams,
            innings: Vec::new(),
            target: None,
        })
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    pub fn rules(&self) -> &MatchRules {
        &self.game.rules
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn target(&self) -> Option<Target> {
        self.target
    }

    pub fn innings(&self, number: InningsNumber) -> Option<&InningsProgress> {
        self.innings.get(usize::from(number).checked_sub(1)?)
    }

    pub fn current(&self) -> Option<&InningsProgress> {
        self.innings.last()
    }

    pub fn record_toss(&mut self, toss: Toss) -> Result<TeamId, DomainError> {
        self.game.record_toss(toss)
    }

    /// Open the next innings. The second carries the target set by the first.
    pub fn start_innings(
        &mut self,
        innings_id: InningsId,
    ) -> Result<Vec<MatchTransition>, DomainError> {
        self.ensure_not_completed()?;
        let number = self.innings.len() as InningsNumber + 1;
        if let Some(current) = self.current() {
            if !current.state.is_completed() {
                return Err(DomainError::validation(
                    ValidationKind::PhaseMismatch,
                    format!("Innings {} is still in progress", current.state.number),
                ));
            }
        }
        if self.innings.iter().any(|i| i.state.id == innings_id) {
            return Err(DomainError::validation(
                ValidationKind::InningsMismatch,
                format!("Innings id {innings_id} is already in use"),
            ));
        }
        let (batting_team_id, bowling_team_id) = self.game.sides(number)?;
        let target = if number == 2 { self.target } else { None };

        let before = self.view();
        let mut progress = InningsProgress::new(InningsSetup {
            id: innings_id,
            match_id: self.game.id,
            number,
            batting_team_id,
            bowling_team_id,
            target,
        });
        progress.start()?;
        self.innings.push(progress);
        self.game.begin_innings(number);

        Ok(derive_match_transitions(&before, &self.view()))
    }

    /// Record one delivery of the current innings.
    pub fn record_delivery(
        &mut self,
        entry: LoggedDelivery,
    ) -> Result<Vec<MatchTransition>, DomainError> {
        self.ensure_not_completed()?;
        let before = self.view();
        let rules = self.game.rules;

        let progress = self.innings.last_mut().ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InningsNotStarted,
                "No innings has been started",
            )
        })?;
        let outcome = progress.record(entry, &rules)?;
        let number = progress.state.number;

        if outcome.completed.is_some() {
            if number == 1 {
                let first = &self.innings[0].state;
                self.target = Some(lifecycle::target_from(first, &rules)?);
            } else {
                let result = self.evaluate()?;
                self.game.finish(result);
            }
        }

        Ok(derive_match_transitions(&before, &self.view()))
    }

    /// Drop the last delivery of the current innings and re-fold it.
    ///
    /// Re-opens the innings (and the match) if that delivery had ended it.
    pub fn undo_last(&mut self) -> Result<LoggedDelivery, DomainError> {
        let rules = self.game.rules;
        let progress = self.innings.last_mut().ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Innings, "No innings to undo a delivery in")
        })?;
        let removed = progress.undo_last(&rules)?;
        if progress.state.number == 1 {
            self.target = None;
        }
        if self.game.status == MatchStatus::Completed {
            warn!(match_id = self.game.id, "Completed match re-opened by undo");
            self.game.status = MatchStatus::Live;
            self.game.result = None;
        }
        Ok(removed)
    }

    /// End the match early. A side that has not batted makes it `withdrawn`.
    pub fn abandon(&mut self) -> Result<MatchResult, DomainError> {
        self.ensure_not_completed()?;
        let result = self.evaluate()?;
        info!(match_id = self.game.id, text = %result.text, "Match abandoned");
        self.game.finish(result.clone());
        Ok(result)
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::of(&self.game, &self.innings)
    }

    fn evaluate(&self) -> Result<MatchResult, DomainError> {
        let score = |n: InningsNumber| self.innings(n).map(|i| InningsScore::from(&i.state));
        evaluate_result(
            score(1).as_ref(),
            score(2).as_ref(),
            &self.teams,
            &self.game.rules,
        )
    }

    fn ensure_not_completed(&self) -> Result<(), DomainError> {
        if self.game.is_completed() {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                format!("Match {} is completed", self.game.id),
            ));
        }
        Ok(())
    }

    fn view(&self) -> MatchLifecycleView {
        let current = self.current().map(|i| &i.state);
        MatchLifecycleView {
            status: self.game.status,
            current_innings: self.game.current_innings,
            innings_status: current.map(|s| s.status),
            completion: current.and_then(|s| s.completion),
            wickets: current.map_or(0, |s| s.total_wickets),
            completed_overs: current.map_or(0, |s| s.count.over),
            target_runs: self.target.map(|t| t.runs),
            winner_id: self.game.result.as_ref().and_then(|r| r.winner_id),
        }
    }
}
