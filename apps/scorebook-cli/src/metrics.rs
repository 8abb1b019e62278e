//! Metrics collection for simulated matches.

use std::collections::BTreeMap;

use scoring_engine::domain::{CompletionReason, InningsSnapshot, ResultKind, TeamId};
use scoring_engine::ScoringSession;
use serde::Serialize;

/// Complete match metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct MatchMetrics {
    pub match_no: u32,
    pub seed: u64,
    pub timestamp: String,
    pub format: String,
    pub overs: u32,
    pub result: ResultMetrics,
    pub innings: Vec<InningsMetrics>,
    pub deliveries: usize,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultMetrics {
    pub kind: ResultKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner_id: Option<TeamId>,
    /// True when the side batting first won.
    pub defended: bool,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InningsMetrics {
    pub number: u8,
    pub batting_team_id: TeamId,
    pub runs: u32,
    pub wickets: u8,
    pub overs: String,
    pub extras: u32,
    pub run_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion: Option<CompletionReason>,
    pub maidens: u32,
    pub boundaries: u32,
}

impl From<&InningsSnapshot> for InningsMetrics {
    fn from(snap: &InningsSnapshot) -> Self {
        Self {
            number: snap.number,
            batting_team_id: snap.batting_team_id,
            runs: snap.total_runs,
            wickets: snap.total_wickets,
            overs: snap.total_overs.to_string(),
            extras: snap.extras.total,
            run_rate: snap.current_run_rate,
            completion: snap.completion,
            maidens: snap.bowling_stats.iter().map(|b| b.maidens).sum(),
            boundaries: snap
                .batting_stats
                .iter()
                .map(|b| b.fours + b.sixes)
                .sum(),
        }
    }
}

/// Build metrics from a finished session.
pub fn build_match_metrics(
    match_no: u32,
    seed: u64,
    session: &ScoringSession,
    deliveries: usize,
    duration_ms: f64,
) -> MatchMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let snapshot = session.snapshot();
    let innings: Vec<InningsMetrics> = snapshot.innings.iter().map(InningsMetrics::from).collect();

    let result = match session.game().result.as_ref() {
        Some(r) => ResultMetrics {
            kind: r.kind,
            winner_id: r.winner_id,
            defended: r.winner_id.is_some() && r.winner_id == session.game().batting_first_id,
            text: r.text.clone(),
        },
        None => ResultMetrics {
            kind: ResultKind::Withdrawn,
            winner_id: None,
            defended: false,
            text: String::from("No result"),
        },
    };

    MatchMetrics {
        match_no,
        seed,
        timestamp,
        format: session.rules().format.to_string(),
        overs: session.rules().overs,
        result,
        innings,
        deliveries,
        duration_ms,
    }
}

/// CSV summary row (flattened view of MatchMetrics).
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub match_no: u32,
    pub seed: u64,
    pub result: String,
    pub winner_id: Option<TeamId>,
    pub first_runs: u32,
    pub first_wickets: u8,
    pub first_overs: String,
    pub second_runs: Option<u32>,
    pub second_wickets: Option<u8>,
    pub second_overs: Option<String>,
    pub deliveries: usize,
}

impl From<&MatchMetrics> for CsvSummaryRow {
    fn from(m: &MatchMetrics) -> Self {
        let first = m.innings.first();
        let second = m.innings.get(1);
        Self {
            match_no: m.match_no,
            seed: m.seed,
            result: m.result.text.clone(),
            winner_id: m.result.winner_id,
            first_runs: first.map_or(0, |i| i.runs),
            first_wickets: first.map_or(0, |i| i.wickets),
            first_overs: first.map_or_else(String::new, |i| i.overs.clone()),
            second_runs: second.map(|i| i.runs),
            second_wickets: second.map(|i| i.wickets),
            second_overs: second.map(|i| i.overs.clone()),
            deliveries: m.deliveries,
        }
    }
}

/// Running totals across a simulation batch.
#[derive(Debug, Default)]
pub struct SimulationStats {
    pub matches: u32,
    pub ties: u32,
    pub no_results: u32,
    pub defended: u32,
    pub chased: u32,
    pub wins: BTreeMap<TeamId, u32>,
    first_innings_runs: u64,
    pub highest_total: u32,
}

impl SimulationStats {
    pub fn record(&mut self, m: &MatchMetrics) {
        self.matches += 1;
        match m.result.kind {
            ResultKind::Tied => self.ties += 1,
            ResultKind::Withdrawn => self.no_results += 1,
            ResultKind::Won => {
                if m.result.defended {
                    self.defended += 1;
                } else {
                    self.chased += 1;
                }
            }
        }
        if let Some(winner) = m.result.winner_id {
            *self.wins.entry(winner).or_default() += 1;
        }
        if let Some(first) = m.innings.first() {
            self.first_innings_runs += u64::from(first.runs);
        }
        for innings in &m.innings {
            self.highest_total = self.highest_total.max(innings.runs);
        }
    }

    pub fn avg_first_innings(&self) -> f64 {
        if self.matches == 0 {
            0.0
        } else {
            self.first_innings_runs as f64 / f64::from(self.matches)
        }
    }
}
