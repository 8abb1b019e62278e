//! Output writers for replayed and simulated matches.

use crate::metrics::{CsvSummaryRow, MatchMetrics};
use flate2::write::GzEncoder;
use flate2::Compression;
use scoring_engine::domain::MatchSnapshot;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct SimulationWriter {
    jsonl_writer: Option<Box<dyn Write + Send>>,
    csv_writer: Option<csv::Writer<BufWriter<File>>>,
    jsonl_path: Option<PathBuf>,
    csv_path: Option<PathBuf>,
}

impl SimulationWriter {
    pub fn new(
        output_dir: &Path,
        jsonl: bool,
        compress: bool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        std::fs::create_dir_all(output_dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let (jsonl_writer, jsonl_path) = if jsonl {
            let filename = format!("simulation_{timestamp}.jsonl");
            if compress {
                let gz_path = output_dir.join(format!("{filename}.gz"));
                let writer: Box<dyn Write + Send> = Box::new(BufWriter::new(GzEncoder::new(
                    File::create(&gz_path)?,
                    Compression::default(),
                )));
                (Some(writer), Some(gz_path))
            } else {
                let path = output_dir.join(&filename);
                let writer: Box<dyn Write + Send> = Box::new(BufWriter::new(create(&path)?));
                (Some(writer), Some(path))
            }
        } else {
            (None, None)
        };

        // Always create CSV summary
        let csv_path = output_dir.join(format!("simulation_{timestamp}_summary.csv"));
        let csv_writer = csv::Writer::from_writer(BufWriter::new(create(&csv_path)?));

        Ok(Self {
            jsonl_writer,
            csv_writer: Some(csv_writer),
            jsonl_path,
            csv_path: Some(csv_path),
        })
    }

    pub fn write_match(&mut self, metrics: &MatchMetrics) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(ref mut writer) = self.jsonl_writer {
            let json = serde_json::to_string(metrics)?;
            writeln!(writer, "{json}")?;
        }

        if let Some(ref mut writer) = self.csv_writer {
            let row: CsvSummaryRow = metrics.into();
            writer.serialize(&row)?;
        }

        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(ref mut writer) = self.jsonl_writer {
            writer.flush()?;
        }
        if let Some(ref mut writer) = self.csv_writer {
            writer.flush()?;
        }
        Ok(())
    }

    pub fn output_paths(&self) -> (Option<&PathBuf>, Option<&PathBuf>) {
        (self.jsonl_path.as_ref(), self.csv_path.as_ref())
    }
}

/// One line of a scorecard CSV: a batting or a bowling entry.
#[derive(Debug, Serialize)]
struct ScorecardRow {
    innings: u8,
    section: &'static str,
    player_id: i64,
    runs: u32,
    balls: Option<u32>,
    fours: Option<u32>,
    sixes: Option<u32>,
    strike_rate: Option<f64>,
    dismissal: Option<String>,
    overs: Option<String>,
    maidens: Option<u32>,
    wickets: Option<u32>,
    economy: Option<f64>,
}

pub fn write_snapshot_json(path: &Path, snapshot: &MatchSnapshot) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = BufWriter::new(create(path)?);
    serde_json::to_writer_pretty(&mut writer, snapshot)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn write_scorecard_csv(path: &Path, snapshot: &MatchSnapshot) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_writer(BufWriter::new(create(path)?));
    for innings in &snapshot.innings {
        for b in &innings.batting_stats {
            writer.serialize(ScorecardRow {
                innings: innings.number,
                section: "batting",
                player_id: b.player_id,
                runs: b.runs,
                balls: Some(b.balls),
                fours: Some(b.fours),
                sixes: Some(b.sixes),
                strike_rate: Some(b.strike_rate),
                dismissal: Some(b.dismissal.clone().unwrap_or_else(|| "not out".into())),
                overs: None,
                maidens: None,
                wickets: None,
                economy: None,
            })?;
        }
        for b in &innings.bowling_stats {
            writer.serialize(ScorecardRow {
                innings: innings.number,
                section: "bowling",
                player_id: b.player_id,
                runs: b.runs,
                balls: None,
                fours: None,
                sixes: None,
                strike_rate: None,
                dismissal: None,
                overs: Some(b.overs.to_string()),
                maidens: Some(b.maidens),
                wickets: Some(b.wickets),
                economy: Some(b.economy),
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn create(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}
