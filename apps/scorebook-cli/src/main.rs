//! Scorebook CLI - replay scored matches and simulate new ones.
//!
//! Both subcommands run entirely in memory through the scoring engine: a
//! replayed match is rebuilt from its delivery logs, a simulated one is
//! scored ball by ball from random but valid deliveries.

mod match_file;
mod metrics;
mod output;
mod simulator;
mod types;

use clap::{Parser, Subcommand};
use match_file::MatchFile;
use metrics::{build_match_metrics, SimulationStats};
use output::{write_scorecard_csv, write_snapshot_json, SimulationWriter};
use scoring_engine::domain::{MatchFormat, MatchSnapshot};
use scoring_engine::MatchRules;
use simulator::Simulator;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};
use types::{FormatArg, OutputFormat};

#[derive(Parser)]
#[command(name = "scorebook")]
#[command(about = "Ball-by-ball cricket scorebook")]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log through the engine's structured subscriber (SCORING_LOG, SCORING_LOG_FORMAT)
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rebuild a match from its delivery logs and print the result
    Replay {
        /// Match file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Write the final match snapshot as JSON
        #[arg(long)]
        out_json: Option<PathBuf>,

        /// Write batting and bowling figures as CSV
        #[arg(long)]
        out_csv: Option<PathBuf>,
    },

    /// Simulate matches with random but valid deliveries
    Simulate {
        /// Number of matches to simulate
        #[arg(short, long, default_value = "1")]
        matches: u32,

        /// Base seed; match N uses seed + N
        #[arg(long)]
        seed: Option<u64>,

        /// Match format
        #[arg(long, default_value = "t20")]
        format: FormatArg,

        /// Curtail every innings to this many overs
        #[arg(long)]
        overs: Option<u32>,

        /// Output directory for results
        #[arg(long, default_value = "./simulation-results")]
        output_dir: PathBuf,

        /// Output format for per-match records (a CSV summary is always written)
        #[arg(long, default_value = "jsonl")]
        output_format: OutputFormat,

        /// Compress the JSONL output
        #[arg(long)]
        compress: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.log_json {
        scoring_engine::telemetry::init_tracing()?;
    } else {
        // Silent by default, only show warnings/errors
        let filter = if args.verbose { "debug" } else { "warn" };
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    match args.command {
        Command::Replay {
            input,
            out_json,
            out_csv,
        } => replay(input, out_json, out_csv),
        Command::Simulate {
            matches,
            seed,
            format,
            overs,
            output_dir,
            output_format,
            compress,
        } => {
            let format = MatchFormat::from(format);
            let rules = match overs {
                Some(overs) => MatchRules::curtailed(format, overs)?,
                None => MatchRules::for_format(format),
            };
            let jsonl = matches!(output_format, OutputFormat::Jsonl);
            simulate(matches, seed, rules, output_dir, jsonl, compress)
        }
    }
}

fn replay(
    input: PathBuf,
    out_json: Option<PathBuf>,
    out_csv: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = MatchFile::load(&input)?;
    let session = file.replay()?;
    let snapshot = session.snapshot();

    print_scorecard(&snapshot);

    if let Some(path) = out_json {
        write_snapshot_json(&path, &snapshot)?;
        info!("Snapshot written to: {}", path.display());
    }
    if let Some(path) = out_csv {
        write_scorecard_csv(&path, &snapshot)?;
        info!("Scorecard written to: {}", path.display());
    }
    Ok(())
}

fn simulate(
    matches: u32,
    seed: Option<u64>,
    rules: MatchRules,
    output_dir: PathBuf,
    jsonl: bool,
    compress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("Simulating {} {} matches of {} overs", matches, rules.format, rules.overs);

    let mut writer = SimulationWriter::new(&output_dir, jsonl, compress)?;
    let mut stats = SimulationStats::default();
    let mut errors = 0;
    let start = Instant::now();

    for match_no in 1..=matches {
        let match_start = Instant::now();
        let match_seed = match seed {
            Some(s) => s.wrapping_add(u64::from(match_no)),
            None => rand::random(),
        };

        match Simulator::new(match_seed, i64::from(match_no), rules).simulate_match() {
            Ok(sim) => {
                let duration_ms = match_start.elapsed().as_secs_f64() * 1000.0;
                let metrics =
                    build_match_metrics(match_no, sim.seed, &sim.session, sim.deliveries, duration_ms);
                if let Err(e) = writer.write_match(&metrics) {
                    warn!("Failed to write metrics for match {}: {}", match_no, e);
                }
                stats.record(&metrics);
            }
            Err(e) => {
                errors += 1;
                warn!("Match {} failed (seed {}): {}", match_no, match_seed, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (jsonl_path, csv_path) = writer.output_paths();
    let (jsonl_path, csv_path) = (jsonl_path.cloned(), csv_path.cloned());
    writer.finish()?;

    if let Some(path) = jsonl_path {
        println!("Match records written to: {}", path.display());
    }
    if let Some(path) = csv_path {
        println!("Summary CSV written to: {}", path.display());
    }
    print_summary(&stats, errors, elapsed, matches);
    Ok(())
}

fn print_scorecard(snapshot: &MatchSnapshot) {
    for innings in &snapshot.innings {
        println!(
            "\nInnings {} (team {}): {}/{} in {} overs (RR {:.2})",
            innings.number,
            innings.batting_team_id,
            innings.total_runs,
            innings.total_wickets,
            innings.total_overs,
            innings.current_run_rate
        );
        for b in &innings.batting_stats {
            println!(
                "  {:>6}  {:>3} ({:>3})  {}",
                b.player_id,
                b.runs,
                b.balls,
                b.dismissal.as_deref().unwrap_or("not out")
            );
        }
        println!("  Extras {}", innings.extras.total);
        for b in &innings.bowling_stats {
            println!(
                "  {:>6}  {}-{}-{}-{}",
                b.player_id, b.overs, b.maidens, b.runs, b.wickets
            );
        }
    }
    match &snapshot.result_text {
        Some(text) => println!("\n{text}"),
        None => println!("\nMatch in progress ({:?})", snapshot.status),
    }
}

fn print_summary(stats: &SimulationStats, errors: u32, elapsed: std::time::Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Matches completed: {}/{}", stats.matches, total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if stats.matches == 0 {
        return;
    }
    println!(
        "Average time per match: {:?}",
        elapsed / stats.matches
    );

    let pct = |n: u32| f64::from(n) / f64::from(stats.matches) * 100.0;
    println!("\n=== Results ===");
    for (team, wins) in &stats.wins {
        println!("Team {}: wins={} ({:.1}%)", team, wins, pct(*wins));
    }
    println!("Won batting first: {} ({:.1}%)", stats.defended, pct(stats.defended));
    println!("Won chasing: {} ({:.1}%)", stats.chased, pct(stats.chased));
    println!("Ties: {}", stats.ties);
    if stats.no_results > 0 {
        println!("No result: {}", stats.no_results);
    }
    println!("Average first-innings total: {:.1}", stats.avg_first_innings());
    println!("Highest total: {}", stats.highest_total);
}
