//! Shared argument types for the scorebook subcommands.

use clap::ValueEnum;
use scoring_engine::domain::MatchFormat;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    T10,
    T20,
    Odi,
    Test,
    Hundred,
}

impl From<FormatArg> for MatchFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::T10 => MatchFormat::T10,
            FormatArg::T20 => MatchFormat::T20,
            FormatArg::Odi => MatchFormat::Odi,
            FormatArg::Test => MatchFormat::Test,
            FormatArg::Hundred => MatchFormat::TheHundred,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Jsonl,
    Csv,
}
