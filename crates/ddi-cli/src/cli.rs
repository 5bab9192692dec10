//! CLI argument definitions for the DDI analyzer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "faers-ddi",
    version,
    about = "Mine drug-drug interaction signals from adverse-event reports",
    long_about = "Quantify candidate drug-drug interactions from public adverse-event\n\
                  reports: frequent co-medication mining, association rules, Reporting\n\
                  Odds Ratio, and a per-candidate DDI index ranking."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze one drug/reaction pair against a case-record export.
    Analyze(AnalyzeArgs),

    /// Describe the available transaction-construction modes.
    Modes,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to an openFDA-style JSON export of adverse-event records.
    #[arg(value_name = "RECORDS")]
    pub records: PathBuf,

    /// Drug of interest.
    #[arg(long)]
    pub drug: String,

    /// Generic or brand alias treated as the same drug.
    #[arg(long)]
    pub alias: Option<String>,

    /// Target adverse reaction (MedDRA preferred term).
    #[arg(long)]
    pub reaction: String,

    /// Minimum itemset support in (0, 1]. Lower values surface more
    /// candidates at the cost of reliability and mining time.
    #[arg(long = "min-support", default_value_t = 0.01)]
    pub min_support: f64,

    /// Minimum lift for generated rules.
    #[arg(long = "min-lift", default_value_t = 1.0)]
    pub min_lift: f64,

    /// Transaction construction mode.
    #[arg(long, value_enum, default_value = "reaction-gated")]
    pub mode: ModeArg,

    /// Result output format.
    #[arg(long, value_enum, default_value = "table")]
    pub format: ResultFormatArg,

    /// Also write the ranked candidates to a CSV file.
    #[arg(long = "export-csv", value_name = "PATH")]
    pub export_csv: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Mine only reports containing both the drug and the reaction.
    ReactionGated,
    /// Mine every report containing the drug.
    FullExposure,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ResultFormatArg {
    /// Human-readable summary table.
    Table,
    /// The full analysis report as JSON.
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
