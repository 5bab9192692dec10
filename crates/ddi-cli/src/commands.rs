//! Command implementations.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use comfy_table::Table;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use ddi_core::run_analysis;
use ddi_model::{AnalysisReport, AnalysisRequest, TransactionMode};

use ddi_cli::summary::apply_table_style;

use crate::cli::{AnalyzeArgs, ModeArg};

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalysisReport> {
    let spinner = progress_spinner("loading case records");
    let ingest = ddi_ingest::load_case_records(&args.records)?;
    spinner.set_message(format!(
        "mining {} case records (skipped {})",
        ingest.records.len(),
        ingest.skipped
    ));

    let request = build_request(args);
    let report = run_analysis(&ingest.records, &request)?;
    spinner.finish_and_clear();
    info!(
        candidates = report.entries.len(),
        reaction_cases = report.reaction_case_count,
        "analysis finished"
    );

    if let Some(path) = &args.export_csv {
        export_csv(path, &report)
            .with_context(|| format!("writing csv to {}", path.display()))?;
    }
    Ok(report)
}

pub fn run_modes() {
    let mut table = Table::new();
    table.set_header(vec!["Mode", "Description"]);
    apply_table_style(&mut table);
    table.add_row(vec![
        "reaction-gated",
        "Only reports with both the drug of interest and the reaction become \
         transactions. Default for DDI index ranking.",
    ]);
    table.add_row(vec![
        "full-exposure",
        "Every report with the drug of interest becomes a transaction; the \
         reaction marker is added when present. Discriminates reaction \
         association across co-medications.",
    ]);
    println!("{table}");
}

fn build_request(args: &AnalyzeArgs) -> AnalysisRequest {
    let mut request = AnalysisRequest::new(&args.drug, &args.reaction, args.min_support)
        .with_min_lift(args.min_lift)
        .with_mode(match args.mode {
            ModeArg::ReactionGated => TransactionMode::ReactionGated,
            ModeArg::FullExposure => TransactionMode::FullExposure,
        });
    if let Some(alias) = &args.alias {
        request = request.with_alias(alias);
    }
    request
}

fn export_csv(path: &Path, report: &AnalysisReport) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["candidate", "ddi_index", "support", "confidence", "lift"])?;
    for entry in &report.entries {
        writer.write_record([
            entry.drug.as_str(),
            &entry.ddi_index.to_string(),
            &entry.support.to_string(),
            &entry.confidence.to_string(),
            &entry.lift.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn progress_spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner().with_message(message);
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
