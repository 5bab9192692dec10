//! Human-readable rendering of an analysis report.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ddi_model::{AnalysisReport, BaselineSource, RorEstimate};

pub fn print_summary(report: &AnalysisReport) {
    println!("Drug: {}", report.drug);
    println!("Reaction: {}", report.reaction);
    println!(
        "Records: {} ({} with both drug and reaction)",
        report.record_count, report.reaction_case_count
    );
    println!("ROR: {}", format_ror(&report.ror));
    if let Some(chi) = &report.chi_square {
        println!(
            "Chi-square: {:.2} (p = {})",
            chi.statistic,
            format_p_value(chi.p_value)
        );
    }
    if report.baseline == BaselineSource::AssumedUnit {
        println!(
            "note: no baseline rule met the support threshold; scores assume \
             a baseline lift of 1 and carry reduced confidence"
        );
    }

    if report.is_insufficient_data() {
        println!("Insufficient data: no qualifying reports at these parameters.");
        return;
    }
    if report.entries.is_empty() {
        println!("No co-medication rule met the support threshold.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Candidate"),
        header_cell("DDI index"),
        header_cell("Support"),
        header_cell("Confidence"),
        header_cell("Lift"),
    ]);
    apply_table_style(&mut table);
    for col in 1..5 {
        align_column(&mut table, col, CellAlignment::Right);
    }
    for entry in &report.entries {
        let index_cell = if entry.ddi_index > 1.0 {
            Cell::new(format!("{:.3}", entry.ddi_index)).fg(Color::Red)
        } else {
            Cell::new(format!("{:.3}", entry.ddi_index))
        };
        table.add_row(vec![
            Cell::new(&entry.drug),
            index_cell,
            Cell::new(format!("{:.4}", entry.support)),
            Cell::new(format!("{:.3}", entry.confidence)),
            Cell::new(format!("{:.3}", entry.lift)),
        ]);
    }
    println!("{table}");
}

/// Render the ROR estimate, keeping the undefined cases visibly distinct.
pub fn format_ror(estimate: &RorEstimate) -> String {
    match estimate {
        RorEstimate::Finite {
            ror,
            ci_low,
            ci_high,
        } => format!("{ror:.2} (95% CI {ci_low:.2}-{ci_high:.2})"),
        RorEstimate::Infinite => "+inf (zero discordant cell)".to_string(),
        RorEstimate::NotComputable => "not computable (empty denominators)".to_string(),
    }
}

pub fn format_p_value(p: f64) -> String {
    if p < 0.001 {
        "<0.001".to_string()
    } else {
        format!("{p:.3}")
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
