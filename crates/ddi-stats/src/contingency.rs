//! Contingency-table construction over the full case-record collection.

use tracing::debug;

use ddi_model::{CaseRecord, ContingencyTable, DrugQuery, fold_name};

/// Classify every record into exactly one cell of the 2x2 table.
///
/// Drug presence is membership-based (primary or alias name in the record's
/// drug set); reaction presence is boolean per record regardless of how many
/// times the source report mentioned it. The table always runs over the
/// complete collection, independent of any mining threshold.
pub fn build_table(records: &[CaseRecord], drug: &DrugQuery, reaction: &str) -> ContingencyTable {
    let reaction = fold_name(reaction);
    let mut table = ContingencyTable::default();
    for record in records {
        let drug_present = drug.present_in(record);
        let reaction_present = record.has_reaction(&reaction);
        match (drug_present, reaction_present) {
            (true, true) => table.a += 1,
            (true, false) => table.b += 1,
            (false, true) => table.c += 1,
            (false, false) => table.d += 1,
        }
    }
    debug!(
        a = table.a,
        b = table.b,
        c = table.c,
        d = table.d,
        "built contingency table"
    );
    table
}
