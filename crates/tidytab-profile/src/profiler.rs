//! Aggregate data-quality statistics.

use std::collections::{BTreeMap, HashSet};

use tidytab_model::{DataProfile, Row, Table, is_missing};

/// Computes a profile snapshot of a table. Read-only and deterministic.
///
/// A table with no rows short-circuits to the all-zero profile with an
/// empty per-column map, without touching the header: with no rows there
/// are no observable columns.
pub fn profile(table: &Table) -> DataProfile {
    if table.rows.is_empty() {
        return DataProfile::default();
    }

    let row_count = table.rows.len();
    let column_count = table.header.len();

    // Distinctness is structural equality over the ordered value
    // sequence, the same definition duplicate removal uses.
    let distinct: HashSet<&Row> = table.rows.iter().collect();
    let duplicates = row_count - distinct.len();

    let empty_rows = table.rows.iter().filter(|row| row.is_blank()).count();

    let mut missing_values = BTreeMap::new();
    for (index, column) in table.header.iter().enumerate() {
        let missing = table
            .rows
            .iter()
            .filter(|row| row.get(index).is_none_or(is_missing))
            .count();
        missing_values.insert(column.clone(), missing);
    }

    DataProfile {
        row_count,
        column_count,
        duplicates,
        empty_rows,
        missing_values,
    }
}
