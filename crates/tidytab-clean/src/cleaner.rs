//! Rule application.
//!
//! Rules run in a fixed order that is part of the contract, because
//! later rules observe the output of earlier ones: empty-row removal,
//! whitespace trimming, missing-value handling, duplicate removal.
//! Surviving rows keep their relative input order; nothing is ever
//! reordered except through deletion.

use std::collections::HashSet;

use tracing::debug;

use tidytab_model::{CleaningRules, MISSING_FILL, MissingPolicy, Row, Table, is_missing};

/// Applies the configured rules to a table, producing a new table with
/// the same header. The input is never mutated, so profiling the input
/// before and after cleaning from separate threads needs no
/// synchronization.
pub fn clean(table: &Table, rules: &CleaningRules) -> Table {
    let mut rows: Vec<Row> = table.rows.clone();

    if rules.remove_empty_rows {
        let before = rows.len();
        rows.retain(|row| !row.is_blank());
        debug!(removed = before - rows.len(), "removed empty rows");
    }

    if rules.trim_whitespace {
        rows = rows.into_iter().map(trim_row).collect();
        debug!(rows = rows.len(), "trimmed whitespace");
    }

    match rules.handle_missing {
        MissingPolicy::Keep => {}
        MissingPolicy::Drop => {
            let before = rows.len();
            rows.retain(|row| !row.values.iter().any(|value| is_missing(value)));
            debug!(removed = before - rows.len(), "dropped rows with missing values");
        }
        MissingPolicy::Fill => {
            rows = rows.into_iter().map(fill_row).collect();
            debug!(rows = rows.len(), "filled missing values");
        }
    }

    if rules.remove_duplicates {
        let before = rows.len();
        let mut seen: HashSet<Row> = HashSet::with_capacity(rows.len());
        rows.retain(|row| seen.insert(row.clone()));
        debug!(removed = before - rows.len(), "removed duplicate rows");
    }

    table.with_rows(rows)
}

fn trim_row(row: Row) -> Row {
    row.values
        .into_iter()
        .map(|value| value.trim().to_string())
        .collect()
}

fn fill_row(row: Row) -> Row {
    row.values
        .into_iter()
        .map(|value| {
            if is_missing(&value) {
                MISSING_FILL.to_string()
            } else {
                value
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_row_strips_both_ends() {
        let row = Row::new(vec!["  x ".to_string(), "y".to_string()]);
        assert_eq!(trim_row(row).values, vec!["x", "y"]);
    }

    #[test]
    fn fill_row_replaces_whitespace_only_values() {
        let row = Row::new(vec![String::new(), "  ".to_string(), "z".to_string()]);
        assert_eq!(fill_row(row).values, vec!["N/A", "N/A", "z"]);
    }
}
