//! Integration tests for rule application order and semantics.

use tidytab_clean::clean;
use tidytab_model::{CleaningRules, MissingPolicy, Row, Table};

fn table(header: &[&str], rows: &[&[&str]]) -> Table {
    let mut table = Table::new(header.iter().map(|h| (*h).to_string()).collect());
    for values in rows {
        table.push_row(Row::new(values.iter().map(|v| (*v).to_string()).collect()));
    }
    table
}

fn values(table: &Table) -> Vec<Vec<String>> {
    table.rows.iter().map(|row| row.values.clone()).collect()
}

#[test]
fn dedup_and_empty_row_removal() {
    let input = table(&["a", "b"], &[&["1", "x"], &["1", "x"], &["", ""]]);
    let rules = CleaningRules {
        remove_duplicates: true,
        remove_empty_rows: true,
        ..CleaningRules::default()
    };
    let cleaned = clean(&input, &rules);
    assert_eq!(values(&cleaned), vec![vec!["1", "x"]]);
    assert_eq!(cleaned.header, input.header);
}

#[test]
fn trim_runs_before_fill() {
    // Trimming happens first, so fill sees the trimmed-empty value.
    let input = table(&["a", "b"], &[&[" x ", ""]]);
    let rules = CleaningRules {
        trim_whitespace: true,
        handle_missing: MissingPolicy::Fill,
        ..CleaningRules::default()
    };
    let cleaned = clean(&input, &rules);
    assert_eq!(values(&cleaned), vec![vec!["x", "N/A"]]);
}

#[test]
fn trim_runs_before_drop() {
    // A whitespace-only value becomes empty before drop evaluates it.
    let input = table(&["a", "b"], &[&["1", "   "], &["2", "y"]]);
    let rules = CleaningRules {
        trim_whitespace: true,
        handle_missing: MissingPolicy::Drop,
        ..CleaningRules::default()
    };
    let cleaned = clean(&input, &rules);
    assert_eq!(values(&cleaned), vec![vec!["2", "y"]]);
}

#[test]
fn drop_removes_every_row_with_a_missing_field() {
    let input = table(&["a", "b"], &[&["", "1"], &["2", ""]]);
    let rules = CleaningRules {
        handle_missing: MissingPolicy::Drop,
        ..CleaningRules::default()
    };
    let cleaned = clean(&input, &rules);
    assert!(cleaned.rows.is_empty());
}

#[test]
fn fill_replaces_whitespace_only_values_without_trimming_others() {
    let input = table(&["a", "b"], &[&["  ", " kept "]]);
    let rules = CleaningRules {
        handle_missing: MissingPolicy::Fill,
        ..CleaningRules::default()
    };
    let cleaned = clean(&input, &rules);
    assert_eq!(values(&cleaned), vec![vec!["N/A", " kept "]]);
}

#[test]
fn dedup_keeps_first_occurrence_and_order() {
    let input = table(
        &["a"],
        &[&["3"], &["1"], &["3"], &["2"], &["1"], &["3"]],
    );
    let rules = CleaningRules {
        remove_duplicates: true,
        ..CleaningRules::default()
    };
    let cleaned = clean(&input, &rules);
    assert_eq!(values(&cleaned), vec![vec!["3"], vec!["1"], vec!["2"]]);
}

#[test]
fn dedup_observes_earlier_steps() {
    // Distinct raw rows collapse once trimming makes them equal.
    let input = table(&["a"], &[&[" x"], &["x "], &["x"]]);
    let rules = CleaningRules {
        trim_whitespace: true,
        remove_duplicates: true,
        ..CleaningRules::default()
    };
    let cleaned = clean(&input, &rules);
    assert_eq!(values(&cleaned), vec![vec!["x"]]);
}

#[test]
fn order_is_preserved_without_dedup() {
    let input = table(&["a"], &[&["c"], &["a"], &["b"], &[""]]);
    let rules = CleaningRules {
        remove_empty_rows: true,
        ..CleaningRules::default()
    };
    let cleaned = clean(&input, &rules);
    assert_eq!(values(&cleaned), vec![vec!["c"], vec!["a"], vec!["b"]]);
}

#[test]
fn cleaning_is_idempotent() {
    let input = table(
        &["a", "b"],
        &[&[" 1 ", "x"], &["1", "x"], &["", ""], &["2", ""]],
    );
    let rules = CleaningRules {
        remove_duplicates: true,
        remove_empty_rows: true,
        trim_whitespace: true,
        handle_missing: MissingPolicy::Fill,
    };
    let once = clean(&input, &rules);
    let twice = clean(&once, &rules);
    assert_eq!(once, twice);
}

#[test]
fn input_table_is_never_mutated() {
    let input = table(&["a"], &[&[" x "], &[" x "]]);
    let snapshot = input.clone();
    let rules = CleaningRules {
        remove_duplicates: true,
        trim_whitespace: true,
        ..CleaningRules::default()
    };
    let _cleaned = clean(&input, &rules);
    assert_eq!(input, snapshot);
}

#[test]
fn empty_input_produces_empty_output_for_any_rules() {
    let input = Table::empty();
    let rules = CleaningRules {
        remove_duplicates: true,
        remove_empty_rows: true,
        trim_whitespace: true,
        handle_missing: MissingPolicy::Drop,
    };
    let cleaned = clean(&input, &rules);
    assert!(cleaned.rows.is_empty());
    assert!(cleaned.header.is_empty());
}

#[test]
fn noop_rules_return_equal_table() {
    let input = table(&["a", "b"], &[&[" raw ", ""], &[" raw ", ""]]);
    let cleaned = clean(&input, &CleaningRules::default());
    assert_eq!(cleaned, input);
}
