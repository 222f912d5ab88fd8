//! Human-readable summary tables.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tidytab_model::DataProfile;

use crate::types::CleanOutcome;

pub fn print_clean_summary(outcome: &CleanOutcome) {
    println!("Input: {}", outcome.input.display());
    if outcome.written {
        println!("Output: {}", outcome.output.display());
    } else {
        println!("Output: {} (dry run, not written)", outcome.output.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metric"),
        header_cell("Before"),
        header_cell("After"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Rows"),
        Cell::new(outcome.before.row_count),
        Cell::new(outcome.after.row_count),
    ]);
    table.add_row(vec![
        Cell::new("Columns"),
        Cell::new(outcome.before.column_count),
        Cell::new(outcome.after.column_count),
    ]);
    table.add_row(vec![
        Cell::new("Duplicate rows"),
        count_cell(outcome.before.duplicates),
        count_cell(outcome.after.duplicates),
    ]);
    table.add_row(vec![
        Cell::new("Empty rows"),
        count_cell(outcome.before.empty_rows),
        count_cell(outcome.after.empty_rows),
    ]);
    table.add_row(vec![
        Cell::new("Missing values"),
        count_cell(outcome.before.total_missing()),
        count_cell(outcome.after.total_missing()),
    ]);
    println!("{table}");

    print_missing_by_column(&outcome.before, &outcome.after);
    println!("Rows removed: {}", outcome.rows_removed());
}

pub fn print_profile(profile: &DataProfile) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Rows"), Cell::new(profile.row_count)]);
    table.add_row(vec![Cell::new("Columns"), Cell::new(profile.column_count)]);
    table.add_row(vec![
        Cell::new("Duplicate rows"),
        count_cell(profile.duplicates),
    ]);
    table.add_row(vec![Cell::new("Empty rows"), count_cell(profile.empty_rows)]);
    table.add_row(vec![
        Cell::new("Missing values"),
        count_cell(profile.total_missing()),
    ]);
    println!("{table}");

    if profile.missing_values.is_empty() {
        return;
    }
    let mut columns = Table::new();
    columns.set_header(vec![header_cell("Column"), header_cell("Missing")]);
    apply_table_style(&mut columns);
    align_column(&mut columns, 1, CellAlignment::Right);
    for (column, count) in &profile.missing_values {
        columns.add_row(vec![Cell::new(column), count_cell(*count)]);
    }
    println!();
    println!("Missing values by column:");
    println!("{columns}");
}

fn print_missing_by_column(before: &DataProfile, after: &DataProfile) {
    if before.missing_values.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Missing (before)"),
        header_cell("Missing (after)"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (column, count) in &before.missing_values {
        let cleaned = match after.missing_values.get(column) {
            Some(value) => count_cell(*value),
            // The column vanished from the cleaned table (all rows dropped).
            None => dim_cell("-"),
        };
        table.add_row(vec![Cell::new(column), count_cell(*count), cleaned]);
    }
    println!();
    println!("Missing values by column:");
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(value: usize) -> Cell {
    if value > 0 {
        Cell::new(value).fg(Color::Yellow).add_attribute(Attribute::Bold)
    } else {
        dim_cell(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
