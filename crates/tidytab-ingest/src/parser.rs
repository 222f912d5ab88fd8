//! Delimited-text parsing into a fixed-schema [`Table`].
//!
//! Values are kept verbatim; trimming is a cleaning rule, not an ingest
//! normalization. Fully blank lines never become rows, and short records
//! are padded against the header so every row carries the full column
//! set.

use csv::ReaderBuilder;
use tracing::debug;

use tidytab_model::{Row, Table};

use crate::error::{IngestError, Result};

/// Parses delimited text into a table.
///
/// The header is taken verbatim from the first record. Duplicate header
/// names are collapsed: unique names keep first-occurrence order, and a
/// duplicated name takes its value from the last column bearing that
/// name. When no data records follow the header, both the header and the
/// row set are empty.
///
/// # Errors
///
/// Returns [`IngestError::UnbalancedQuote`] when a quoted field is never
/// closed, and [`IngestError::Csv`] when record decoding fails.
pub fn parse(text: &str) -> Result<Table> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    check_quote_balance(text)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = reader.records();
    let Some(first) = records.next() else {
        return Ok(Table::empty());
    };
    let raw_header: Vec<String> = first?.iter().map(str::to_string).collect();

    let mut data: Vec<Vec<String>> = Vec::new();
    for record in records {
        data.push(record?.iter().map(str::to_string).collect());
    }
    // Headers derive from the first parsed row: a header line with no
    // data records yields an empty table.
    if data.is_empty() {
        return Ok(Table::empty());
    }

    let (header, source_index) = collapse_header(raw_header);
    let mut table = Table::new(header);
    for record in data {
        let row: Row = source_index
            .iter()
            .map(|&idx| record.get(idx).cloned().unwrap_or_default())
            .collect();
        table.push_row(row);
    }
    debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        "parsed table"
    );
    Ok(table)
}

/// Collapses duplicate header names, keeping first-occurrence order.
///
/// Returns the unique names plus, for each, the source column index its
/// values are read from. A repeated name advances its source index so
/// the last column with that name wins.
fn collapse_header(raw: Vec<String>) -> (Vec<String>, Vec<usize>) {
    let mut header: Vec<String> = Vec::with_capacity(raw.len());
    let mut source_index: Vec<usize> = Vec::with_capacity(raw.len());
    for (idx, name) in raw.into_iter().enumerate() {
        if let Some(pos) = header.iter().position(|existing| *existing == name) {
            source_index[pos] = idx;
        } else {
            header.push(name);
            source_index.push(idx);
        }
    }
    (header, source_index)
}

/// Rejects input whose quoting is unbalanced.
///
/// The `csv` reader silently consumes an unterminated quote to end of
/// input, so balance is checked up front with the same conventions the
/// reader uses: a quote opens a quoted field only at field start, and a
/// doubled quote inside a quoted field is an escaped quote character.
fn check_quote_balance(text: &str) -> Result<()> {
    let mut chars = text.chars().peekable();
    let mut line = 1usize;
    let mut open_line = 0usize;
    let mut at_field_start = true;
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                    } else {
                        in_quotes = false;
                    }
                }
                '\n' => line += 1,
                _ => {}
            }
        } else {
            match c {
                '"' if at_field_start => {
                    in_quotes = true;
                    open_line = line;
                    at_field_start = false;
                }
                ',' => at_field_start = true,
                '\n' => {
                    line += 1;
                    at_field_start = true;
                }
                _ => at_field_start = false,
            }
        }
    }
    if in_quotes {
        return Err(IngestError::UnbalancedQuote { line: open_line });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_header_keeps_unique_names() {
        let (header, index) = collapse_header(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(header, vec!["a", "b"]);
        assert_eq!(index, vec![0, 1]);
    }

    #[test]
    fn collapse_header_last_duplicate_wins() {
        let (header, index) =
            collapse_header(vec!["a".to_string(), "b".to_string(), "a".to_string()]);
        assert_eq!(header, vec!["a", "b"]);
        assert_eq!(index, vec![2, 1]);
    }

    #[test]
    fn balance_accepts_quoted_delimiters_and_newlines() {
        assert!(check_quote_balance("a,b\n\"x,y\",\"line\nbreak\"\n").is_ok());
    }

    #[test]
    fn balance_accepts_escaped_quotes() {
        assert!(check_quote_balance("\"he said \"\"hi\"\"\",b\n").is_ok());
    }

    #[test]
    fn balance_rejects_unclosed_quote() {
        let error = check_quote_balance("a,b\nx,\"unclosed\n").unwrap_err();
        match error {
            IngestError::UnbalancedQuote { line } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn balance_ignores_quote_mid_field() {
        // A quote that does not start a field is literal, per the reader.
        assert!(check_quote_balance("ab\"cd,e\n").is_ok());
    }
}
