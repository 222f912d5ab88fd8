//! Fixed-schema table types.
//!
//! A [`Table`] pairs an ordered header with rows whose values are
//! positionally aligned with that header. Construction enforces the
//! fixed schema: a row never carries more values than the header has
//! columns, and absent trailing fields are materialized as empty
//! strings by the parser, so "absent" and "empty" are one state.

use serde::{Deserialize, Serialize};

/// Returns true when a value counts as missing: empty or whitespace-only.
pub fn is_missing(value: &str) -> bool {
    value.trim().is_empty()
}

/// A single record. Values are positionally aligned with the owning
/// table's header.
///
/// `Eq` and `Hash` are derived over the ordered value sequence, which is
/// the distinctness definition shared by duplicate removal and duplicate
/// counting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Row {
    pub values: Vec<String>,
}

impl Row {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// Value at the given column index, if present.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// True when every value in the row is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.values.iter().all(|value| is_missing(value))
    }
}

impl FromIterator<String> for Row {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// An ordered header plus the rows aligned with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Unique column names in first-occurrence order.
    pub header: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    /// A table with no header and no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// New table with the same header and the given rows. Used by
    /// transformations that replace the row sequence wholesale.
    pub fn with_rows(&self, rows: Vec<Row>) -> Self {
        Self {
            header: self.header.clone(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_missing_covers_whitespace() {
        assert!(is_missing(""));
        assert!(is_missing("   "));
        assert!(is_missing("\t\n"));
        assert!(!is_missing("x"));
        assert!(!is_missing(" x "));
    }

    #[test]
    fn blank_row_detection() {
        assert!(Row::new(vec![String::new(), "  ".to_string()]).is_blank());
        assert!(!Row::new(vec![String::new(), "a".to_string()]).is_blank());
        // A row with no values is vacuously blank.
        assert!(Row::new(Vec::new()).is_blank());
    }

    #[test]
    fn row_equality_is_positional() {
        let a = Row::new(vec!["1".to_string(), "x".to_string()]);
        let b = Row::new(vec!["1".to_string(), "x".to_string()]);
        let c = Row::new(vec!["x".to_string(), "1".to_string()]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
