//! Data-quality profile snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregate statistics over a row sequence.
///
/// A profile is a snapshot, never a live view. The serde names match the
/// JSON shape reported to user-facing tooling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataProfile {
    pub row_count: usize,
    pub column_count: usize,
    /// Excess occurrences: total rows minus distinct rows, summed over
    /// all duplicate groups. Not the number of groups.
    pub duplicates: usize,
    /// Rows where every value is empty or whitespace-only.
    pub empty_rows: usize,
    /// Per-column count of rows whose value for that column is missing.
    pub missing_values: BTreeMap<String, usize>,
}

impl DataProfile {
    /// Missing values summed across all columns.
    pub fn total_missing(&self) -> usize {
        self.missing_values.values().sum()
    }

    /// Number of distinct rows implied by the counts.
    pub fn distinct_rows(&self) -> usize {
        self.row_count - self.duplicates
    }
}
