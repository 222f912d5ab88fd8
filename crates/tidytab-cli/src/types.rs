use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use tidytab_model::{CleaningRules, DataProfile};

/// Result of a `clean` run.
#[derive(Debug)]
pub struct CleanOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    /// False for dry runs.
    pub written: bool,
    pub rules: CleaningRules,
    pub before: DataProfile,
    pub after: DataProfile,
}

impl CleanOutcome {
    pub fn rows_removed(&self) -> usize {
        self.before.row_count - self.after.row_count
    }
}

/// Before/after profile pair, the machine-readable report written by
/// `clean --profile-json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileReport {
    pub original_profile: DataProfile,
    pub cleaned_profile: DataProfile,
}
