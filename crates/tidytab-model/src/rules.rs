//! Cleaning rule configuration.
//!
//! The serde names match the JSON shape user-facing tooling submits
//! (`removeDuplicates`, `handleMissing`, ...). Every field is optional
//! and independent; the default configuration changes nothing.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RuleError;

/// Replacement written by the `fill` missing-value policy.
pub const MISSING_FILL: &str = "N/A";

/// Policy for rows or values that are empty or whitespace-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingPolicy {
    /// Leave missing values as they are.
    #[default]
    Keep,
    /// Remove every row that has at least one missing value.
    Drop,
    /// Replace each missing value with [`MISSING_FILL`].
    Fill,
}

impl MissingPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Keep => "keep",
            Self::Drop => "drop",
            Self::Fill => "fill",
        }
    }
}

impl FromStr for MissingPolicy {
    type Err = RuleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "keep" => Ok(Self::Keep),
            "drop" => Ok(Self::Drop),
            "fill" => Ok(Self::Fill),
            other => Err(RuleError::InvalidPolicy {
                value: other.to_string(),
            }),
        }
    }
}

/// Declarative cleaning configuration.
///
/// Rule application order is fixed by the cleaner: empty-row removal,
/// whitespace trimming, missing-value handling, duplicate removal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CleaningRules {
    pub remove_duplicates: bool,
    pub remove_empty_rows: bool,
    pub trim_whitespace: bool,
    pub handle_missing: MissingPolicy,
}

impl CleaningRules {
    /// True when no rule would change any input.
    pub fn is_noop(&self) -> bool {
        !self.remove_duplicates
            && !self.remove_empty_rows
            && !self.trim_whitespace
            && self.handle_missing == MissingPolicy::Keep
    }
}
