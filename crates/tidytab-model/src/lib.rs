//! Data model for the tidytab cleaning pipeline.
//!
//! - **table**: fixed-schema [`Table`]/[`Row`] record types
//! - **rules**: declarative [`CleaningRules`] configuration
//! - **profile**: [`DataProfile`] data-quality snapshot
//! - **error**: rule-boundary errors

pub mod error;
pub mod profile;
pub mod rules;
pub mod table;

pub use error::RuleError;
pub use profile::DataProfile;
pub use rules::{CleaningRules, MISSING_FILL, MissingPolicy};
pub use table::{Row, Table, is_missing};
