//! Ingestion of delimited tabular text.
//!
//! The single entry point is [`parse`], which turns already-decoded text
//! into a fixed-schema [`tidytab_model::Table`]. File and network I/O
//! belong to callers; this crate never touches the filesystem.

pub mod error;
pub mod parser;

pub use error::{IngestError, Result};
pub use parser::parse;
