//! Serialization of tables back to delimited text.

pub mod error;
pub mod serializer;

pub use error::{OutputError, Result};
pub use serializer::serialize;
