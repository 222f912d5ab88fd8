//! Cleaning transformations over fixed-schema tables.

pub mod cleaner;

pub use cleaner::clean;
