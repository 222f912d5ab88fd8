//! Table serialization.

use csv::WriterBuilder;
use tidytab_model::Table;

use crate::error::Result;

/// Serializes a table to delimited text: a header line followed by one
/// line per row, quoting only where the content requires it, with the
/// same conventions the parser reads.
///
/// A table with no rows serializes to the empty string; the header alone
/// is never emitted.
///
/// # Errors
///
/// Returns [`crate::error::OutputError`] when record encoding fails.
pub fn serialize(table: &Table) -> Result<String> {
    if table.rows.is_empty() {
        return Ok(String::new());
    }

    let mut buffer = Vec::new();
    {
        let mut writer = WriterBuilder::new().flexible(true).from_writer(&mut buffer);
        writer.write_record(&table.header)?;
        for row in &table.rows {
            writer.write_record(&row.values)?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8(buffer)?)
}
