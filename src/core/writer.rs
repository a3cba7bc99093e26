use crate::domain::model::Table;
use crate::utils::error::{EtlError, Result};

/// Serializes `table` as comma-separated text: header row, then the rows in
/// their current order. No index column is emitted.
pub fn serialize_table(table: &Table) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());

    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(|value| value.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))
}
