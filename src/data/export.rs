use crate::error::ExportError;

use super::model::{FilteredView, Table};

// ---------------------------------------------------------------------------
// CSV export
// ---------------------------------------------------------------------------

/// Serialise the rows of `view` as UTF-8 CSV: header row first, then one
/// record per row in view order. No index column is written.
pub fn export_csv(table: &Table, view: &FilteredView) -> Result<Vec<u8>, ExportError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    wtr.write_record(&table.columns)?;

    for row in view.iter() {
        wtr.write_record(
            table
                .columns
                .iter()
                .map(|col| table.cell(row, col).to_string()),
        )?;
    }

    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(bytes)
}
