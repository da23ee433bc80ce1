use std::path::Path;

use crate::model::record::{RESULT_HEADER, ResultTable};
use crate::report::ReportError;

/// Writes the table as CSV: header line, then one line per record. The
/// destination is created or truncated by this call and by nothing earlier.
pub fn write_table(table: &ResultTable, destination: &Path) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(destination)?;
    writer.write_record(RESULT_HEADER)?;
    for record in &table.records {
        writer.write_record(record.fields())?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/table.rs"]
mod tests;
