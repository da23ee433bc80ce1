use std::path::Path;

use thiserror::Error;

use crate::model::record::ResultTable;
use crate::report::ReportError;
use crate::report::table::write_table;

#[derive(Debug, Error)]
pub enum Stage3Error {
    #[error("report error: {0}")]
    Report(#[from] ReportError),
}

pub fn run_stage3(table: &ResultTable, output: &Path) -> Result<(), Stage3Error> {
    write_table(table, output)?;
    Ok(())
}
