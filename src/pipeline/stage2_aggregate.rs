use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::aggregate::StatsError;
use crate::aggregate::case::{aggregate_columns, aggregate_samples};
use crate::input::InputError;
use crate::input::case::{read_float_case, read_int_case};
use crate::model::record::ResultTable;

#[derive(Debug, Error)]
pub enum Stage2Error {
    #[error("input error: {0}")]
    Input(#[from] InputError),
    #[error("aggregating {path}: {source}")]
    Stats { path: PathBuf, source: StatsError },
}

/// Which case shape a run reads and how each case is aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    /// Single-column integer files; one record per case.
    SingleColumnInt,
    /// Multi-column float files with a header; one record per column.
    MultiColumnFloat,
}

/// Reads and aggregates every file in order into one table. The whole input
/// is held in memory; nothing is written here.
pub fn run_stage2(files: &[PathBuf], mode: CaseMode) -> Result<ResultTable, Stage2Error> {
    let mut table = ResultTable::default();
    for path in files {
        aggregate_file(path, mode, &mut table)?;
    }
    Ok(table)
}

fn aggregate_file(path: &Path, mode: CaseMode, table: &mut ResultTable) -> Result<(), Stage2Error> {
    let stats_err = |source| Stage2Error::Stats {
        path: path.to_path_buf(),
        source,
    };
    match mode {
        CaseMode::SingleColumnInt => {
            let case = read_int_case(path)?;
            table.push(aggregate_samples(&case).map_err(stats_err)?);
        }
        CaseMode::MultiColumnFloat => {
            let case = read_float_case(path)?;
            table.extend(aggregate_columns(&case).map_err(stats_err)?);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_aggregate.rs"]
mod tests;
