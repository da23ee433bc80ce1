pub mod stage1_resolve;
pub mod stage2_aggregate;
pub mod stage3_write;

use std::path::Path;
use std::time::Instant;

use thiserror::Error;
use tracing::info;

use crate::model::record::ResultTable;
use crate::pipeline::stage1_resolve::{InputSet, run_stage1};
use crate::pipeline::stage2_aggregate::{CaseMode, run_stage2};
use crate::pipeline::stage3_write::run_stage3;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Resolve(#[from] stage1_resolve::Stage1Error),
    #[error(transparent)]
    Aggregate(#[from] stage2_aggregate::Stage2Error),
    #[error(transparent)]
    Write(#[from] stage3_write::Stage3Error),
}

/// Runs the resolve, aggregate, and write stages for one input set and one
/// destination.
///
/// The destination is not touched until every case has been read and
/// aggregated; a failure in an earlier stage leaves no output file behind.
pub fn run(input: &InputSet, output: &Path, mode: CaseMode) -> Result<ResultTable, PipelineError> {
    let start = Instant::now();
    info!(stage = "stage1_resolve", "starting stage");
    let inputs = run_stage1(input)?;
    info!(
        stage = "stage1_resolve",
        elapsed_ms = start.elapsed().as_millis(),
        files = inputs.files.len(),
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage2_aggregate", "starting stage");
    let table = run_stage2(&inputs.files, mode)?;
    info!(
        stage = "stage2_aggregate",
        elapsed_ms = start.elapsed().as_millis(),
        records = table.len(),
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage3_write", "starting stage");
    run_stage3(&table, output)?;
    info!(
        stage = "stage3_write",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );

    Ok(table)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
