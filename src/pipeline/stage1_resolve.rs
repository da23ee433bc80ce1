use std::path::PathBuf;

use thiserror::Error;

use crate::input::InputError;
use crate::input::locate::list_files;

#[derive(Debug, Error)]
pub enum Stage1Error {
    #[error("input error: {0}")]
    Input(#[from] InputError),
}

/// Where a pipeline run takes its cases from.
#[derive(Debug, Clone)]
pub enum InputSet {
    /// Explicit list, aggregated in the given order.
    Files(Vec<PathBuf>),
    /// Every regular file in the directory, in lexicographic name order.
    Directory(PathBuf),
}

#[derive(Debug, Clone)]
pub struct ResolvedInputs {
    pub files: Vec<PathBuf>,
}

pub fn run_stage1(input: &InputSet) -> Result<ResolvedInputs, Stage1Error> {
    let files = match input {
        InputSet::Files(files) => files.clone(),
        InputSet::Directory(dir) => list_files(dir)?,
    };
    Ok(ResolvedInputs { files })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_resolve.rs"]
mod tests;
