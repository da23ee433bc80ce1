pub mod case;
pub mod locate;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("missing directory: {0}")]
    MissingDirectory(PathBuf),
    #[error("missing input file: {0}")]
    MissingFile(PathBuf),
    #[error("invalid integer {value:?} at {path}:{line}")]
    InvalidInteger {
        path: PathBuf,
        line: u64,
        value: String,
    },
    #[error("invalid float {value:?} at {path}:{line}")]
    InvalidFloat {
        path: PathBuf,
        line: u64,
        value: String,
    },
    #[error("expected {expected} field(s) at {path}:{line}, found {found}")]
    FieldCount {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl InputError {
    fn invalid_integer(path: &Path, line: u64, value: &str) -> Self {
        InputError::InvalidInteger {
            path: path.to_path_buf(),
            line,
            value: value.to_string(),
        }
    }

    fn invalid_float(path: &Path, line: u64, value: &str) -> Self {
        InputError::InvalidFloat {
            path: path.to_path_buf(),
            line,
            value: value.to_string(),
        }
    }
}

pub fn open_reader(path: &Path) -> Result<csv::Reader<File>, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingFile(path.to_path_buf()));
    }
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    Ok(reader)
}
