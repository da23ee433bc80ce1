pub mod table;

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
