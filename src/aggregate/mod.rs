pub mod case;
pub mod describe;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StatsError {
    #[error("no samples to aggregate")]
    EmptySamples,
    #[error("sample standard deviation requires at least two samples, got {n}")]
    TooFewSamples { n: usize },
    #[error("row {row} has {found} field(s), expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}
