use crate::aggregate::StatsError;
use crate::aggregate::describe::{describe_floats, describe_ints};
use crate::input::case::{FloatCase, IntCase};
use crate::model::record::AggregateRecord;

/// One record per column, samples taken down the rows. Rows of unequal
/// length fail before any column is aggregated.
pub fn aggregate_columns(case: &FloatCase) -> Result<Vec<AggregateRecord>, StatsError> {
    let Some(first) = case.rows.first() else {
        return Err(StatsError::EmptySamples);
    };
    let width = first.len();
    for (row, values) in case.rows.iter().enumerate() {
        if values.len() != width {
            return Err(StatsError::RaggedRows {
                row: row + 1,
                expected: width,
                found: values.len(),
            });
        }
    }

    let mut records = Vec::with_capacity(width);
    for column in 0..width {
        let samples: Vec<f64> = case.rows.iter().map(|row| row[column]).collect();
        records.push(describe_floats(&samples)?);
    }
    Ok(records)
}

/// One record for the whole case, rows as samples.
pub fn aggregate_samples(case: &IntCase) -> Result<AggregateRecord, StatsError> {
    describe_ints(&case.values)
}

#[cfg(test)]
#[path = "../../tests/src_inline/aggregate/case.rs"]
mod tests;
