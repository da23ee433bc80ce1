use std::path::Path;

use crate::input::{InputError, open_reader};

/// Single-column integer case. Every row is data, no header.
#[derive(Debug, Clone, PartialEq)]
pub struct IntCase {
    pub values: Vec<i64>,
}

/// Multi-column float case. The first row of the file is a header and is
/// discarded; all data rows must share the field count of the first data row.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatCase {
    pub rows: Vec<Vec<f64>>,
}

pub fn read_int_case(path: &Path) -> Result<IntCase, InputError> {
    let mut reader = open_reader(path)?;
    let mut values = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        if record.len() != 1 {
            return Err(InputError::FieldCount {
                path: path.to_path_buf(),
                line,
                expected: 1,
                found: record.len(),
            });
        }
        let field = record[0].trim();
        let value = field
            .parse::<i64>()
            .map_err(|_| InputError::invalid_integer(path, line, field))?;
        values.push(value);
    }
    Ok(IntCase { values })
}

pub fn read_float_case(path: &Path) -> Result<FloatCase, InputError> {
    let mut reader = open_reader(path)?;
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut width: Option<usize> = None;

    let mut records = reader.records();
    // header row, discarded unconditionally
    match records.next() {
        Some(result) => {
            result?;
        }
        None => return Ok(FloatCase { rows }),
    }

    for result in records {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        let expected = *width.get_or_insert(record.len());
        if record.len() != expected {
            return Err(InputError::FieldCount {
                path: path.to_path_buf(),
                line,
                expected,
                found: record.len(),
            });
        }
        let mut row = Vec::with_capacity(record.len());
        for field in record.iter() {
            let field = field.trim();
            let value = field
                .parse::<f64>()
                .map_err(|_| InputError::invalid_float(path, line, field))?;
            row.push(value);
        }
        rows.push(row);
    }
    Ok(FloatCase { rows })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/case.rs"]
mod tests;
