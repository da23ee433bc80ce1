use crate::aggregate::StatsError;
use crate::model::record::AggregateRecord;
use crate::model::value::Value;

pub fn mean(samples: &[f64]) -> Result<f64, StatsError> {
    if samples.is_empty() {
        return Err(StatsError::EmptySamples);
    }
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Conventional median: middle value, or the average of the two middle values
/// for even-sized samples. Sorts a copy, the input is left untouched.
pub fn median(samples: &[f64]) -> Result<f64, StatsError> {
    if samples.is_empty() {
        return Err(StatsError::EmptySamples);
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Most frequent value; ties resolve to the value seen first in input order.
pub fn mode<T: PartialEq + Copy>(samples: &[T]) -> Result<T, StatsError> {
    if samples.is_empty() {
        return Err(StatsError::EmptySamples);
    }
    let mut counts: Vec<(T, usize)> = Vec::new();
    for &sample in samples {
        match counts.iter_mut().find(|(value, _)| *value == sample) {
            Some((_, count)) => *count += 1,
            None => counts.push((sample, 1)),
        }
    }
    let mut best = counts[0];
    for &(value, count) in &counts[1..] {
        if count > best.1 {
            best = (value, count);
        }
    }
    Ok(best.0)
}

/// Sample standard deviation with Bessel's correction (divisor `n - 1`).
pub fn stdev(samples: &[f64]) -> Result<f64, StatsError> {
    if samples.len() < 2 {
        return Err(StatsError::TooFewSamples { n: samples.len() });
    }
    let center = mean(samples)?;
    let sum_sq: f64 = samples.iter().map(|v| (v - center) * (v - center)).sum();
    Ok((sum_sq / (samples.len() as f64 - 1.0)).sqrt())
}

pub fn describe_ints(samples: &[i64]) -> Result<AggregateRecord, StatsError> {
    let floats: Vec<f64> = samples.iter().map(|&v| v as f64).collect();
    Ok(AggregateRecord {
        mean: mean(&floats)?,
        median: median(&floats)?,
        mode: Value::Int(mode(samples)?),
        stdev: stdev(&floats)?,
    })
}

pub fn describe_floats(samples: &[f64]) -> Result<AggregateRecord, StatsError> {
    Ok(AggregateRecord {
        mean: mean(samples)?,
        median: median(samples)?,
        mode: Value::Float(mode(samples)?),
        stdev: stdev(samples)?,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/aggregate/describe.rs"]
mod tests;
