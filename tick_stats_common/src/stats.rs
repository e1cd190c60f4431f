//! Descriptive statistics over a slice of `f64`.
//!
//! Every function takes the series by slice and leaves it untouched. Statistics
//! that are undefined on empty input return `StatsError::EmptySeries`; sample
//! variance and standard deviation use Bessel's correction (divisor `n - 1`) and
//! need at least two points.
use std::cmp::Ordering;

use crate::error::StatsError;
use crate::result::Result;

fn ensure_non_empty(values: &[f64], statistic: &'static str) -> Result<()> {
    if values.is_empty() {
        return Err(StatsError::EmptySeries { statistic });
    }
    Ok(())
}

/// Ascending copy of `values`.
fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

/// Arithmetic total. `0.0` for an empty slice.
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic average.
pub fn mean(values: &[f64]) -> Result<f64> {
    ensure_non_empty(values, "mean")?;
    Ok(sum(values) / values.len() as f64)
}

/// Middle value of the sorted series; the average of the two central values
/// when the length is even.
pub fn median(values: &[f64]) -> Result<f64> {
    ensure_non_empty(values, "median")?;
    let sorted = sorted(values);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// The single value occurring strictly more often than every other value.
///
/// Returns `StatsError::NoUniqueMode` when the highest frequency is shared,
/// which includes any all-distinct series of two or more values. `0.0` and
/// `-0.0` count as the same value.
pub fn mode(values: &[f64]) -> Result<f64> {
    ensure_non_empty(values, "mode")?;
    let normalized: Vec<f64> = values
        .iter()
        .map(|&v| if v == 0.0 { 0.0 } else { v })
        .collect();
    let sorted = sorted(&normalized);

    let mut best = sorted[0];
    let mut best_count = 0usize;
    let mut tied = false;

    for run in sorted.chunk_by(|a, b| a.total_cmp(b) == Ordering::Equal) {
        match run.len().cmp(&best_count) {
            Ordering::Greater => {
                best = run[0];
                best_count = run.len();
                tied = false;
            }
            Ordering::Equal => tied = true,
            Ordering::Less => {}
        }
    }

    if tied {
        return Err(StatsError::NoUniqueMode);
    }
    Ok(best)
}

/// Sample variance (divisor `n - 1`).
pub fn variance(values: &[f64]) -> Result<f64> {
    if values.len() < 2 {
        return Err(StatsError::InsufficientData {
            statistic: "variance",
            needed: 2,
            got: values.len(),
        });
    }
    let mean = mean(values)?;
    let squared_deviations: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Ok(squared_deviations / (values.len() - 1) as f64)
}

/// Sample standard deviation, the square root of [`variance`].
pub fn stdev(values: &[f64]) -> Result<f64> {
    variance(values).map(f64::sqrt).map_err(|e| match e {
        StatsError::InsufficientData { needed, got, .. } => StatsError::InsufficientData {
            statistic: "standard deviation",
            needed,
            got,
        },
        other => other,
    })
}

/// Largest element.
pub fn max(values: &[f64]) -> Result<f64> {
    ensure_non_empty(values, "max")?;
    Ok(values.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// Smallest element.
pub fn min(values: &[f64]) -> Result<f64> {
    ensure_non_empty(values, "min")?;
    Ok(values.iter().copied().fold(f64::INFINITY, f64::min))
}
