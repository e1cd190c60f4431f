//! Error types shared between the statistics library and the reporter binary.
//!
//! `StatsError` covers the one recoverable condition (a series without a unique
//! mode) as well as the failures that are allowed to terminate the program:
//! empty input, too few values for a sample statistic, fixture parsing and I/O.
use std::io;

use thiserror::Error;

/// Unified error type shared by the library and the reporter.
#[derive(Error, Debug)]
pub enum StatsError {
    /// No single value occurs strictly more often than every other value.
    #[error("no unique mode: the highest frequency is shared by several values")]
    NoUniqueMode,

    /// A statistic was requested over an empty series.
    #[error("{statistic} requires at least one data point")]
    EmptySeries {
        /// Name of the statistic that was requested.
        statistic: &'static str,
    },

    /// A sample statistic was requested over too few data points.
    #[error("{statistic} requires at least {needed} data points, got {got}")]
    InsufficientData {
        /// Name of the statistic that was requested.
        statistic: &'static str,
        /// Minimum number of points the statistic is defined for.
        needed: usize,
        /// Number of points actually supplied.
        got: usize,
    },

    /// The tick fixture decoded to an empty list.
    #[error("Dataset contains no ticks")]
    EmptyDataset,

    /// I/O error while writing the report.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while decoding the tick fixture via serde_json.
    #[error("JSON deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
