//!
//! Descriptive statistics over the price and volume series of a fixed tick dataset.
//!
//! This crate aggregates:
//! - `error` — unified error type `StatsError` used across the workspace.
//! - `result` — handy `Result<T, StatsError>` alias.
//! - `tick` — the `Tick` record and the `Series` projections derived from it.
//! - `dataset` — the embedded tick fixture, parsed once at startup.
//! - `stats` — mean, median, mode, variance, standard deviation, min, max and sum.
//! - `report` — ordered, labeled and fixed-precision rendering of the statistics.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod tick;
pub mod dataset;
pub mod stats;
pub mod report;

pub use error::StatsError;
pub use result::Result;
pub use tick::Tick;
