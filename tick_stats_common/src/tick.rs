//! Tick records and the numeric series projected from them.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// One market observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Symbol identifier (e.g., `LINKFDUSD`).
    pub symbol: String,
    /// Traded price.
    pub price: f64,
    /// Traded volume.
    pub volume: f64,
}

/// Numeric field of a `Tick` that a series is projected from.
///
/// Iteration order (`SeriesKind::iter()`) is the order series appear in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SeriesKind {
    /// Projection of `Tick::price`.
    Price,
    /// Projection of `Tick::volume`.
    Volume,
}

impl SeriesKind {
    /// Read this field from a tick.
    pub fn extract(self, tick: &Tick) -> f64 {
        match self {
            SeriesKind::Price => tick.price,
            SeriesKind::Volume => tick.volume,
        }
    }
}

/// Ordered, read-only sequence of one numeric field across all ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    kind: SeriesKind,
    values: Vec<f64>,
}

impl Series {
    /// Project `kind` from every tick, preserving input order.
    pub fn project(kind: SeriesKind, ticks: &[Tick]) -> Self {
        Self {
            kind,
            values: ticks.iter().map(|t| kind.extract(t)).collect(),
        }
    }

    /// Wrap values that were not projected from ticks.
    pub fn from_values(kind: SeriesKind, values: Vec<f64>) -> Self {
        Self { kind, values }
    }

    /// Price series of `ticks`.
    pub fn prices(ticks: &[Tick]) -> Self {
        Self::project(SeriesKind::Price, ticks)
    }

    /// Volume series of `ticks`.
    pub fn volumes(ticks: &[Tick]) -> Self {
        Self::project(SeriesKind::Volume, ticks)
    }

    /// Field this series was projected from.
    pub fn kind(&self) -> SeriesKind {
        self.kind
    }

    /// Values in tick order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values (equal to the tick count).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` when projected from no ticks.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
