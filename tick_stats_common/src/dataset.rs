//! Embedded tick fixture.
//!
//! The LINKFDUSD observations ship inside the binary as JSON (`data/ticks.json`)
//! and are decoded once with `serde_json`. Loading enforces the non-empty
//! invariant every downstream statistic relies on.
use log::info;

use crate::error::StatsError;
use crate::result::Result;
use crate::tick::{Series, SeriesKind, Tick};

/// Raw JSON of the embedded fixture.
const EMBEDDED_TICKS: &str = include_str!("../data/ticks.json");

/// Number of ticks in the embedded fixture.
pub const EMBEDDED_TICK_COUNT: usize = 66;

/// Immutable, non-empty list of ticks.
#[derive(Debug, Clone)]
pub struct Dataset {
    ticks: Vec<Tick>,
}

impl Dataset {
    /// Decode the fixture compiled into the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_TICKS)
    }

    /// Decode a JSON array of ticks.
    ///
    /// Returns `StatsError::EmptyDataset` for `[]` and `StatsError::SerdeJson`
    /// for malformed input.
    pub fn from_json(json: &str) -> Result<Self> {
        let ticks: Vec<Tick> = serde_json::from_str(json)?;
        Self::from_ticks(ticks)
    }

    /// Wrap an already-built tick list.
    pub fn from_ticks(ticks: Vec<Tick>) -> Result<Self> {
        if ticks.is_empty() {
            return Err(StatsError::EmptyDataset);
        }
        info!("Loaded {} ticks for {}", ticks.len(), ticks[0].symbol);
        Ok(Self { ticks })
    }

    /// All ticks in fixture order.
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    /// Number of ticks. Never zero.
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    /// Construction rejects empty tick lists, so this is always `false`.
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// Project one numeric field across all ticks.
    pub fn series(&self, kind: SeriesKind) -> Series {
        Series::project(kind, &self.ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_fixture_has_all_ticks() {
        let dataset = Dataset::embedded().unwrap();
        assert_eq!(dataset.len(), EMBEDDED_TICK_COUNT);
        assert!(dataset.ticks().iter().all(|t| t.symbol == "LINKFDUSD"));

        let first = &dataset.ticks()[0];
        assert_eq!(first.price, 22.82);
        assert_eq!(first.volume, 0.33);
        let last = &dataset.ticks()[EMBEDDED_TICK_COUNT - 1];
        assert_eq!(last.price, 22.62);
        assert_eq!(last.volume, 5.14);
    }

    #[test]
    fn series_match_tick_count() {
        let dataset = Dataset::embedded().unwrap();
        for kind in [SeriesKind::Price, SeriesKind::Volume] {
            let series = dataset.series(kind);
            assert_eq!(series.len(), dataset.len());
            assert!(!series.is_empty());
        }
    }

    #[test]
    fn empty_fixture_is_rejected() {
        assert!(matches!(
            Dataset::from_json("[]"),
            Err(StatsError::EmptyDataset)
        ));
    }

    #[test]
    fn malformed_fixture_is_a_json_error() {
        assert!(matches!(
            Dataset::from_json(r#"[{"symbol": "X", "price": "abc"}]"#),
            Err(StatsError::SerdeJson(_))
        ));
    }
}
