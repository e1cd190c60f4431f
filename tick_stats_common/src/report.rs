//! Ordered, labeled rendering of the statistics for every series.
//!
//! A `Report` is computed once from a `Dataset` and then written as a header
//! line followed by one line per (statistic, series) pair:
//!
//! ```text
//! Computing dataset statistics
//! Mean Price: 22.7344
//! Mean Volume: 3.4332
//! ...
//! ```
//!
//! Statistics appear in `Statistic` declaration order and, within a statistic,
//! series appear in `SeriesKind` declaration order. Mode is the only statistic
//! allowed to fail softly: a series without a unique mode renders the
//! `NO_UNIQUE_MODE_MESSAGE` fallback instead of a number.
use std::fmt;
use std::io::Write;

use log::{debug, info};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::dataset::Dataset;
use crate::error::StatsError;
use crate::result::Result;
use crate::stats;
use crate::tick::{Series, SeriesKind};

/// First line of every report.
pub const HEADER: &str = "Computing dataset statistics";

/// Rendered in place of the mode when no value is strictly most frequent.
pub const NO_UNIQUE_MODE_MESSAGE: &str = "no unique value repeats most often";

/// Statistics in report order.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Statistic {
    #[strum(serialize = "Mean")]
    Mean,
    #[strum(serialize = "Median")]
    Median,
    #[strum(serialize = "Mode")]
    Mode,
    #[strum(serialize = "Variance")]
    Variance,
    #[strum(serialize = "Standard deviation")]
    StdDev,
    #[strum(serialize = "Maximum")]
    Max,
    #[strum(serialize = "Minimum")]
    Min,
    #[strum(serialize = "Total sum")]
    Sum,
}

impl Statistic {
    /// Decimal places used when rendering this statistic.
    pub fn precision(self) -> usize {
        match self {
            Statistic::Variance | Statistic::StdDev => 6,
            _ => 4,
        }
    }

    /// Compute this statistic over `values`.
    ///
    /// `StatsError::NoUniqueMode` from the mode computation becomes
    /// `StatValue::NoUniqueMode`; every other error is returned.
    pub fn compute(self, values: &[f64]) -> Result<StatValue> {
        let value = match self {
            Statistic::Mean => stats::mean(values)?,
            Statistic::Median => stats::median(values)?,
            Statistic::Mode => match stats::mode(values) {
                Ok(mode) => mode,
                Err(StatsError::NoUniqueMode) => return Ok(StatValue::NoUniqueMode),
                Err(e) => return Err(e),
            },
            Statistic::Variance => stats::variance(values)?,
            Statistic::StdDev => stats::stdev(values)?,
            Statistic::Max => stats::max(values)?,
            Statistic::Min => stats::min(values)?,
            Statistic::Sum => stats::sum(values),
        };
        Ok(StatValue::Number(value))
    }
}

/// Outcome of one statistic over one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatValue {
    /// Computed value.
    Number(f64),
    /// The series has no strictly most frequent value.
    NoUniqueMode,
}

impl StatValue {
    /// Numeric value, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StatValue::Number(v) => Some(*v),
            StatValue::NoUniqueMode => None,
        }
    }
}

/// One `"<Label> <Series>: <value>"` line.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    /// Statistic reported on this line.
    pub statistic: Statistic,
    /// Series the statistic was computed over.
    pub series: SeriesKind,
    /// Computed value or fallback marker.
    pub value: StatValue,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: ", self.statistic, self.series)?;
        match self.value {
            StatValue::Number(v) => write!(f, "{:.*}", self.statistic.precision(), v),
            StatValue::NoUniqueMode => f.write_str(NO_UNIQUE_MODE_MESSAGE),
        }
    }
}

/// All statistics for all series, in output order.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    lines: Vec<ReportLine>,
}

impl Report {
    /// Compute every statistic for the price and volume series of `dataset`.
    pub fn build(dataset: &Dataset) -> Result<Self> {
        let series: Vec<Series> = SeriesKind::iter().map(|k| dataset.series(k)).collect();
        Self::from_series(&series)
    }

    /// Compute every statistic for each series, statistic-major.
    pub fn from_series(series: &[Series]) -> Result<Self> {
        let mut lines = Vec::with_capacity(series.len() * Statistic::iter().len());
        for statistic in Statistic::iter() {
            for s in series {
                let value = statistic.compute(s.values())?;
                if value == StatValue::NoUniqueMode {
                    info!("{} series has no unique mode; using fallback message", s.kind());
                }
                debug!("{} {} = {:?}", statistic, s.kind(), value);
                lines.push(ReportLine {
                    statistic,
                    series: s.kind(),
                    value,
                });
            }
        }
        Ok(Self { lines })
    }

    /// Report lines in output order, without the header.
    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    /// Look up a single value.
    pub fn value(&self, statistic: Statistic, series: SeriesKind) -> Option<StatValue> {
        self.lines
            .iter()
            .find(|l| l.statistic == statistic && l.series == series)
            .map(|l| l.value)
    }

    /// Write the header and every line, newline-terminated.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", HEADER)?;
        for line in &self.lines {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        Ok(())
    }
}
