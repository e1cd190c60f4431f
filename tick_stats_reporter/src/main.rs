//! Tick statistics reporter.
//!
//! Loads the embedded LINKFDUSD tick fixture, computes mean, median, mode,
//! sample variance, sample standard deviation, maximum, minimum and total for
//! the price and volume series, and prints one labeled line per statistic to
//! stdout:
//!
//! ```text
//! Computing dataset statistics
//! Mean Price: 22.7344
//! Mean Volume: 3.4332
//! ...
//! Total sum Volume: 226.5900
//! ```
//!
//! The program takes no arguments. Diagnostics go to stderr through
//! `env_logger` (default level `warn`, override with `RUST_LOG`), so stdout
//! carries only the report. A series without a unique mode prints a fallback
//! sentence on its mode line; any other failure ends the process with a
//! non-zero exit code.
#![warn(missing_docs)]
use log::info;
use std::io::{self, Write};
use tick_stats_common::Result;
use tick_stats_common::StatsError;
use tick_stats_common::dataset::Dataset;
use tick_stats_common::report::Report;

/// Build the report for the embedded dataset and write it to `out`.
fn run<W: Write>(out: &mut W) -> Result<(), StatsError> {
    let dataset = Dataset::embedded()?;
    let report = Report::build(&dataset)?;
    report.write_to(out)?;
    info!("Report written: {} statistic lines", report.lines().len());
    Ok(())
}

fn main() -> Result<(), StatsError> {
    init_logger();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&mut out)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
