use proptest::prelude::*;
use tick_stats_common::StatsError;
use tick_stats_common::report::{Report, StatValue, Statistic};
use tick_stats_common::stats;
use tick_stats_common::tick::{Series, SeriesKind};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    #[test]
    fn sum_over_len_equals_mean(values in prop::collection::vec(0.01f64..10_000.0, 1..120)) {
        let mean = stats::mean(&values).unwrap();
        let scale = values.iter().cloned().fold(1.0f64, f64::max);
        prop_assert!((stats::sum(&values) / values.len() as f64 - mean).abs() <= 1e-12 * scale);
    }

    #[test]
    fn median_and_mean_lie_between_extremes(values in prop::collection::vec(-1_000.0f64..1_000.0, 1..120)) {
        let min = stats::min(&values).unwrap();
        let max = stats::max(&values).unwrap();
        let median = stats::median(&values).unwrap();
        let mean = stats::mean(&values).unwrap();

        prop_assert!(min <= median && median <= max);
        prop_assert!(min - 1e-9 <= mean && mean <= max + 1e-9);
    }

    #[test]
    fn variance_is_non_negative(values in prop::collection::vec(-1_000.0f64..1_000.0, 2..120)) {
        let variance = stats::variance(&values).unwrap();
        prop_assert!(variance >= 0.0);
        prop_assert!((stats::stdev(&values).unwrap() - variance.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn distinct_values_have_no_unique_mode(values in prop::collection::btree_set(-10_000i64..10_000, 2..80)) {
        let values: Vec<f64> = values.into_iter().map(|v| v as f64 / 100.0).collect();
        prop_assert!(matches!(stats::mode(&values), Err(StatsError::NoUniqueMode)));

        let series = vec![Series::from_values(SeriesKind::Volume, values)];
        let report = Report::from_series(&series).unwrap();
        prop_assert_eq!(
            report.value(Statistic::Mode, SeriesKind::Volume),
            Some(StatValue::NoUniqueMode)
        );
    }

    #[test]
    fn single_most_frequent_value_is_the_mode(
        others in prop::collection::btree_set(1i64..1_000, 1..40),
        repeats in 2usize..6,
    ) {
        let mut values: Vec<f64> = others.iter().map(|&v| v as f64 / 100.0).collect();
        let winner = 12.34;
        values.extend(std::iter::repeat_n(winner, repeats));

        prop_assert_eq!(stats::mode(&values).unwrap(), winner);
    }
}
