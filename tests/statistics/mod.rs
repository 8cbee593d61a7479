//! # Distribution of the outcomes
//!
//! Many trials on four elements. With distinct keys every ordering is equally likely; with
//! independent keys the initial ordering gains from key collisions.
use rand::SeedableRng;
use rand::rngs::StdRng;

use permutation_uniformity::algorithm::permute::Method;
use permutation_uniformity::experiment::{Experiment, run_all};

const TRIALS: u64 = 2_400_000;

/// Pearson's chi-squared statistic against the uniform distribution.
fn chi_squared(counts: impl Iterator<Item = u64>, expected: f64) -> f64 {
    counts
        .map(|count| {
            let difference = count as f64 - expected;
            difference * difference / expected
        })
        .sum()
}

#[test]
fn unique_keys_are_uniform() {
    let mut rng = StdRng::seed_from_u64(31);
    let reports = run_all(&Experiment::new(TRIALS, vec![1, 2, 3, 4]), &mut rng).unwrap();

    let report = &reports[Method::SortingUnique];
    let statistic = chi_squared(report.rows().iter().map(|row| row.count()), 100_000.0);
    // 23 degrees of freedom; the 0.99999 quantile is about 62.
    assert!(statistic < 65.0, "chi squared is {statistic}");
}

#[test]
fn independent_keys_are_not_uniform() {
    let mut rng = StdRng::seed_from_u64(31);
    let reports = run_all(&Experiment::new(TRIALS, vec![1, 2, 3, 4]), &mut rng).unwrap();

    let report = &reports[Method::Sorting];
    let statistic = chi_squared(report.rows().iter().map(|row| row.count()), 100_000.0);
    assert!(statistic > 65.0, "chi squared is {statistic}");
    assert!(report.rows()[0].count() > 105_000);
}
