//! # Reporting
//!
//! Occurrence counts per permutation together with their deviation from the count a uniform
//! shuffle would have on average.
use std::fmt;

use itertools::Itertools;

use crate::experiment::Tally;

/// Outcome for a single permutation.
#[derive(PartialEq, Clone, Debug)]
pub struct Row<T> {
    permutation: Vec<T>,
    count: u64,
    deviation: u64,
    relative_deviation: f64,
}

impl<T> Row<T> {
    /// The ordering this row counts.
    pub fn permutation(&self) -> &[T] {
        &self.permutation
    }

    /// Number of trials that produced this permutation.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Absolute difference between the count and the expected average.
    pub fn deviation(&self) -> u64 {
        self.deviation
    }

    /// The deviation as a fraction of the expected average.
    ///
    /// Not finite when the expected average is zero.
    pub fn relative_deviation(&self) -> f64 {
        self.relative_deviation
    }
}

/// Result of one experiment.
#[derive(PartialEq, Clone, Debug)]
pub struct Report<T> {
    trials: u64,
    expected_average: u64,
    rows: Vec<Row<T>>,
}

impl<T> Report<T> {
    /// Combine the permutations with their counts.
    ///
    /// # Arguments
    ///
    /// * `permutations`: All permutations, in the order in which they were counted.
    /// * `tally`: Count per permutation.
    /// * `trials`: Number of trials that were run.
    pub fn new(permutations: Vec<Vec<T>>, tally: &Tally, trials: u64) -> Self {
        debug_assert_eq!(permutations.len(), tally.len());

        let expected_average = if permutations.is_empty() {
            0
        } else {
            trials / permutations.len() as u64
        };

        let rows = permutations.into_iter()
            .zip(tally.counts())
            .map(|(permutation, &count)| {
                let deviation = count.abs_diff(expected_average);
                Row {
                    permutation,
                    count,
                    deviation,
                    relative_deviation: deviation as f64 / expected_average as f64,
                }
            })
            .collect();

        Self { trials, expected_average, rows }
    }

    /// Number of rows, `n!`.
    pub fn permutation_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of shuffles.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Trials divided by the number of permutations, rounded down.
    pub fn expected_average(&self) -> u64 {
        self.expected_average
    }

    /// One row per permutation, in enumeration order.
    pub fn rows(&self) -> &[Row<T>] {
        &self.rows
    }

    /// Sum of all counts, equal to the number of trials.
    pub fn total(&self) -> u64 {
        self.rows.iter().map(Row::count).sum()
    }

    /// Largest absolute deviation over all permutations.
    pub fn max_deviation(&self) -> u64 {
        self.rows.iter().map(Row::deviation).max().unwrap_or(0)
    }
}

impl<T> Default for Report<T> {
    fn default() -> Self {
        Self { trials: 0, expected_average: 0, rows: Vec::new() }
    }
}

impl<T: fmt::Display> fmt::Display for Report<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "All possible permutations count: {}", self.permutation_count())?;
        writeln!(f, "Trials count: {}", self.trials)?;
        writeln!(f, "Expected avarage count: {}", self.expected_average)?;
        writeln!(f)?;

        writeln!(f, "Permutation occurance")?;
        for row in &self.rows {
            writeln!(
                f,
                "{} : {}, deviation = {} / {}",
                row.permutation.iter().join(" "),
                row.count,
                row.deviation,
                format_general(row.relative_deviation),
            )?;
        }

        writeln!(f)
    }
}

/// Format a float with six significant digits, dropping trailing zeros.
///
/// Switches to scientific notation for very small or very large values, like the `%g` conversion
/// of C's `printf`.
fn format_general(value: f64) -> String {
    const PRECISION: i32 = 6;

    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // Round to the requested number of significant digits first, the exponent may change.
    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
