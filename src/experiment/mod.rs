//! # The uniformity experiment
//!
//! A sequence is shuffled many times and every outcome is classified as one of the `n!` possible
//! orderings. For a uniform shuffle each ordering should occur roughly equally often.
use enum_map::EnumMap;
use rand::Rng;
use tracing::{debug, info, trace};

use crate::algorithm::enumerate::enumerate_permutations;
use crate::algorithm::matching::find_permutation;
use crate::algorithm::permute::{Method, Permuter};
use crate::error::Error;
use crate::experiment::report::Report;

pub mod report;

/// Number of shuffles per experiment.
pub const TRIALS_COUNT: u64 = 10_000;
/// Sequence that gets shuffled.
pub const INITIAL_SEQUENCE: [i32; 4] = [1, 2, 3, 4];

/// Occurrence count for each enumerated permutation.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Tally {
    counts: Vec<u64>,
}

impl Tally {
    /// Create a tally of zeros.
    ///
    /// # Arguments
    ///
    /// * `len`: Number of permutations being counted.
    pub fn new(len: usize) -> Self {
        Self { counts: vec![0; len] }
    }

    /// Count one more occurrence of the permutation at `index`.
    pub fn increment(&mut self, index: usize) {
        debug_assert!(index < self.counts.len());

        self.counts[index] += 1;
    }

    /// Sum over all permutations.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Count per permutation index.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Number of permutations.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether there are no permutations to count.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Parameters of a single run.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Experiment<T> {
    trials: u64,
    initial: Vec<T>,
}

impl Experiment<i32> {
    /// The experiment the binary runs.
    pub fn standard() -> Self {
        Self::new(TRIALS_COUNT, INITIAL_SEQUENCE.to_vec())
    }
}

impl<T: Clone + Eq> Experiment<T> {
    /// Create a new instance.
    ///
    /// # Arguments
    ///
    /// * `trials`: Number of times the sequence is shuffled.
    /// * `initial`: Sequence to shuffle, a fresh copy is used in each trial. Should be short, as
    /// all of its permutations are enumerated.
    pub fn new(trials: u64, initial: Vec<T>) -> Self {
        Self { trials, initial }
    }

    /// Number of shuffles.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Sequence that is shuffled.
    pub fn initial(&self) -> &[T] {
        &self.initial
    }

    /// Shuffle the initial sequence `trials` times and count the outcomes.
    ///
    /// # Arguments
    ///
    /// * `permuter`: Shuffling method under evaluation.
    /// * `rng`: Randomness, shared by all trials.
    ///
    /// # Return value
    ///
    /// Occurrence counts and their deviation from the uniform average.
    ///
    /// # Errors
    ///
    /// Only when an internal invariant is violated, see `Error`.
    pub fn run<P, R>(&self, permuter: &P, rng: &mut R) -> Result<Report<T>, Error>
    where
        P: Permuter,
        R: Rng + ?Sized,
    {
        let permutations = enumerate_permutations(&self.initial)?;
        debug!(count = permutations.len(), "enumerated all permutations");

        let tally = self.count_outcomes(&permutations, permuter, rng)?;

        let total = tally.total();
        if total != self.trials {
            return Err(Error::TallyMismatch { expected: self.trials, actual: total });
        }

        Ok(Report::new(permutations, &tally, self.trials))
    }

    fn count_outcomes<P, R>(
        &self,
        permutations: &[Vec<T>],
        permuter: &P,
        rng: &mut R,
    ) -> Result<Tally, Error>
    where
        P: Permuter,
        R: Rng + ?Sized,
    {
        let mut tally = Tally::new(permutations.len());
        for trial in 0..self.trials {
            let mut sequence = self.initial.clone();
            permuter.permute(&mut sequence, rng)?;

            let index = find_permutation(&sequence, permutations)?
                .ok_or(Error::PermutationNotFound { trial })?;
            trace!(trial, index, "classified outcome");

            tally.increment(index);
        }

        Ok(tally)
    }
}

/// Run the experiment once for each shuffling method.
///
/// The methods are run in declaration order, all drawing from the same `rng`.
pub fn run_all<T, R>(
    experiment: &Experiment<T>,
    rng: &mut R,
) -> Result<EnumMap<Method, Report<T>>, Error>
where
    T: Clone + Eq,
    R: Rng + ?Sized,
{
    let mut reports = EnumMap::default();
    for (method, report) in &mut reports {
        debug!(%method, trials = experiment.trials(), "starting experiment");
        *report = experiment.run(&method, rng)?;
        info!(
            %method,
            permutations = report.permutation_count(),
            max_deviation = report.max_deviation(),
            "experiment finished",
        );
    }

    Ok(reports)
}
