//! # Internal invariant violations
//!
//! Nothing in this crate can fail because of user input: the sequence and trial count are fixed.
//! Every variant below therefore signals a bug, and the binary aborts when it sees one.
use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum Error {
    /// The sequence to permute has no elements.
    ///
    /// Neither the key range `0..n³` nor the set of permutations is meaningful in that case.
    #[error("cannot permute an empty sequence")]
    EmptySequence,
    /// Either `n!` or `n³` does not fit in a `usize`.
    #[error("sequence of length {len} is too large to enumerate")]
    TooLarge {
        /// Length of the offending sequence.
        len: usize,
    },
    /// The enumeration produced a number of permutations different from `n!`.
    #[error("expected {expected} permutations, enumerated {actual}")]
    EnumerationCount {
        /// `n!`
        expected: usize,
        /// Number actually produced.
        actual: usize,
    },
    /// A permutation in the searched set has a different length than the needle.
    #[error("permutation {index} has length {actual}, needle has length {expected}")]
    LengthMismatch {
        /// Position of the offending permutation in the set.
        index: usize,
        /// Length of the needle.
        expected: usize,
        /// Length of the permutation at `index`.
        actual: usize,
    },
    /// The outcome of a trial is not one of the enumerated permutations.
    #[error("outcome of trial {trial} is not among the enumerated permutations")]
    PermutationNotFound {
        /// Zero-based trial number.
        trial: u64,
    },
    /// The occurrence counts don't add up to the number of trials.
    #[error("tally sums to {actual}, but {expected} trials were run")]
    TallyMismatch {
        /// Number of trials.
        expected: u64,
        /// Sum of the tally.
        actual: u64,
    },
}
