//! # Enumerating permutations
//!
//! Produce every ordering of a small sequence. The number of orderings grows as `n!`, so this is
//! only feasible for sequences of up to about ten elements.
use tracing::trace;

use crate::algorithm::utilities::{factorial, without_index};
use crate::error::Error;

/// All orderings of a sequence.
///
/// Elements are treated positionally: a sequence with repeated values still yields `n!` orderings,
/// some of which compare equal.
///
/// The ordering of the result is canonical. For each position `i` of the input, in increasing
/// order, the orderings of the input without `i` are listed, each with element `i` in front. For
/// distinct elements in ascending order this is lexicographic order.
///
/// # Arguments
///
/// * `sequence`: Elements to permute, not empty.
///
/// # Return value
///
/// All `n!` orderings.
///
/// # Errors
///
/// When the sequence is empty, `n!` overflows, or the number of orderings produced is not `n!`.
pub fn enumerate_permutations<T: Clone>(sequence: &[T]) -> Result<Vec<Vec<T>>, Error> {
    let n = sequence.len();
    if n == 0 {
        return Err(Error::EmptySequence);
    }
    let expected = factorial(n).ok_or(Error::TooLarge { len: n })?;

    let permutations = if n == 1 {
        vec![sequence.to_vec()]
    } else {
        let mut permutations = Vec::with_capacity(expected);
        for (i, first) in sequence.iter().enumerate() {
            let rest = without_index(sequence, i);
            for tail in enumerate_permutations(&rest)? {
                let mut permutation = Vec::with_capacity(n);
                permutation.push(first.clone());
                permutation.extend(tail);
                permutations.push(permutation);
            }
        }
        permutations
    };

    if permutations.len() != expected {
        return Err(Error::EnumerationCount { expected, actual: permutations.len() });
    }
    trace!(n, count = permutations.len(), "enumerated permutations");

    Ok(permutations)
}
