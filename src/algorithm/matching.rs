//! # Matching
//!
//! Classify an ordered sequence by its position in a list of permutations.
use crate::error::Error;

/// Index of the first permutation equal to `needle`.
///
/// # Arguments
///
/// * `needle`: Sequence to look for.
/// * `haystack`: Permutations to search through, each of the same length as the needle.
///
/// # Return value
///
/// `Some` index of the first exact match, or `None` if no permutation matches.
///
/// # Errors
///
/// If a permutation is encountered with a length different from that of the needle.
pub fn find_permutation<T: Eq, P: AsRef<[T]>>(
    needle: &[T],
    haystack: &[P],
) -> Result<Option<usize>, Error> {
    for (index, permutation) in haystack.iter().enumerate() {
        let permutation = permutation.as_ref();
        if permutation.len() != needle.len() {
            return Err(Error::LengthMismatch {
                index,
                expected: needle.len(),
                actual: permutation.len(),
            });
        }

        if permutation.iter().zip(needle).all(|(left, right)| left == right) {
            return Ok(Some(index));
        }
    }

    Ok(None)
}
