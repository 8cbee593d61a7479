//! # Utilities
//!
//! Helper functions for algorithms.
use num_traits::CheckedMul;

/// Compute `n!`.
///
/// # Arguments
///
/// * `n` - Number of elements being permuted.
///
/// # Return value
///
/// The factorial, or `None` if it doesn't fit in the integer type.
pub(crate) fn factorial<N>(n: N) -> Option<N>
where
    N: CheckedMul + Copy + PartialOrd + From<u8> + std::ops::Add<Output = N>,
{
    let mut result = N::from(1);
    let mut factor = N::from(2);
    while factor <= n {
        result = result.checked_mul(&factor)?;
        factor = factor + N::from(1);
    }

    Some(result)
}

/// Copy a slice, leaving out a single element.
///
/// # Arguments
///
/// * `slice` - Values to copy.
/// * `index` - Position of the value to skip, should be in range `0..slice.len()`.
pub(crate) fn without_index<T: Clone>(slice: &[T], index: usize) -> Vec<T> {
    debug_assert!(index < slice.len());

    let mut result = Vec::with_capacity(slice.len() - 1);
    result.extend_from_slice(&slice[..index]);
    result.extend_from_slice(&slice[index + 1..]);
    result
}
