//! # Sort keys
//!
//! Random keys that determine where each element of a sequence ends up. Keys are drawn from
//! `0..n³`, which is large enough to make collisions rare but not impossible.
use std::collections::HashSet;
use std::ops::Range;

use num_traits::checked_pow;
use rand::Rng;

use crate::error::Error;

/// Range from which keys for a sequence of length `n` are drawn.
///
/// # Arguments
///
/// * `n`: Length of the sequence, at least one.
///
/// # Return value
///
/// The half-open range `0..n³`.
pub fn key_range(n: usize) -> Result<Range<usize>, Error> {
    if n == 0 {
        return Err(Error::EmptySequence);
    }

    checked_pow(n, 3)
        .map(|upper| 0..upper)
        .ok_or(Error::TooLarge { len: n })
}

/// Draw `n` keys independently, duplicates allowed.
pub fn generate_keys<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Vec<usize>, Error> {
    let range = key_range(n)?;

    Ok((0..n).map(|_| rng.random_range(range.clone())).collect())
}

/// Draw `n` pairwise distinct keys.
///
/// Duplicates are rejected and drawn again. The keys are returned in the order in which they were
/// accepted.
pub fn generate_unique_keys<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Vec<usize>, Error> {
    let range = key_range(n)?;

    let mut seen = HashSet::with_capacity(n);
    let mut keys = Vec::with_capacity(n);
    while keys.len() < n {
        let key = rng.random_range(range.clone());
        if seen.insert(key) {
            keys.push(key);
        }
    }

    Ok(keys)
}
