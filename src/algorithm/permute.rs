//! # Permuting by sorting
//!
//! A sequence is shuffled by attaching a random key to every element and sorting the elements by
//! their keys. Whether the result is uniformly distributed depends on how the keys are chosen:
//! equal keys never exchange their elements, so duplicates bias the outcome towards the original
//! order.
use std::fmt;

use enum_map::Enum;
use rand::Rng;

use crate::algorithm::keys::{generate_keys, generate_unique_keys};
use crate::error::Error;

/// Reorder `sequence` such that `keys` becomes ascending.
///
/// Every swap of two keys is mirrored on the elements at the same positions. Only keys that are
/// strictly out of order are swapped. Two elements with equal keys are never exchanged with each
/// other directly, but a swap with a third element may still carry one past the other.
///
/// # Arguments
///
/// * `keys`: One key per element, sorted in place.
/// * `sequence`: Elements to reorder, of the same length as `keys`.
pub fn sort_by_keys<K: PartialOrd, T>(keys: &mut [K], sequence: &mut [T]) {
    debug_assert_eq!(keys.len(), sequence.len());

    let n = keys.len();
    for i in 0..n {
        for j in (i + 1)..n {
            if keys[i] > keys[j] {
                keys.swap(i, j);
                sequence.swap(i, j);
            }
        }
    }

    debug_assert!(keys.windows(2).all(|w| w[0] <= w[1]));
}

/// A randomized, in place reordering of a sequence.
pub trait Permuter {
    /// Shuffle the sequence.
    ///
    /// # Arguments
    ///
    /// * `sequence`: Values to reorder, should not be empty.
    /// * `rng`: Source of randomness.
    fn permute<T, R: Rng + ?Sized>(&self, sequence: &mut [T], rng: &mut R) -> Result<(), Error>;
}

/// The two ways of choosing keys that are compared.
#[derive(Enum, Eq, PartialEq, Copy, Clone, Debug)]
pub enum Method {
    /// Keys are drawn independently and may collide.
    Sorting,
    /// Keys are redrawn until they are all different.
    SortingUnique,
}

impl Permuter for Method {
    fn permute<T, R: Rng + ?Sized>(&self, sequence: &mut [T], rng: &mut R) -> Result<(), Error> {
        let mut keys = match self {
            Method::Sorting => generate_keys(sequence.len(), rng)?,
            Method::SortingUnique => generate_unique_keys(sequence.len(), rng)?,
        };
        sort_by_keys(&mut keys, sequence);

        Ok(())
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Sorting => "permute by sorting",
            Method::SortingUnique => "permute by sorting with unique keys",
        })
    }
}
