//! # Algorithms
//!
//! Generating sort keys, shuffling with them, and enumerating and recognizing permutations.
pub mod enumerate;
pub mod keys;
pub mod matching;
pub mod permute;
pub(crate) mod utilities;
