//! # Uniformity of permuting by sorting
//!
//! A sequence can be shuffled by drawing a random key for each of its elements and sorting the
//! elements by key. This crate measures how close two variants of that idea come to a uniform
//! distribution over all orderings: one draws keys independently, the other redraws keys until
//! they are all distinct.
//!
//! Both variants are run many times on a short sequence. Each outcome is classified as one of the
//! `n!` orderings of the sequence and the occurrence counts are compared with the uniform average.
#![warn(missing_docs)]

pub mod algorithm;
pub mod error;
pub mod experiment;

#[cfg(test)]
mod tests;
