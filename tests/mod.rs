//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
//!
//! ## Note
//!
//! The tests in the `statistics` module are only ran when the feature of the same name is enabled,
//! as they run millions of trials.
mod public_api;
#[cfg(feature = "statistics")]
mod statistics;
