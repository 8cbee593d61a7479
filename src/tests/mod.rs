//! # Scenario tests that require a look inside the crate.
//!
//! Each scenario runs a complete experiment with a seeded generator and checks the intermediate
//! values as well as the final report.
