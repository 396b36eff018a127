//! `rstest-bdd` scenarios for `lit_discovery`.
//!
//! [`fixtures`] holds the shared scenario state, [`steps`] the step
//! definitions, and [`scenarios`] binds the feature file to both.

mod fixtures;
mod scenarios;
mod steps;
