//! Test helpers shared across crates.
//!
//! Provides temporary suite trees, a working-directory guard, and a bridge
//! from `figment::Jail` to `anyhow`.

pub mod cwd;
pub mod figment;
pub mod tree;
