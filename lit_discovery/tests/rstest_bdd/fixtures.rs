//! Shared fixtures for the discovery scenarios.

use std::sync::Arc;

use lit_discovery::{DiscoveryCache, DiscoveryError, SuiteSearch};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use test_helpers::tree::SuiteTree;

/// Scenario state carried between discovery steps.
#[derive(Debug, Default, ScenarioState)]
pub struct DiscoveryState {
    /// Temporary tree the scenario builds.
    pub tree: Slot<SuiteTree>,
    /// Outcome of the most recent resolution.
    pub result: Slot<Result<SuiteSearch, Arc<DiscoveryError>>>,
    /// Cache kept between steps so later lookups reuse earlier work.
    pub cache: Slot<DiscoveryCache>,
}

/// Creates a fresh scenario state.
#[fixture]
pub fn discovery_state() -> DiscoveryState {
    DiscoveryState::default()
}
