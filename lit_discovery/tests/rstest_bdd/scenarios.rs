//! Binds the discovery feature file to the step registry.

use crate::fixtures::{DiscoveryState, discovery_state};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/discovery.feature",
    fixtures = [discovery_state: DiscoveryState]
);
