//! Tests for suite search, entry resolution, local configs and collection.

use std::cell::Cell;

use anyhow::{Result, anyhow};
use camino::Utf8Path;
use rstest::fixture;

use crate::{
    ConfigLoader, DiscoveryResult, FileConfigLoader, GlobalConfig, TestingConfig,
};

mod resolve;

/// Delegates to [`FileConfigLoader`] and counts every load.
#[derive(Debug, Default)]
struct CountingLoader {
    loads: Cell<usize>,
}

impl CountingLoader {
    fn loads(&self) -> usize {
        self.loads.get()
    }
}

impl ConfigLoader for CountingLoader {
    fn load(
        &self,
        config: &mut TestingConfig,
        path: &Utf8Path,
        global: &GlobalConfig,
    ) -> DiscoveryResult<()> {
        self.loads.set(self.loads.get() + 1);
        FileConfigLoader.load(config, path, global)
    }
}

#[fixture]
fn loader() -> CountingLoader {
    CountingLoader::default()
}

/// Global config whose marker names cannot collide with anything outside the
/// temporary tree.
#[fixture]
fn global() -> GlobalConfig {
    GlobalConfig::builder()
        .site_config_names(["lit-test.site.cfg"])
        .config_names(["lit-test.cfg"])
        .local_config_names(["lit-test.local.cfg"])
        .build()
}

fn ok<T>(result: DiscoveryResult<T>) -> Result<T> {
    result.map_err(|err| anyhow!(err.to_string()))
}

fn components(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|part| (*part).to_owned()).collect()
}
