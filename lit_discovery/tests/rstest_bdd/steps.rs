//! Step definitions for the discovery scenarios.

use std::sync::Arc;

use anyhow::{Context, Result, anyhow, ensure};
use lit_discovery::{GlobalConfig, SuiteDiscovery};
use rstest_bdd_macros::{given, then, when};
use test_helpers::tree::SuiteTree;

use crate::fixtures::DiscoveryState;

fn write(state: &DiscoveryState, relative: &str, contents: &str) -> Result<()> {
    if state.tree.is_empty() {
        state.tree.set(SuiteTree::new()?);
    }
    state
        .tree
        .with_ref(|tree| tree.file(relative, contents).map(drop))
        .ok_or_else(|| anyhow!("scenario tree missing"))?
}

fn resolve(state: &DiscoveryState, relative: &str) -> Result<()> {
    let path = state
        .tree
        .with_ref(|tree| tree.path(relative))
        .ok_or_else(|| anyhow!("scenario tree missing"))?;
    let global = GlobalConfig::default();
    let cache = state.cache.take().unwrap_or_default();
    let mut discovery = SuiteDiscovery::new(&global).with_cache(cache);
    let result = discovery.resolve(&path);
    state.cache.set(discovery.into_cache());
    state.result.set(result);
    Ok(())
}

#[given("a suite marker in {dir} naming the suite {name}")]
fn suite_marker(discovery_state: &DiscoveryState, dir: String, name: String) -> Result<()> {
    write(discovery_state, &format!("{dir}/lit.cfg"), &format!("name = \"{name}\""))
}

#[given("a suite marker in {dir} with contents {contents}")]
fn raw_suite_marker(discovery_state: &DiscoveryState, dir: String, contents: String) -> Result<()> {
    write(discovery_state, &format!("{dir}/lit.cfg"), &contents)
}

#[given("a local override in {dir} using suffix {suffix}")]
fn local_override(discovery_state: &DiscoveryState, dir: String, suffix: String) -> Result<()> {
    write(
        discovery_state,
        &format!("{dir}/lit.local.cfg"),
        &format!("suffixes = [\"{suffix}\"]"),
    )
}

#[given("a test file at {path}")]
fn test_file(discovery_state: &DiscoveryState, path: String) -> Result<()> {
    write(discovery_state, &path, "")
}

#[when("{path} is resolved")]
fn resolve_path(discovery_state: &DiscoveryState, path: String) -> Result<()> {
    resolve(discovery_state, &path)
}

#[then("the suite is {name} rooted at {dir}")]
fn suite_is(discovery_state: &DiscoveryState, name: String, dir: String) -> Result<()> {
    let root = discovery_state
        .tree
        .with_ref(|tree| tree.path(&dir))
        .ok_or_else(|| anyhow!("scenario tree missing"))?;
    discovery_state
        .result
        .with_ref(|result| -> Result<()> {
            let found = result.as_ref().map_err(|err| anyhow!(err.to_string()))?;
            let suite = found.suite.as_ref().context("expected a suite")?;
            ensure!(suite.name() == name, "unexpected suite {}", suite.name());
            ensure!(suite.source_root() == root, "unexpected root {}", suite.source_root());
            Ok(())
        })
        .ok_or_else(|| anyhow!("nothing was resolved"))?
}

#[then("the path in the suite is {components}")]
fn path_in_suite(discovery_state: &DiscoveryState, components: String) -> Result<()> {
    discovery_state
        .result
        .with_ref(|result| -> Result<()> {
            let found = result.as_ref().map_err(|err| anyhow!(err.to_string()))?;
            let joined = found.path_in_suite.join("/");
            ensure!(joined == components, "unexpected components {joined}");
            Ok(())
        })
        .ok_or_else(|| anyhow!("nothing was resolved"))?
}

#[then("the local config of {components} was loaded from {marker}")]
fn local_config_from(
    discovery_state: &DiscoveryState,
    components: String,
    marker: String,
) -> Result<()> {
    let expected = discovery_state
        .tree
        .with_ref(|tree| tree.path(&marker))
        .ok_or_else(|| anyhow!("scenario tree missing"))?;
    let suite = discovery_state
        .result
        .with_ref(|result| {
            result
                .as_ref()
                .ok()
                .and_then(|found| found.suite.as_ref().map(Arc::clone))
        })
        .flatten()
        .ok_or_else(|| anyhow!("no suite was resolved"))?;
    let parts: Vec<String> = components.split('/').map(str::to_owned).collect();

    let global = GlobalConfig::default();
    let cache = discovery_state.cache.take().unwrap_or_default();
    let mut discovery = SuiteDiscovery::new(&global).with_cache(cache);
    let config = discovery
        .local_config(&suite, &parts)
        .map_err(|err| anyhow!(err.to_string()))?;
    discovery_state.cache.set(discovery.into_cache());

    ensure!(
        config.loaded_from.last() == Some(&expected),
        "unexpected provenance {:?}",
        config.loaded_from
    );
    ensure!(config.suffixes.contains(".txt"), "override values should apply");
    Ok(())
}

#[then("no suite is found")]
fn no_suite(discovery_state: &DiscoveryState) -> Result<()> {
    discovery_state
        .result
        .with_ref(|result| -> Result<()> {
            let found = result.as_ref().map_err(|err| anyhow!(err.to_string()))?;
            ensure!(!found.is_found(), "unexpected suite");
            ensure!(found.path_in_suite.is_empty(), "not found carries no components");
            Ok(())
        })
        .ok_or_else(|| anyhow!("nothing was resolved"))?
}

#[then("resolution fails mentioning {marker}")]
fn resolution_fails(discovery_state: &DiscoveryState, marker: String) -> Result<()> {
    discovery_state
        .result
        .with_ref(|result| -> Result<()> {
            let Err(err) = result else {
                return Err(anyhow!("expected resolution to fail, got {result:?}"));
            };
            ensure!(err.to_string().contains(&marker), "unexpected error {err}");
            Ok(())
        })
        .ok_or_else(|| anyhow!("nothing was resolved"))?
}

#[then("resolving {path} again fails the same way")]
fn fails_again(discovery_state: &DiscoveryState, path: String) -> Result<()> {
    let first = discovery_state
        .result
        .take()
        .ok_or_else(|| anyhow!("nothing was resolved"))?
        .err()
        .ok_or_else(|| anyhow!("first resolution unexpectedly succeeded"))?;
    resolve(discovery_state, &path)?;
    let second = discovery_state
        .result
        .take()
        .ok_or_else(|| anyhow!("nothing was resolved"))?
        .err()
        .ok_or_else(|| anyhow!("second resolution unexpectedly succeeded"))?;
    ensure!(Arc::ptr_eq(&first, &second), "the cached failure should be reused");
    Ok(())
}
