//! Mapping arbitrary paths onto suites.

use anyhow::{Result, anyhow, ensure};
use camino::Utf8Path;
use rstest::rstest;
use serial_test::serial;
use test_helpers::{cwd, tree::SuiteTree};

use super::{components, global, ok};
use crate::{GlobalConfig, SuiteDiscovery};

fn project() -> Result<SuiteTree> {
    let tree = SuiteTree::new()?;
    tree.file("proj/lit-test.cfg", "name = \"proj\"")?;
    tree.file("proj/tests/case.ll", "; RUN: true")?;
    Ok(tree)
}

#[rstest]
fn file_segments_are_appended(global: GlobalConfig) -> Result<()> {
    let tree = project()?;
    let mut discovery = SuiteDiscovery::new(&global);
    let found = ok(discovery.resolve(tree.path("proj/tests/case.ll")))?;
    ensure!(found.is_found(), "expected a suite");
    ensure!(
        found.path_in_suite == components(&["tests", "case.ll"]),
        "unexpected components {:?}",
        found.path_in_suite
    );
    Ok(())
}

#[rstest]
fn directory_input_matches_search(global: GlobalConfig) -> Result<()> {
    let tree = project()?;
    let mut discovery = SuiteDiscovery::new(&global);
    let resolved = ok(discovery.resolve(tree.path("proj/tests")))?;
    let searched = ok(discovery.search(tree.path("proj/tests")))?;
    ensure!(resolved == searched, "resolve and search disagree");
    Ok(())
}

#[rstest]
fn resolving_twice_is_idempotent(global: GlobalConfig) -> Result<()> {
    let tree = project()?;
    let mut discovery = SuiteDiscovery::new(&global);
    let first = ok(discovery.resolve(tree.path("proj/tests/case.ll")))?;
    let second = ok(discovery.resolve(tree.path("proj/tests/case.ll")))?;
    ensure!(first == second, "repeated resolution changed the result");
    Ok(())
}

#[rstest]
fn dotted_segments_are_normalised(global: GlobalConfig) -> Result<()> {
    let tree = project()?;
    let mut discovery = SuiteDiscovery::new(&global);
    let found = ok(discovery.resolve(tree.path("proj/tests/../tests/./case.ll")))?;
    ensure!(
        found.path_in_suite == components(&["tests", "case.ll"]),
        "unexpected components {:?}",
        found.path_in_suite
    );
    Ok(())
}

#[rstest]
fn missing_paths_are_errors(global: GlobalConfig) -> Result<()> {
    let tree = project()?;
    let mut discovery = SuiteDiscovery::new(&global);
    let Err(err) = discovery.resolve(tree.path("proj/tests/absent.ll")) else {
        return Err(anyhow!("a missing input cannot be canonicalised"));
    };
    ensure!(
        err.io_kind() == Some(std::io::ErrorKind::NotFound),
        "unexpected error {err}"
    );
    Ok(())
}

#[rstest]
fn files_outside_any_suite_are_not_found(global: GlobalConfig) -> Result<()> {
    let tree = SuiteTree::new()?;
    tree.file("loose/notes.txt", "")?;
    let mut discovery = SuiteDiscovery::new(&global);
    let found = ok(discovery.resolve(tree.path("loose/notes.txt")))?;
    ensure!(!found.is_found(), "no suite encloses the file");
    Ok(())
}

#[rstest]
#[serial]
fn relative_inputs_resolve_against_the_working_directory(global: GlobalConfig) -> Result<()> {
    let tree = project()?;
    let _guard = cwd::set_dir(tree.path("proj"))?;
    let mut discovery = SuiteDiscovery::new(&global);
    let found = ok(discovery.resolve(Utf8Path::new("tests/case.ll")))?;
    let suite = found.suite.ok_or_else(|| anyhow!("expected a suite"))?;
    ensure!(suite.source_root() == tree.path("proj"), "unexpected root");
    ensure!(
        found.path_in_suite == components(&["tests", "case.ll"]),
        "unexpected components {:?}",
        found.path_in_suite
    );
    Ok(())
}
