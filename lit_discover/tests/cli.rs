//! Runs the `lit-discover` binary against temporary suite trees.

use std::process::{Command, Output};

use anyhow::{Context, Result, ensure};
use rstest::{fixture, rstest};
use test_helpers::tree::SuiteTree;

#[fixture]
fn project() -> Result<SuiteTree> {
    let tree = SuiteTree::new()?;
    tree.file("proj/lit.cfg", "name = \"proj\"\nsuffixes = [\".ll\"]")?;
    tree.file("proj/tests/a.ll", "")?;
    tree.file("proj/tests/b.ll", "")?;
    tree.file("proj/tests/readme.md", "")?;
    tree.file("loose/c.ll", "")?;
    Ok(tree)
}

fn command(args: &[&str]) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_lit-discover"));
    command.args(args).env_remove("RUST_LOG").env_remove("LIT_DEBUG");
    command
}

fn lit_discover(args: &[&str]) -> Result<Output> {
    command(args).output().context("run lit-discover")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[rstest]
fn resolved_paths_are_reported(project: Result<SuiteTree>) -> Result<()> {
    let tree = project?;
    let input = tree.path("proj/tests/a.ll");
    let loose = tree.path("loose/c.ll");
    let output = lit_discover(&[input.as_str(), loose.as_str()])?;
    ensure!(output.status.success(), "unexpected failure: {output:?}");
    let expected = format!(
        "{input}: proj ({}) :: tests/a.ll\n{loose}: no test suite found\n",
        tree.path("proj")
    );
    ensure!(stdout(&output) == expected, "unexpected stdout:\n{}", stdout(&output));
    Ok(())
}

#[rstest]
fn list_prints_collected_tests(project: Result<SuiteTree>) -> Result<()> {
    let tree = project?;
    let root = tree.path("proj");
    let output = lit_discover(&["--list", "-q", root.as_str()])?;
    ensure!(output.status.success(), "unexpected failure: {output:?}");
    ensure!(
        stdout(&output) == "proj :: tests/a.ll\nproj :: tests/b.ll\n",
        "unexpected stdout:\n{}",
        stdout(&output)
    );
    Ok(())
}

#[rstest]
fn debug_notes_name_loaded_markers(project: Result<SuiteTree>) -> Result<()> {
    let tree = project?;
    let input = tree.path("proj/tests");
    let output = lit_discover(&["--debug", input.as_str()])?;
    ensure!(output.status.success(), "unexpected failure: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    ensure!(
        stderr.contains("loading suite config") && stderr.contains("lit.cfg"),
        "expected a marker note, got:\n{stderr}"
    );
    Ok(())
}

#[rstest]
fn debug_from_the_environment_enables_notes(project: Result<SuiteTree>) -> Result<()> {
    let tree = project?;
    let input = tree.path("proj");
    let output = command(&[input.as_str()])
        .env("LIT_DEBUG", "true")
        .output()
        .context("run lit-discover")?;
    ensure!(output.status.success(), "unexpected failure: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    ensure!(
        stderr.contains("loading suite config"),
        "expected a marker note, got:\n{stderr}"
    );
    ensure!(
        stdout(&output) == format!("{input}: proj ({input})\n"),
        "unexpected stdout:\n{}",
        stdout(&output)
    );
    Ok(())
}

#[rstest]
fn broken_markers_fail_the_run(project: Result<SuiteTree>) -> Result<()> {
    let tree = project?;
    tree.file("proj/lit.cfg", "suffixes = 1")?;
    let input = tree.path("proj/tests/a.ll");
    let output = lit_discover(&[input.as_str()])?;
    ensure!(!output.status.success(), "a broken marker must fail the run");
    Ok(())
}

#[rstest]
fn missing_inputs_fail_the_run(project: Result<SuiteTree>) -> Result<()> {
    let tree = project?;
    let input = tree.path("proj/absent.ll");
    let output = lit_discover(&[input.as_str()])?;
    ensure!(!output.status.success(), "a missing input must fail the run");
    Ok(())
}
