//! Enumerating the tests under resolved suite locations.

use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};

use crate::error::file_error;
use crate::locate::dir_contains_test_suite;
use crate::{ConfigLoader, DiscoveryResult, TestSuite, TestingConfig};

use super::SuiteDiscovery;

/// A single test: a file inside a suite and the configuration governing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Test {
    suite: Arc<TestSuite>,
    path_in_suite: Vec<String>,
    config: Arc<TestingConfig>,
}

impl Test {
    /// Creates a test at `path_in_suite` inside `suite`.
    #[must_use]
    pub const fn new(
        suite: Arc<TestSuite>,
        path_in_suite: Vec<String>,
        config: Arc<TestingConfig>,
    ) -> Self {
        Self {
            suite,
            path_in_suite,
            config,
        }
    }

    /// Suite the test belongs to.
    #[must_use]
    pub const fn suite(&self) -> &Arc<TestSuite> {
        &self.suite
    }

    /// Segments from the suite root to the test file.
    #[must_use]
    pub fn path_in_suite(&self) -> &[String] {
        &self.path_in_suite
    }

    /// Local configuration of the directory containing the test.
    #[must_use]
    pub const fn config(&self) -> &Arc<TestingConfig> {
        &self.config
    }

    /// Location of the test file.
    #[must_use]
    pub fn source_path(&self) -> Utf8PathBuf {
        self.suite.source_path(&self.path_in_suite)
    }

    /// Location the test executes in.
    #[must_use]
    pub fn exec_path(&self) -> Utf8PathBuf {
        self.suite.exec_path(&self.path_in_suite)
    }

    /// `"<suite> :: a/b/c"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} :: {}", self.suite.name(), self.path_in_suite.join("/"))
    }
}

/// Tests gathered from a list of inputs.
#[derive(Debug, Default)]
#[must_use]
pub struct TestCollection {
    /// Tests in input order, then directory order.
    pub tests: Vec<Test>,
    /// Inputs that do not belong to any suite.
    pub unresolved: Vec<Utf8PathBuf>,
}

struct Listing {
    files: Vec<String>,
    dirs: Vec<String>,
}

fn list_dir(path: &Utf8Path) -> DiscoveryResult<Listing> {
    let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(|e| file_error(path, e))?;
    let mut files = Vec::new();
    let mut dirs = Vec::new();
    for entry in dir.entries().map_err(|e| file_error(path, e))? {
        let name = entry
            .and_then(|entry| entry.file_name())
            .map_err(|e| file_error(path, e))?;
        // Follow symlinks when classifying.
        if path.join(&name).is_dir() {
            dirs.push(name);
        } else {
            files.push(name);
        }
    }
    files.sort();
    dirs.sort();
    Ok(Listing { files, dirs })
}

fn is_test_file(name: &str, config: &TestingConfig) -> bool {
    !name.starts_with('.')
        && !config.excludes.contains(name)
        && config
            .suffixes
            .iter()
            .any(|suffix| name.ends_with(suffix.as_str()))
}

impl<L: ConfigLoader> SuiteDiscovery<'_, L> {
    /// Resolves every input and gathers the tests beneath it.
    ///
    /// Inputs outside any suite are reported in
    /// [`TestCollection::unresolved`] rather than failing the run.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::DiscoveryError`] if an input cannot be resolved, a
    /// marker fails to load, or a directory cannot be listed.
    pub fn collect_tests<I, P>(&mut self, inputs: I) -> DiscoveryResult<TestCollection>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Utf8Path>,
    {
        let mut collection = TestCollection::default();
        for raw in inputs {
            let input = raw.as_ref();
            let found = self.resolve(input)?;
            let Some(suite) = found.suite else {
                tracing::warn!(%input, "unable to find test suite");
                collection.unresolved.push(input.to_path_buf());
                continue;
            };
            let before = collection.tests.len();
            self.tests_in_suite(&suite, &found.path_in_suite, &mut collection.tests)?;
            if collection.tests.len() == before {
                tracing::warn!(%input, "input contained no tests");
            }
        }
        Ok(collection)
    }

    fn tests_in_suite(
        &mut self,
        suite: &Arc<TestSuite>,
        path_in_suite: &[String],
        tests: &mut Vec<Test>,
    ) -> DiscoveryResult<()> {
        let source_path = suite.source_path(path_in_suite);
        if !source_path.exists() {
            return Ok(());
        }

        if !source_path.is_dir() {
            let parent = path_in_suite.split_last().map_or(&[][..], |(_, rest)| rest);
            let config = self.local_config(suite, parent)?;
            tests.push(Test::new(Arc::clone(suite), path_in_suite.to_vec(), config));
            return Ok(());
        }

        let config = self.local_config(suite, path_in_suite)?;
        if config.unsupported {
            tracing::debug!(%source_path, "skipping unsupported directory");
            return Ok(());
        }

        let listing = list_dir(&source_path)?;
        for name in &listing.files {
            if is_test_file(name, &config) {
                let mut components = path_in_suite.to_vec();
                components.push(name.clone());
                tests.push(Test::new(Arc::clone(suite), components, Arc::clone(&config)));
            }
        }

        for name in &listing.dirs {
            if self.config.ignored_dir_names.contains(name) || config.excludes.contains(name) {
                continue;
            }
            let mut components = path_in_suite.to_vec();
            components.push(name.clone());
            self.tests_in_subdir(suite, components, tests)?;
        }
        Ok(())
    }

    fn tests_in_subdir(
        &mut self,
        suite: &Arc<TestSuite>,
        components: Vec<String>,
        tests: &mut Vec<Test>,
    ) -> DiscoveryResult<()> {
        // A site config in the exec tree takes precedence over the source tree.
        let exec_path = suite.exec_path(&components);
        let source_path = suite.source_path(&components);
        let nested_root = if dir_contains_test_suite(&exec_path, self.config).is_some() {
            Some(exec_path)
        } else if dir_contains_test_suite(&source_path, self.config).is_some() {
            Some(source_path)
        } else {
            None
        };

        let Some(nested_root) = nested_root else {
            return self.tests_in_suite(suite, &components, tests);
        };
        let found = self.resolve(&nested_root)?;
        let Some(nested) = found.suite else {
            return self.tests_in_suite(suite, &components, tests);
        };
        if Arc::ptr_eq(&nested, suite) {
            return Ok(());
        }
        let before = tests.len();
        self.tests_in_suite(&nested, &found.path_in_suite, tests)?;
        if tests.len() == before {
            tracing::warn!(suite = nested.name(), "test suite contained no tests");
        }
        Ok(())
    }
}
