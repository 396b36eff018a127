//! Discovered suites and search results.

use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};

use crate::TestingConfig;

/// A discovered test suite root.
#[derive(Debug, Clone, PartialEq)]
pub struct TestSuite {
    name: String,
    source_root: Utf8PathBuf,
    exec_root: Utf8PathBuf,
    config: Arc<TestingConfig>,
    marker: Utf8PathBuf,
}

impl TestSuite {
    /// Creates a suite governed by `config`, loaded from `marker`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        source_root: impl Into<Utf8PathBuf>,
        exec_root: impl Into<Utf8PathBuf>,
        config: Arc<TestingConfig>,
        marker: impl Into<Utf8PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            source_root: source_root.into(),
            exec_root: exec_root.into(),
            config,
            marker: marker.into(),
        }
    }

    /// Suite name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root the suite's tests are read from.
    #[must_use]
    pub fn source_root(&self) -> &Utf8Path {
        &self.source_root
    }

    /// Root the suite's tests execute in.
    #[must_use]
    pub fn exec_root(&self) -> &Utf8Path {
        &self.exec_root
    }

    /// Suite-level configuration.
    #[must_use]
    pub const fn config(&self) -> &Arc<TestingConfig> {
        &self.config
    }

    /// Marker file the configuration was loaded from, after path rewriting.
    #[must_use]
    pub fn marker(&self) -> &Utf8Path {
        &self.marker
    }

    /// Joins `components` onto the source root.
    #[must_use]
    pub fn source_path<S: AsRef<str>>(&self, components: &[S]) -> Utf8PathBuf {
        join_components(&self.source_root, components)
    }

    /// Joins `components` onto the exec root.
    #[must_use]
    pub fn exec_path<S: AsRef<str>>(&self, components: &[S]) -> Utf8PathBuf {
        join_components(&self.exec_root, components)
    }
}

fn join_components<S: AsRef<str>>(root: &Utf8Path, components: &[S]) -> Utf8PathBuf {
    let mut path = root.to_path_buf();
    for component in components {
        path.push(component.as_ref());
    }
    path
}

/// Outcome of mapping a path onto a suite.
///
/// `suite` is `None` when no marker exists between the path and the
/// filesystem root. `path_in_suite` lists the segments from the suite root to
/// the queried path, outermost first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuiteSearch {
    /// The enclosing suite, if any.
    pub suite: Option<Arc<TestSuite>>,
    /// Segments between the suite root and the queried path.
    pub path_in_suite: Vec<String>,
}

impl SuiteSearch {
    /// A search that reached the filesystem root without finding a suite.
    #[must_use]
    pub const fn not_found() -> Self {
        Self {
            suite: None,
            path_in_suite: Vec::new(),
        }
    }

    /// A search that stopped at `suite`'s root directory.
    #[must_use]
    pub const fn at_root(suite: Arc<TestSuite>) -> Self {
        Self {
            suite: Some(suite),
            path_in_suite: Vec::new(),
        }
    }

    /// Returns `true` when a suite was found.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.suite.is_some()
    }
}
