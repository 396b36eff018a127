//! Memoisation for a single discovery run.

use std::collections::HashMap;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};

use crate::{DiscoveryResult, SuiteSearch, TestSuite, TestingConfig};

/// Identifies one directory of one suite for the local-config memo.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct LocalConfigKey {
    marker: Utf8PathBuf,
    source_root: Utf8PathBuf,
    exec_root: Utf8PathBuf,
    path_in_suite: Vec<String>,
}

impl LocalConfigKey {
    pub(crate) fn new(suite: &TestSuite, path_in_suite: &[String]) -> Self {
        Self {
            marker: suite.marker().to_path_buf(),
            source_root: suite.source_root().to_path_buf(),
            exec_root: suite.exec_root().to_path_buf(),
            path_in_suite: path_in_suite.to_vec(),
        }
    }
}

/// Results remembered for the lifetime of one discovery run.
///
/// Suite searches are keyed by canonical directory and store failures too, so
/// a directory whose marker failed to load reports the same error on every
/// query without reading the marker again. Create a fresh cache (or call
/// [`DiscoveryCache::clear`]) when markers may have changed.
#[derive(Debug, Default)]
pub struct DiscoveryCache {
    suites: HashMap<Utf8PathBuf, DiscoveryResult<SuiteSearch>>,
    local_configs: HashMap<LocalConfigKey, Arc<TestingConfig>>,
}

impl DiscoveryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the remembered search for the canonical directory `dir`.
    #[must_use]
    pub fn suite(&self, dir: &Utf8Path) -> Option<&DiscoveryResult<SuiteSearch>> {
        self.suites.get(dir)
    }

    /// Number of directories with a remembered search.
    #[must_use]
    pub fn len(&self) -> usize {
        self.suites.len()
    }

    /// Returns `true` when no search has been remembered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }

    /// Forgets every remembered search and local config.
    pub fn clear(&mut self) {
        self.suites.clear();
        self.local_configs.clear();
    }

    pub(crate) fn insert_suite(&mut self, dir: Utf8PathBuf, result: DiscoveryResult<SuiteSearch>) {
        self.suites.insert(dir, result);
    }

    pub(crate) fn local_config(&self, key: &LocalConfigKey) -> Option<Arc<TestingConfig>> {
        self.local_configs.get(key).cloned()
    }

    pub(crate) fn insert_local_config(&mut self, key: LocalConfigKey, config: Arc<TestingConfig>) {
        self.local_configs.insert(key, config);
    }
}
