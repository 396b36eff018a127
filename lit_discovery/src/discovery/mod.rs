//! Mapping paths onto test suites.
//!
//! [`SuiteDiscovery`] owns the cache for one discovery run and borrows the
//! run's [`GlobalConfig`]. Searches walk upward from a directory until a
//! suite marker appears or the filesystem root is reached, remembering the
//! outcome for every directory they pass through. Local configuration is then
//! rebuilt downward from the suite root, one directory at a time.
//!
//! ```rust,no_run
//! use lit_discovery::{GlobalConfig, SuiteDiscovery};
//!
//! # fn run() -> lit_discovery::DiscoveryResult<()> {
//! let config = GlobalConfig::default();
//! let mut discovery = SuiteDiscovery::new(&config);
//! let found = discovery.resolve("tests/unit/case.ll")?;
//! if let Some(suite) = &found.suite {
//!     let local = discovery.local_config(suite, &found.path_in_suite)?;
//!     println!("{} :: {:?} ({:?})", suite.name(), found.path_in_suite, local.suffixes);
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use camino::Utf8Path;

use crate::cache::LocalConfigKey;
use crate::locate::{choose_config_file, dir_contains_test_suite};
use crate::path::{canonicalise, current_dir, parent_and_name};
use crate::{
    ConfigLoader, DiscoveryCache, DiscoveryResult, FileConfigLoader, GlobalConfig, SuiteSearch,
    TestSuite, TestingConfig,
};

mod collect;

pub use collect::{Test, TestCollection};

/// Discovery context for one run.
#[derive(Debug)]
pub struct SuiteDiscovery<'cfg, L = FileConfigLoader> {
    config: &'cfg GlobalConfig,
    loader: L,
    cache: DiscoveryCache,
}

impl<'cfg> SuiteDiscovery<'cfg> {
    /// Creates a context that loads markers from disk.
    #[must_use]
    pub fn new(config: &'cfg GlobalConfig) -> Self {
        Self::with_loader(config, FileConfigLoader)
    }
}

impl<'cfg, L: ConfigLoader> SuiteDiscovery<'cfg, L> {
    /// Creates a context that loads markers through `loader`.
    #[must_use]
    pub fn with_loader(config: &'cfg GlobalConfig, loader: L) -> Self {
        Self {
            config,
            loader,
            cache: DiscoveryCache::new(),
        }
    }

    /// Replaces the cache, for callers that keep results between contexts.
    #[must_use]
    pub fn with_cache(mut self, cache: DiscoveryCache) -> Self {
        self.cache = cache;
        self
    }

    /// Returns the global configuration for this run.
    #[must_use]
    pub const fn config(&self) -> &'cfg GlobalConfig {
        self.config
    }

    /// Returns the run's cache.
    #[must_use]
    pub const fn cache(&self) -> &DiscoveryCache {
        &self.cache
    }

    /// Consumes the context, returning its cache.
    #[must_use]
    pub fn into_cache(self) -> DiscoveryCache {
        self.cache
    }

    /// Maps an arbitrary path onto its enclosing suite.
    ///
    /// Relative paths are resolved against the working directory. Trailing
    /// segments that do not name a directory are stripped until an existing
    /// directory is reached, searched, then appended back onto
    /// [`SuiteSearch::path_in_suite`].
    ///
    /// # Errors
    ///
    /// Returns a [`crate::DiscoveryError`] if `item` cannot be canonicalised
    /// (for instance because it does not exist) or a suite marker fails to load.
    pub fn resolve(&mut self, item: impl AsRef<Utf8Path>) -> DiscoveryResult<SuiteSearch> {
        let raw = item.as_ref();
        let canonical = if raw.is_absolute() {
            canonicalise(raw)?
        } else {
            canonicalise(current_dir()?.join(raw))?
        };

        let mut stripped = Vec::new();
        let mut current: &Utf8Path = &canonical;
        while !current.is_dir() {
            let Some((parent, name)) = parent_and_name(current) else {
                return Ok(SuiteSearch::not_found());
            };
            stripped.push(name.to_owned());
            current = parent;
        }

        let mut found = self.search_canonical(current)?;
        found.path_in_suite.extend(stripped.into_iter().rev());
        Ok(found)
    }

    /// Finds the suite enclosing the directory `dir`.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::DiscoveryError`] if `dir` cannot be canonicalised or
    /// a suite marker fails to load. Load failures are remembered, so asking
    /// again reports the same error without reloading.
    pub fn search(&mut self, dir: impl AsRef<Utf8Path>) -> DiscoveryResult<SuiteSearch> {
        let canonical = canonicalise(dir.as_ref())?;
        self.search_canonical(&canonical)
    }

    fn search_canonical(&mut self, dir: &Utf8Path) -> DiscoveryResult<SuiteSearch> {
        if let Some(cached) = self.cache.suite(dir) {
            tracing::debug!(%dir, "suite search cache hit");
            return cached.clone();
        }
        let result = self.find_suite(dir);
        self.cache.insert_suite(dir.to_path_buf(), result.clone());
        result
    }

    fn find_suite(&mut self, dir: &Utf8Path) -> DiscoveryResult<SuiteSearch> {
        let Some(found_marker) = dir_contains_test_suite(dir, self.config) else {
            let Some((parent, name)) = parent_and_name(dir) else {
                return Ok(SuiteSearch::not_found());
            };
            let mut found = self.search_canonical(parent)?;
            found.path_in_suite.push(name.to_owned());
            return Ok(found);
        };

        let marker = self.config.rewrite_config_path(&found_marker)?;
        if self.config.is_debug() {
            self.config.note(&format!("loading suite config '{marker}'"));
        }
        let mut config = TestingConfig::from_defaults(self.config);
        self.loader.load(&mut config, &marker, self.config)?;
        let source_root = config
            .test_source_root
            .clone()
            .unwrap_or_else(|| dir.to_path_buf());
        let exec_root = config
            .test_exec_root
            .clone()
            .unwrap_or_else(|| dir.to_path_buf());
        tracing::debug!(%dir, %marker, name = %config.name, "found test suite");
        let name = config.name.clone();
        let suite = TestSuite::new(name, source_root, exec_root, Arc::new(config), marker);
        Ok(SuiteSearch::at_root(Arc::new(suite)))
    }

    /// Returns the effective configuration for `path_in_suite` inside `suite`.
    ///
    /// Each directory inherits its parent's configuration; a directory holding
    /// a local-override marker gets a copy of the parent's configuration with
    /// the marker loaded over it. Directories without a marker share the
    /// parent's configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::DiscoveryError`] if a local-override marker fails to
    /// load.
    pub fn local_config(
        &mut self,
        suite: &TestSuite,
        path_in_suite: &[String],
    ) -> DiscoveryResult<Arc<TestingConfig>> {
        let Some((_, parent_path)) = path_in_suite.split_last() else {
            return Ok(Arc::clone(suite.config()));
        };
        let key = LocalConfigKey::new(suite, path_in_suite);
        if let Some(cached) = self.cache.local_config(&key) {
            return Ok(cached);
        }

        let parent = self.local_config(suite, parent_path)?;
        let source_path = suite.source_path(path_in_suite);
        let config = match choose_config_file(&source_path, &self.config.local_config_names) {
            None => parent,
            Some(marker) => {
                if self.config.is_debug() {
                    self.config.note(&format!("loading local config '{marker}'"));
                }
                let mut config = TestingConfig::clone(&parent);
                self.loader.load(&mut config, &marker, self.config)?;
                Arc::new(config)
            }
        };
        self.cache.insert_local_config(key, Arc::clone(&config));
        Ok(config)
    }
}

#[cfg(test)]
mod tests;
