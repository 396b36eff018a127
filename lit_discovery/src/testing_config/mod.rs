//! Configuration attached to a suite or to a directory inside one.

use std::collections::{BTreeMap, BTreeSet};

use camino::{Utf8Path, Utf8PathBuf};
use figment::{Figment, providers::Serialized};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::not_found;
use crate::file::EXTENDS_KEY;
use crate::path::{absolutise, parent_or_dot};
use crate::result_ext::FigmentResultExt;
use crate::{DiscoveryResult, GlobalConfig, load_config_file};

/// Name given to suites whose marker does not declare one.
pub const UNNAMED_SUITE: &str = "<unnamed>";

/// Settings governing a suite or one of its directories.
///
/// Loading a marker merges its values over the current ones: tables merge key
/// by key, every other value replaces what was there. Keys without a
/// dedicated field are kept in [`TestingConfig::extra`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestingConfig {
    /// Suite name.
    pub name: String,
    /// Directory tests are read from, when it differs from the marker's.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_source_root: Option<Utf8PathBuf>,
    /// Directory tests run in, when it differs from the marker's.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_exec_root: Option<Utf8PathBuf>,
    /// File-name suffixes identifying tests.
    pub suffixes: BTreeSet<String>,
    /// File and directory names never treated as tests.
    pub excludes: BTreeSet<String>,
    /// Features the tests may require.
    pub available_features: BTreeSet<String>,
    /// Environment variables exported to tests.
    pub environment: BTreeMap<String, String>,
    /// Marks the subtree as unsupported; collection skips it.
    pub unsupported: bool,
    /// Remaining marker keys.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    /// Marker files merged into this config, oldest first.
    #[serde(skip)]
    pub loaded_from: Vec<Utf8PathBuf>,
}

impl Default for TestingConfig {
    fn default() -> Self {
        Self {
            name: UNNAMED_SUITE.to_owned(),
            test_source_root: None,
            test_exec_root: None,
            suffixes: BTreeSet::new(),
            excludes: BTreeSet::new(),
            available_features: BTreeSet::new(),
            environment: BTreeMap::new(),
            unsupported: false,
            extra: Map::new(),
            loaded_from: Vec::new(),
        }
    }
}

impl TestingConfig {
    /// Builds the config a suite marker is loaded into.
    ///
    /// User parameters from `global` are exposed under the `params` key so
    /// markers and callers can read them back.
    #[must_use]
    pub fn from_defaults(global: &GlobalConfig) -> Self {
        let mut config = Self::default();
        if !global.params.user.is_empty() {
            let params = global
                .params
                .user
                .iter()
                .map(|(name, value)| (name.clone(), Value::String(value.clone())))
                .collect();
            config.extra.insert(String::from("params"), Value::Object(params));
        }
        config
    }

    /// Merges the marker at `path` into this config.
    ///
    /// Relative `test_source_root` and `test_exec_root` values are resolved
    /// against the marker's directory. On failure `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::DiscoveryError`] if the marker is missing, cannot be
    /// parsed, extends a missing or cyclic chain, or holds values of the wrong
    /// type.
    pub fn load_from_path(&mut self, path: &Utf8Path, _global: &GlobalConfig) -> DiscoveryResult<()> {
        let layer = load_config_file(path)?
            .ok_or_else(|| not_found(path, "marker file disappeared before it could be loaded"))?;
        let mut loaded: Self = Figment::from(Serialized::defaults(&*self))
            .merge(layer)
            .extract()
            .into_load_error(path)?;
        loaded.extra.remove(EXTENDS_KEY);
        let base = parent_or_dot(path);
        loaded.test_source_root = loaded
            .test_source_root
            .map(|root| absolutise(base, root));
        loaded.test_exec_root = loaded.test_exec_root.map(|root| absolutise(base, root));
        loaded.loaded_from = std::mem::take(&mut self.loaded_from);
        loaded.loaded_from.push(path.to_path_buf());
        *self = loaded;
        Ok(())
    }

    /// Looks up an arbitrary marker key, including nested `a.b` paths.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        let mut segments = key.split('.');
        let first = self.extra.get(segments.next()?)?;
        segments.try_fold(first, |value, segment| value.get(segment))
    }
}
