//! Run-wide configuration consulted by discovery.
//!
//! [`GlobalConfig`] names the marker files that declare suites and local
//! overrides, carries the debug flag and the optional path-rewrite table, and
//! can be assembled programmatically through [`GlobalConfigBuilder`] or
//! layered from defaults, a TOML file, and `LIT_` environment variables.

use std::collections::BTreeMap;

use camino::{Utf8Path, Utf8PathBuf};
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::not_found;
use crate::path::canonicalise;
use crate::result_ext::FigmentResultExt;
use crate::{DiscoveryResult, load_config_file};

mod builder;

pub use builder::GlobalConfigBuilder;

/// Site marker names checked before suite markers.
pub const DEFAULT_SITE_CONFIG_NAMES: [&str; 2] = ["lit.site.cfg.toml", "lit.site.cfg"];
/// Suite marker names.
pub const DEFAULT_CONFIG_NAMES: [&str; 2] = ["lit.cfg.toml", "lit.cfg"];
/// Local-override marker names.
pub const DEFAULT_LOCAL_CONFIG_NAMES: [&str; 2] = ["lit.local.cfg.toml", "lit.local.cfg"];
/// Directory names never descended into while collecting tests.
pub const DEFAULT_IGNORED_DIR_NAMES: [&str; 3] = [".git", ".svn", "Output"];

/// Parameters supplied to a discovery run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Canonical marker path → replacement path consulted before loading a
    /// suite marker. Absent means markers are always loaded in place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_map: Option<BTreeMap<Utf8PathBuf, Utf8PathBuf>>,
    /// Free-form `NAME=VALUE` parameters passed through to callers.
    pub user: BTreeMap<String, String>,
}

/// Configuration shared by every lookup in a discovery run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Site marker names, checked first and in order.
    pub site_config_names: Vec<String>,
    /// Suite marker names, checked when no site marker exists.
    pub config_names: Vec<String>,
    /// Local-override marker names.
    pub local_config_names: Vec<String>,
    /// Directory names skipped while collecting tests.
    pub ignored_dir_names: Vec<String>,
    /// Emit notes for every marker loaded.
    pub debug: bool,
    /// Run parameters, including the path-rewrite table.
    pub params: Params,
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_owned()).collect()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            site_config_names: owned(&DEFAULT_SITE_CONFIG_NAMES),
            config_names: owned(&DEFAULT_CONFIG_NAMES),
            local_config_names: owned(&DEFAULT_LOCAL_CONFIG_NAMES),
            ignored_dir_names: owned(&DEFAULT_IGNORED_DIR_NAMES),
            debug: false,
            params: Params::default(),
        }
    }
}

impl GlobalConfig {
    /// Prefix for environment variables overriding configuration values.
    ///
    /// Nested keys are separated with a double underscore, for example
    /// `LIT_PARAMS__USER__TARGET=x86_64`.
    pub const ENV_PREFIX: &'static str = "LIT_";

    /// Creates a builder seeded with the default marker names.
    #[must_use]
    pub fn builder() -> GlobalConfigBuilder {
        GlobalConfigBuilder::new()
    }

    /// Returns the layered figment: defaults, then `file`, then the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::DiscoveryError`] if `file` does not exist or fails to
    /// parse.
    pub fn figment(file: Option<&Utf8Path>) -> DiscoveryResult<Figment> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            let layer = load_config_file(path)?
                .ok_or_else(|| not_found(path, "global configuration file not found"))?;
            figment = figment.merge(layer);
        }
        Ok(figment.merge(Env::prefixed(Self::ENV_PREFIX).split("__")))
    }

    /// Loads the layered configuration.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use lit_discovery::GlobalConfig;
    ///
    /// # fn run() -> lit_discovery::DiscoveryResult<()> {
    /// let config = GlobalConfig::load(None)?;
    /// assert_eq!(config.config_names[0], "lit.cfg.toml");
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`crate::DiscoveryError`] if any layer fails to load or the
    /// merged values do not fit.
    pub fn load(file: Option<&Utf8Path>) -> DiscoveryResult<Self> {
        Self::figment(file)?.extract().into_gathering()
    }

    /// Returns `true` when debug notes are enabled.
    #[must_use]
    pub const fn is_debug(&self) -> bool {
        self.debug
    }

    /// Emits a debug note, tagged with the caller's source location.
    #[track_caller]
    pub fn note(&self, message: &str) {
        let location = std::panic::Location::caller();
        tracing::info!(
            target: "lit_discovery::note",
            file = location.file(),
            line = location.line(),
            "note: {message}"
        );
    }

    /// Looks up the marker to load in place of `marker`.
    ///
    /// Without a rewrite table `marker` is returned unchanged. With one, the
    /// marker is canonicalised and replaced when the canonical path is a key;
    /// a miss yields the canonical path.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::DiscoveryError`] if `marker` cannot be canonicalised
    /// while a rewrite table is present.
    pub fn rewrite_config_path(&self, marker: &Utf8Path) -> DiscoveryResult<Utf8PathBuf> {
        let Some(map) = &self.params.config_map else {
            return Ok(marker.to_path_buf());
        };
        let canonical = canonicalise(marker)?;
        Ok(map.get(&canonical).cloned().unwrap_or(canonical))
    }
}
