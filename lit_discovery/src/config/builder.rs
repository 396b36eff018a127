//! Builder for [`GlobalConfig`].
//!
//! Lets tools replace the marker names, toggle debug notes and populate the
//! parameter table before discovery starts.

use camino::Utf8PathBuf;

use super::GlobalConfig;

/// Builder for [`GlobalConfig`].
///
/// # Examples
///
/// ```rust
/// use lit_discovery::GlobalConfig;
///
/// let config = GlobalConfig::builder()
///     .config_names(["suite.cfg"])
///     .local_config_names(["local.cfg"])
///     .param("target", "x86_64")
///     .debug(true)
///     .build();
/// assert_eq!(config.config_names, vec![String::from("suite.cfg")]);
/// assert!(config.is_debug());
/// ```
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct GlobalConfigBuilder {
    config: GlobalConfig,
}

fn collect<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}

impl GlobalConfigBuilder {
    /// Creates a builder seeded with [`GlobalConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the site marker names.
    pub fn site_config_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.site_config_names = collect(names);
        self
    }

    /// Replaces the suite marker names.
    pub fn config_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.config_names = collect(names);
        self
    }

    /// Replaces the local-override marker names.
    pub fn local_config_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.local_config_names = collect(names);
        self
    }

    /// Replaces the directory names skipped during test collection.
    pub fn ignored_dir_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.ignored_dir_names = collect(names);
        self
    }

    /// Enables or disables debug notes.
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Adds a user parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.params.user.insert(name.into(), value.into());
        self
    }

    /// Adds a path-rewrite entry, creating the table on first use.
    ///
    /// `from` is compared against canonical marker paths, so it should be
    /// canonical itself.
    pub fn config_map_entry(
        mut self,
        from: impl Into<Utf8PathBuf>,
        to: impl Into<Utf8PathBuf>,
    ) -> Self {
        self.config
            .params
            .config_map
            .get_or_insert_with(Default::default)
            .insert(from.into(), to.into());
        self
    }

    /// Finalises the builder.
    pub fn build(self) -> GlobalConfig {
        self.config
    }
}
