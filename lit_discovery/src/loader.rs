//! The collaborator that loads a marker file into a [`TestingConfig`].

use camino::Utf8Path;

use crate::{DiscoveryResult, GlobalConfig, TestingConfig};

/// Loads marker files on behalf of the discovery engine.
///
/// Discovery calls [`ConfigLoader::load`] exactly once per suite marker and
/// once per local-override marker in a run.
pub trait ConfigLoader {
    /// Merges the marker at `path` into `config`.
    ///
    /// # Errors
    ///
    /// Implementations return a [`crate::DiscoveryError`] when the marker cannot
    /// be read or does not describe a valid configuration.
    fn load(
        &self,
        config: &mut TestingConfig,
        path: &Utf8Path,
        global: &GlobalConfig,
    ) -> DiscoveryResult<()>;
}

/// Loads markers from disk with [`TestingConfig::load_from_path`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FileConfigLoader;

impl ConfigLoader for FileConfigLoader {
    fn load(
        &self,
        config: &mut TestingConfig,
        path: &Utf8Path,
        global: &GlobalConfig,
    ) -> DiscoveryResult<()> {
        config.load_from_path(path, global)
    }
}

impl<L: ConfigLoader + ?Sized> ConfigLoader for &L {
    fn load(
        &self,
        config: &mut TestingConfig,
        path: &Utf8Path,
        global: &GlobalConfig,
    ) -> DiscoveryResult<()> {
        (**self).load(config, path, global)
    }
}
