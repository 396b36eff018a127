//! Extensions for mapping external errors into `DiscoveryResult` concisely.
//!
//! These helpers keep call sites free of repetitive
//! `.map_err(|e| Arc::new(DiscoveryError::…(e)))` chains.
//!
//! # Examples
//!
//! ```ignore
//! use lit_discovery::result_ext::FigmentResultExt;
//! # use figment::{Figment, providers::{Format, Toml}};
//! # let fig = Figment::from(Toml::string("name = 1"));
//! let result: Result<String, figment::Error> = fig.extract_inner("name");
//! let mapped = result.into_load_error("lit.cfg".as_ref());
//! ```

use std::sync::Arc;

use camino::Utf8Path;

use crate::{DiscoveryError, DiscoveryResult};

/// Extension tailored to mapping `figment::Error` into discovery failures.
pub(crate) trait FigmentResultExt<T> {
    /// Convert into a [`DiscoveryError::Load`] naming the marker at `path`.
    fn into_load_error(self, path: &Utf8Path) -> DiscoveryResult<T>;

    /// Convert into a [`DiscoveryError::Gathering`].
    fn into_gathering(self) -> DiscoveryResult<T>;
}

impl<T> FigmentResultExt<T> for Result<T, figment::Error> {
    fn into_load_error(self, path: &Utf8Path) -> DiscoveryResult<T> {
        self.map_err(|e| Arc::new(DiscoveryError::load(path, e)))
    }

    fn into_gathering(self) -> DiscoveryResult<T> {
        self.map_err(|e| Arc::new(DiscoveryError::gathering(e)))
    }
}
