//! Constructors shared by the file loading and discovery helpers.

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use figment::Error as FigmentError;

use super::DiscoveryError;

impl DiscoveryError {
    /// Construct a load error for the marker at `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lit_discovery::DiscoveryError;
    /// let fe = figment::Error::from("boom");
    /// let e = DiscoveryError::load("lit.cfg", fe);
    /// assert!(matches!(e, DiscoveryError::Load { .. }));
    /// ```
    #[must_use]
    pub fn load(path: impl Into<camino::Utf8PathBuf>, source: FigmentError) -> Self {
        Self::Load {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Construct a gathering error from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lit_discovery::DiscoveryError;
    /// let fe = figment::Error::from("boom");
    /// let e = DiscoveryError::gathering(fe);
    /// assert!(matches!(e, DiscoveryError::Gathering(_)));
    /// ```
    #[must_use]
    pub fn gathering(source: FigmentError) -> Self {
        Self::Gathering(Box::new(source))
    }

    /// Returns the [`std::io::ErrorKind`] behind a [`DiscoveryError::File`]
    /// failure, if the source is an I/O error.
    #[must_use]
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        let Self::File { source, .. } = self else {
            return None;
        };
        source
            .downcast_ref::<std::io::Error>()
            .map(std::io::Error::kind)
    }
}

/// Construct a [`DiscoveryError::File`] for `path`.
pub(crate) fn file_error(
    path: impl AsRef<Path>,
    err: impl Into<Box<dyn Error + Send + Sync>>,
) -> Arc<DiscoveryError> {
    Arc::new(DiscoveryError::File {
        path: path.as_ref().to_path_buf(),
        source: err.into(),
    })
}

pub(crate) fn invalid_input(path: impl AsRef<Path>, msg: impl Into<String>) -> Arc<DiscoveryError> {
    file_error(
        path,
        std::io::Error::new(std::io::ErrorKind::InvalidInput, msg.into()),
    )
}

pub(crate) fn invalid_data(path: impl AsRef<Path>, msg: impl Into<String>) -> Arc<DiscoveryError> {
    file_error(
        path,
        std::io::Error::new(std::io::ErrorKind::InvalidData, msg.into()),
    )
}

pub(crate) fn not_found(path: impl AsRef<Path>, msg: impl Into<String>) -> Arc<DiscoveryError> {
    file_error(
        path,
        std::io::Error::new(std::io::ErrorKind::NotFound, msg.into()),
    )
}
