//! Filesystem path helpers shared by the locator and the search engine.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};

use crate::{DiscoveryError, DiscoveryResult};
use crate::error::file_error;

/// Convert a standard path into a UTF-8 path.
///
/// # Errors
///
/// Returns [`DiscoveryError::NonUtf8Path`] when `path` is not valid UTF-8.
pub fn to_utf8(path: PathBuf) -> DiscoveryResult<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path)
        .map_err(|path| Arc::new(DiscoveryError::NonUtf8Path { path }))
}

/// Canonicalise `p` using platform-specific rules.
///
/// Returns an absolute, normalised UTF-8 path with symlinks resolved. On
/// Windows the [`dunce`](https://docs.rs/dunce/latest/dunce/) crate is used to
/// avoid UNC prefixes leaking into cache keys and diagnostics.
///
/// # Errors
///
/// Returns a [`DiscoveryError::File`] when the path does not exist or cannot
/// be resolved, and [`DiscoveryError::NonUtf8Path`] when the resolved path is
/// not UTF-8.
///
/// # Examples
///
/// ```rust
/// # fn run() -> lit_discovery::DiscoveryResult<()> {
/// let c = lit_discovery::canonicalise(".")?;
/// assert!(c.is_absolute());
/// # Ok(())
/// # }
/// ```
pub fn canonicalise(p: impl AsRef<Path>) -> DiscoveryResult<Utf8PathBuf> {
    let p = p.as_ref();
    #[cfg(windows)]
    let resolved = dunce::canonicalize(p).map_err(|e| file_error(p, e))?;
    #[cfg(not(windows))]
    let resolved = std::fs::canonicalize(p).map_err(|e| file_error(p, e))?;
    to_utf8(resolved)
}

/// Split `path` into its parent directory and final component.
///
/// Returns `None` at the filesystem root, the fixed point where a path is its
/// own parent.
#[must_use]
pub fn parent_and_name(path: &Utf8Path) -> Option<(&Utf8Path, &str)> {
    let parent = path.parent().filter(|parent| *parent != path)?;
    let name = path.file_name()?;
    Some((parent, name))
}

/// Return the parent directory of `path`, falling back to `"."` when the path
/// has no parent or the parent is empty.
pub(crate) fn parent_or_dot(path: &Utf8Path) -> &Utf8Path {
    path.parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."))
}

/// Resolve `path` against `base` unless it is already absolute.
pub(crate) fn absolutise(base: &Utf8Path, path: Utf8PathBuf) -> Utf8PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Read the working directory as a UTF-8 path.
pub(crate) fn current_dir() -> DiscoveryResult<Utf8PathBuf> {
    let cwd = std::env::current_dir().map_err(|e| file_error(".", e))?;
    to_utf8(cwd)
}

/// Normalise a canonical path for case-insensitive cycle detection.
///
/// On Windows and macOS the key is lower-cased so `Lit.cfg` and `lit.cfg`
/// are recognised as the same `extends` node. Elsewhere the path is returned
/// unchanged.
pub(crate) fn normalise_cycle_key(path: &Utf8Path) -> Utf8PathBuf {
    #[cfg(any(windows, target_os = "macos"))]
    {
        Utf8PathBuf::from(path.as_str().to_lowercase())
    }

    #[cfg(not(any(windows, target_os = "macos")))]
    {
        path.to_path_buf()
    }
}
