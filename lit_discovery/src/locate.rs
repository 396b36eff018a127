//! Locating marker files inside a directory.

use camino::{Utf8Path, Utf8PathBuf};

use crate::GlobalConfig;

/// Returns the first of `names` that exists inside `dir`.
///
/// Candidates are checked in order, so earlier names win. A missing `dir`
/// simply yields `None`.
///
/// # Examples
///
/// ```rust
/// use camino::Utf8Path;
/// use lit_discovery::choose_config_file;
///
/// let names = [String::from("lit.cfg")];
/// assert!(choose_config_file(Utf8Path::new("/nonexistent"), &names).is_none());
/// ```
#[must_use]
pub fn choose_config_file<S: AsRef<str>>(dir: &Utf8Path, names: &[S]) -> Option<Utf8PathBuf> {
    names
        .iter()
        .map(|name| dir.join(name.as_ref()))
        .find(|candidate| candidate.exists())
}

/// Returns the suite marker in `dir`, if any.
///
/// Site markers take priority: suite markers are only consulted when no site
/// marker exists.
#[must_use]
pub fn dir_contains_test_suite(dir: &Utf8Path, config: &GlobalConfig) -> Option<Utf8PathBuf> {
    choose_config_file(dir, &config.site_config_names)
        .or_else(|| choose_config_file(dir, &config.config_names))
}
