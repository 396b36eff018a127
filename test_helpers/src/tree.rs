//! Temporary directory trees for discovery tests.
//!
//! A [`SuiteTree`] owns a temporary directory whose root is canonicalised up
//! front, so paths handed to the discovery engine compare equal to the
//! canonical paths it reports.
//!
//! # Examples
//!
//! ```
//! use test_helpers::tree::SuiteTree;
//!
//! let tree = SuiteTree::new().expect("create tree");
//! tree.file("proj/lit.cfg", "name = \"proj\"").expect("write marker");
//! assert!(tree.path("proj/lit.cfg").is_file());
//! ```

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use tempfile::TempDir;

/// A canonicalised temporary directory populated through `cap-std`.
#[derive(Debug)]
pub struct SuiteTree {
    root: Utf8PathBuf,
    dir: Dir,
    _temp: TempDir,
}

impl SuiteTree {
    /// Creates an empty tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created, is not
    /// UTF-8, or cannot be opened.
    pub fn new() -> Result<Self> {
        let temp = TempDir::new().context("create temporary directory")?;
        let canonical = temp
            .path()
            .canonicalize()
            .context("canonicalise temporary directory")?;
        let root = Utf8PathBuf::from_path_buf(canonical)
            .map_err(|path| anyhow!("temporary directory is not UTF-8: {}", path.display()))?;
        let dir = Dir::open_ambient_dir(&root, ambient_authority())
            .with_context(|| format!("open {root}"))?;
        Ok(Self {
            root,
            dir,
            _temp: temp,
        })
    }

    /// Returns the canonical root of the tree.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Returns the absolute path of `relative` inside the tree.
    #[must_use]
    pub fn path(&self, relative: &str) -> Utf8PathBuf {
        self.root.join(relative)
    }

    /// Creates `relative` and any missing parents, returning its absolute path.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn dir(&self, relative: &str) -> Result<Utf8PathBuf> {
        self.dir
            .create_dir_all(relative)
            .with_context(|| format!("create directory {relative}"))?;
        Ok(self.path(relative))
    }

    /// Writes `contents` to `relative`, creating parent directories first.
    ///
    /// # Errors
    ///
    /// Returns an error if a parent directory or the file cannot be written.
    pub fn file(&self, relative: &str, contents: &str) -> Result<Utf8PathBuf> {
        if let Some(parent) = Utf8Path::new(relative)
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
        {
            self.dir
                .create_dir_all(parent)
                .with_context(|| format!("create directory {parent}"))?;
        }
        self.dir
            .write(relative, contents)
            .with_context(|| format!("write {relative}"))?;
        Ok(self.path(relative))
    }

    /// Removes the file at `relative`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be removed.
    pub fn remove_file(&self, relative: &str) -> Result<()> {
        self.dir
            .remove_file(relative)
            .with_context(|| format!("remove {relative}"))
    }
}
