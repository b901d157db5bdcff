//! [`LocaleTree`] builder for on-disk locale directories.

use std::fs;
use std::path::Path;

use locale_fs::NormalizedPath;
use tempfile::TempDir;

/// A temporary directory standing in for a project root with a locale tree.
///
/// # Example
///
/// ```rust,no_run
/// use locale_test_utils::LocaleTree;
///
/// let tree = LocaleTree::new();
/// tree.add_namespaces("static/locales", "en", &["common", "footer"]);
/// assert!(tree.root().join("static/locales/en/common.json").exists());
/// ```
pub struct LocaleTree {
    temp_dir: TempDir,
}

impl Default for LocaleTree {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleTree {
    /// Create an empty temporary project root.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Root path as a [`NormalizedPath`], ready for `with_working_dir`.
    pub fn working_dir(&self) -> NormalizedPath {
        NormalizedPath::new(self.root())
    }

    /// Write `contents` to `relative`, creating parent directories.
    pub fn add_file(&self, relative: &str, contents: &str) -> &Self {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        self
    }

    /// Create an empty directory at `relative`.
    pub fn add_dir(&self, relative: &str) -> &Self {
        fs::create_dir_all(self.root().join(relative)).unwrap();
        self
    }

    /// Write `<locale_path>/<language>/<ns>.json` for every namespace.
    pub fn add_namespaces(&self, locale_path: &str, language: &str, namespaces: &[&str]) -> &Self {
        for ns in namespaces {
            self.add_file(&format!("{locale_path}/{language}/{ns}.json"), "{}");
        }
        self
    }
}
