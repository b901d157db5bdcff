//! [`FakeSource`] in-memory locale source.

use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::Mutex;

use locale_fs::{Error, LocaleSource, NormalizedPath, Result};

/// In-memory [`LocaleSource`] that records every call.
///
/// Directory listings and file existence are configured independently so
/// tests can describe inconsistent trees (a listing that mentions a file
/// which does not exist, and so on).
///
/// # Example
///
/// ```rust
/// use locale_fs::{LocaleSource, NormalizedPath};
/// use locale_test_utils::FakeSource;
///
/// let source = FakeSource::new()
///     .with_locale_files("/home/user/static/locales/en", &["common.json", "footer.json"]);
///
/// let dir = NormalizedPath::new("/home/user/static/locales/en");
/// assert_eq!(source.list_entries(&dir).unwrap(), vec!["common.json", "footer.json"]);
/// assert!(source.exists(&dir.join("common.json")).unwrap());
/// assert_eq!(source.list_calls().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct FakeSource {
    directories: HashMap<String, Vec<String>>,
    files: HashSet<String>,
    listing_failure: Option<io::ErrorKind>,
    exists_failure: Option<io::ErrorKind>,
    list_calls: Mutex<Vec<NormalizedPath>>,
    exists_calls: Mutex<Vec<NormalizedPath>>,
}

impl FakeSource {
    /// Create an empty source: every directory is missing, no file exists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `dir` list `entries`, in that order, without creating the files.
    pub fn with_entries(mut self, dir: &str, entries: &[&str]) -> Self {
        let key = NormalizedPath::new(dir).as_str().to_string();
        self.directories
            .insert(key, entries.iter().map(|e| e.to_string()).collect());
        self
    }

    /// Mark `path` as existing.
    pub fn with_file(mut self, path: &str) -> Self {
        self.files.insert(NormalizedPath::new(path).as_str().to_string());
        self
    }

    /// Make `dir` list `files` and mark each of them as existing.
    pub fn with_locale_files(mut self, dir: &str, files: &[&str]) -> Self {
        let base = NormalizedPath::new(dir);
        for file in files {
            self.files.insert(base.join(file).as_str().to_string());
        }
        self.with_entries(dir, files)
    }

    /// Fail every `list_entries` call with `kind`.
    pub fn failing_listing(mut self, kind: io::ErrorKind) -> Self {
        self.listing_failure = Some(kind);
        self
    }

    /// Fail every `exists` call with `kind`.
    pub fn failing_exists(mut self, kind: io::ErrorKind) -> Self {
        self.exists_failure = Some(kind);
        self
    }

    /// Directories passed to `list_entries`, in call order.
    pub fn list_calls(&self) -> Vec<NormalizedPath> {
        self.list_calls.lock().unwrap().clone()
    }

    /// Paths passed to `exists`, in call order.
    pub fn exists_calls(&self) -> Vec<NormalizedPath> {
        self.exists_calls.lock().unwrap().clone()
    }

    /// Total number of collaborator calls.
    pub fn call_count(&self) -> usize {
        self.list_calls.lock().unwrap().len() + self.exists_calls.lock().unwrap().len()
    }
}

impl LocaleSource for FakeSource {
    fn list_entries(&self, dir: &NormalizedPath) -> Result<Vec<String>> {
        self.list_calls.lock().unwrap().push(dir.clone());

        if let Some(kind) = self.listing_failure {
            return Err(Error::io(dir.to_native(), io::Error::from(kind)));
        }

        self.directories
            .get(dir.as_str())
            .cloned()
            .ok_or_else(|| Error::io(dir.to_native(), io::Error::from(io::ErrorKind::NotFound)))
    }

    fn exists(&self, path: &NormalizedPath) -> Result<bool> {
        self.exists_calls.lock().unwrap().push(path.clone());

        if let Some(kind) = self.exists_failure {
            return Err(Error::io(path.to_native(), io::Error::from(kind)));
        }

        Ok(self.files.contains(path.as_str()) || self.directories.contains_key(path.as_str()))
    }
}
