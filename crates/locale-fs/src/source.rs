//! Directory-listing collaborator for namespace discovery
//!
//! Resolution only ever needs two questions answered about a locale tree:
//! which entries live in a language directory, and whether a given file is
//! present. [`LocaleSource`] captures exactly that so resolvers can be
//! pointed at the real disk or at an in-memory double.

use std::fs;

use crate::{Error, NormalizedPath, Result};

/// Synchronous, blocking access to a locale tree.
pub trait LocaleSource {
    /// List the entry names directly under `dir`.
    ///
    /// Names are bare file or directory names, not paths. The order of the
    /// returned names is the discovery order seen by callers.
    fn list_entries(&self, dir: &NormalizedPath) -> Result<Vec<String>>;

    /// Check whether `path` exists.
    fn exists(&self, path: &NormalizedPath) -> Result<bool>;
}

impl<T: LocaleSource + ?Sized> LocaleSource for &T {
    fn list_entries(&self, dir: &NormalizedPath) -> Result<Vec<String>> {
        (**self).list_entries(dir)
    }

    fn exists(&self, path: &NormalizedPath) -> Result<bool> {
        (**self).exists(path)
    }
}

/// [`LocaleSource`] backed by `std::fs`.
///
/// Entries are returned sorted by name because `read_dir` order is
/// platform dependent.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskSource;

impl DiskSource {
    /// Create a new DiskSource.
    pub fn new() -> Self {
        Self
    }
}

impl LocaleSource for DiskSource {
    fn list_entries(&self, dir: &NormalizedPath) -> Result<Vec<String>> {
        let native = dir.to_native();
        if native.is_file() {
            return Err(Error::NotADirectory { path: native });
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&native).map_err(|e| Error::io(&native, e))? {
            let entry = entry.map_err(|e| Error::io(&native, e))?;
            let name = entry
                .file_name()
                .into_string()
                .map_err(|_| Error::InvalidEntryName {
                    path: native.clone(),
                })?;
            names.push(name);
        }
        names.sort();

        tracing::trace!(dir = %dir, count = names.len(), "Listed locale directory");
        Ok(names)
    }

    fn exists(&self, path: &NormalizedPath) -> Result<bool> {
        let native = path.to_native();
        native.try_exists().map_err(|e| Error::io(&native, e))
    }
}

/// The process working directory as reported by the OS.
///
/// Symlinks are left unresolved; only the Windows verbatim prefix is
/// stripped.
pub fn working_dir() -> Result<NormalizedPath> {
    let cwd = std::env::current_dir().map_err(|e| Error::io(".", e))?;
    Ok(NormalizedPath::new(dunce::simplified(&cwd)))
}
