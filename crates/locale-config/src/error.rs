//! Error types for locale-config

use locale_fs::NormalizedPath;

/// Result type for locale-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort configuration resolution
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `localeSubpaths` was supplied in its old boolean form
    #[error(
        "The localeSubpaths option has been changed to a string: \"none\", \"foreign\", or \"all\""
    )]
    DeprecatedLocaleSubpaths,

    /// `localeSubpaths` was neither a boolean nor one of the valid strings
    #[error(
        "Invalid localeSubpaths value {value}: expected \"none\", \"foreign\", or \"all\""
    )]
    InvalidLocaleSubpaths { value: String },

    /// Namespace discovery ran but the default namespace file is missing
    #[error("Default namespace not found at {path}")]
    DefaultNamespaceNotFound { path: NormalizedPath },

    /// Filesystem error from the locale source
    #[error(transparent)]
    Fs(#[from] locale_fs::Error),
}
