//! Filesystem abstraction for locale configuration resolution
//!
//! Provides forward-slash path handling and the directory-listing
//! collaborator used for namespace discovery.

pub mod error;
pub mod path;
pub mod source;

pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use source::{DiskSource, LocaleSource, working_dir};
