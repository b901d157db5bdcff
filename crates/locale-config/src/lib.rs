//! Configuration resolution for a localization layer
//!
//! Takes a sparse user configuration plus a snapshot of the execution
//! environment and produces the fully-populated configuration consumed by
//! translation loading and language detection:
//!
//! - **Legacy-option guard**: rejects the boolean `localeSubpaths` form
//! - **Context classifier**: picks the server or client default profile
//! - **Resolver**: merges user options over defaults and derives backend
//!   paths, preload languages, namespaces and the fallback language
//!
//! # Architecture
//!
//! ```text
//!        caller (server bootstrap / client bundle)
//!                        |
//!                  locale-config
//!                        |
//!                    locale-fs
//! ```
//!
//! # Example
//!
//! ```
//! use locale_config::{BuildMode, ConfigResolver, Environment, FallbackLng, RawUserConfig};
//!
//! let raw: RawUserConfig = serde_json::from_value(serde_json::json!({
//!     "defaultLanguage": "de",
//!     "otherLanguages": ["fr"]
//! }))
//! .unwrap();
//!
//! let resolver = ConfigResolver::new(Environment::browser(BuildMode::Production));
//! let config = resolver.resolve(raw).unwrap();
//!
//! assert_eq!(config.fallback_lng, FallbackLng::Language("de".into()));
//! assert_eq!(config.all_languages, vec!["fr", "de"]);
//! assert!(config.preload.is_none());
//! ```

pub mod environment;
pub mod error;
pub mod format;
pub mod guard;
pub mod logging;
pub mod options;
pub mod profile;
pub mod raw;
pub mod resolved;
pub mod resolver;

pub use environment::{BuildMode, Environment};
pub use error::{Error, Result};
pub use format::Formatter;
pub use options::{FallbackLng, LoadStrategy, LocaleSubpaths, Namespaces, Preload};
pub use profile::{DefaultProfile, PathRoot, Profile};
pub use raw::{RawDetection, RawInterpolation, RawReact, RawUserConfig};
pub use resolved::{Backend, Detection, Interpolation, React, ResolvedConfig};
pub use resolver::{ConfigResolver, create_config};

#[cfg(test)]
mod tests {
    use super::*;
    use locale_fs::NormalizedPath;

    #[test]
    fn error_default_namespace_not_found_displays_path() {
        let error = Error::DefaultNamespaceNotFound {
            path: NormalizedPath::new("/home/user/static/locales/en/common.json"),
        };

        assert_eq!(
            error.to_string(),
            "Default namespace not found at /home/user/static/locales/en/common.json"
        );
    }

    #[test]
    fn error_wraps_filesystem_errors_transparently() {
        let fs_error = locale_fs::Error::NotADirectory {
            path: "/srv/static/locales/en".into(),
        };
        let display = fs_error.to_string();

        let error = Error::from(fs_error);
        assert!(matches!(error, Error::Fs(_)));
        assert_eq!(error.to_string(), display);
    }

    #[test]
    fn create_config_with_explicit_namespaces_reads_no_locale_files() {
        let raw = RawUserConfig {
            ns: Some(Namespaces::from("common")),
            ..Default::default()
        };

        let config = create_config(raw).unwrap();

        assert_eq!(config.ns, Namespaces::One("common".into()));
        assert!(
            config
                .backend
                .load_path
                .ends_with("/static/locales/{{lng}}/{{ns}}.json")
        );
    }
}
