//! User-supplied partial configuration
//!
//! Every recognized option is optional. Keys this crate does not know are
//! collected into `extra` and copied to the resolved configuration as-is.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::format::Formatter;
use crate::options::{FallbackLng, LoadStrategy, Namespaces, Preload};

/// Sparse configuration as supplied by the user.
///
/// Deserializes from the camelCase option names used by the i18n runtime:
///
/// ```
/// use locale_config::RawUserConfig;
///
/// let raw: RawUserConfig = serde_json::from_value(serde_json::json!({
///     "defaultLanguage": "de",
///     "otherLanguages": ["fr", "it"],
///     "localeSubpaths": "foreign",
///     "defaultNS": "universal",
///     "customFlag": 1
/// }))
/// .unwrap();
///
/// assert_eq!(raw.default_language.as_deref(), Some("de"));
/// assert_eq!(raw.default_ns.as_deref(), Some("universal"));
/// assert_eq!(raw.extra["customFlag"], 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawUserConfig {
    pub default_language: Option<String>,
    pub other_languages: Option<Vec<String>>,
    pub fallback_lng: Option<FallbackLng>,
    pub load: Option<LoadStrategy>,
    pub locale_path: Option<String>,
    pub locale_structure: Option<String>,
    /// Left untyped so the legacy guard can see the deprecated boolean form.
    pub locale_subpaths: Option<Value>,
    pub locale_extension: Option<String>,
    /// i18n runtime plugins (`use`).
    #[serde(rename = "use")]
    pub plugins: Option<Vec<Value>>,
    #[serde(rename = "defaultNS")]
    pub default_ns: Option<String>,
    pub ns: Option<Namespaces>,
    pub preload: Option<Preload>,
    pub interpolation: RawInterpolation,
    pub browser_language_detection: Option<bool>,
    pub server_language_detection: Option<bool>,
    pub ignore_routes: Option<Vec<String>>,
    pub custom_detectors: Option<Vec<Value>>,
    pub detection: RawDetection,
    pub react: RawReact,
    pub strict_mode: Option<bool>,
    pub error_stack_trace_limit: Option<u32>,
    pub shallow_render: Option<bool>,
    /// Unrecognized keys, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial interpolation policy.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawInterpolation {
    pub escape_value: Option<bool>,
    pub format_separator: Option<String>,
    /// Custom formatting function; only settable from code.
    #[serde(skip)]
    pub format: Option<Formatter>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial language-detection settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawDetection {
    pub order: Option<Vec<String>>,
    pub caches: Option<Vec<String>>,
    pub lookup_cookie: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial React-integration settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawReact {
    pub wait: Option<bool>,
    pub use_suspense: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
