//! Fully-populated configuration handed to the i18n runtime

use serde::Serialize;
use serde_json::{Map, Value};

use crate::format::{Formatter, split_token};
use crate::options::{FallbackLng, LoadStrategy, LocaleSubpaths, Namespaces, Preload};
use crate::profile::defaults;
use crate::raw::{RawDetection, RawInterpolation, RawReact, RawUserConfig};

/// The final resolved configuration.
///
/// Every field is populated except `preload`, which client builds leave
/// unset unless it was supplied. Serializes with the option names the i18n
/// runtime expects; the formatter is not serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub default_language: String,
    pub other_languages: Vec<String>,
    /// `other_languages` followed by `default_language`, each once.
    pub all_languages: Vec<String>,
    /// Languages the runtime accepts; equal to `all_languages`.
    pub whitelist: Vec<String>,
    pub fallback_lng: FallbackLng,
    pub load: LoadStrategy,
    pub locale_path: String,
    pub locale_structure: String,
    pub locale_subpaths: LocaleSubpaths,
    pub locale_extension: String,
    #[serde(rename = "use")]
    pub plugins: Vec<Value>,
    #[serde(rename = "defaultNS")]
    pub default_ns: String,
    pub ns: Namespaces,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preload: Option<Preload>,
    pub interpolation: Interpolation,
    pub browser_language_detection: bool,
    pub server_language_detection: bool,
    pub ignore_routes: Vec<String>,
    pub custom_detectors: Vec<Value>,
    pub detection: Detection,
    pub react: React,
    pub strict_mode: bool,
    pub error_stack_trace_limit: u32,
    pub shallow_render: bool,
    pub backend: Backend,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResolvedConfig {
    /// Languages served under a language path prefix.
    pub fn subpath_languages(&self) -> Vec<&str> {
        self.all_languages
            .iter()
            .map(String::as_str)
            .filter(|language| {
                self.locale_subpaths
                    .applies_to(language, &self.default_language)
            })
            .collect()
    }

    /// Serialize to the JSON shape consumed by the i18n runtime.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| Value::Object(Map::new()))
    }
}

/// Interpolation policy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interpolation {
    pub escape_value: bool,
    pub format_separator: String,
    #[serde(skip)]
    pub format: Formatter,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Interpolation {
    pub(crate) fn merged(raw: RawInterpolation) -> Self {
        Self {
            escape_value: raw.escape_value.unwrap_or(defaults::ESCAPE_VALUE),
            format_separator: raw
                .format_separator
                .unwrap_or_else(|| defaults::FORMAT_SEPARATOR.to_string()),
            format: raw.format.unwrap_or_default(),
            extra: raw.extra,
        }
    }

    /// Format `value` with the named format, if any.
    pub fn format(&self, value: &str, format: Option<&str>) -> String {
        self.format.format(value, format)
    }

    /// Format a `value<separator>format` placeholder body.
    pub fn format_token(&self, token: &str) -> String {
        let (value, format) = split_token(token, &self.format_separator);
        self.format(value, format)
    }
}

/// Language-detection settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    pub order: Vec<String>,
    pub caches: Vec<String>,
    pub lookup_cookie: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Detection {
    pub(crate) fn merged(raw: RawDetection) -> Self {
        Self {
            order: raw.order.unwrap_or_else(|| to_strings(&defaults::DETECTION_ORDER)),
            caches: raw
                .caches
                .unwrap_or_else(|| to_strings(&defaults::DETECTION_CACHES)),
            lookup_cookie: raw
                .lookup_cookie
                .unwrap_or_else(|| defaults::LOOKUP_COOKIE.to_string()),
            extra: raw.extra,
        }
    }
}

/// React-integration settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct React {
    pub wait: bool,
    pub use_suspense: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl React {
    pub(crate) fn merged(raw: RawReact) -> Self {
        Self {
            wait: raw.wait.unwrap_or(defaults::REACT_WAIT),
            use_suspense: raw.use_suspense.unwrap_or(defaults::REACT_USE_SUSPENSE),
            extra: raw.extra,
        }
    }
}

/// Backend path templates with `{{lng}}`/`{{ns}}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Backend {
    pub load_path: String,
    pub add_path: String,
    /// Other backend options supplied by the user.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub(crate) fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Make every explicit field of a resolved configuration explicit input.
///
/// Computed fields (`backend` paths, `allLanguages`, `whitelist`) are left
/// out; resolving the result re-derives them.
impl From<&ResolvedConfig> for RawUserConfig {
    fn from(config: &ResolvedConfig) -> Self {
        let mut extra = config.extra.clone();
        if !config.backend.extra.is_empty() {
            extra.insert(
                "backend".to_string(),
                Value::Object(config.backend.extra.clone()),
            );
        }

        Self {
            default_language: Some(config.default_language.clone()),
            other_languages: Some(config.other_languages.clone()),
            fallback_lng: Some(config.fallback_lng.clone()),
            load: Some(config.load.clone()),
            locale_path: Some(config.locale_path.clone()),
            locale_structure: Some(config.locale_structure.clone()),
            locale_subpaths: Some(Value::String(config.locale_subpaths.to_string())),
            locale_extension: Some(config.locale_extension.clone()),
            plugins: Some(config.plugins.clone()),
            default_ns: Some(config.default_ns.clone()),
            ns: Some(config.ns.clone()),
            preload: config.preload.clone(),
            interpolation: RawInterpolation {
                escape_value: Some(config.interpolation.escape_value),
                format_separator: Some(config.interpolation.format_separator.clone()),
                format: Some(config.interpolation.format.clone()),
                extra: config.interpolation.extra.clone(),
            },
            browser_language_detection: Some(config.browser_language_detection),
            server_language_detection: Some(config.server_language_detection),
            ignore_routes: Some(config.ignore_routes.clone()),
            custom_detectors: Some(config.custom_detectors.clone()),
            detection: RawDetection {
                order: Some(config.detection.order.clone()),
                caches: Some(config.detection.caches.clone()),
                lookup_cookie: Some(config.detection.lookup_cookie.clone()),
                extra: config.detection.extra.clone(),
            },
            react: RawReact {
                wait: Some(config.react.wait),
                use_suspense: Some(config.react.use_suspense),
                extra: config.react.extra.clone(),
            },
            strict_mode: Some(config.strict_mode),
            error_stack_trace_limit: Some(config.error_stack_trace_limit),
            shallow_render: Some(config.shallow_render),
            extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_interpolation_defaults() {
        let interpolation = Interpolation::merged(RawInterpolation::default());
        assert!(!interpolation.escape_value);
        assert_eq!(interpolation.format_separator, ",");
        assert_eq!(interpolation.format, Formatter::Builtin);
        assert_eq!(interpolation.format("format me", Some("uppercase")), "FORMAT ME");
        assert_eq!(interpolation.format("format me", None), "format me");
    }

    #[test]
    fn test_interpolation_merges_field_by_field() {
        let interpolation = Interpolation::merged(RawInterpolation {
            format_separator: Some("|".into()),
            ..Default::default()
        });
        assert!(!interpolation.escape_value);
        assert_eq!(interpolation.format_token("format me | uppercase"), "FORMAT ME");
        assert_eq!(interpolation.format_token("format me, uppercase"), "format me, uppercase");
    }

    #[test]
    fn test_detection_merges_field_by_field() {
        let mut extra = Map::new();
        extra.insert("lookupQuerystring".into(), json!("lang"));
        let detection = Detection::merged(RawDetection {
            order: Some(vec!["header".into()]),
            extra,
            ..Default::default()
        });

        assert_eq!(detection.order, vec!["header"]);
        assert_eq!(detection.caches, vec!["cookie"]);
        assert_eq!(detection.lookup_cookie, "next-i18next");
        assert_eq!(
            serde_json::to_value(&detection).unwrap(),
            json!({
                "order": ["header"],
                "caches": ["cookie"],
                "lookupCookie": "next-i18next",
                "lookupQuerystring": "lang"
            })
        );
    }

    #[test]
    fn test_react_defaults() {
        let react = React::merged(RawReact::default());
        assert!(react.wait);
        assert!(!react.use_suspense);
    }

    #[test]
    fn test_interpolation_serializes_without_formatter() {
        let interpolation = Interpolation::merged(RawInterpolation::default());
        assert_eq!(
            serde_json::to_value(&interpolation).unwrap(),
            json!({ "escapeValue": false, "formatSeparator": "," })
        );
    }

    #[test]
    fn test_subpath_languages_and_json_output() {
        let raw = RawUserConfig {
            other_languages: Some(vec!["de".into(), "fr".into()]),
            locale_subpaths: Some(json!("foreign")),
            ns: Some(Namespaces::from("common")),
            ..Default::default()
        };
        let config = crate::resolver::ConfigResolver::new(crate::Environment::browser(
            crate::BuildMode::Development,
        ))
        .resolve(raw)
        .unwrap();

        assert_eq!(config.subpath_languages(), vec!["de", "fr"]);

        let output = config.to_json();
        assert_eq!(output["defaultNS"], json!("common"));
        assert_eq!(output["localeSubpaths"], json!("foreign"));
        assert_eq!(output["fallbackLng"], json!(false));
        assert_eq!(output["allLanguages"], json!(["de", "fr", "en"]));
        assert_eq!(output["backend"]["loadPath"], json!("/static/locales/{{lng}}/{{ns}}.json"));
        assert!(output.get("preload").is_none());
    }
}
