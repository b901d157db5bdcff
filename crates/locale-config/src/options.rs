//! Option value types shared by raw and resolved configuration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Error;

/// Which languages are served under a language path prefix (`/de/about`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleSubpaths {
    /// No language gets a path prefix.
    #[default]
    None,
    /// Every language except the default one gets a prefix.
    Foreign,
    /// Every language gets a prefix, the default one included.
    All,
}

impl LocaleSubpaths {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocaleSubpaths::None => "none",
            LocaleSubpaths::Foreign => "foreign",
            LocaleSubpaths::All => "all",
        }
    }

    /// Whether `language` is served under a subpath.
    pub fn applies_to(&self, language: &str, default_language: &str) -> bool {
        match self {
            LocaleSubpaths::None => false,
            LocaleSubpaths::Foreign => language != default_language,
            LocaleSubpaths::All => true,
        }
    }
}

impl FromStr for LocaleSubpaths {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "none" => Ok(LocaleSubpaths::None),
            "foreign" => Ok(LocaleSubpaths::Foreign),
            "all" => Ok(LocaleSubpaths::All),
            _ => Err(Error::InvalidLocaleSubpaths {
                value: format!("\"{s}\""),
            }),
        }
    }
}

impl fmt::Display for LocaleSubpaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language variants the i18n runtime loads for a request.
///
/// Names the runtime adds later are carried through as [`LoadStrategy::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoadStrategy {
    /// Region and base language (`de-CH` and `de`).
    All,
    /// Exactly the requested code.
    #[default]
    CurrentOnly,
    /// Base language only.
    LanguageOnly,
    #[serde(untagged)]
    Other(String),
}

impl LoadStrategy {
    pub fn as_str(&self) -> &str {
        match self {
            LoadStrategy::All => "all",
            LoadStrategy::CurrentOnly => "currentOnly",
            LoadStrategy::LanguageOnly => "languageOnly",
            LoadStrategy::Other(name) => name,
        }
    }
}

impl fmt::Display for LoadStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fallback language setting.
///
/// Serialized as `false`, a language code, a list of language codes, or an
/// object mapping language codes to their own fallback lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum FallbackLng {
    /// Fallback turned off; missing keys surface as missing.
    Disabled,
    Language(String),
    Languages(Vec<String>),
    /// Per-language fallbacks (`{"de-CH": ["fr"], "default": ["en"]}`), kept verbatim.
    PerLanguage(Map<String, Value>),
}

impl FallbackLng {
    pub fn is_disabled(&self) -> bool {
        matches!(self, FallbackLng::Disabled)
    }
}

impl TryFrom<Value> for FallbackLng {
    type Error = String;

    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        match value {
            Value::Bool(false) => Ok(FallbackLng::Disabled),
            Value::String(language) => Ok(FallbackLng::Language(language)),
            Value::Array(items) => string_list(items, "fallbackLng").map(FallbackLng::Languages),
            Value::Object(map) => Ok(FallbackLng::PerLanguage(map)),
            other => Err(format!(
                "fallbackLng must be false, a language code, a list of language codes, or an object, got {other}"
            )),
        }
    }
}

impl From<FallbackLng> for Value {
    fn from(fallback: FallbackLng) -> Self {
        match fallback {
            FallbackLng::Disabled => Value::Bool(false),
            FallbackLng::Language(language) => Value::String(language),
            FallbackLng::Languages(languages) => {
                Value::Array(languages.into_iter().map(Value::String).collect())
            }
            FallbackLng::PerLanguage(map) => Value::Object(map),
        }
    }
}

/// Languages loaded ahead of the first request.
///
/// Serialized as `false` or a list of language codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum Preload {
    Disabled,
    Languages(Vec<String>),
}

impl TryFrom<Value> for Preload {
    type Error = String;

    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        match value {
            Value::Bool(false) => Ok(Preload::Disabled),
            Value::Array(items) => string_list(items, "preload").map(Preload::Languages),
            other => Err(format!(
                "preload must be false or a list of language codes, got {other}"
            )),
        }
    }
}

impl From<Preload> for Value {
    fn from(preload: Preload) -> Self {
        match preload {
            Preload::Disabled => Value::Bool(false),
            Preload::Languages(languages) => {
                Value::Array(languages.into_iter().map(Value::String).collect())
            }
        }
    }
}

fn string_list(items: Vec<Value>, option: &str) -> std::result::Result<Vec<String>, String> {
    items
        .into_iter()
        .map(|item| match item {
            Value::String(language) => Ok(language),
            other => Err(format!("{option} entries must be strings, got {other}")),
        })
        .collect()
}

/// Namespace setting, kept in the shape it was supplied in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Namespaces {
    One(String),
    Many(Vec<String>),
}

impl Namespaces {
    pub fn as_slice(&self) -> &[String] {
        match self {
            Namespaces::One(namespace) => std::slice::from_ref(namespace),
            Namespaces::Many(namespaces) => namespaces,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl From<Vec<String>> for Namespaces {
    fn from(namespaces: Vec<String>) -> Self {
        Namespaces::Many(namespaces)
    }
}

impl From<&str> for Namespaces {
    fn from(namespace: &str) -> Self {
        Namespaces::One(namespace.to_string())
    }
}
