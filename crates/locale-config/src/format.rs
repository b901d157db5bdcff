//! Interpolation formatting hook
//!
//! The i18n runtime calls the formatter for every `{{value, format}}`
//! placeholder. The built-in formatter knows a small closed set of case
//! transforms and passes everything else through untouched.

use std::fmt;
use std::sync::Arc;

/// Signature of a formatting function: value and optional format name in,
/// formatted string out.
pub type FormatFn = dyn Fn(&str, Option<&str>) -> String + Send + Sync;

/// Formatting function carried by the interpolation policy.
#[derive(Clone, Default)]
pub enum Formatter {
    #[default]
    Builtin,
    Custom(Arc<FormatFn>),
}

impl Formatter {
    /// Wrap a user-supplied formatting function.
    pub fn custom(format: impl Fn(&str, Option<&str>) -> String + Send + Sync + 'static) -> Self {
        Formatter::Custom(Arc::new(format))
    }

    pub fn format(&self, value: &str, format: Option<&str>) -> String {
        match self {
            Formatter::Builtin => builtin_format(value, format),
            Formatter::Custom(custom) => custom(value, format),
        }
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formatter::Builtin => f.write_str("Formatter::Builtin"),
            Formatter::Custom(_) => f.write_str("Formatter::Custom(..)"),
        }
    }
}

/// Custom formatters compare by identity.
impl PartialEq for Formatter {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Formatter::Builtin, Formatter::Builtin) => true,
            (Formatter::Custom(a), Formatter::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Apply one of the built-in transforms.
///
/// | name | effect |
/// |------|--------|
/// | `uppercase` | `format me` → `FORMAT ME` |
/// | `lowercase` | `Format Me` → `format me` |
/// | `capitalize` | `format me` → `Format me` |
///
/// Unknown or absent names return `value` unchanged.
pub fn builtin_format(value: &str, format: Option<&str>) -> String {
    match format.map(str::trim) {
        Some("uppercase") => value.to_uppercase(),
        Some("lowercase") => value.to_lowercase(),
        Some("capitalize") => capitalize(value),
        _ => value.to_string(),
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split a `value<separator>format` token at the first separator.
///
/// Both halves are trimmed. An empty separator never splits.
pub fn split_token<'a>(token: &'a str, separator: &str) -> (&'a str, Option<&'a str>) {
    if separator.is_empty() {
        return (token.trim(), None);
    }
    match token.split_once(separator) {
        Some((value, format)) => (value.trim(), Some(format.trim())),
        None => (token.trim(), None),
    }
}
