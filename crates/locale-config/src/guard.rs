//! Legacy-option guard
//!
//! Runs before any defaulting so that a stale option shape can never be
//! silently replaced by a default.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::options::LocaleSubpaths;

/// Validate the raw `localeSubpaths` value and parse it.
///
/// Absent means [`LocaleSubpaths::None`]. The old boolean form is rejected
/// with a migration error; any other non-enumerated value is rejected as
/// invalid.
pub fn check_locale_subpaths(value: Option<&Value>) -> Result<LocaleSubpaths> {
    match value {
        None | Some(Value::Null) => Ok(LocaleSubpaths::default()),
        Some(Value::Bool(legacy)) => {
            tracing::warn!(legacy, "Rejected boolean localeSubpaths option");
            Err(Error::DeprecatedLocaleSubpaths)
        }
        Some(Value::String(name)) => name.parse(),
        Some(other) => Err(Error::InvalidLocaleSubpaths {
            value: other.to_string(),
        }),
    }
}
