//! Execution environment snapshot
//!
//! Resolution never reads ambient process state on its own. Callers either
//! construct an [`Environment`] explicitly or take one snapshot with
//! [`Environment::detect`].

use std::fmt;

use crate::profile::Profile;

/// Environment variable carrying the build mode (`production` or anything else).
pub const BUILD_MODE_VAR: &str = "BUILD_MODE";

/// Environment variable marking a client-targeted bundle.
pub const BROWSER_BUILD_VAR: &str = "BROWSER_BUILD";

/// Production-like vs. development-like build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuildMode {
    Production,
    #[default]
    Development,
}

impl BuildMode {
    /// Interpret a raw build-mode signal. Only `production` is production-like.
    pub fn from_signal(signal: Option<&str>) -> Self {
        match signal {
            Some(value) if value.trim().eq_ignore_ascii_case("production") => {
                BuildMode::Production
            }
            _ => BuildMode::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, BuildMode::Production)
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::Production => write!(f, "production"),
            BuildMode::Development => write!(f, "development"),
        }
    }
}

/// Read-only snapshot of the signals that drive defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Environment {
    /// Running on a platform with a filesystem and a working directory.
    pub is_server_runtime: bool,
    /// The host flagged this build as a client bundle.
    pub is_browser_build: bool,
    pub build_mode: BuildMode,
}

impl Environment {
    /// Server process built for `build_mode`.
    pub fn server(build_mode: BuildMode) -> Self {
        Self {
            is_server_runtime: true,
            is_browser_build: false,
            build_mode,
        }
    }

    /// Browser-only runtime built for `build_mode`.
    pub fn browser(build_mode: BuildMode) -> Self {
        Self {
            is_server_runtime: false,
            is_browser_build: false,
            build_mode,
        }
    }

    /// Snapshot the current process.
    pub fn detect() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Derive an environment from an arbitrary variable lookup.
    ///
    /// The runtime kind comes from the compilation target; only the build
    /// mode and browser-build flag go through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let build_mode = BuildMode::from_signal(lookup(BUILD_MODE_VAR).as_deref());
        let is_browser_build = lookup(BROWSER_BUILD_VAR)
            .as_deref()
            .is_some_and(is_truthy);

        Self {
            is_server_runtime: cfg!(not(target_arch = "wasm32")),
            is_browser_build,
            build_mode,
        }
    }

    /// Mark this snapshot as a client bundle.
    pub fn with_browser_build(mut self, is_browser_build: bool) -> Self {
        self.is_browser_build = is_browser_build;
        self
    }

    pub fn profile(&self) -> Profile {
        Profile::classify(self)
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_build_mode_from_signal() {
        assert_eq!(BuildMode::from_signal(Some("production")), BuildMode::Production);
        assert_eq!(BuildMode::from_signal(Some(" Production ")), BuildMode::Production);
        assert_eq!(BuildMode::from_signal(Some("development")), BuildMode::Development);
        assert_eq!(BuildMode::from_signal(Some("test")), BuildMode::Development);
        assert_eq!(BuildMode::from_signal(None), BuildMode::Development);
    }

    #[test]
    fn test_from_lookup_defaults() {
        let env = Environment::from_lookup(|_| None);
        assert_eq!(env.build_mode, BuildMode::Development);
        assert!(!env.is_browser_build);
    }

    #[test]
    fn test_from_lookup_reads_signals() {
        let env = Environment::from_lookup(lookup_from(&[
            (BUILD_MODE_VAR, "production"),
            (BROWSER_BUILD_VAR, "true"),
        ]));
        assert!(env.build_mode.is_production());
        assert!(env.is_browser_build);
    }

    #[test]
    fn test_browser_build_flag_needs_truthy_value() {
        for value in ["0", "false", "", "off"] {
            let env = Environment::from_lookup(lookup_from(&[(BROWSER_BUILD_VAR, value)]));
            assert!(!env.is_browser_build, "{value:?} should not be truthy");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(BuildMode::Production.to_string(), "production");
        assert_eq!(BuildMode::Development.to_string(), "development");
    }
}
