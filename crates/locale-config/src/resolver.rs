//! Configuration resolution
//!
//! The `ConfigResolver` turns a sparse [`RawUserConfig`] into a
//! [`ResolvedConfig`] for one execution environment:
//!
//! 1. The legacy-option guard validates `localeSubpaths`
//! 2. The environment is classified into the server or client profile
//! 3. User fields are merged over defaults and computed fields derived
//!
//! Nothing is cached between calls.

use locale_fs::{DiskSource, LocaleSource, NormalizedPath};
use serde_json::{Map, Value};

use crate::environment::{BuildMode, Environment};
use crate::error::{Error, Result};
use crate::guard;
use crate::options::{FallbackLng, Namespaces, Preload};
use crate::profile::{PathRoot, Profile, defaults};
use crate::raw::RawUserConfig;
use crate::resolved::{Backend, Detection, Interpolation, React, ResolvedConfig, to_strings};

/// Output keys that are always computed; user values under these names are
/// replaced.
const COMPUTED_KEYS: [&str; 2] = ["allLanguages", "whitelist"];

/// Resolves user configuration against an injected environment.
///
/// Namespace discovery goes through a [`LocaleSource`], which defaults to
/// the real filesystem.
pub struct ConfigResolver<S = DiskSource> {
    environment: Environment,
    source: S,

    /// Override for the process working directory (used for testing).
    /// When `None`, server paths are rooted at `std::env::current_dir()`.
    working_dir_override: Option<NormalizedPath>,
}

impl ConfigResolver<DiskSource> {
    /// Create a resolver for `environment` backed by the filesystem.
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            source: DiskSource::new(),
            working_dir_override: None,
        }
    }

    /// Create a resolver for the current process environment.
    pub fn detect() -> Self {
        Self::new(Environment::detect())
    }
}

impl<S: LocaleSource> ConfigResolver<S> {
    /// Replace the locale source used for namespace discovery.
    pub fn with_source<T: LocaleSource>(self, source: T) -> ConfigResolver<T> {
        ConfigResolver {
            environment: self.environment,
            source,
            working_dir_override: self.working_dir_override,
        }
    }

    /// Root server paths at `dir` instead of the process working directory.
    pub fn with_working_dir(mut self, dir: impl Into<NormalizedPath>) -> Self {
        self.working_dir_override = Some(dir.into());
        self
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Profile this resolver's environment classifies into.
    pub fn profile(&self) -> Profile {
        Profile::classify(&self.environment)
    }

    fn working_dir(&self) -> Result<NormalizedPath> {
        match self.working_dir_override {
            Some(ref dir) => Ok(dir.clone()),
            None => Ok(locale_fs::working_dir()?),
        }
    }

    /// Resolve `raw` for this resolver's environment.
    ///
    /// # Example
    ///
    /// ```
    /// use locale_config::{BuildMode, ConfigResolver, Environment, RawUserConfig};
    ///
    /// let resolver = ConfigResolver::new(Environment::browser(BuildMode::Production));
    /// let config = resolver.resolve(RawUserConfig::default()).unwrap();
    ///
    /// assert_eq!(config.ns.as_slice(), ["common".to_string()]);
    /// assert_eq!(config.backend.load_path, "/static/locales/{{lng}}/{{ns}}.json");
    /// ```
    pub fn resolve(&self, raw: RawUserConfig) -> Result<ResolvedConfig> {
        self.resolve_with_profile(raw, self.profile(), self.environment.build_mode)
    }

    /// Resolve `raw` for an explicit profile and build mode.
    pub fn resolve_with_profile(
        &self,
        raw: RawUserConfig,
        profile: Profile,
        build_mode: BuildMode,
    ) -> Result<ResolvedConfig> {
        let locale_subpaths = guard::check_locale_subpaths(raw.locale_subpaths.as_ref())?;
        let profile_defaults = profile.defaults();

        tracing::debug!(%profile, %build_mode, "Resolving locale configuration");

        let RawUserConfig {
            default_language,
            other_languages,
            fallback_lng,
            load,
            locale_path,
            locale_structure,
            locale_subpaths: _,
            locale_extension,
            plugins,
            default_ns,
            ns,
            preload,
            interpolation,
            browser_language_detection,
            server_language_detection,
            ignore_routes,
            custom_detectors,
            detection,
            react,
            strict_mode,
            error_stack_trace_limit,
            shallow_render,
            mut extra,
        } = raw;

        let default_language =
            default_language.unwrap_or_else(|| defaults::DEFAULT_LANGUAGE.to_string());
        let other_languages = other_languages.unwrap_or_default();
        let locale_path = locale_path.unwrap_or_else(|| defaults::LOCALE_PATH.to_string());
        let locale_structure =
            locale_structure.unwrap_or_else(|| defaults::LOCALE_STRUCTURE.to_string());
        let locale_extension =
            locale_extension.unwrap_or_else(|| defaults::LOCALE_EXTENSION.to_string());
        let default_ns = default_ns.unwrap_or_else(|| defaults::DEFAULT_NS.to_string());

        let all_languages = language_list(&other_languages, &default_language);

        let fallback_lng = match fallback_lng {
            Some(explicit) => explicit,
            None if build_mode.is_production() => FallbackLng::Language(default_language.clone()),
            None => FallbackLng::Disabled,
        };

        let preload = match preload {
            Some(explicit) => Some(explicit),
            None if profile_defaults.derives_preload => {
                Some(Preload::Languages(all_languages.clone()))
            }
            None => None,
        };

        let root = match profile_defaults.path_root {
            PathRoot::WorkingDir => self.working_dir()?,
            PathRoot::ServingRoot => NormalizedPath::new("/"),
        };
        let locale_dir = root.join(&locale_path);

        let ns = match ns {
            Some(explicit) => explicit,
            None if profile_defaults.discovers_namespaces => Namespaces::Many(
                self.discover_namespaces(
                    &locale_dir,
                    &default_language,
                    &default_ns,
                    &locale_extension,
                )?,
            ),
            None => Namespaces::Many(vec![default_ns.clone()]),
        };

        for key in COMPUTED_KEYS {
            if extra.remove(key).is_some() {
                tracing::debug!(key, "Ignoring user value for computed option");
            }
        }
        let backend = build_backend(
            &locale_dir,
            &locale_structure,
            &locale_extension,
            extra.remove("backend"),
        );

        tracing::debug!(
            load_path = %backend.load_path,
            namespaces = ns.len(),
            "Resolved locale configuration"
        );

        Ok(ResolvedConfig {
            whitelist: all_languages.clone(),
            all_languages,
            default_language,
            other_languages,
            fallback_lng,
            load: load.unwrap_or_default(),
            locale_path,
            locale_structure,
            locale_subpaths,
            locale_extension,
            plugins: plugins.unwrap_or_default(),
            default_ns,
            ns,
            preload,
            interpolation: Interpolation::merged(interpolation),
            browser_language_detection: browser_language_detection
                .unwrap_or(defaults::BROWSER_LANGUAGE_DETECTION),
            server_language_detection: server_language_detection
                .unwrap_or(defaults::SERVER_LANGUAGE_DETECTION),
            ignore_routes: ignore_routes.unwrap_or_else(|| to_strings(&defaults::IGNORE_ROUTES)),
            custom_detectors: custom_detectors.unwrap_or_default(),
            detection: Detection::merged(detection),
            react: React::merged(react),
            strict_mode: strict_mode.unwrap_or(defaults::STRICT_MODE),
            error_stack_trace_limit: error_stack_trace_limit
                .unwrap_or(defaults::ERROR_STACK_TRACE_LIMIT),
            shallow_render: shallow_render.unwrap_or(defaults::SHALLOW_RENDER),
            backend,
            extra,
        })
    }

    /// Derive the namespace list from the default language directory.
    ///
    /// The default namespace file must exist. Entries lose their
    /// `.<extension>` suffix; hidden entries and `.missing.<extension>`
    /// files written through `addPath` are skipped. The default namespace
    /// comes first and every name appears once.
    fn discover_namespaces(
        &self,
        locale_dir: &NormalizedPath,
        default_language: &str,
        default_ns: &str,
        extension: &str,
    ) -> Result<Vec<String>> {
        let language_dir = locale_dir.join(default_language);

        let default_ns_file = language_dir.join(&format!("{default_ns}.{extension}"));
        if !self.source.exists(&default_ns_file)? {
            return Err(Error::DefaultNamespaceNotFound {
                path: default_ns_file,
            });
        }

        let suffix = format!(".{extension}");
        let missing_suffix = format!(".missing.{extension}");

        let mut namespaces = vec![default_ns.to_string()];
        for entry in self.source.list_entries(&language_dir)? {
            if entry.starts_with('.') || entry.ends_with(&missing_suffix) {
                continue;
            }
            let name = entry.strip_suffix(&suffix).unwrap_or(&entry);
            if !namespaces.iter().any(|known| known == name) {
                namespaces.push(name.to_string());
            }
        }

        tracing::debug!(dir = %language_dir, ?namespaces, "Discovered namespaces");
        Ok(namespaces)
    }
}

/// `other_languages` then `default_language`, first occurrence kept.
fn language_list(other_languages: &[String], default_language: &str) -> Vec<String> {
    let mut languages: Vec<String> = Vec::with_capacity(other_languages.len() + 1);
    for language in other_languages {
        if language != default_language && !languages.contains(language) {
            languages.push(language.clone());
        }
    }
    languages.push(default_language.to_string());
    languages
}

fn build_backend(
    locale_dir: &NormalizedPath,
    locale_structure: &str,
    extension: &str,
    user_backend: Option<Value>,
) -> Backend {
    let mut extra = match user_backend {
        Some(Value::Object(map)) => map,
        Some(other) => {
            tracing::warn!(value = %other, "Ignoring non-object backend option");
            Map::new()
        }
        None => Map::new(),
    };
    extra.remove("loadPath");
    extra.remove("addPath");

    Backend {
        load_path: locale_dir
            .join(&format!("{locale_structure}.{extension}"))
            .to_string(),
        add_path: locale_dir
            .join(&format!("{locale_structure}.missing.{extension}"))
            .to_string(),
        extra,
    }
}

/// Resolve `raw` for the current process.
///
/// Detects the environment, reads namespaces from disk and roots server
/// paths at the working directory.
pub fn create_config(raw: RawUserConfig) -> Result<ResolvedConfig> {
    ConfigResolver::detect().resolve(raw)
}
