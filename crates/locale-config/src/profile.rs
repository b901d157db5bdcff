//! Default profiles and context classification

use std::fmt;

use crate::environment::Environment;

/// Default option values shared by both profiles.
pub mod defaults {
    pub const DEFAULT_LANGUAGE: &str = "en";
    pub const LOCALE_PATH: &str = "static/locales";
    pub const LOCALE_STRUCTURE: &str = "{{lng}}/{{ns}}";
    pub const LOCALE_EXTENSION: &str = "json";
    pub const DEFAULT_NS: &str = "common";
    pub const ESCAPE_VALUE: bool = false;
    pub const FORMAT_SEPARATOR: &str = ",";
    pub const BROWSER_LANGUAGE_DETECTION: bool = true;
    pub const SERVER_LANGUAGE_DETECTION: bool = true;
    pub const IGNORE_ROUTES: [&str; 2] = ["/_next/", "/static/"];
    pub const DETECTION_ORDER: [&str; 3] = ["cookie", "header", "querystring"];
    pub const DETECTION_CACHES: [&str; 1] = ["cookie"];
    pub const LOOKUP_COOKIE: &str = "next-i18next";
    pub const REACT_WAIT: bool = true;
    pub const REACT_USE_SUSPENSE: bool = false;
    pub const STRICT_MODE: bool = true;
    pub const ERROR_STACK_TRACE_LIMIT: u32 = 0;
    pub const SHALLOW_RENDER: bool = false;
}

/// Where backend path templates are rooted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRoot {
    /// The process working directory (filesystem-absolute).
    WorkingDir,
    /// The public serving root, `/`.
    ServingRoot,
}

/// A fixed bundle of profile-specific defaults.
#[derive(Debug, PartialEq, Eq)]
pub struct DefaultProfile {
    pub path_root: PathRoot,
    /// Derive `preload` from the configured languages when not supplied.
    pub derives_preload: bool,
    /// Scan the default language directory for namespaces when `ns` is absent.
    pub discovers_namespaces: bool,
}

pub static SERVER_PROFILE: DefaultProfile = DefaultProfile {
    path_root: PathRoot::WorkingDir,
    derives_preload: true,
    discovers_namespaces: true,
};

pub static CLIENT_PROFILE: DefaultProfile = DefaultProfile {
    path_root: PathRoot::ServingRoot,
    derives_preload: false,
    discovers_namespaces: false,
};

/// Execution context a configuration is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    Server,
    Client,
}

impl Profile {
    /// Server only when the runtime is server-capable and the build is not
    /// flagged as a browser bundle. The same sources are compiled once per
    /// target, so the flag is the only thing telling the two builds apart.
    pub fn classify(env: &Environment) -> Self {
        if env.is_server_runtime && !env.is_browser_build {
            Profile::Server
        } else {
            Profile::Client
        }
    }

    pub fn defaults(&self) -> &'static DefaultProfile {
        match self {
            Profile::Server => &SERVER_PROFILE,
            Profile::Client => &CLIENT_PROFILE,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Server => write!(f, "server"),
            Profile::Client => write!(f, "client"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::BuildMode;
    use rstest::rstest;

    #[rstest]
    #[case(true, false, Profile::Server)]
    #[case(true, true, Profile::Client)]
    #[case(false, false, Profile::Client)]
    #[case(false, true, Profile::Client)]
    fn test_classify(
        #[case] is_server_runtime: bool,
        #[case] is_browser_build: bool,
        #[case] expected: Profile,
    ) {
        for build_mode in [BuildMode::Production, BuildMode::Development] {
            let env = Environment {
                is_server_runtime,
                is_browser_build,
                build_mode,
            };
            assert_eq!(Profile::classify(&env), expected);
        }
    }

    #[test]
    fn test_profiles_differ_in_root_preload_and_discovery() {
        let server = Profile::Server.defaults();
        let client = Profile::Client.defaults();

        assert_eq!(server.path_root, PathRoot::WorkingDir);
        assert_eq!(client.path_root, PathRoot::ServingRoot);
        assert!(server.derives_preload && !client.derives_preload);
        assert!(server.discovers_namespaces && !client.discovers_namespaces);
    }
}
