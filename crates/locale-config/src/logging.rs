//! Logging bootstrap for hosts without a tracing subscriber

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize a tracing subscriber with default configuration.
///
/// Resolution logs through `tracing`; this installs a compact stdout
/// subscriber filtered by `RUST_LOG`, defaulting to "info" if not set.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BuildMode, ConfigResolver, Environment, RawUserConfig};

    #[test]
    fn test_logging_init_then_resolve() {
        // Only one subscriber per process; a second init reports an error.
        let _ = init();

        let config = ConfigResolver::new(Environment::browser(BuildMode::Development))
            .resolve(RawUserConfig::default())
            .unwrap();
        assert_eq!(config.default_language, "en");

        assert!(init().is_err());
    }
}
