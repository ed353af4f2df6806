//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Environment variable holding a filter directive that overrides the config.
pub const LOG_ENV_VAR: &str = "MEDFIX_LOG";

/// Builds the filter: `MEDFIX_LOG` if set and valid, otherwise the configured
/// level, otherwise `info`.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(config.level.trim()))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber and routes `log` records through it.
///
/// Output goes to stderr. Calling this more than once is harmless; later
/// calls leave the first subscriber in place.
pub fn init(config: &LoggingConfig) {
    let _ = tracing_log::LogTracer::init();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_writer(std::io::stderr)
        .with_target(true);

    let _ = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_filter_from_config_level() {
        std::env::remove_var(LOG_ENV_VAR);
        let config = LoggingConfig {
            level: "medfix=debug".to_string(),
            json: false,
        };
        assert_eq!(build_filter(&config).to_string(), "medfix=debug");
    }

    #[test]
    #[serial]
    fn test_env_overrides_config() {
        std::env::set_var(LOG_ENV_VAR, "warn");
        let filter = build_filter(&LoggingConfig::default());
        std::env::remove_var(LOG_ENV_VAR);
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    #[serial]
    fn test_init_twice_is_harmless() {
        init(&LoggingConfig::default());
        init(&LoggingConfig {
            level: "debug".to_string(),
            json: true,
        });
    }
}
