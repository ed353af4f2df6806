use std::path::{Path, PathBuf};

use crate::config::schema::DashboardConfig;
use crate::error::ConfigError;

const SUPPORTED_VERSION: &str = "1.0";

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DashboardConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    load_config_from_str(&content)
}

pub fn load_config_from_str(content: &str) -> Result<DashboardConfig, ConfigError> {
    let config: DashboardConfig = serde_json::from_str(content)?;

    validate_config(&config)?;

    Ok(config)
}

/// Loads `path` when given, else the default location when a file exists
/// there, else the built-in defaults.
pub fn load_config_or_default(path: Option<&Path>) -> Result<DashboardConfig, ConfigError> {
    if let Some(path) = path {
        return load_config(path);
    }

    match default_config_path() {
        Some(default) if default.is_file() => {
            log::debug!("Loading config from {:?}", default);
            load_config(default)
        }
        _ => Ok(DashboardConfig::default()),
    }
}

/// `<platform config dir>/medfix/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("medfix").join("config.json"))
}

fn validate_config(config: &DashboardConfig) -> Result<(), ConfigError> {
    if config.version != SUPPORTED_VERSION {
        return Err(ConfigError::Validation {
            message: format!("Unsupported config version: {}", config.version),
        });
    }

    let url = config.sheet.url.trim();
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(ConfigError::InvalidUrl {
            url: config.sheet.url.clone(),
            reason: "must start with http:// or https://".to_string(),
        });
    }

    if config.sheet.cache_bust_param.trim().is_empty() {
        return Err(ConfigError::Validation {
            message: "sheet.cache_bust_param must not be empty".to_string(),
        });
    }

    if config.sheet.request_timeout_secs == Some(0) {
        return Err(ConfigError::Validation {
            message: "sheet.request_timeout_secs must be positive".to_string(),
        });
    }

    if config.advisor.enabled {
        if config.advisor.model.trim().is_empty() {
            return Err(ConfigError::Validation {
                message: "advisor.model must not be empty".to_string(),
            });
        }
        if config.advisor.endpoint.trim().is_empty() {
            return Err(ConfigError::Validation {
                message: "advisor.endpoint must not be empty".to_string(),
            });
        }
    }

    Ok(())
}
