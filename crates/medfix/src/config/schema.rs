use serde::{Deserialize, Serialize};

/// Published export of the IPSRS complaint log.
pub const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/1LAOuNQ3voO8X_y1fZzKj_oKsNZgLnvSnORS2sMa0dNY/export?format=csv&gid=0";

pub const DEFAULT_ADVISOR_MODEL: &str = "gemini-3-flash-preview";

pub const DEFAULT_ADVISOR_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

pub const DEFAULT_API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub version: String,
    #[serde(default)]
    pub sheet: SheetConfig,
    #[serde(default)]
    pub advisor: AdvisorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            sheet: SheetConfig::default(),
            advisor: AdvisorConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetConfig {
    #[serde(default = "default_sheet_url")]
    pub url: String,
    /// Query parameter carrying the per-request timestamp.
    #[serde(default = "default_cache_bust_param")]
    pub cache_bust_param: String,
    /// No timeout is applied when unset.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_sheet_url() -> String {
    DEFAULT_SHEET_URL.to_string()
}

fn default_cache_bust_param() -> String {
    "t".to_string()
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            url: default_sheet_url(),
            cache_bust_param: default_cache_bust_param(),
            request_timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_key_file: Option<String>,
    #[serde(default = "default_api_key_env_var")]
    pub api_key_env_var: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_model() -> String {
    DEFAULT_ADVISOR_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ADVISOR_ENDPOINT.to_string()
}

fn default_api_key_env_var() -> Option<String> {
    Some(DEFAULT_API_KEY_ENV_VAR.to_string())
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model: default_model(),
            endpoint: default_endpoint(),
            api_key: None,
            api_key_file: None,
            api_key_env_var: default_api_key_env_var(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `MEDFIX_LOG` overrides it.
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}
