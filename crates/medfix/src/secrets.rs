//! API key resolution for the advisory service.
//!
//! A key can come from three places, checked in order:
//!
//! 1. **Direct value** in the config file (`api_key`), handy for local runs
//! 2. **File reference** (`api_key_file`), e.g. a mounted secret
//! 3. **Environment variable** (`api_key_env_var`, `GEMINI_API_KEY` by default)
//!
//! Empty strings count as "not configured" at every level.

use secrecy::SecretString;
use std::fs;

use crate::config::AdvisorConfig;

/// Error type for secret resolution failures.
#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    #[error("No secret source provided (need one of: direct value, file path, or env var name)")]
    NoSourceProvided,

    #[error("Failed to read secret from file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Environment variable '{name}' not set")]
    EnvVarNotSet { name: String },

    #[error("Environment variable '{name}' contains invalid UTF-8")]
    EnvVarNotUnicode { name: String },

    #[error("Secret from {origin} is blank")]
    Blank { origin: String },
}

pub type Result<T> = std::result::Result<T, SecretError>;

/// Resolves a secret from a direct value, a file, or an environment variable.
///
/// File contents and environment values are trimmed; a source that resolves
/// to a blank string is an error rather than an empty key.
pub fn resolve_secret(
    direct: Option<&str>,
    file_path: Option<&str>,
    env_var: Option<&str>,
) -> Result<SecretString> {
    if let Some(value) = direct.filter(|v| !v.is_empty()) {
        return Ok(SecretString::from(value.to_string()));
    }

    if let Some(path) = file_path.filter(|p| !p.is_empty()) {
        let expanded = expand_home(path);
        let content = fs::read_to_string(&expanded).map_err(|e| SecretError::FileReadError {
            path: expanded.clone(),
            source: e,
        })?;
        return non_blank(content.trim(), || format!("file '{}'", expanded));
    }

    if let Some(name) = env_var.filter(|n| !n.is_empty()) {
        return match std::env::var(name) {
            Ok(value) => non_blank(value.trim(), || format!("environment variable '{}'", name)),
            Err(std::env::VarError::NotPresent) => Err(SecretError::EnvVarNotSet {
                name: name.to_string(),
            }),
            Err(std::env::VarError::NotUnicode(_)) => Err(SecretError::EnvVarNotUnicode {
                name: name.to_string(),
            }),
        };
    }

    Err(SecretError::NoSourceProvided)
}

/// Like [`resolve_secret`], but an unset environment variable or a missing
/// source yields `None` instead of an error. Unreadable files still fail.
pub fn resolve_secret_optional(
    direct: Option<&str>,
    file_path: Option<&str>,
    env_var: Option<&str>,
) -> Result<Option<SecretString>> {
    match resolve_secret(direct, file_path, env_var) {
        Ok(secret) => Ok(Some(secret)),
        Err(SecretError::NoSourceProvided) | Err(SecretError::EnvVarNotSet { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Resolves the advisory API key configured in `config`, if any.
pub fn resolve_api_key(config: &AdvisorConfig) -> Result<Option<SecretString>> {
    resolve_secret_optional(
        config.api_key.as_deref(),
        config.api_key_file.as_deref(),
        config.api_key_env_var.as_deref(),
    )
}

fn non_blank(value: &str, origin: impl FnOnce() -> String) -> Result<SecretString> {
    if value.is_empty() {
        Err(SecretError::Blank { origin: origin() })
    } else {
        Ok(SecretString::from(value.to_string()))
    }
}

/// Expands a leading `~` or `~/` to the user's home directory.
///
/// `~user/path` is not supported and is returned unchanged.
fn expand_home(path: &str) -> String {
    if path != "~" && !path.starts_with("~/") {
        return path.to_string();
    }
    match dirs::home_dir() {
        Some(home) => path.replacen('~', &home.to_string_lossy(), 1),
        None => path.to_string(),
    }
}
