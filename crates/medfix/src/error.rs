use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MedfixError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Sync error: {0}")]
    Sync(#[from] crate::sync::SyncError),

    #[error("Advisory error: {0}")]
    Advisor(#[from] crate::advisor::AdvisorError),

    #[error("Secret error: {0}")]
    Secret(#[from] crate::secrets::SecretError),

    #[error("Sheet sync failed: {0}")]
    SyncFailed(String),

    #[error("No record with id '{id}'")]
    RecordNotFound { id: String },

    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Failed to read sheet export '{path}': {source}")]
    ReadExport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Config validation failed: {message}")]
    Validation { message: String },

    #[error("Invalid sheet URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, MedfixError>;
