use thiserror::Error;

/// Errors that can occur while assessing complaint priority.
///
/// Callers normally go through `PriorityAdvisor::advise`, which maps every
/// variant to the fallback assessment.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("No complaint text to analyze")]
    MissingText,

    #[error("Advisor not configured: {0}")]
    NotConfigured(String),

    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Advisory request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Advisory endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Failed to decode model response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Model response is missing '{0}'")]
    MissingField(&'static str),

    #[error("No matching keywords found in complaint")]
    NoMatch,
}
