use thiserror::Error;

/// Errors raised while fetching the sheet export.
///
/// These never escape `SheetSync::sync`; they are logged and recorded on the
/// dashboard state while the previous records stay in place.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Sheet export returned HTTP {status}")]
    Status { status: u16 },

    #[error("Failed to read sheet export body: {0}")]
    Body(#[source] reqwest::Error),
}
