//! Fetching the sheet export over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use reqwest::{Client, Request};

use crate::config::SheetConfig;
use crate::sanitize;

use super::error::SyncError;

/// Source of raw sheet CSV text.
#[async_trait]
pub trait SheetFetcher: Send + Sync {
    async fn fetch_csv(&self) -> Result<String, SyncError>;
}

/// Fetches the published export with a single GET per call.
///
/// No retries. A timeout is only applied when configured.
pub struct HttpSheetFetcher {
    client: Client,
    url: String,
    cache_bust_param: String,
}

impl HttpSheetFetcher {
    pub fn new(config: &SheetConfig) -> Result<Self, SyncError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(SyncError::Client)?;

        Ok(Self {
            client,
            url: config.url.trim().to_string(),
            cache_bust_param: config.cache_bust_param.trim().to_string(),
        })
    }

    /// Builds the GET for one fetch, with `param=stamp` added to the query.
    ///
    /// The parameter goes through the URL's query serializer, so an existing
    /// query is extended and a `#fragment` stays last.
    fn build_request(&self, stamp: i64) -> Result<Request, SyncError> {
        self.client
            .get(&self.url)
            .query(&[(self.cache_bust_param.as_str(), stamp)])
            .build()
            .map_err(|source| SyncError::Request {
                url: sanitize::redact_url_query(&self.url),
                source: source.without_url(),
            })
    }
}

#[async_trait]
impl SheetFetcher for HttpSheetFetcher {
    async fn fetch_csv(&self) -> Result<String, SyncError> {
        let request = self.build_request(Utc::now().timestamp_millis())?;
        let redacted = sanitize::redact_url_query(request.url().as_str());
        debug!("Fetching sheet export from {}", redacted);

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|source| SyncError::Request {
                url: redacted.clone(),
                source: source.without_url(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(SyncError::Body)?;
        debug!("Fetched {} bytes from {}", body.len(), redacted);
        Ok(body)
    }
}
