//! Sheet sync coordinator: fetch, parse, replace.

use std::sync::Arc;

use chrono::Local;
use log::{error, info};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::Instrument;

use crate::config::SheetConfig;
use crate::sheet::parse;

use super::error::SyncError;
use super::fetcher::{HttpSheetFetcher, SheetFetcher};
use super::state::{format_sync_time, DashboardState};

/// Result of one sync attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SyncOutcome {
    /// Records were replaced.
    Updated { records: usize },
    /// Nothing changed; the previous records are still in place.
    Failed { error: String },
}

/// Owns the dashboard state and refreshes it from a [`SheetFetcher`].
///
/// The state lock is never held across the fetch. Overlapping syncs are not
/// cancelled; whichever finishes last wins.
pub struct SheetSync {
    fetcher: Arc<dyn SheetFetcher>,
    state: Arc<RwLock<DashboardState>>,
}

impl SheetSync {
    pub fn new(fetcher: Arc<dyn SheetFetcher>) -> Self {
        Self::with_state(fetcher, Arc::new(RwLock::new(DashboardState::new())))
    }

    pub fn with_state(
        fetcher: Arc<dyn SheetFetcher>,
        state: Arc<RwLock<DashboardState>>,
    ) -> Self {
        Self { fetcher, state }
    }

    /// Production constructor fetching over HTTP.
    pub fn from_config(config: &SheetConfig) -> Result<Self, SyncError> {
        Ok(Self::new(Arc::new(HttpSheetFetcher::new(config)?)))
    }

    pub fn state(&self) -> Arc<RwLock<DashboardState>> {
        Arc::clone(&self.state)
    }

    /// Fetches and parses the sheet, replacing the records on success.
    ///
    /// Failures are logged and recorded on the state; they never propagate.
    /// The syncing flag is cleared on every path.
    pub async fn sync(&self) -> SyncOutcome {
        let span = tracing::info_span!("sheet_sync");
        async {
            self.state.write().await.set_syncing(true);

            let outcome = match self.fetcher.fetch_csv().await {
                Ok(text) => {
                    let records = parse(&text);
                    let count = records.len();

                    let mut state = self.state.write().await;
                    state.set_records(records);
                    state.mark_synced(format_sync_time(&Local::now()));
                    info!("Sheet sync complete: {} records", count);

                    SyncOutcome::Updated { records: count }
                }
                Err(e) => {
                    error!("Sheet sync failed: {}", e);
                    self.state.write().await.mark_failed(e.to_string());
                    SyncOutcome::Failed {
                        error: e.to_string(),
                    }
                }
            };

            self.state.write().await.set_syncing(false);
            outcome
        }
        .instrument(span)
        .await
    }
}
