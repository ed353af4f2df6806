use chrono::{DateTime, TimeZone};

use crate::filter::filter;
use crate::sheet::MaintenanceRecord;
use crate::stats::{aggregate, AggregateSnapshot};

/// Process-local dashboard state.
///
/// Starts empty. Records are only ever replaced wholesale, and the snapshot
/// is recomputed on every replacement.
#[derive(Debug, Default)]
pub struct DashboardState {
    records: Vec<MaintenanceRecord>,
    snapshot: AggregateSnapshot,
    syncing: bool,
    last_sync: Option<String>,
    last_error: Option<String>,
    search: String,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[MaintenanceRecord] {
        &self.records
    }

    pub fn snapshot(&self) -> &AggregateSnapshot {
        &self.snapshot
    }

    pub fn set_records(&mut self, records: Vec<MaintenanceRecord>) {
        self.snapshot = aggregate(&records);
        self.records = records;
    }

    pub fn is_syncing(&self) -> bool {
        self.syncing
    }

    /// Wall-clock time of the last successful sync, `HH.MM.SS`.
    pub fn last_sync(&self) -> Option<&str> {
        self.last_sync.as_deref()
    }

    /// Message of the most recent failed sync, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Records matching the current search text.
    pub fn filtered(&self) -> Vec<&MaintenanceRecord> {
        filter(&self.records, &self.search)
    }

    pub fn find(&self, id: &str) -> Option<&MaintenanceRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub(crate) fn set_syncing(&mut self, syncing: bool) {
        self.syncing = syncing;
    }

    pub(crate) fn mark_synced(&mut self, at: String) {
        self.last_sync = Some(at);
        self.last_error = None;
    }

    pub(crate) fn mark_failed(&mut self, error: String) {
        self.last_error = Some(error);
    }
}

/// Formats a sync timestamp the way the `id-ID` locale renders times.
pub fn format_sync_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%H.%M.%S").to_string()
}
