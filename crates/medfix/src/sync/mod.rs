//! Keeping the dashboard state in step with the published sheet.

pub mod coordinator;
pub mod error;
pub mod fetcher;
pub mod scheduler;
pub mod state;

pub use coordinator::{SheetSync, SyncOutcome};
pub use error::SyncError;
pub use fetcher::{HttpSheetFetcher, SheetFetcher};
pub use scheduler::SyncScheduler;
pub use state::{format_sync_time, DashboardState};
