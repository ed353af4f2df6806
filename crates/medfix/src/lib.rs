pub mod advisor;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod sanitize;
pub mod secrets;
pub mod sheet;
pub mod stats;
pub mod sync;

pub use advisor::{
    AdvisorError, AdvisoryRequest, GeminiAdvisor, KeywordAdvisor, Priority, PriorityAdvisor,
    PriorityAssessment,
};
pub use config::{load_config, load_config_or_default, DashboardConfig};
pub use error::{ConfigError, MedfixError, Result};
pub use filter::filter;
pub use secrets::{resolve_secret, resolve_secret_optional, SecretError};
pub use sheet::{parse, MaintenanceRecord};
pub use stats::{aggregate, is_empty, AggregateSnapshot, RankedEntry};
pub use sync::{DashboardState, SheetFetcher, SheetSync, SyncError, SyncOutcome, SyncScheduler};
